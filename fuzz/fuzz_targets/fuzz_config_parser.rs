//! Fuzz target for config parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic**; errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use template_insight_settings::{ConfigFormat, Overrides, parse_config, resolve_config};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        for format in [ConfigFormat::Json, ConfigFormat::Toml] {
            if let Ok(cfg) = parse_config(text, format) {
                let _ = resolve_config(cfg, Overrides::default(), None);
            }
        }
    }
});
