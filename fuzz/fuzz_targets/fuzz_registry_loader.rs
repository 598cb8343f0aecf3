//! Fuzz target for issue-kinds document loading.
//!
//! Goal: loading should **never panic** on any input, and a failed load must
//! leave the registry as it was.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_registry_loader
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use template_insight::IssueRegistry;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut registry = IssueRegistry::new();
        if registry.load_str(text).is_err() {
            assert!(registry.is_empty());
        }
        for code in registry.codes() {
            assert!(!code.is_empty());
        }
    }
});
