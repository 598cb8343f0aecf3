/// Verbosity of the log sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Critical,
    Off,
}

impl LogLevel {
    /// Directive understood by an `EnvFilter`. `critical` has no own level and maps to `error`.
    pub fn as_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Case-insensitive level parsing. Unknown strings fall back to `Info`.
pub fn parse_log_level(v: &str) -> LogLevel {
    match v.to_ascii_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        "critical" | "fatal" => LogLevel::Critical,
        "off" => LogLevel::Off,
        _ => LogLevel::Info,
    }
}
