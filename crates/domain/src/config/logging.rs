/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (default: "warn")
    /// Options: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
