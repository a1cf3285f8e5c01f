//! Runtime configuration for dnslookup
//!
//! - `logging`: log level used when `RUST_LOG` is not set
//! - `output`: report formatting settings

pub mod logging;
pub mod output;

pub use logging::LoggingConfig;
pub use output::OutputConfig;

/// Root configuration. Built from defaults; the CLI exposes no overrides.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}
