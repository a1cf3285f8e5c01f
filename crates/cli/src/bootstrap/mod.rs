pub mod args;
pub mod config;
pub mod logging;

pub use args::collect_args;
pub use config::load_config;
pub use logging::init_logging;
