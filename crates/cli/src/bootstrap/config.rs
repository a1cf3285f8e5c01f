use dnslookup_domain::Config;
use tracing::debug;

pub fn load_config() -> Config {
    let config = Config::default();

    debug!(
        log_level = %config.logging.level,
        separator_width = config.output.separator_width,
        "Configuration loaded"
    );

    config
}
