use ferrous_mirror_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber exists, so it is kept apart from loading.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        workers = config.mirror.worker_pool_size,
        max_wait_ms = config.mirror.max_wait_ms,
        expiry_slack_ms = config.mirror.expiry_slack_ms,
        out_of_range = ?config.mirror.out_of_range,
        "Configuration loaded"
    );
}
