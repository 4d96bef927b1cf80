use ferrous_doh_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Call once logging is initialised.
pub fn log_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        providers = config.resolver.providers.len(),
        timeout_ms = config.resolver.timeout_ms,
        cache_ttl_secs = config.resolver.cache_ttl_secs,
        "Configuration loaded"
    );
}
