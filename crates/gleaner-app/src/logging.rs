use gleaner_config::log::LogConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so command output on stdout
/// stays machine readable.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to init logging: {e}"))
}
