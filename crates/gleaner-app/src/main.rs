use clap::Parser;
use gleaner_config::Config;

mod cli;
mod commands;
mod logging;


use self::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let (config, loaded_from, load_error) = match cli.config.as_deref() {
        Some(path) => match Config::load(path) {
            Ok(config) => (config, Some(path), None),
            Err(e) => (Config::new(), None, Some(e)),
        },
        None => (Config::new(), None, None),
    };

    logging::init(&config.log)?;

    if let Some(path) = loaded_from {
        tracing::info!("Loaded config from {}", path.display());
    }
    if let Some(e) = load_error {
        tracing::warn!("{e:#}, using default config");
    }

    commands::run(cli.command, config).await
}
