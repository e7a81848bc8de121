#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(forgetting_copy_types)]
#![deny(clippy::style)]

use anyhow::Context;
use clap::Parser;
use kafka_health_cli::app_config::{current_platform, AppConfig};
use kafka_health_cli::cli::Cli;
use kafka_health_cli::startup::run;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let platform = match current_platform() {
        Ok(platform) => platform,
        Err(e) => {
            println!("{e}");
            std::process::exit(e.exit_code());
        }
    };

    let config = AppConfig::build(&cli).context("While building app config")?;

    let default_level = if config.debug { "debug" } else { "info" };
    let log_level = std::env::var("RUST_LOG").unwrap_or(default_level.to_owned());

    let default_directive = if config.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_directive.into())
        .parse_lossy(log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();

    info!("App config: {config:?}");
    info!("Platform: {platform}");

    run(config, platform).await?;

    Ok(())
}
