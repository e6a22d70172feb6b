mod config;
mod platform;

use clap::Parser;

use config::{AppConfig, Cli};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from(Cli::parse());
    flow_logging::initialize(&config.log_destination, config.log_level);
    platform::run_app(config)
}
