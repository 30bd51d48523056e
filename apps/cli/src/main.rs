#![warn(clippy::all, clippy::pedantic)]

use anyhow::{Context, Result};
use clap::Parser;
use hostscout::HostDiscovery;
use tracing::{info, warn};

mod cli;
mod config;

use cli::{Cli, Command, DiscoverArgs};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_with_level(cli.log_level());

    let config = Config::from_config(cli.config.as_ref()).context("failed to load configuration")?;

    match cli.command {
        Command::Discover(args) => discover(config, args).await,
        Command::Config => {
            print!("{config}");
            Ok(())
        },
    }
}

async fn discover(mut config: Config, args: DiscoverArgs) -> Result<()> {
    config.peers.extend(args.peers);
    for (peer, reason) in config.suspicious_peers() {
        warn!("Seed peer {peer} does not look like a host URL: {reason}");
    }

    let discovery = HostDiscovery::new(config.discovery_config())?;
    let report = discovery.discover(args.target_count).await;
    info!(
        "Found {} hosts ({} unreachable) in {} rounds",
        report.hosts.len(),
        report.bad_hosts.len(),
        report.round_count()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for host in &report.hosts {
            println!("{host}");
        }
    }

    Ok(())
}
