//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logger::LevelFilter;

/// Discover hosts on a Codius network starting from configured seed peers.
#[derive(Debug, Parser)]
#[command(name = "hostscout", version, about)]
pub struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/hostscout/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Crawl `/peers` from the seed hosts and print every host found
    Discover(DiscoverArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Debug, Args)]
pub struct DiscoverArgs {
    /// Stop as soon as this many hosts are known (0 = no target)
    #[arg(short, long, value_name = "COUNT")]
    pub target_count: Option<usize>,

    /// Extra seed peers on top of the configured ones
    #[arg(short, long = "peer", value_name = "HOST")]
    pub peers: Vec<String>,

    /// Print the full discovery report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_discover_args() {
        let cli = Cli::try_parse_from([
            "hostscout",
            "-vv",
            "discover",
            "--target-count",
            "10",
            "--peer",
            "https://a.example",
            "--peer",
            "https://b.example",
        ])
        .unwrap();

        assert_eq!(cli.log_level(), LevelFilter::TRACE);
        match cli.command {
            Command::Discover(args) => {
                assert_eq!(args.target_count, Some(10));
                assert_eq!(args.peers, vec!["https://a.example", "https://b.example"]);
                assert!(!args.json);
            },
            other => panic!("unexpected command {other:?}"),
        }
    }
}
