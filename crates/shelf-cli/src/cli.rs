//! CLI argument definitions.

use clap::{Args, Parser};

use shelf_core::StoreConfig;

use crate::commands::Command;

/// Bookstore inventory administration.
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author, version = env!("SHELF_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the book store lives.
///
/// A flag left out is taken from `SHELF_API_HOST` / `SHELF_API_PORT`.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Book store host
    #[arg(long)]
    pub host: Option<String>,

    /// Book store port
    #[arg(long)]
    pub port: Option<u16>,
}

impl StoreArgs {
    pub fn config(&self) -> shelf_core::Result<StoreConfig> {
        match (&self.host, self.port) {
            (Some(host), Some(port)) => Ok(StoreConfig::new(host, port)),
            _ => Ok(self.overlay(StoreConfig::from_env()?)),
        }
    }

    fn overlay(&self, base: StoreConfig) -> StoreConfig {
        StoreConfig::new(
            self.host.clone().unwrap_or(base.host),
            self.port.unwrap_or(base.port),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_store_flags() {
        let cli =
            Cli::try_parse_from(["shelf", "--host", "books.local", "--port", "8080", "view"])
                .unwrap();
        assert_eq!(
            cli.store.config().unwrap(),
            StoreConfig::new("books.local", 8080)
        );
    }

    #[test]
    fn store_flags_are_optional() {
        let cli = Cli::try_parse_from(["shelf", "view"]).unwrap();
        assert!(cli.store.host.is_none());
        assert!(cli.store.port.is_none());
    }

    #[test]
    fn given_flag_wins_over_environment() {
        let args = StoreArgs {
            host: None,
            port: Some(9000),
        };
        assert_eq!(
            args.overlay(StoreConfig::new("env.local", 8080)),
            StoreConfig::new("env.local", 9000)
        );
    }
}
