//! Command-line interface definitions.
//!
//! The binary plays the router: every subcommand resolves to one of the
//! views and drives it with the given arguments.

pub mod output;
pub mod render;
pub mod run;

pub use output::TerminalReporter;
pub use run::run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, Overrides};
use crate::error::ConfigError;

/// Terminal client for the order book backend
#[derive(Parser, Debug)]
#[command(name = "tradeboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true)]
    pub server_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a path (/login, /signup, /dashboard, /) and run its view
    Open {
        /// Route path
        path: String,
    },

    /// Create an account
    Signup(SignupArgs),

    /// Log in and store the session token
    Login(LoginArgs),

    /// List orders
    Orders,

    /// Place a new order
    Place(PlaceArgs),

    /// Execute an order by id
    Execute {
        /// Order id
        id: String,
    },

    /// Forget the stored session token
    Logout,
}

#[derive(Parser, Debug, Default)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Prompted when omitted
    #[arg(long)]
    pub password: Option<String>,
    /// Prompted when omitted
    #[arg(long)]
    pub confirm: Option<String>,
}

#[derive(Parser, Debug, Default)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: Option<String>,
    /// Prompted when omitted
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Parser, Debug)]
pub struct PlaceArgs {
    /// BUY or SELL
    #[arg(long = "type", value_name = "TYPE")]
    pub order_type: String,
    #[arg(long)]
    pub quantity: String,
    #[arg(long)]
    pub price: String,
}

impl Cli {
    /// Load the configuration and apply the global flags on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load(self.config.as_deref())?;
        config.apply_overrides(Overrides {
            server_url: self.server_url.clone(),
            log_level: verbosity_level(self.verbose).map(str::to_string),
        })?;
        Ok(config)
    }
}

fn verbosity_level(count: u8) -> Option<&'static str> {
    match count {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        let cli = Cli::try_parse_from([
            "tradeboard", "place", "--type", "BUY", "--quantity", "10", "--price", "5",
        ])
        .unwrap();
        let Commands::Place(args) = cli.command else {
            panic!("expected place");
        };
        assert_eq!(args.order_type, "BUY");
        assert_eq!(args.quantity, "10");
        assert_eq!(args.price, "5");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tradeboard",
            "orders",
            "--server-url",
            "https://api.example.com",
            "-vv",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Orders));
        assert_eq!(cli.server_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_open_takes_a_path() {
        let cli = Cli::try_parse_from(["tradeboard", "open", "/dashboard"]).unwrap();
        let Commands::Open { path } = cli.command else {
            panic!("expected open");
        };
        assert_eq!(path, "/dashboard");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_level(0), None);
        assert_eq!(verbosity_level(1), Some("info"));
        assert_eq!(verbosity_level(5), Some("trace"));
    }
}
