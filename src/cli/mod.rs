//! CLI module for keyhub
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `generate-key`: print a new API key

pub mod generate_key;
pub mod serve;

use clap::{Parser, Subcommand};

/// keyhub - API key issuance and management backend
#[derive(Parser)]
#[command(name = "keyhub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Print a freshly generated API key without storing it
    GenerateKey(generate_key::GenerateKeyArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["keyhub", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_generate_key_with_count() {
        let cli = Cli::try_parse_from(["keyhub", "generate-key", "--count", "3"]).unwrap();

        match cli.command {
            Command::GenerateKey(args) => assert_eq!(args.count, 3),
            _ => panic!("Expected generate-key"),
        }
    }
}
