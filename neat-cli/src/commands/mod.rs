//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod common;
pub mod generate_config;
pub mod integer;
pub mod special;
pub mod text;
pub mod validate;

/// Clean columns of text: strip digits, punctuation or letters
#[derive(Debug, Parser)]
#[command(name = "neat", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the selected command
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Text(args) => args.execute(),
            Commands::Integer(args) => args.execute(),
            Commands::Special(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remove digits and/or punctuation from every value
    Text(text::TextArgs),

    /// Extract the integer contained in every value
    Integer(integer::IntegerArgs),

    /// Remove letters and digits, keeping only special characters
    Special(special::SpecialArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_text_command() {
        let cli = Cli::try_parse_from([
            "neat", "text", "-i", "data.txt", "--keep", "o", "--keep", "5", "--keep-num", "2",
        ])
        .unwrap();

        match cli.command {
            Commands::Text(args) => {
                assert_eq!(args.common.input, vec!["data.txt"]);
                assert_eq!(args.keep, vec!["o", "5"]);
                assert_eq!(args.keep_num, Some(2));
                assert!(!args.keep_digits);
            }
            other => panic!("Expected text command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_numbers() {
        let cli = Cli::try_parse_from(["neat", "text", "-i", "x", "--keep-num", "-1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Text(ref args) if args.keep_num == Some(-1)
        ));

        let cli = Cli::try_parse_from(["neat", "integer", "-i", "x", "--fallback", "-5"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Integer(ref args) if args.fallback == Some(-5)
        ));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["neat", "special"]).is_err());
    }
}
