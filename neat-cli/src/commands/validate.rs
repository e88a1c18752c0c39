//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let result = CliConfig::from_file(&self.config).and_then(|config| {
            config.validate()?;
            Ok(config)
        });

        match result {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Remove digits: {}", config.filter.remove_digits);
                println!("  Remove punctuation: {}", config.filter.remove_punctuation);
                println!("  Keep: {:?}", config.filter.keep);
                println!("  Keep num: {}", config.filter.keep_num);
                println!("  Execution mode: {:?}", config.engine.execution_mode);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_for(content: &str) -> (NamedTempFile, ValidateArgs) {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        (temp_file, args)
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("neat.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("neat.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let (_file, args) = args_for(
            r#"
[filter]
keep = ["o"]
keep_num = 1
"#,
        );
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_negative_keep_num() {
        let (_file, args) = args_for("[filter]\nkeep_num = -1\n");
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("keep_num"));
    }

    #[test]
    fn test_validate_empty_keep_entry() {
        let (_file, args) = args_for("[filter]\nkeep = [\"\"]\n");
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_malformed_toml() {
        let (_file, args) = args_for("[filter\n");
        assert!(args.execute().is_err());
    }
}
