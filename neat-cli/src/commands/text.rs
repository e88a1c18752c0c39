//! Text command implementation

use super::common::{init_logging, CommonArgs};
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use serde_json::Value;

/// Arguments for the text command
#[derive(Debug, Args)]
pub struct TextArgs {
    /// Shared input/output flags
    #[command(flatten)]
    pub common: CommonArgs,

    /// Substring to protect from removal (repeatable)
    #[arg(short, long, value_name = "TEXT")]
    pub keep: Vec<String>,

    /// Number of leading digits to keep
    #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
    pub keep_num: Option<i64>,

    /// Do not remove digits
    #[arg(long)]
    pub keep_digits: bool,

    /// Do not remove punctuation
    #[arg(long)]
    pub keep_punctuation: bool,
}

impl TextArgs {
    /// Execute the text command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.common.verbose, self.common.quiet);

        let mut config = self.common.load_config()?;
        config.filter.keep.extend(self.keep.iter().cloned());
        if let Some(keep_num) = self.keep_num {
            config.filter.keep_num = keep_num;
        }
        if self.keep_digits {
            config.filter.remove_digits = false;
        }
        if self.keep_punctuation {
            config.filter.remove_punctuation = false;
        }
        log::debug!("Filter configuration: {:?}", config.filter);

        let filter = config
            .filter
            .compile()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        self.common.run(&config, |cleaner, column| {
            let output = cleaner.to_text_with(column, &filter)?;
            Ok(output.values.into_iter().map(Value::String).collect())
        })
    }
}
