//! Integer command implementation

use super::common::{init_logging, CommonArgs};
use anyhow::Result;
use clap::Args;
use serde_json::Value;

/// Arguments for the integer command
#[derive(Debug, Args)]
pub struct IntegerArgs {
    /// Shared input/output flags
    #[command(flatten)]
    pub common: CommonArgs,

    /// Value for elements without digits (default: fail)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub fallback: Option<i64>,
}

impl IntegerArgs {
    /// Execute the integer command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.common.verbose, self.common.quiet);

        let config = self.common.load_config()?;
        self.common.run(&config, |cleaner, column| {
            let output = cleaner.to_integer(column, self.fallback)?;
            Ok(output.values.into_iter().map(Value::from).collect())
        })
    }
}
