//! Special-character command implementation

use super::common::{init_logging, CommonArgs};
use anyhow::Result;
use clap::Args;
use serde_json::Value;

/// Arguments for the special command
#[derive(Debug, Args)]
pub struct SpecialArgs {
    /// Shared input/output flags
    #[command(flatten)]
    pub common: CommonArgs,
}

impl SpecialArgs {
    /// Execute the special command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.common.verbose, self.common.quiet);

        let config = self.common.load_config()?;
        self.common.run(&config, |cleaner, column| {
            let output = cleaner.to_special_chars(column)?;
            Ok(output.values.into_iter().map(Value::String).collect())
        })
    }
}
