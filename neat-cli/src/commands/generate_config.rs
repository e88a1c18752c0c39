//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   neat validate --config {}", self.output.display());
        println!("3. Use it for cleaning:");
        println!("   neat text -i column.txt --config {}", self.output.display());

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r##"# neat configuration

# Used by `neat text`
[filter]
# Remove ASCII digits 0-9
remove_digits = true

# Remove ASCII punctuation: !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
remove_punctuation = true

# Literal substrings that are never removed.
# Overlaps resolve leftmost first, then longest.
keep = []

# Number of leading digits to keep before digit removal starts
keep_num = 0

[engine]
# "sequential", "parallel" or "adaptive"
execution_mode = "adaptive"

# Worker threads for parallel mode (omit for one per core)
# threads = 4

# Columns at least this long run in parallel in adaptive mode
parallel_threshold = 10000

[output]
# "text" or "json"
format = "text"
pretty_json = true
"##
    }
}
