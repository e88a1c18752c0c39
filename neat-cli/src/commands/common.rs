//! Arguments and pipeline shared by the cleaning commands

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, ColumnLayout};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use neat_engine::{Cleaner, Column, ExecutionMode};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Input, output and execution flags common to every cleaning command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Read inputs as JSON arrays instead of one value per line
    #[arg(long)]
    pub json_input: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, otherwise text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Force parallel processing even for short columns
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Load the config file and apply command-line overrides
    pub fn load_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;

        if let Some(threads) = self.threads {
            config.engine.threads = Some(threads);
        }
        if self.parallel {
            config.engine.execution_mode = ExecutionMode::Parallel;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }

        Ok(config)
    }

    fn layout(&self) -> ColumnLayout {
        if self.json_input {
            ColumnLayout::Json
        } else {
            ColumnLayout::Lines
        }
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }

    /// Read every input, clean it with `operation` and write the results
    pub fn run<F>(&self, config: &CliConfig, operation: F) -> Result<()>
    where
        F: Fn(&Cleaner, &Column) -> neat_engine::Result<Vec<Value>>,
    {
        let cleaner = Cleaner::builder()
            .config(config.engine.clone())
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let sources = resolve_inputs(&self.input)?;
        log::info!("Cleaning {} input(s)", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_inputs(sources.len() as u64);

        // Every input is cleaned before anything is written, so a failure
        // in a later input leaves no partial output behind
        let mut cleaned = Vec::with_capacity(sources.len());
        for source in &sources {
            let name = source.to_string();
            let column = source.read_column(self.layout())?;
            log::debug!("{name}: {} values", column.len());

            let values = operation(&cleaner, &column).map_err(|e| CliError::ProcessingError {
                input: name.clone(),
                message: e.to_string(),
            })?;

            progress.input_completed(&name, values.len());
            cleaned.push((name, values));
        }
        progress.finish();

        let mut formatter = create_formatter(
            config.output.format,
            self.open_output()?,
            config.output.pretty_json,
        );
        for (name, values) in &cleaned {
            for (position, value) in values.iter().enumerate() {
                formatter.format_value(name, position, value)?;
            }
        }
        formatter.finish()?;
        log::info!("Done");

        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Already initialised when several commands run in one process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
