//! @acp:module "Generate Command"
//! @acp:summary "Read a parameter file and write its reference document"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Single pass: read the whole input, parse, render, write the whole output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use crate::config::Config;
use crate::parse::parse_file;
use crate::render::{render, OutputFormat};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Parameter-definition file
    pub input: PathBuf,
    /// Output file; falls back to the configured one
    pub output: Option<PathBuf>,
    /// Output format
    pub format: OutputFormat,
}

impl GenerateOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            format: OutputFormat::default(),
        }
    }

    /// Explicit output, else the configured path with the format's extension
    pub fn output_path(&self, config: &Config) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => config.output.with_extension(self.format.extension()),
        }
    }
}

/// Execute the generate command, returning the path written
pub fn execute_generate(options: GenerateOptions, config: &Config) -> Result<PathBuf> {
    println!(
        "{} Parsing {}...",
        style("→").cyan(),
        options.input.display()
    );

    let model = parse_file(&options.input)
        .with_context(|| format!("Failed to read parameter file {:?}", options.input))?;

    let rendered = render(&model, options.format, config)?;

    let output = options.output_path(config);
    std::fs::write(&output, rendered)
        .with_context(|| format!("Failed to write {:?}", output))?;

    println!(
        "{} Documentation written to {}",
        style("✓").green(),
        output.display()
    );
    info!(
        "Sections: {}, parameters: {}",
        model.len(),
        model.parameter_count()
    );

    Ok(output)
}
