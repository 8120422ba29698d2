#![forbid(unsafe_code)]
//! paramdoc Command Line Interface

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use paramdoc::commands::{execute_generate, GenerateOptions};
use paramdoc::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "paramdoc")]
#[command(about = "Generate a markdown reference from a parameter file")]
#[command(version)]
struct Cli {
    /// Parameter-definition file to document
    input: PathBuf,

    /// Output file (default: parameters.md, or parameters.json with --format json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: FormatArg,

    /// JSON config file with header, footer and output overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for the generated reference
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum FormatArg {
    #[default]
    Markdown,
    Json,
}

fn init_tracing(verbose: bool) {
    let directive = if verbose { "paramdoc=debug" } else { "paramdoc=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            if err.kind() == ErrorKind::MissingRequiredArgument {
                println!("{} The parameter file must be provided", style("✗").red());
            }
            println!("{}", err.render());
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => Config::default(),
    };

    let format = match cli.format {
        FormatArg::Markdown => OutputFormat::Markdown,
        FormatArg::Json => OutputFormat::Json,
    };

    let options = GenerateOptions {
        input: cli.input,
        output: cli.output,
        format,
    };
    execute_generate(options, &config)?;

    Ok(())
}
