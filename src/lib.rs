#![forbid(unsafe_code)]

//! @acp:module "paramdoc Library"
//! @acp:summary "Parameter file parsing and markdown reference generation"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # paramdoc
//!
//! Turns a commented solver parameter file into a markdown reference.
//!
//! ## Features
//!
//! - **Typed Parsing**: Recovers name, description, domain and default for each parameter
//! - **Sections**: Keeps the category grouping of the source file, in order
//! - **Markdown Output**: Header, per-section bullet lists and a usage footer
//! - **JSON Output**: The parsed model, for tooling
//!
//! ## Example
//!
//! ```rust,no_run
//! use paramdoc::{parse, render_markdown, Config};
//!
//! fn main() -> anyhow::Result<()> {
//!     let model = parse::parse_file("src/realpaver/ParamFile")?;
//!     let markdown = render_markdown(&model, &Config::default());
//!     std::fs::write("parameters.md", markdown)?;
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod render;

// Re-exports
pub use config::Config;
pub use error::{ParamDocError, Result};
pub use model::{DomainSpec, ParameterModel, ParameterRecord, ParameterSection};
pub use parse::{parse_block, parse_str, split_sections, RawSection};
pub use render::{render, render_json, render_markdown, OutputFormat};
