//! @acp:module "Parser"
//! @acp:summary "Parameter file parsing into the typed section model"
//! @acp:domain cli
//! @acp:layer service
//!
//! The input is a commented parameter file:
//!
//! ```text
//! # ----------------------------------------------------------------------
//! # General parameters
//! # ----------------------------------------------------------------------
//!
//! # Maximum depth of the search tree
//! # Range of possible int values: [0..2147483647]
//! DEPTH_LIMIT = 100
//! ```
//!
//! Parsing happens in two passes. [`split_sections`] folds the delimited
//! chunks into `(section, chunks)` pairs, then every blank-line separated
//! block of a chunk goes through [`parse_block`].

mod block;

use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{ParameterModel, ParameterSection};

pub use block::{extract_enumerated, parse_block};

/// Rule line that opens and closes a section heading
pub const SECTION_DELIMITER: &str =
    "# ----------------------------------------------------------------------";

/// Separator between parameter blocks inside a chunk
const BLOCK_SEPARATOR: &str = "\n\n";

/// Length of the `# ` prefix on a heading line
const HEADING_PREFIX_LEN: usize = 2;

/// @acp:summary "A section name with the raw chunks that belong to it"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection<'a> {
    pub name: String,
    pub chunks: Vec<&'a str>,
}

/// @acp:summary "Split file contents into named sections of raw parameter chunks"
///
/// Text before the first delimiter is preamble and dropped. A chunk with a
/// single block is a heading and opens a new section; a chunk with several
/// blocks belongs to the section opened last. Chunks seen before any heading
/// have no owner and are discarded with a warning.
pub fn split_sections(content: &str) -> Vec<RawSection<'_>> {
    let bootstrap = RawSection {
        name: String::new(),
        chunks: Vec::new(),
    };

    let sections = content
        .split(SECTION_DELIMITER)
        .skip(1)
        .fold(vec![bootstrap], |mut sections, chunk| {
            if chunk.split(BLOCK_SEPARATOR).count() > 1 {
                if let Some(current) = sections.last_mut() {
                    current.chunks.push(chunk);
                }
            } else {
                let name = section_name(chunk);
                debug!("Section heading: {:?}", name);
                sections.push(RawSection {
                    name,
                    chunks: Vec::new(),
                });
            }
            sections
        });

    sections
        .into_iter()
        .filter(|section| {
            if section.name.is_empty() {
                if !section.chunks.is_empty() {
                    warn!(
                        "Discarding {} parameter chunk(s) outside of a named section",
                        section.chunks.len()
                    );
                }
                return false;
            }
            true
        })
        .collect()
}

/// Name carried by a heading chunk: its second line without the `# ` prefix.
fn section_name(chunk: &str) -> String {
    chunk
        .split('\n')
        .nth(1)
        .map(|line| line.chars().skip(HEADING_PREFIX_LEN).collect())
        .unwrap_or_default()
}

/// @acp:summary "Parse full file contents into the parameter model"
///
/// CRLF line endings are normalised to LF first.
pub fn parse_str(content: &str) -> ParameterModel {
    let content = content.replace("\r\n", "\n");
    split_sections(&content)
        .into_iter()
        .map(|raw| {
            let parameters = raw
                .chunks
                .iter()
                .flat_map(|chunk| chunk.split(BLOCK_SEPARATOR))
                .map(parse_block)
                .collect::<Vec<_>>();
            debug!(
                "Section {:?}: {} block(s) from {} chunk(s)",
                raw.name,
                parameters.len(),
                raw.chunks.len()
            );
            ParameterSection {
                name: raw.name,
                parameters,
            }
        })
        .collect()
}

/// @acp:summary "Read and parse a parameter file"
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParameterModel> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_str(&content))
}
