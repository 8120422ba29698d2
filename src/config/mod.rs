//! @acp:module "Configuration"
//! @acp:summary "Document boilerplate and output defaults"
//! @acp:domain cli
//! @acp:layer config
//!
//! Nothing is read from disk unless a config file is passed explicitly;
//! the defaults reproduce the stock RealPaver parameter page.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ParamDocError, Result};

const DEFAULT_HEADER: &str = include_str!("../../templates/header.md");
const DEFAULT_FOOTER: &str = include_str!("../../templates/footer.md");

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

fn default_footer() -> String {
    DEFAULT_FOOTER.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("parameters.md")
}

/// @acp:summary "Renderer and output configuration"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Markdown emitted before the first section
    #[serde(default = "default_header")]
    pub header: String,

    /// Markdown emitted after the last section
    #[serde(default = "default_footer")]
    pub footer: String,

    /// Output file, relative to the working directory
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: default_header(),
            footer: default_footer(),
            output: default_output(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(ParamDocError::Config("output path is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_is_parameters_md() {
        assert_eq!(Config::default().output, PathBuf::from("parameters.md"));
    }

    #[test]
    fn test_default_boilerplate_is_embedded() {
        let config = Config::default();
        assert!(config.header.starts_with("# Parameters description"));
        assert!(config.footer.contains("## Using the C++ API"));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("paramdoc.json");
        std::fs::write(&path, r##"{ "header": "# Solver knobs\n" }"##).unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.header, "# Solver knobs\n");
        assert_eq!(config.footer, Config::default().footer);
        assert_eq!(config.output, PathBuf::from("parameters.md"));
    }

    #[test]
    fn test_load_overrides_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("paramdoc.json");
        std::fs::write(&path, r#"{ "output": "docs/params.md" }"#).unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.output, PathBuf::from("docs/params.md"));
        assert_eq!(config.header, Config::default().header);
    }

    #[test]
    fn test_empty_output_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("paramdoc.json");
        std::fs::write(&path, r#"{ "output": "" }"#).unwrap();

        assert!(matches!(Config::load(&path), Err(ParamDocError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(temp.path().join("nope.json"));
        assert!(matches!(result, Err(ParamDocError::Io(_))));
    }
}
