//! @acp:module "Renderer"
//! @acp:summary "Markdown and JSON output for the parameter model"
//! @acp:domain cli
//! @acp:layer output

use std::fmt::Write as _;

use crate::config::Config;
use crate::error::Result;
use crate::model::{ParameterModel, ParameterRecord};

/// Output format for the generated reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Render the model in the requested format
pub fn render(model: &ParameterModel, format: OutputFormat, config: &Config) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(model, config)),
        OutputFormat::Json => render_json(model),
    }
}

/// @acp:summary "Render the markdown reference page"
///
/// Layout: header, one `## Section` heading per section with a bullet per
/// named parameter, then the footer. Unnamed records leave a blank line.
pub fn render_markdown(model: &ParameterModel, config: &Config) -> String {
    let mut output = String::new();

    output.push_str(config.header.trim_end());
    output.push_str("\n\n");

    for section in model.sections() {
        output.push_str("## ");
        output.push_str(&section.name);
        output.push('\n');

        for record in &section.parameters {
            if record.is_named() {
                render_record(&mut output, record);
            } else {
                output.push('\n');
            }
        }
    }

    output.push('\n');
    output.push_str(config.footer.trim());
    output.push('\n');

    output
}

fn render_record(output: &mut String, record: &ParameterRecord) {
    // Writing into a String cannot fail
    let _ = writeln!(output, "- {}:{}", record.name, record.description);

    // Enumerations are listed from their `{a,b}` form, one item per comma
    let domain = record.domain.to_string();
    if record.domain.is_enumerated() {
        let values = domain
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .unwrap_or(domain.as_str());
        output.push_str("\t- Domain:\n");
        for value in values.split(',') {
            let _ = writeln!(output, "\t\t- {}", value);
        }
    } else {
        let _ = writeln!(output, "\t- Domain: {}", domain);
    }

    let _ = writeln!(output, "\t- Default value: {}", record.default_value);
}

/// Render the model as pretty-printed JSON
pub fn render_json(model: &ParameterModel) -> Result<String> {
    serde_json::to_string_pretty(model).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DomainSpec, ParameterSection};
    use pretty_assertions::assert_eq;

    fn bare_config() -> Config {
        Config {
            header: "# Parameters\n".to_string(),
            footer: "## Footer\n".to_string(),
            ..Default::default()
        }
    }

    fn model(sections: Vec<ParameterSection>) -> ParameterModel {
        sections.into_iter().collect()
    }

    fn enumerated(values: &[&str]) -> ParameterModel {
        let mut general = ParameterSection::new("General");
        general.parameters.push(ParameterRecord {
            name: "SPLIT".to_string(),
            domain: DomainSpec::Enumerated(values.iter().map(|v| v.to_string()).collect()),
            ..Default::default()
        });
        model(vec![general])
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }

    #[test]
    fn test_enumerated_value_with_comma_splits_into_items() {
        let rendered = render_markdown(
            &enumerated(&["RANDOM_OPPOSITE: two opposite corners, one selected randomly"]),
            &bare_config(),
        );

        assert!(rendered.contains(
            "\t- Domain:\n\t\t- RANDOM_OPPOSITE: two opposite corners\n\t\t-  one selected randomly\n"
        ));
    }

    #[test]
    fn test_empty_enumeration_renders_one_blank_item() {
        let rendered = render_markdown(&enumerated(&[]), &bare_config());

        assert!(rendered.contains("\t- Domain:\n\t\t- \n\t- Default value: \n"));
    }

    #[test]
    fn test_render_range_record() {
        let mut general = ParameterSection::new("General");
        general.parameters.push(ParameterRecord {
            name: "DEPTH_LIMIT".to_string(),
            description: " Max depth".to_string(),
            domain: DomainSpec::Range(" positive integer".to_string()),
            default_value: "1000".to_string(),
        });

        let rendered = render_markdown(&model(vec![general]), &bare_config());

        assert_eq!(
            rendered,
            "# Parameters\n\n## General\n- DEPTH_LIMIT: Max depth\n\t- Domain:  positive integer\n\t- Default value: 1000\n\n## Footer\n"
        );
    }

    #[test]
    fn test_render_enumerated_record() {
        let mut general = ParameterSection::new("General");
        general.parameters.push(ParameterRecord {
            name: "LOG_LEVEL".to_string(),
            description: " Logging level".to_string(),
            domain: DomainSpec::Enumerated(vec!["NONE".to_string(), "MAIN".to_string()]),
            default_value: "NONE".to_string(),
        });

        let rendered = render_markdown(&model(vec![general]), &bare_config());

        assert!(rendered.contains(
            "- LOG_LEVEL: Logging level\n\t- Domain:\n\t\t- NONE\n\t\t- MAIN\n\t- Default value: NONE\n"
        ));
    }

    #[test]
    fn test_unnamed_record_renders_blank_line() {
        let mut general = ParameterSection::new("General");
        general.parameters.push(ParameterRecord::default());

        let rendered = render_markdown(&model(vec![general]), &bare_config());

        assert_eq!(rendered, "# Parameters\n\n## General\n\n\n## Footer\n");
    }

    #[test]
    fn test_empty_section_renders_heading_only() {
        let rendered = render_markdown(
            &model(vec![ParameterSection::new("Empty"), ParameterSection::new("Other")]),
            &bare_config(),
        );

        assert_eq!(rendered, "# Parameters\n\n## Empty\n## Other\n\n## Footer\n");
        assert!(!rendered.contains("- "));
    }

    #[test]
    fn test_render_json_uses_section_array() {
        let json = render(
            &model(vec![ParameterSection::new("General")]),
            OutputFormat::Json,
            &bare_config(),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "General");
        assert!(value[0]["parameters"].as_array().unwrap().is_empty());
    }
}
