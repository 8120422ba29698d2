//! @acp:module "Parameter Model"
//! @acp:summary "Typed records for sections, parameters and their value domains"
//! @acp:domain cli
//! @acp:layer model
//!
//! The model is built once by the parser and only read afterwards.
//! Sections keep the order in which they first appear in the source file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// @acp:summary "Set of valid values for a parameter"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DomainSpec {
    /// Explicit list of accepted words, in encounter order
    Enumerated(Vec<String>),
    /// Free-form range text, kept verbatim
    Range(String),
}

impl DomainSpec {
    pub fn is_enumerated(&self) -> bool {
        matches!(self, DomainSpec::Enumerated(_))
    }
}

impl Default for DomainSpec {
    fn default() -> Self {
        DomainSpec::Range(String::new())
    }
}

/// Canonical serialization: `{a,b,c}` for enumerations, the raw text for ranges.
impl fmt::Display for DomainSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainSpec::Enumerated(values) => write!(f, "{{{}}}", values.join(",")),
            DomainSpec::Range(raw) => f.write_str(raw),
        }
    }
}

/// @acp:summary "One documented parameter"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// Parameter key; empty when the block had no assignment line
    pub name: String,
    /// Concatenated comment text
    pub description: String,
    pub domain: DomainSpec,
    pub default_value: String,
}

impl ParameterRecord {
    /// Records without a name are placeholders for blank or malformed blocks.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

/// @acp:summary "A named group of parameters"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSection {
    pub name: String,
    pub parameters: Vec<ParameterRecord>,
}

impl ParameterSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Parameters that will be rendered
    pub fn named_parameters(&self) -> impl Iterator<Item = &ParameterRecord> {
        self.parameters.iter().filter(|p| p.is_named())
    }
}

/// @acp:summary "Ordered mapping from section name to section"
/// @acp:lock normal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterModel {
    sections: Vec<ParameterSection>,
}

impl ParameterModel {
    /// Sections in first-appearance order
    pub fn sections(&self) -> &[ParameterSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of named parameters across all sections
    pub fn parameter_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.named_parameters().count())
            .sum()
    }
}

/// Sections sharing a name are merged into the first one, parameters appended.
impl FromIterator<ParameterSection> for ParameterModel {
    fn from_iter<I: IntoIterator<Item = ParameterSection>>(iter: I) -> Self {
        let mut sections: Vec<ParameterSection> = Vec::new();
        for section in iter {
            match sections.iter_mut().find(|s| s.name == section.name) {
                Some(existing) => existing.parameters.extend(section.parameters),
                None => sections.push(section),
            }
        }
        Self { sections }
    }
}
