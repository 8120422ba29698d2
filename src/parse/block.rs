//! @acp:module "Block Parser"
//! @acp:summary "Classify the lines of one parameter block into a record"
//! @acp:domain cli
//! @acp:layer service

use tracing::warn;

use crate::model::{DomainSpec, ParameterRecord};

/// Comment line announcing a numeric range
const RANGE_MARKER: &str = "Range of possible";

/// Comment line announcing an enumerated list
const LIST_MARKER: &str = "List of possible values";

const COMMENT_MARKER: char = '#';

/// Prefix of one enumerated value line
const ITEM_MARKER: &str = "# - ";

const ASSIGNMENT: char = '=';

/// @acp:summary "Parse one blank-line separated block into a parameter record"
///
/// Empty lines are filtered first. Each remaining line is, by priority:
/// a range annotation, a list annotation, a description comment, or the
/// `NAME=VALUE` assignment. A block without an assignment yields a record
/// with an empty name.
pub fn parse_block(block: &str) -> ParameterRecord {
    let lines: Vec<&str> = block.split('\n').filter(|line| !line.is_empty()).collect();
    let mut record = ParameterRecord::default();

    for (i, line) in lines.iter().enumerate() {
        if line.contains(RANGE_MARKER) {
            record.domain = DomainSpec::Range(range_text(line));
        } else if line.contains(LIST_MARKER) {
            record.domain = DomainSpec::Enumerated(extract_enumerated(&lines[i..]));
        } else if line.starts_with(COMMENT_MARKER) {
            if !line.starts_with(ITEM_MARKER) {
                record.description.push_str(&line[COMMENT_MARKER.len_utf8()..]);
            }
        } else if line.trim().is_empty() {
            warn!("Ignoring whitespace-only line in parameter block: {:?}", line);
        } else {
            apply_assignment(&mut record, line);
        }
    }

    record
}

/// @acp:summary "Collect enumerated values from a list annotation onwards"
///
/// Every line starting with `# - ` contributes the text after the marker,
/// trimmed. Other lines are skipped; the slice ends with the block.
pub fn extract_enumerated(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| line.strip_prefix(ITEM_MARKER))
        .map(|value| value.trim().to_string())
        .collect()
}

/// Everything after the first colon, untrimmed.
fn range_text(line: &str) -> String {
    match line.split_once(':') {
        Some((_, rest)) => rest.to_string(),
        None => {
            warn!("Range annotation without ':' separator: {:?}", line);
            String::new()
        }
    }
}

fn apply_assignment(record: &mut ParameterRecord, line: &str) {
    if record.is_named() {
        warn!(
            "Extra assignment line {:?} in block for {}, keeping the first",
            line, record.name
        );
        return;
    }

    match line.split_once(ASSIGNMENT) {
        Some((name, value)) => {
            if name.trim().is_empty() {
                warn!("Assignment line without a parameter name: {:?}", line);
            }
            record.name = name.trim().to_string();
            record.default_value = value.trim().to_string();
        }
        None => {
            warn!("Assignment line without '=': {:?}", line);
            record.name = line.trim().to_string();
        }
    }
}
