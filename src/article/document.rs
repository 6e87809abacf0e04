//! Merged document composition
//!
//! A merged document is the projected front matter between two `---` lines,
//! one blank line, then the article body byte-for-byte.

use serde_yaml::{Mapping, Value};

use crate::error::{MergeError, Result};

/// Marker line opening and closing the front-matter block
pub const DELIMITER: &str = "---";

/// Serialize a front-matter mapping to YAML text ending in a newline
///
/// Block sequences directly under a top-level key are indented by two
/// spaces (`topics:\n  - a`), the layout the publishing platform's own
/// tooling writes.
pub fn serialize_front_matter(front_matter: &Mapping) -> Result<String> {
    if front_matter.is_empty() {
        return Ok(String::new());
    }
    let yaml = serde_yaml::to_string(&Value::Mapping(front_matter.clone())).map_err(|e| {
        MergeError::SerializeFailed {
            reason: e.to_string(),
        }
    })?;
    Ok(indent_top_level_sequences(&yaml))
}

/// Compose the final document from serialized front matter and the raw body.
/// The body is opaque bytes and need not be UTF-8.
pub fn compose(front_matter_yaml: &str, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(front_matter_yaml.len() + body.len() + 16);
    out.extend_from_slice(DELIMITER.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(front_matter_yaml.as_bytes());
    out.extend_from_slice(DELIMITER.as_bytes());
    out.extend_from_slice(b"\n\n");
    out.extend_from_slice(body);
    out
}

/// Shift every line of a column-0 sequence block right by two spaces.
/// Keys of the top-level mapping are the only other column-0 lines.
fn indent_top_level_sequences(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len() + 32);
    let mut in_sequence = false;

    for line in yaml.split_inclusive('\n') {
        match line.chars().next() {
            Some('-') => in_sequence = true,
            Some(c) if c != ' ' && c != '\n' => in_sequence = false,
            _ => {}
        }
        if in_sequence && !line.trim().is_empty() {
            out.push_str("  ");
        }
        out.push_str(line);
    }

    out
}
