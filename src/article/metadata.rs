//! Article metadata and its front-matter projection

use serde_yaml::{Mapping, Value};

/// Fields carried into the published front matter, in output order
pub const RECOGNIZED_FIELDS: [&str; 5] = ["title", "emoji", "type", "topics", "published"];

/// Article categories the publishing platform accepts for `type`
pub const KNOWN_ARTICLE_TYPES: &[&str] = &["tech", "idea"];

/// Parsed contents of one `<slug>.yaml` metadata file
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleMetadata {
    fields: Mapping,
}

impl ArticleMetadata {
    /// Parse metadata YAML. The document must be a mapping.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, String> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        match value {
            Value::Mapping(fields) => Ok(Self { fields }),
            Value::Null => Err("metadata document is empty".to_string()),
            _ => Err("metadata document is not a mapping".to_string()),
        }
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Title for display; non-string scalars are rendered as text
    pub fn title(&self) -> Option<String> {
        self.get("title").and_then(scalar_to_string)
    }

    /// Article category as written in the metadata
    pub fn article_type(&self) -> Option<String> {
        self.get("type").and_then(scalar_to_string)
    }

    /// Topics in display order, or `None` when absent or not a sequence
    pub fn topics(&self) -> Option<Vec<String>> {
        let seq = self.get("topics")?.as_sequence()?;
        Some(
            seq.iter()
                .map(|v| scalar_to_string(v).unwrap_or_default())
                .collect(),
        )
    }

    /// True when `type` is present but outside the platform's categories
    pub fn has_unknown_type(&self) -> bool {
        self.article_type()
            .is_some_and(|t| !KNOWN_ARTICLE_TYPES.contains(&t.as_str()))
    }

    /// Top-level keys that the projection drops
    pub fn ignored_fields(&self) -> Vec<String> {
        self.fields
            .keys()
            .filter(|k| !k.as_str().is_some_and(|k| RECOGNIZED_FIELDS.contains(&k)))
            .map(|k| scalar_to_string(k).unwrap_or_else(|| format!("{:?}", k)))
            .collect()
    }

    /// Restrict to the recognized fields, in their fixed order. Keys absent
    /// from the source are omitted; present values are carried unchanged.
    pub fn front_matter(&self) -> Mapping {
        let mut out = Mapping::new();
        for key in RECOGNIZED_FIELDS {
            if let Some(value) = self.get(key) {
                out.insert(Value::String(key.to_string()), value.clone());
            }
        }
        out
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
