//! List notation parser.
//!
//! Parses YAML TOC files (`toc.yml`):
//!
//! ```yaml
//! - name: Guide
//!   href: guide/
//!   homepage: guide/intro.md
//!   items:
//!     - name: Setup
//!       href: guide/setup.md
//! ```
//!
//! The document may also be a mapping with a top-level `items` key.
//! `children` is accepted in place of `items`; unknown keys are ignored.

use serde::{Deserialize, Deserializer};

use crate::error::ParseError;
use crate::node::RawNode;

/// Single list entry as parsed from YAML.
#[derive(Deserialize)]
struct ListEntry {
    #[serde(deserialize_with = "text")]
    name: String,
    #[serde(default, deserialize_with = "optional_text")]
    href: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    homepage: Option<String>,
    #[serde(default, alias = "children")]
    items: Option<Vec<ListEntry>>,
}

/// TOC document written as a mapping with a top-level `items` key.
#[derive(Deserialize)]
struct RootDocument {
    #[serde(alias = "children")]
    items: Vec<ListEntry>,
}

/// Render a scalar as text. Numbers and booleans keep their YAML spelling.
fn scalar_text(value: serde_yaml::Value) -> Result<Option<String>, String> {
    match value {
        serde_yaml::Value::Null => Ok(None),
        serde_yaml::Value::String(text) => Ok(Some(text)),
        serde_yaml::Value::Number(number) => Ok(Some(number.to_string())),
        serde_yaml::Value::Bool(flag) => Ok(Some(flag.to_string())),
        serde_yaml::Value::Tagged(tagged) => scalar_text(tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => {
            Err("expected a scalar value".to_owned())
        }
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    scalar_text(value)
        .map_err(serde::de::Error::custom)?
        .ok_or_else(|| serde::de::Error::custom("expected text, found null"))
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    scalar_text(value).map_err(serde::de::Error::custom)
}

impl From<ListEntry> for RawNode {
    fn from(entry: ListEntry) -> Self {
        Self {
            name: entry.name,
            href: entry.href,
            homepage: entry.homepage,
            depth: None,
            children: entry
                .items
                .into_iter()
                .flatten()
                .map(RawNode::from)
                .collect(),
        }
    }
}

/// Parse list notation into top-level nodes.
///
/// An empty document is an empty TOC.
///
/// # Errors
///
/// Returns [`ParseError::MalformedList`] if the YAML is invalid or an entry is
/// not a mapping with a `name`.
pub fn parse_list(content: &str) -> Result<Vec<RawNode>, ParseError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    let entries: Vec<ListEntry> = match value {
        serde_yaml::Value::Null => return Ok(Vec::new()),
        serde_yaml::Value::Sequence(_) => serde_yaml::from_value(value)?,
        serde_yaml::Value::Mapping(_) => serde_yaml::from_value::<RootDocument>(value)?.items,
        _ => {
            return Err(ParseError::MalformedList(
                "expected a sequence of entries or a mapping with `items`".to_owned(),
            ));
        }
    };

    Ok(entries.into_iter().map(RawNode::from).collect())
}
