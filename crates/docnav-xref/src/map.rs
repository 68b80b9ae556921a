//! Cross-reference map model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One YAML cross-reference map.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XrefMap {
    /// Whether `references` is sorted by uid.
    #[serde(default)]
    pub sorted: bool,
    /// Base URL for relative reference hrefs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub references: Vec<XrefSpec>,
    /// Other maps covering uid prefixes not listed here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redirections: Vec<XrefRedirection>,
}

impl XrefMap {
    /// Find the reference with exactly this uid.
    ///
    /// Sorted maps are binary searched; unsorted maps are scanned in order.
    #[must_use]
    pub fn find(&self, uid: &str) -> Option<&XrefSpec> {
        if self.sorted {
            self.references
                .binary_search_by(|spec| spec.uid.as_str().cmp(uid))
                .ok()
                .map(|index| &self.references[index])
        } else {
            self.references.iter().find(|spec| spec.uid == uid)
        }
    }

    /// Redirection targets that may contain `uid`, in declaration order.
    pub fn redirections_for<'a>(&'a self, uid: &'a str) -> impl Iterator<Item = &'a str> {
        self.redirections
            .iter()
            .filter(move |redirection| uid.starts_with(&redirection.uid_prefix))
            .map(|redirection| redirection.href.as_str())
    }
}

/// A single cross-reference target.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct XrefSpec {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Any other fields, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Pointer from a uid prefix to another map entry in the same archive.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XrefRedirection {
    pub uid_prefix: String,
    /// Archive entry name of the target map.
    pub href: String,
}
