//! TOC tree nodes.
//!
//! Parsers produce [`RawNode`] trees; the resolver consumes them and produces
//! [`ResolvedNode`] trees for rendering.

use serde::Serialize;

/// Unresolved TOC entry as written in a TOC source file.
///
/// Hrefs and homepages are kept exactly as authored, relative to the folder of
/// the TOC file that contains them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawNode {
    /// Display name.
    pub name: String,
    /// Link target as authored. `Some("")` is a deliberate "no link".
    pub href: Option<String>,
    /// Explicit landing page.
    pub homepage: Option<String>,
    /// Heading depth (outline notation only).
    pub depth: Option<usize>,
    /// Nested entries in source order.
    pub children: Vec<RawNode>,
}

impl RawNode {
    /// Create a name-only node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the href.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the explicit homepage.
    #[must_use]
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Fully resolved TOC entry.
///
/// Serializes to the export shape consumed by the rendering stage:
/// `name`, `href`, `homepage`, `tocHref`, `items`, omitting absent fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNode {
    /// Display name. Empty for the tree root.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// External link or content file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Landing page (always a content file).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Location of a separately navigable nested TOC (folder references only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc_href: Option<String>,
    /// Child entries in source order.
    #[serde(rename = "items", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResolvedNode>,
}

impl ResolvedNode {
    /// Create a name-only node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the href.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the homepage.
    #[must_use]
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    /// Set the nested TOC location.
    #[must_use]
    pub fn with_toc_href(mut self, toc_href: impl Into<String>) -> Self {
        self.toc_href = Some(toc_href.into());
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: ResolvedNode) -> Self {
        self.children.push(child);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_omits_absent_fields() {
        let node = ResolvedNode::new("Topic").with_href("a.md");

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json, serde_json::json!({"name": "Topic", "href": "a.md"}));
    }

    #[test]
    fn test_serialize_uses_export_field_names() {
        let node = ResolvedNode::new("Topic")
            .with_href("sub/a.md")
            .with_homepage("sub/a.md")
            .with_toc_href("sub/toc.md")
            .with_child(ResolvedNode::new("Child").with_href(""));

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Topic",
                "href": "sub/a.md",
                "homepage": "sub/a.md",
                "tocHref": "sub/toc.md",
                "items": [{"name": "Child", "href": ""}]
            })
        );
    }

    #[test]
    fn test_serialize_root_without_name() {
        let root = ResolvedNode::default().with_child(ResolvedNode::new("Topic"));

        let json = serde_json::to_value(&root).unwrap();

        assert_eq!(json, serde_json::json!({"items": [{"name": "Topic"}]}));
    }
}
