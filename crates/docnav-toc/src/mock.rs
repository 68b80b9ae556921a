//! Mock TOC source for testing.
//!
//! Provides [`MockTocSource`] for resolver tests without filesystem access.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::TocError;
use crate::fs::DEFAULT_TOC_NAMES;
use crate::source::TocSource;

/// In-memory TOC source.
///
/// Folders exist implicitly for every prefix of a stored file path.
///
/// # Example
///
/// ```ignore
/// use docnav_toc::{MockTocSource, resolve_file};
///
/// let source = MockTocSource::new()
///     .with_file("toc.yml", "- name: Guide\n  href: guide.md\n")
///     .with_file("guide.md", "# Guide");
///
/// let tree = resolve_file("toc.yml", &source).unwrap();
/// ```
#[derive(Debug)]
pub struct MockTocSource {
    files: BTreeMap<String, String>,
    toc_names: Vec<String>,
}

impl Default for MockTocSource {
    fn default() -> Self {
        Self {
            files: BTreeMap::new(),
            toc_names: DEFAULT_TOC_NAMES.iter().map(|&n| n.to_owned()).collect(),
        }
    }
}

impl MockTocSource {
    /// Create an empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Add an empty content file.
    #[must_use]
    pub fn with_page(self, path: impl Into<String>) -> Self {
        self.with_file(path, "")
    }

    /// Replace the TOC file names tried for folder references.
    #[must_use]
    pub fn with_toc_names(mut self, names: &[&str]) -> Self {
        self.toc_names = names.iter().map(|&n| n.to_owned()).collect();
        self
    }
}

impl TocSource for MockTocSource {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        if path.is_empty() {
            return true;
        }
        let prefix = format!("{path}/");
        self.files.keys().any(|file| file.starts_with(&prefix))
    }

    fn find_toc_in_folder(&self, folder: &str) -> Option<String> {
        self.toc_names
            .iter()
            .map(|name| {
                if folder.is_empty() {
                    name.clone()
                } else {
                    format!("{folder}/{name}")
                }
            })
            .find(|candidate| self.exists(candidate))
    }

    fn canonicalize(&self, path: &str) -> Result<PathBuf, TocError> {
        if self.exists(path) || self.is_dir(path) {
            Ok(PathBuf::from("/mock").join(path))
        } else {
            Err(not_found(path))
        }
    }

    fn read(&self, path: &str) -> Result<String, TocError> {
        self.files.get(path).cloned().ok_or_else(|| not_found(path))
    }
}

fn not_found(path: &str) -> TocError {
    TocError::Io {
        path: PathBuf::from(path),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file in mock"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folders_derived_from_files() {
        let source = MockTocSource::new().with_page("a/b/c.md");

        assert!(source.is_dir(""));
        assert!(source.is_dir("a"));
        assert!(source.is_dir("a/b"));
        assert!(!source.is_dir("a/b/c.md"));
        assert!(!source.is_dir("ab"));
    }

    #[test]
    fn test_find_toc_in_folder_uses_name_order() {
        let source = MockTocSource::new()
            .with_file("sub/toc.yml", "")
            .with_file("sub/toc.md", "");

        assert_eq!(source.find_toc_in_folder("sub").as_deref(), Some("sub/toc.md"));

        let source = source.with_toc_names(&["toc.yml"]);
        assert_eq!(source.find_toc_in_folder("sub").as_deref(), Some("sub/toc.yml"));
        assert_eq!(source.find_toc_in_folder("other"), None);
    }

    #[test]
    fn test_read_missing_is_io_error() {
        let source = MockTocSource::new();

        assert!(matches!(source.read("toc.md"), Err(TocError::Io { .. })));
        assert!(source.canonicalize("toc.md").is_err());
    }
}
