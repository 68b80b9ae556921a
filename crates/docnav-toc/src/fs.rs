//! Filesystem TOC source.
//!
//! Provides [`FsTocSource`] for resolving TOC files against a directory on
//! the local filesystem.

use std::fs;
use std::path::PathBuf;

use crate::error::TocError;
use crate::source::TocSource;

/// Default TOC file names, in lookup priority order.
pub const DEFAULT_TOC_NAMES: &[&str] = &["toc.md", "toc.yml", "toc.yaml"];

/// Filesystem TOC source.
///
/// Paths are resolved against `source_dir`. Folder lookups try each TOC file
/// name in order and return the first one present.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use docnav_toc::{FsTocSource, resolve_file};
///
/// let source = FsTocSource::new(PathBuf::from("docs"));
/// let tree = resolve_file("toc.yml", &source)?;
/// ```
#[derive(Debug)]
pub struct FsTocSource {
    /// Root directory of the documentation sources.
    source_dir: PathBuf,
    /// TOC file names tried by `find_toc_in_folder`.
    toc_names: Vec<String>,
}

impl FsTocSource {
    /// Create a filesystem source with the default TOC file names.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        let names = DEFAULT_TOC_NAMES.iter().map(|&n| n.to_owned()).collect();
        Self::with_toc_names(source_dir, names)
    }

    /// Create a filesystem source with custom TOC file names.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - Root directory containing documentation sources
    /// * `toc_names` - File names tried in order when a folder is referenced
    #[must_use]
    pub fn with_toc_names(source_dir: PathBuf, toc_names: Vec<String>) -> Self {
        Self {
            source_dir,
            toc_names,
        }
    }

    /// Root directory of the documentation sources.
    #[must_use]
    pub fn source_dir(&self) -> &std::path::Path {
        &self.source_dir
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.source_dir.join(path)
    }
}

impl TocSource for FsTocSource {
    fn exists(&self, path: &str) -> bool {
        self.full_path(path).is_file()
    }

    fn is_dir(&self, path: &str) -> bool {
        self.full_path(path).is_dir()
    }

    fn find_toc_in_folder(&self, folder: &str) -> Option<String> {
        let found = self
            .toc_names
            .iter()
            .map(|name| {
                if folder.is_empty() {
                    name.clone()
                } else {
                    format!("{folder}/{name}")
                }
            })
            .find(|candidate| self.exists(candidate));

        match &found {
            Some(toc) => tracing::debug!(folder, toc, "found TOC in folder"),
            None => tracing::debug!(folder, "no TOC in folder"),
        }
        found
    }

    fn canonicalize(&self, path: &str) -> Result<PathBuf, TocError> {
        let full = self.full_path(path);
        fs::canonicalize(&full).map_err(|source| TocError::Io { path: full, source })
    }

    fn read(&self, path: &str) -> Result<String, TocError> {
        let full = self.full_path(path);
        tracing::debug!(path = %full.display(), "reading TOC file");
        fs::read_to_string(&full).map_err(|source| TocError::Io { path: full, source })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn create_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("a.md"), "# A").unwrap();
        fs::write(dir.path().join("sub/toc.yml"), "- name: X").unwrap();
        fs::write(dir.path().join("sub/deeper/toc.md"), "# Y").unwrap();
        fs::write(dir.path().join("sub/deeper/toc.yml"), "- name: Z").unwrap();
        dir
    }

    #[test]
    fn test_exists_and_is_dir() {
        let dir = create_tree();
        let source = FsTocSource::new(dir.path().to_path_buf());

        assert!(source.exists("a.md"));
        assert!(!source.exists("sub"));
        assert!(!source.exists("missing.md"));
        assert!(source.is_dir("sub"));
        assert!(!source.is_dir("a.md"));
    }

    #[test]
    fn test_find_toc_in_folder() {
        let dir = create_tree();
        let source = FsTocSource::new(dir.path().to_path_buf());

        assert_eq!(source.find_toc_in_folder("sub").as_deref(), Some("sub/toc.yml"));
        assert_eq!(
            source.find_toc_in_folder("sub/deeper").as_deref(),
            Some("sub/deeper/toc.md")
        );
        assert_eq!(source.find_toc_in_folder(""), None);
    }

    #[test]
    fn test_find_toc_respects_custom_order() {
        let dir = create_tree();
        let source = FsTocSource::with_toc_names(
            dir.path().to_path_buf(),
            vec!["toc.yml".to_owned(), "toc.md".to_owned()],
        );

        assert_eq!(
            source.find_toc_in_folder("sub/deeper").as_deref(),
            Some("sub/deeper/toc.yml")
        );
    }

    #[test]
    fn test_canonicalize_is_stable_across_spellings() {
        let dir = create_tree();
        let source = FsTocSource::new(dir.path().to_path_buf());

        let direct = source.canonicalize("sub/toc.yml").unwrap();
        let roundabout = source.canonicalize("sub/deeper/../toc.yml").unwrap();

        assert_eq!(direct, roundabout);
        assert!(direct.is_absolute());
    }

    #[test]
    fn test_canonicalize_missing_is_io_error() {
        let dir = create_tree();
        let source = FsTocSource::new(dir.path().to_path_buf());

        let err = source.canonicalize("missing/toc.yml").unwrap_err();

        assert!(matches!(err, TocError::Io { .. }));
    }

    #[test]
    fn test_read_and_parse_dispatches_on_kind() {
        let dir = create_tree();
        let source = FsTocSource::new(dir.path().to_path_buf());

        let list = source.read_and_parse("sub/toc.yml").unwrap();
        let outline = source.read_and_parse("sub/deeper/toc.md").unwrap();

        assert_eq!(list[0].name, "X");
        assert_eq!(outline[0].name, "Y");
        assert_eq!(outline[0].depth, Some(1));
    }
}
