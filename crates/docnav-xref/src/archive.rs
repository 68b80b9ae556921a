//! Zip-backed cross-reference archive.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::XrefError;
use crate::lru::ArchiveLoader;
use crate::map::XrefMap;

/// Entry every archive starts lookups from.
pub const MAJOR_ENTRY: &str = "xrefmap.yml";

/// Zip file whose entries are YAML cross-reference maps.
///
/// The file handle stays open until [`ArchiveLoader::dispose`] is called.
pub struct ZipXrefArchive {
    path: PathBuf,
    archive: Option<ZipArchive<File>>,
    entries: Vec<String>,
}

impl ZipXrefArchive {
    /// Open an archive and index its entry names.
    ///
    /// # Errors
    ///
    /// Returns [`XrefError::Io`] if the file cannot be opened or
    /// [`XrefError::Zip`] if it is not a zip archive.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, XrefError> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| XrefError::Io {
            path: path.clone(),
            source,
        })?;
        let archive = ZipArchive::new(file).map_err(|source| XrefError::Zip {
            path: path.clone(),
            source,
        })?;
        let mut entries: Vec<String> = archive.file_names().map(str::to_owned).collect();
        entries.sort();

        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "opened cross-reference archive"
        );

        Ok(Self {
            path,
            archive: Some(archive),
            entries,
        })
    }

    /// Archive file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entry names, sorted.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl ArchiveLoader for ZipXrefArchive {
    type Value = XrefMap;

    fn load(&mut self, name: &str) -> Result<XrefMap, XrefError> {
        let archive = self.archive.as_mut().ok_or(XrefError::Disposed)?;

        let mut entry = match archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Err(XrefError::NotFound(name.to_owned())),
            Err(source) => {
                return Err(XrefError::Zip {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut text = String::new();
        entry
            .read_to_string(&mut text)
            .map_err(|source| XrefError::Io {
                path: self.path.join(name),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), name, "loaded cross-reference map");

        serde_yaml::from_str(&text).map_err(|source| XrefError::Parse {
            name: name.to_owned(),
            source,
        })
    }

    fn dispose(&mut self) {
        if self.archive.take().is_some() {
            tracing::debug!(path = %self.path.display(), "closed cross-reference archive");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    use super::*;

    fn write_archive(dir: &TempDir, entries: &[(&str, &str)]) -> PathBuf {
        let path = dir.path().join("xref.zip");
        let mut zip = ZipWriter::new(File::create(&path).unwrap());
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        for (name, content) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        path
    }

    #[test]
    fn test_open_lists_entries() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(&dir, &[("xrefmap.yml", "references: []"), ("a.yml", "")]);

        let archive = ZipXrefArchive::open(&path).unwrap();

        assert_eq!(archive.entries(), ["a.yml", "xrefmap.yml"]);
        assert_eq!(archive.path(), path);
    }

    #[test]
    fn test_load_parses_map() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(
            &dir,
            &[(MAJOR_ENTRY, "references:\n  - uid: a\n    href: a.html\n")],
        );
        let mut archive = ZipXrefArchive::open(path).unwrap();

        let map = archive.load(MAJOR_ENTRY).unwrap();

        assert_eq!(map.references.len(), 1);
        assert_eq!(map.references[0].href.as_deref(), Some("a.html"));
    }

    #[test]
    fn test_load_missing_entry_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(&dir, &[(MAJOR_ENTRY, "references: []")]);
        let mut archive = ZipXrefArchive::open(path).unwrap();

        let err = archive.load("other.yml").unwrap_err();

        assert!(matches!(err, XrefError::NotFound(ref name) if name == "other.yml"));
    }

    #[test]
    fn test_load_invalid_yaml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(&dir, &[(MAJOR_ENTRY, "references: [")]);
        let mut archive = ZipXrefArchive::open(path).unwrap();

        let err = archive.load(MAJOR_ENTRY).unwrap_err();

        assert!(matches!(err, XrefError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn test_load_after_dispose_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(&dir, &[(MAJOR_ENTRY, "references: []")]);
        let mut archive = ZipXrefArchive::open(path).unwrap();

        archive.dispose();
        archive.dispose();

        assert!(matches!(archive.load(MAJOR_ENTRY), Err(XrefError::Disposed)));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();

        let err = ZipXrefArchive::open(dir.path().join("missing.zip")).err().unwrap();

        assert!(matches!(err, XrefError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn test_open_non_zip_is_zip_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.zip");
        std::fs::write(&path, "not a zip").unwrap();

        let err = ZipXrefArchive::open(path).err().unwrap();

        assert!(matches!(err, XrefError::Zip { .. }), "got {err:?}");
    }
}
