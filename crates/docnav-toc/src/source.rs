//! File-system oracle consulted by the resolver.
//!
//! # Path Convention
//!
//! All path parameters are `/`-separated, relative to the source root, and
//! already normalized (no `.` or `..` segments):
//! - `"toc.yml"` - TOC at the source root
//! - `"guide/setup.md"` - nested content file
//! - `"guide"` - folder
//!
//! The resolver joins authored hrefs onto the referencing TOC's folder before
//! calling into the source.

use std::path::PathBuf;

use crate::error::TocError;
use crate::kind::TocKind;
use crate::list::parse_list;
use crate::node::RawNode;
use crate::outline::parse_outline;

/// Access to the source tree a TOC is resolved against.
pub trait TocSource {
    /// Check whether a file exists at the given path.
    fn exists(&self, path: &str) -> bool;

    /// Check whether the path names a folder.
    fn is_dir(&self, path: &str) -> bool;

    /// Locate the TOC file inside a folder, if any.
    ///
    /// Returns the source-relative path of the TOC file.
    fn find_toc_in_folder(&self, folder: &str) -> Option<String>;

    /// Map a path to a stable canonical form for cycle comparison.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::Io`] if the path cannot be canonicalized.
    fn canonicalize(&self, path: &str) -> Result<PathBuf, TocError>;

    /// Read the raw text of a file.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::Io`] if the file cannot be read.
    fn read(&self, path: &str) -> Result<String, TocError>;

    /// Read a TOC file and parse it with the parser for its notation.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::Parse`] if the content is malformed, or
    /// [`TocError::UnresolvableReference`] if the path is not a TOC file.
    fn read_and_parse(&self, path: &str) -> Result<Vec<RawNode>, TocError> {
        let Some(kind) = TocKind::from_path(path) else {
            return Err(TocError::UnresolvableReference {
                href: path.to_owned(),
                toc: path.to_owned(),
            });
        };
        let content = self.read(path)?;
        let parsed = match kind {
            TocKind::Outline => parse_outline(&content),
            TocKind::List => parse_list(&content),
        };
        parsed.map_err(|source| TocError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}
