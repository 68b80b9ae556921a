//! TOC error types.

use std::path::PathBuf;

/// Syntax error in a TOC source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A heading in outline notation could not be parsed.
    #[error("malformed outline at line {line}: {message}")]
    MalformedOutline {
        /// 1-based line number.
        line: usize,
        /// What is wrong with the heading.
        message: String,
    },
    /// List notation violates the expected structure.
    #[error("malformed list: {0}")]
    MalformedList(String),
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::MalformedList(err.to_string())
    }
}

/// TOC resolution error.
///
/// Every variant aborts resolution of the whole top-level TOC.
#[derive(Debug, thiserror::Error)]
pub enum TocError {
    /// A TOC source file failed to parse.
    #[error("{path}: {source}")]
    Parse {
        /// Source-relative path of the TOC file.
        path: String,
        #[source]
        source: ParseError,
    },
    /// A TOC source file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An href or homepage points nowhere.
    #[error("Unresolvable reference '{href}' in {toc}")]
    UnresolvableReference {
        /// Href as authored.
        href: String,
        /// TOC file containing the reference.
        toc: String,
    },
    /// A link overwrite needed a homepage that could not be inferred.
    #[error("Unable to infer homepage for '{name}' in {toc}")]
    UnresolvedHomepage {
        /// Name of the node whose link could not be set.
        name: String,
        /// TOC file containing the node.
        toc: String,
    },
    /// A TOC file references itself, directly or transitively.
    #[error("Circular reference to {closed_by} is found in {introduced_by}")]
    CircularReference {
        /// TOC file containing the reference that closes the cycle.
        introduced_by: String,
        /// TOC file the cycle returns to.
        closed_by: String,
    },
    /// A path climbs above the source root.
    #[error("Invalid path '{href}' in {toc}: escapes the source root")]
    InvalidPath {
        /// Href as authored.
        href: String,
        /// TOC file containing the reference.
        toc: String,
    },
}
