//! Cross-reference error types.

use std::path::PathBuf;

/// Cross-reference lookup error.
#[derive(Debug, thiserror::Error)]
pub enum XrefError {
    /// The archive has no entry with this name.
    #[error("Cross-reference map not found: {0}")]
    NotFound(String),
    /// The archive was used after being disposed.
    #[error("Cross-reference archive has been disposed")]
    Disposed,
    /// The zip container is unreadable.
    #[error("Invalid archive {}: {source}", .path.display())]
    Zip {
        /// Archive path.
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    /// The archive or one of its entries could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An entry is not a valid cross-reference map.
    #[error("Invalid cross-reference map {name}: {source}")]
    Parse {
        /// Entry name.
        name: String,
        #[source]
        source: serde_yaml::Error,
    },
}
