//! Cross-reference archive lookup for docnav.
//!
//! A cross-reference archive is a zip file of YAML maps from uids to link
//! targets. Lookups start at the major entry ([`MAJOR_ENTRY`]) and follow
//! redirections into the other maps of the same archive.
//!
//! # Architecture
//!
//! - [`ArchiveLoader`] trait: loads one map by entry name
//! - [`LruCache`]: bounded most-recently-used cache in front of a loader
//! - [`ZipXrefArchive`]: loader over a zip file on disk
//! - [`XrefArchiveReader`]: uid lookup through the cache
//!
//! # Example
//!
//! ```ignore
//! use docnav_xref::XrefArchiveReader;
//!
//! let mut reader = XrefArchiveReader::open("xref.zip")?;
//! let spec = reader.find("System.String")?;
//! reader.dispose();
//! ```

mod archive;
mod error;
mod lru;
mod map;
mod reader;

pub use archive::{MAJOR_ENTRY, ZipXrefArchive};
pub use error::XrefError;
pub use lru::{ArchiveLoader, LruCache};
pub use map::{XrefMap, XrefRedirection, XrefSpec};
pub use reader::{DEFAULT_CACHE_CAPACITY, XrefArchiveReader};
