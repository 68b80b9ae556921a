//! Uid lookup across the maps of one archive.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::archive::{MAJOR_ENTRY, ZipXrefArchive};
use crate::error::XrefError;
use crate::lru::{ArchiveLoader, LruCache};
use crate::map::{XrefMap, XrefSpec};

/// Number of maps kept in memory per archive.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Reads cross-reference specs from an archive of linked maps.
///
/// Lookups start at the major entry and follow redirections depth-first,
/// only into entries the archive actually contains. Maps are fetched through
/// an [`LruCache`], so repeated lookups touching the same maps do not reload
/// them.
///
/// # Example
///
/// ```ignore
/// use docnav_xref::XrefArchiveReader;
///
/// let mut reader = XrefArchiveReader::open("xref.zip")?;
/// if let Some(spec) = reader.find("System.String")? {
///     println!("{:?}", spec.href);
/// }
/// ```
pub struct XrefArchiveReader<L: ArchiveLoader<Value = XrefMap> = ZipXrefArchive> {
    cache: LruCache<L>,
    entries: HashSet<String>,
    major: String,
}

impl XrefArchiveReader<ZipXrefArchive> {
    /// Open a zip archive with the default cache capacity.
    ///
    /// # Errors
    ///
    /// See [`ZipXrefArchive::open`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, XrefError> {
        Self::open_with_capacity(path, DEFAULT_CACHE_CAPACITY)
    }

    /// Open a zip archive keeping at most `capacity` maps in memory.
    ///
    /// # Errors
    ///
    /// See [`ZipXrefArchive::open`].
    pub fn open_with_capacity(
        path: impl Into<PathBuf>,
        capacity: usize,
    ) -> Result<Self, XrefError> {
        let archive = ZipXrefArchive::open(path)?;
        let entries = archive.entries().iter().cloned().collect();
        Ok(Self::new(archive, entries, capacity))
    }
}

impl<L: ArchiveLoader<Value = XrefMap>> XrefArchiveReader<L> {
    /// Create a reader over any map loader.
    ///
    /// # Arguments
    ///
    /// * `loader` - Source of maps by entry name
    /// * `entries` - Entry names redirections may point at
    /// * `capacity` - Maximum number of cached maps
    #[must_use]
    pub fn new(loader: L, entries: HashSet<String>, capacity: usize) -> Self {
        Self {
            cache: LruCache::new(loader, capacity),
            entries,
            major: MAJOR_ENTRY.to_owned(),
        }
    }

    /// Find the spec for `uid`.
    ///
    /// Returns `Ok(None)` when no reachable map lists the uid.
    ///
    /// # Errors
    ///
    /// Fails if the major entry is missing, a visited map cannot be loaded,
    /// or the reader has been disposed.
    pub fn find(&mut self, uid: &str) -> Result<Option<XrefSpec>, XrefError> {
        let mut pending = vec![self.major.clone()];
        let mut visited = HashSet::new();

        while let Some(name) = pending.pop() {
            if !visited.insert(name.clone()) {
                continue;
            }

            let map = self.cache.get(&name)?;
            if let Some(spec) = map.find(uid) {
                return Ok(Some(spec.clone()));
            }

            let next: Vec<&str> = map
                .redirections_for(uid)
                .filter(|href| self.entries.contains(*href))
                .collect();
            // Reversed so the first redirection is visited first.
            pending.extend(next.into_iter().rev().map(str::to_owned));
        }

        Ok(None)
    }

    /// Map cache backing this reader.
    #[must_use]
    pub fn cache(&self) -> &LruCache<L> {
        &self.cache
    }

    /// Release the archive and drop cached maps. Idempotent.
    pub fn dispose(&mut self) {
        self.cache.dispose();
    }
}
