//! Bounded least-recently-used cache over an archive loader.

use std::collections::VecDeque;

use crate::error::XrefError;

/// Loads named entries from a backing archive.
///
/// Loads are deterministic per name and assumed expensive enough to cache.
pub trait ArchiveLoader {
    /// Loaded entry type.
    type Value;

    /// Load the entry called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`XrefError::NotFound`] if the archive has no such entry, or
    /// another variant if the entry cannot be read.
    fn load(&mut self, name: &str) -> Result<Self::Value, XrefError>;

    /// Release the backing resource. Called at most once.
    fn dispose(&mut self) {}
}

/// Fixed-capacity LRU cache keyed by entry name.
///
/// Entries are kept most-recently-used first. Failed loads are never cached,
/// so a later `get` for the same name retries the loader.
///
/// Dropping the cache disposes the loader.
pub struct LruCache<L: ArchiveLoader> {
    loader: L,
    entries: VecDeque<(String, L::Value)>,
    capacity: usize,
    disposed: bool,
}

impl<L: ArchiveLoader> LruCache<L> {
    /// Create a cache holding at most `capacity` entries (at least one).
    #[must_use]
    pub fn new(loader: L, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            loader,
            entries: VecDeque::with_capacity(capacity),
            capacity,
            disposed: false,
        }
    }

    /// Get the entry called `name`, loading it on a miss.
    ///
    /// A hit marks the entry most-recently-used. A miss inserts the loaded
    /// entry as most-recently-used and evicts the least-recently-used one if
    /// the cache is over capacity.
    ///
    /// # Errors
    ///
    /// Returns [`XrefError::Disposed`] after [`dispose`](Self::dispose), or
    /// the loader's error unchanged.
    pub fn get(&mut self, name: &str) -> Result<&L::Value, XrefError> {
        if self.disposed {
            return Err(XrefError::Disposed);
        }

        if let Some(position) = self.entries.iter().position(|(key, _)| key == name) {
            tracing::debug!(name, "cache hit");
            if let Some(entry) = self.entries.remove(position) {
                self.entries.push_front(entry);
            }
        } else {
            tracing::debug!(name, "cache miss");
            let value = self.loader.load(name)?;
            self.entries.push_front((name.to_owned(), value));
            if self.entries.len() > self.capacity
                && let Some((evicted, _)) = self.entries.pop_back()
            {
                tracing::debug!(name = evicted, "cache eviction");
            }
        }

        Ok(&self.entries[0].1)
    }

    /// Whether `name` is currently cached. Does not affect recency.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Cached entry names, most-recently-used first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of cached entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Backing loader.
    #[must_use]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Drop all cached entries and release the loader. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.entries.clear();
        self.loader.dispose();
        tracing::debug!("cache disposed");
    }
}

impl<L: ArchiveLoader> Drop for LruCache<L> {
    fn drop(&mut self) {
        self.dispose();
    }
}
