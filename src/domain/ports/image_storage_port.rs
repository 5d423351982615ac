//! Port definition for decoded image storage.

use crate::domain::entities::{ImageKey, SharedImage};

/// Backing store for decoded images, keyed by [`ImageKey`].
///
/// Implementations must be thread-safe. The default store is unbounded and
/// never drops entries on its own; a bounded or expiring store can be
/// substituted without touching the cache manager or the loader.
#[cfg_attr(test, mockall::automock)]
pub trait ImageStorage: Send + Sync {
    /// Returns the current entry for `key`, if any.
    fn get(&self, key: &ImageKey) -> Option<SharedImage>;

    /// Inserts or replaces the entry for `key`.
    fn set(&self, key: ImageKey, image: SharedImage);

    /// Deletes the entry for `key`. No-op when absent.
    fn remove(&self, key: &ImageKey);

    /// Deletes every entry.
    fn remove_all(&self);
}
