//! Unbounded hash map image storage.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::entities::{ImageKey, SharedImage};
use crate::domain::ports::ImageStorage;

/// Default [`ImageStorage`]: an unordered map with no capacity bound and no expiry.
///
/// The lock is held only for the individual map operation, so concurrent
/// writers to one key resolve as last write wins.
#[derive(Default)]
pub struct HashImageStorage {
    entries: RwLock<HashMap<ImageKey, SharedImage>>,
}

impl HashImageStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ImageStorage for HashImageStorage {
    fn get(&self, key: &ImageKey) -> Option<SharedImage> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: ImageKey, image: SharedImage) {
        self.entries.write().insert(key, image);
    }

    fn remove(&self, key: &ImageKey) {
        self.entries.write().remove(key);
    }

    fn remove_all(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn image(width: u32) -> SharedImage {
        Arc::new(image::DynamicImage::new_rgb8(width, 1))
    }

    #[test]
    fn test_get_on_empty_storage() {
        let storage = HashImageStorage::new();
        assert!(storage.get(&ImageKey::from("http://x/a.png")).is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_one_entry_per_key() {
        let storage = HashImageStorage::new();
        let key = ImageKey::from("http://x/a.png");

        storage.set(key.clone(), image(1));
        storage.set(key.clone(), image(2));

        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get(&key).unwrap().width(), 2);
    }

    #[test]
    fn test_remove_and_remove_all() {
        let storage = HashImageStorage::new();
        let a = ImageKey::from("http://x/a.png");
        let b = ImageKey::from("http://x/b.png");
        storage.set(a.clone(), image(1));
        storage.set(b.clone(), image(1));

        storage.remove(&a);
        assert!(storage.get(&a).is_none());
        assert!(storage.get(&b).is_some());

        storage.remove(&a);
        storage.remove_all();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_concurrent_writers_leave_one_entry() {
        let storage = Arc::new(HashImageStorage::new());
        let key = ImageKey::from("http://x/a.png");

        let handles: Vec<_> = (1..=8)
            .map(|width| {
                let storage = storage.clone();
                let key = key.clone();
                std::thread::spawn(move || storage.set(key, image(width)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(storage.len(), 1);
        assert!((1..=8).contains(&storage.get(&key).unwrap().width()));
    }
}
