//! Cache manager facade over a single image storage.

use tracing::{debug, info, trace};

use crate::domain::entities::{ImageKey, SharedImage};
use crate::domain::ports::ImageStorage;

/// Stateful facade over exactly one [`ImageStorage`].
///
/// The storage is owned for the manager's whole lifetime and never handed
/// out. Share the manager itself behind an `Arc`.
pub struct ImageCacheManager {
    storage: Box<dyn ImageStorage>,
}

impl ImageCacheManager {
    /// Creates a manager owning `storage`.
    #[must_use]
    pub fn new(storage: Box<dyn ImageStorage>) -> Self {
        Self { storage }
    }

    /// Returns the cached image for `key`, if any.
    pub fn get_image(&self, key: &ImageKey) -> Option<SharedImage> {
        let image = self.storage.get(key);
        if image.is_some() {
            trace!(key = %key, "Image cache hit");
        } else {
            trace!(key = %key, "Image cache miss");
        }
        image
    }

    /// Stores `image` under `key`, replacing any previous entry.
    pub fn set_image(&self, image: SharedImage, key: ImageKey) {
        debug!(key = %key, "Storing image in cache");
        self.storage.set(key, image);
    }

    /// Removes the entry for `key`, if present.
    pub fn remove_object(&self, key: &ImageKey) {
        debug!(key = %key, "Removing image from cache");
        self.storage.remove(key);
    }

    /// Removes every cached image.
    pub fn remove_all(&self) {
        self.storage.remove_all();
        info!("Cleared image cache");
    }
}

impl std::fmt::Debug for ImageCacheManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCacheManager").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockImageStorage;
    use crate::infrastructure::storage::HashImageStorage;
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn image(width: u32) -> SharedImage {
        Arc::new(image::DynamicImage::new_rgb8(width, 1))
    }

    fn manager() -> ImageCacheManager {
        ImageCacheManager::new(Box::new(HashImageStorage::new()))
    }

    #[test]
    fn test_get_delegates_to_storage() {
        let key = ImageKey::from("http://x/a.png");
        let stored = image(3);
        let returned = stored.clone();

        let mut storage = MockImageStorage::new();
        storage
            .expect_get()
            .with(eq(key.clone()))
            .times(1)
            .return_once(move |_| Some(returned));

        let manager = ImageCacheManager::new(Box::new(storage));
        let result = manager.get_image(&key).unwrap();
        assert!(Arc::ptr_eq(&result, &stored));
    }

    #[test]
    fn test_set_remove_and_clear_delegate_to_storage() {
        let key = ImageKey::from("http://x/a.png");

        let mut storage = MockImageStorage::new();
        storage
            .expect_set()
            .withf(|k, img| k.as_str() == "http://x/a.png" && img.width() == 5)
            .times(1)
            .return_const(());
        storage
            .expect_remove()
            .with(eq(key.clone()))
            .times(1)
            .return_const(());
        storage.expect_remove_all().times(1).return_const(());

        let manager = ImageCacheManager::new(Box::new(storage));
        manager.set_image(image(5), key.clone());
        manager.remove_object(&key);
        manager.remove_all();
    }

    #[test]
    fn test_set_then_get_returns_same_image() {
        let manager = manager();
        let key = ImageKey::from("http://x/a.png");
        let img = image(7);

        manager.set_image(img.clone(), key.clone());

        let cached = manager.get_image(&key).unwrap();
        assert!(Arc::ptr_eq(&cached, &img));
    }

    #[test]
    fn test_repeated_set_overwrites() {
        let manager = manager();
        let key = ImageKey::from("http://x/a.png");
        let second = image(2);

        manager.set_image(image(1), key.clone());
        manager.set_image(second.clone(), key.clone());

        assert!(Arc::ptr_eq(&manager.get_image(&key).unwrap(), &second));
    }

    #[test]
    fn test_remove_object_is_idempotent() {
        let manager = manager();
        let present = ImageKey::from("http://x/a.png");
        let absent = ImageKey::from("http://x/never.png");
        manager.set_image(image(1), present.clone());

        manager.remove_object(&present);
        manager.remove_object(&present);
        manager.remove_object(&absent);

        assert!(manager.get_image(&present).is_none());
        assert!(manager.get_image(&absent).is_none());
    }

    #[test]
    fn test_remove_all_clears_every_key() {
        let manager = manager();
        let keys: Vec<ImageKey> = ["http://x/a.png", "http://x/b.png", "http://y/c.png"]
            .into_iter()
            .map(ImageKey::from)
            .collect();
        for key in &keys {
            manager.set_image(image(1), key.clone());
        }

        manager.remove_all();

        for key in &keys {
            assert!(manager.get_image(key).is_none());
        }
    }
}
