//! Composition root wiring storage, fetcher and decoder into a loader.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::application::{CompletionHandler, ImageCacheManager, ImageLoader, ImageLoaderConfig};
use crate::domain::entities::Location;
use crate::domain::errors::{FetchError, LoadResult};
use crate::domain::ports::{FetcherPort, ImageDecoderPort, ImageStorage};
use crate::infrastructure::{AppConfig, HashImageStorage, HttpFetcher, ImageCrateDecoder};

/// One cache manager and the loader that populates it.
///
/// Construct one per application context and pass it (or clones of the
/// loader) to whoever needs images. Dropping the last reference drops the cache.
#[derive(Debug, Clone)]
pub struct ImageProvider {
    loader: ImageLoader,
}

impl ImageProvider {
    /// Creates a provider over the default unbounded storage.
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn FetcherPort>,
        decoder: Arc<dyn ImageDecoderPort>,
        config: ImageLoaderConfig,
    ) -> Self {
        Self::with_storage(Box::new(HashImageStorage::new()), fetcher, decoder, config)
    }

    /// Creates a provider over a custom storage backend.
    #[must_use]
    pub fn with_storage(
        storage: Box<dyn ImageStorage>,
        fetcher: Arc<dyn FetcherPort>,
        decoder: Arc<dyn ImageDecoderPort>,
        config: ImageLoaderConfig,
    ) -> Self {
        let manager = Arc::new(ImageCacheManager::new(storage));
        Self {
            loader: ImageLoader::with_config(manager, fetcher, decoder, config),
        }
    }

    /// Creates a provider using the HTTP fetcher and `image` decoder.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let fetcher = Arc::new(HttpFetcher::with_config(&config.fetcher)?);
        Ok(Self::new(
            fetcher,
            Arc::new(ImageCrateDecoder),
            config.loader.into(),
        ))
    }

    /// Returns the cache manager.
    #[must_use]
    pub const fn cache(&self) -> &Arc<ImageCacheManager> {
        self.loader.manager()
    }

    /// Returns the loader.
    #[must_use]
    pub const fn loader(&self) -> &ImageLoader {
        &self.loader
    }

    /// See [`ImageLoader::load`].
    pub fn load(
        &self,
        location: &Location,
        on_complete: Option<CompletionHandler>,
    ) -> Option<JoinHandle<()>> {
        self.loader.load(location, on_complete)
    }

    /// See [`ImageLoader::resolve`].
    pub async fn resolve(&self, location: &Location) -> Option<LoadResult> {
        self.loader.resolve(location).await
    }
}
