//! Lookup-or-fetch image loading.
//!
//! A load first consults the cache manager. Hits complete synchronously in the
//! caller's context. Misses spawn one Tokio task that fetches, decodes on the
//! blocking pool, stores the image and then completes.
//!
//! Concurrent misses for the same key are not coalesced: each one fetches and
//! stores independently and the last write wins.

use std::sync::Arc;

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::domain::entities::{DecodeFailurePolicy, ImageKey, Location, SharedImage};
use crate::domain::errors::{LoadError, LoadResult};
use crate::domain::ports::{FetcherPort, ImageDecoderPort};

use super::cache_manager::ImageCacheManager;

/// Callback receiving the outcome of a single load.
pub type CompletionHandler = Box<dyn FnOnce(LoadResult) + Send + 'static>;

/// Configuration for the image loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageLoaderConfig {
    /// Handling of bytes that fail to decode.
    pub decode_failure_policy: DecodeFailurePolicy,
}

/// Orchestrates cache lookups and network fallback.
#[derive(Clone)]
pub struct ImageLoader {
    manager: Arc<ImageCacheManager>,
    fetcher: Arc<dyn FetcherPort>,
    decoder: Arc<dyn ImageDecoderPort>,
    config: ImageLoaderConfig,
}

impl std::fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLoader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ImageLoader {
    /// Creates a loader with the default configuration.
    #[must_use]
    pub fn new(
        manager: Arc<ImageCacheManager>,
        fetcher: Arc<dyn FetcherPort>,
        decoder: Arc<dyn ImageDecoderPort>,
    ) -> Self {
        Self::with_config(manager, fetcher, decoder, ImageLoaderConfig::default())
    }

    /// Creates a loader with the given configuration.
    #[must_use]
    pub fn with_config(
        manager: Arc<ImageCacheManager>,
        fetcher: Arc<dyn FetcherPort>,
        decoder: Arc<dyn ImageDecoderPort>,
        config: ImageLoaderConfig,
    ) -> Self {
        Self {
            manager,
            fetcher,
            decoder,
            config,
        }
    }

    /// Returns the cache manager this loader reads and populates.
    #[must_use]
    pub const fn manager(&self) -> &Arc<ImageCacheManager> {
        &self.manager
    }

    /// Loads the image at `location`.
    ///
    /// On a cache hit `on_complete` runs before this returns and `None` is
    /// returned. On a miss the fetch is spawned and its handle returned; the
    /// handler then runs on the spawned task.
    ///
    /// Decode failures are swallowed under [`DecodeFailurePolicy::Drop`]:
    /// the handler is never invoked for that load.
    ///
    /// A miss outside a Tokio runtime fetches nothing: the handler receives
    /// [`LoadError::NoRuntime`] before this returns `None`.
    pub fn load(
        &self,
        location: &Location,
        on_complete: Option<CompletionHandler>,
    ) -> Option<JoinHandle<()>> {
        let key = ImageKey::from(location);

        if let Some(image) = self.manager.get_image(&key) {
            if let Some(handler) = on_complete {
                handler(Ok(image));
            }
            return None;
        }

        let Ok(runtime) = Handle::try_current() else {
            error!(url = %location, "No Tokio runtime, cannot fetch image");
            if let Some(handler) = on_complete {
                handler(Err(LoadError::no_runtime(location.as_str())));
            }
            return None;
        };

        let task = FetchTask {
            manager: Arc::clone(&self.manager),
            fetcher: Arc::clone(&self.fetcher),
            decoder: Arc::clone(&self.decoder),
            policy: self.config.decode_failure_policy,
            location: location.clone(),
            key,
        };

        Some(runtime.spawn(task.run(on_complete)))
    }

    /// Loads the image at `location` and waits for the outcome.
    ///
    /// Returns `None` when no completion was delivered, which happens for
    /// swallowed decode failures.
    pub async fn resolve(&self, location: &Location) -> Option<LoadResult> {
        let (tx, rx) = oneshot::channel();
        let _handle = self.load(
            location,
            Some(Box::new(move |result: LoadResult| {
                let _ = tx.send(result);
            })),
        );
        rx.await.ok()
    }
}

/// State moved into the spawned task for a cache miss.
struct FetchTask {
    manager: Arc<ImageCacheManager>,
    fetcher: Arc<dyn FetcherPort>,
    decoder: Arc<dyn ImageDecoderPort>,
    policy: DecodeFailurePolicy,
    location: Location,
    key: ImageKey,
}

impl FetchTask {
    async fn run(self, on_complete: Option<CompletionHandler>) {
        debug!(url = %self.location, "Fetching image");

        let outcome = match self.fetcher.request(&self.location).await {
            Ok(bytes) => {
                let byte_len = bytes.len();
                let decoded = self.decode(bytes).await;
                match decoded {
                    Some(image) => {
                        self.manager.set_image(image.clone(), self.key);
                        Some(Ok(image))
                    }
                    None => match self.policy {
                        DecodeFailurePolicy::Drop => {
                            debug!(url = %self.location, byte_len, "Decode failed, completion dropped");
                            None
                        }
                        DecodeFailurePolicy::Surface => {
                            Some(Err(LoadError::decode(self.location.as_str(), byte_len)))
                        }
                    },
                }
            }
            Err(e) => {
                debug!(url = %self.location, error = %e, "Fetch failed");
                Some(Err(LoadError::Fetch(e)))
            }
        };

        if let (Some(result), Some(handler)) = (outcome, on_complete) {
            handler(result);
        }
    }

    async fn decode(&self, bytes: Bytes) -> Option<SharedImage> {
        let decoder = Arc::clone(&self.decoder);
        match tokio::task::spawn_blocking(move || decoder.decode(&bytes)).await {
            Ok(image) => image,
            Err(e) => {
                error!(url = %self.location, error = %e, "Decode task panicked");
                None
            }
        }
    }
}
