//! Application layer with the cache manager and loader services.

/// Service implementations.
pub mod services;

pub use services::{CompletionHandler, ImageCacheManager, ImageLoader, ImageLoaderConfig};
