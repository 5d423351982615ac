pub mod cache_manager;
pub mod image_loader;

pub use cache_manager::ImageCacheManager;
pub use image_loader::{CompletionHandler, ImageLoader, ImageLoaderConfig};
