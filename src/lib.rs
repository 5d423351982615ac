//! Image provider - keyed image loading through an in-memory cache with a
//! network fallback.
//!
//! Layout follows a ports-and-adapters split: the domain layer defines the
//! storage, fetcher and decoder ports; the application layer holds the cache
//! manager and loader; the infrastructure layer supplies the default adapters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the cache manager and loader.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external collaborators.
pub mod infrastructure;
/// Composition root.
pub mod provider;

pub use provider::ImageProvider;

/// Current version of the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
