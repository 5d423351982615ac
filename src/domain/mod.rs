//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{DecodeFailurePolicy, ImageKey, Location, SharedImage};
pub use errors::{FetchError, LoadError, LoadResult};
pub use ports::{FetcherPort, ImageDecoderPort, ImageStorage};
