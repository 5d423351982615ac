//! Image decoding adapters.

mod decoder;

pub use decoder::ImageCrateDecoder;
