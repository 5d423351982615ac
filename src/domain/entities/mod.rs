//! Domain entity definitions.

mod image;

pub use image::{DecodeFailurePolicy, ImageKey, Location, SharedImage};
