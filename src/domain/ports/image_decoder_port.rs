//! Port definition for turning raw bytes into images.

use crate::domain::entities::SharedImage;

/// Port for decoding raw bytes.
///
/// Failure is "no image produced"; callers get no structured reason.
pub trait ImageDecoderPort: Send + Sync {
    /// Decodes `bytes`, returning `None` if they are not a valid image.
    fn decode(&self, bytes: &[u8]) -> Option<SharedImage>;
}
