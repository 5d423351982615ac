//! Decoder backed by the `image` crate.

use std::sync::Arc;

use tracing::trace;

use crate::domain::entities::SharedImage;
use crate::domain::ports::ImageDecoderPort;

/// Decodes PNG, JPEG and WebP payloads, sniffing the format from the bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateDecoder;

impl ImageDecoderPort for ImageCrateDecoder {
    fn decode(&self, bytes: &[u8]) -> Option<SharedImage> {
        match image::load_from_memory(bytes) {
            Ok(img) => Some(Arc::new(img)),
            Err(e) => {
                trace!(error = %e, byte_len = bytes.len(), "Bytes are not a decodable image");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_decodes_png() -> Result<(), Box<dyn std::error::Error>> {
        let mut png = Vec::new();
        image::DynamicImage::new_rgb8(4, 3)
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;

        let decoded = ImageCrateDecoder.decode(&png).ok_or("png did not decode")?;

        assert_eq!((decoded.width(), decoded.height()), (4, 3));
        Ok(())
    }

    #[test]
    fn test_garbage_yields_none() {
        assert!(ImageCrateDecoder.decode(b"definitely not an image").is_none());
        assert!(ImageCrateDecoder.decode(&[]).is_none());
    }
}
