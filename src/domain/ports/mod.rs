mod fetcher_port;
mod image_decoder_port;
mod image_storage_port;

pub use fetcher_port::FetcherPort;
pub use image_decoder_port::ImageDecoderPort;
pub use image_storage_port::ImageStorage;

#[cfg(test)]
pub mod mocks {
    pub use super::fetcher_port::mock::MockFetcher;
    pub use super::image_decoder_port::mock::MockDecoder;
    pub use super::image_storage_port::MockImageStorage;
}
