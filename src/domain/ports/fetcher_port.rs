//! Port definition for retrieving raw image bytes.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::entities::Location;
use crate::domain::errors::FetchError;

/// Port for fetching the raw bytes behind a [`Location`].
///
/// Transport, headers, timeouts and retries are the implementation's concern.
#[async_trait]
pub trait FetcherPort: Send + Sync {
    /// Requests the resource at `location`.
    async fn request(&self, location: &Location) -> Result<Bytes, FetchError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock fetcher serving canned responses keyed by absolute URL.
    /// Unknown URLs yield HTTP 404.
    pub struct MockFetcher {
        responses: Mutex<HashMap<String, Result<Bytes, FetchError>>>,
        requests: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl MockFetcher {
        /// Creates mock with no responses.
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(HashMap::new()),
                requests: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }

        /// Serves `body` for `url`.
        pub fn with_body(self, url: &str, body: &'static [u8]) -> Self {
            self.responses
                .lock()
                .insert(url.to_string(), Ok(Bytes::from_static(body)));
            self
        }

        /// Fails every request for `url` with `error`.
        pub fn with_error(self, url: &str, error: FetchError) -> Self {
            self.responses.lock().insert(url.to_string(), Err(error));
            self
        }

        /// Total number of requests made.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// URLs requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().clone()
        }
    }

    impl Default for MockFetcher {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl FetcherPort for MockFetcher {
        async fn request(&self, location: &Location) -> Result<Bytes, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().push(location.to_string());
            self.responses
                .lock()
                .get(location.as_str())
                .cloned()
                .unwrap_or_else(|| Err(FetchError::status(404, "Not Found")))
        }
    }
}
