//! Image storage adapters.

mod hash_storage;

pub use hash_storage::HashImageStorage;
