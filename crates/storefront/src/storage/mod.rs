//! Durable key-value storage.
//!
//! The storefront keeps exactly one durable value today: the order history,
//! written in full under a fixed key on every change. Stores are synchronous;
//! a write has completed once the call returns.
//!
//! # Backends
//!
//! - [`FileStore`] - one file per key inside a data directory
//! - [`MemoryStore`] - process-local map, used by tests and throwaway runs

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("i/o error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Key contains characters that cannot be used as a storage name.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Value could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Store state was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A synchronous string key-value store.
///
/// Keys are short ASCII names (`[A-Za-z0-9_-]+`). Values are opaque text;
/// callers own the serialization format.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the key is invalid or the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the key is invalid or the backend fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the key is invalid or the backend fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reject keys that could escape the store's namespace.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
