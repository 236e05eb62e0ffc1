//! Device key-value storage.
//!
//! The cache reconciler only needs string get/set/remove; [`KeyValueStore`]
//! is that seam. [`SqliteStore`] is the durable on-device implementation,
//! [`MemoryStore`] the in-memory fake for tests. The envelope codec lives at
//! this boundary so malformed persisted JSON surfaces as a storage error
//! instead of silently reading as "no records".

mod db;
mod envelope;
mod memory;


pub use db::SqliteStore;
pub use envelope::{bookings_key, load_envelope, store_envelope};
pub use memory::MemoryStore;

use thiserror::Error;

/// Device store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Read error: {0}")]
    Read(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Malformed stored value: {0}")]
    Malformed(String),
}

/// Persistent, asynchronous string-keyed storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>>;
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>>;
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>>;
}
