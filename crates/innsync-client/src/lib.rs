//! innsync Client Library
//!
//! The I/O layer of the innsync booking platform client:
//! - HTTP client for the remote booking API
//! - SQLite-backed device key-value store (plus an in-memory fake)
//! - Booking cache reconciler: read-through caching with retention pruning
//!   and shallow change detection
//! - Bounded booking-status poller

pub mod api;
pub mod cache;
pub mod poller;
pub mod store;

pub use api::{ApiError, BookingApiClient, BookingSource, StatusSource};
pub use cache::{BookingCache, CacheError, CachedBookings};
pub use poller::{PollOutcome, poll_booking_status};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};
