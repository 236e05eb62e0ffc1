//! Read-through booking cache with staleness reconciliation.

mod reconciler;


pub use reconciler::{BookingCache, CacheError, CachedBookings};
