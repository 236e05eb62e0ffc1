//! The booking cache reconciler.
//!
//! A read-through cache over the remote booking source: the network is
//! always consulted, and the persisted snapshot serves as the diff baseline
//! that decides whether consumers see new data. Freshness is eventual,
//! never assumed.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use innsync_core::FilterOptions;
use innsync_core::booking::{Booking, CacheEnvelope};
use innsync_core::config::CacheConfig;
use innsync_core::reconcile::{bookings_changed, prune_bookings};

use crate::api::{ApiError, BookingSource};
use crate::store::{KeyValueStore, load_envelope, store_envelope};

/// Reconciler errors surfaced to callers.
///
/// Only the remote fetch can fail the overall call. Storage trouble is
/// downgraded: unreadable or malformed snapshots read as "no cache", and a
/// failed persist still returns the network data.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("booking fetch failed: {0}")]
    Fetch(#[from] ApiError),
}

/// Result of a reconciled read: the selected list plus where it came from.
///
/// `is_from_cache` is a staleness indicator for the caller's UI, not a
/// consistency claim; when `true` the remote data matched the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedBookings {
    pub data: Vec<Booking>,
    pub is_from_cache: bool,
}

/// Per-hotel booking cache backed by a device key-value store.
///
/// Overlapping calls for the same hotel are not serialized; the envelope is
/// replaced wholesale and the last write wins, which is acceptable for a
/// display cache.
pub struct BookingCache<S> {
    store: S,
    retention_days: i64,
}

impl<S: KeyValueStore> BookingCache<S> {
    pub fn new(store: S, config: &CacheConfig) -> Self {
        Self {
            store,
            retention_days: config.retention_days,
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the filtered booking list for a hotel, reconciling it against
    /// the on-device snapshot.
    ///
    /// The snapshot is read and pruned first (with an immediate write-back
    /// when pruning removed anything), then the remote source is always
    /// queried. A fresh list that differs from the snapshot is pruned and
    /// persisted; an unchanged one leaves the envelope untouched and the
    /// result is marked as served from cache.
    pub async fn get_filtered_hotel_bookings<B: BookingSource>(
        &self,
        source: &B,
        hotel_id: &str,
        filters: &FilterOptions,
        token: Option<&str>,
    ) -> Result<CachedBookings, CacheError> {
        let now = Utc::now();

        // Step 1: snapshot read + prune, write-back when pruning removed
        // records. Storage failures degrade to an empty baseline.
        let cached = match load_envelope(&self.store, hotel_id).await {
            Ok(Some(mut envelope)) => {
                let removed = prune_bookings(&mut envelope.bookings, now, self.retention_days);
                if removed > 0 {
                    debug!(hotel_id, removed, "Pruned stale bookings from snapshot");
                    self.persist(hotel_id, &envelope).await;
                }
                envelope.bookings
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(hotel_id, error = %e, "Snapshot unreadable, treating as empty");
                Vec::new()
            }
        };

        // Step 2: the remote read is never skipped. A fetch failure
        // propagates with the stored envelope left untouched.
        let page = source.list_hotel_bookings(hotel_id, filters, token).await?;
        let mut fresh = page.data;

        // Step 3: diff and persist on change only.
        if bookings_changed(&cached, &fresh) {
            prune_bookings(&mut fresh, now, self.retention_days);
            let envelope = CacheEnvelope {
                last_updated: now,
                bookings: fresh.clone(),
            };
            self.persist(hotel_id, &envelope).await;
            Ok(CachedBookings {
                data: fresh,
                is_from_cache: false,
            })
        } else {
            Ok(CachedBookings {
                data: cached,
                is_from_cache: true,
            })
        }
    }

    /// Persist an envelope; a write failure is logged and swallowed so the
    /// caller still gets the network result.
    async fn persist(&self, hotel_id: &str, envelope: &CacheEnvelope) {
        if let Err(e) = store_envelope(&self.store, hotel_id, envelope).await {
            warn!(hotel_id, error = %e, "Failed to persist booking snapshot");
        }
    }
}
