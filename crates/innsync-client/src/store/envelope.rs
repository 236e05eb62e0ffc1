//! Cache envelope codec at the storage boundary.
//!
//! Envelopes are persisted as JSON under one key per hotel. Validation
//! happens on read: a value that fails to parse is a [`StoreError::Malformed`]
//! rather than an empty booking list.

use innsync_core::booking::CacheEnvelope;

use super::{KeyValueStore, StoreError};

/// Store key for a hotel's booking envelope.
pub fn bookings_key(hotel_id: &str) -> String {
    format!("@hotel_bookings_{hotel_id}")
}

/// Load and validate the envelope for a hotel, if one is stored.
pub async fn load_envelope<S: KeyValueStore>(
    store: &S,
    hotel_id: &str,
) -> Result<Option<CacheEnvelope>, StoreError> {
    match store.get(&bookings_key(hotel_id)).await? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Malformed(format!("envelope for {hotel_id}: {e}"))),
    }
}

/// Persist the envelope for a hotel, replacing any previous one wholesale.
pub async fn store_envelope<S: KeyValueStore>(
    store: &S,
    hotel_id: &str,
    envelope: &CacheEnvelope,
) -> Result<(), StoreError> {
    let raw =
        serde_json::to_string(envelope).map_err(|e| StoreError::Write(e.to_string()))?;
    store.set(&bookings_key(hotel_id), &raw).await
}
