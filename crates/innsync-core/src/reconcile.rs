//! Cache reconciliation policy: retention pruning and change detection.
//!
//! Both functions are pure; the caller supplies the reference instant so the
//! policy stays deterministic under test.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::booking::Booking;

/// Default retention window for cached bookings, keyed on check-in.
pub const DEFAULT_RETENTION_DAYS: i64 = 7;

/// Drop bookings whose `check_in` is older than `now - retention_days`.
///
/// Retention is keyed on `check_in` alone: a still-active long stay whose
/// check-in passed the window is dropped even though its check-out is in the
/// future. That matches the upstream "recent bookings only" display policy.
/// Returns the number of records removed. Idempotent for a fixed `now`.
pub fn prune_bookings(
    bookings: &mut Vec<Booking>,
    now: DateTime<Utc>,
    retention_days: i64,
) -> usize {
    let cutoff = now - Duration::days(retention_days);
    let before = bookings.len();
    bookings.retain(|b| b.check_in >= cutoff);
    before - bookings.len()
}

/// Shallow change detection between a cached list and a freshly fetched one.
///
/// Two lists differ when their lengths differ, or when any record in `new`
/// has an `id` unknown to `old`, or maps to an `old` record with a different
/// `status`, `check_in`, `check_out` or `guests` value. Payment, customer,
/// room and unknown sub-fields are deliberately not compared, so a change
/// confined to those never triggers a cache write or re-render.
pub fn bookings_changed(old: &[Booking], new: &[Booking]) -> bool {
    if old.len() != new.len() {
        return true;
    }

    let by_id: HashMap<&str, &Booking> = old.iter().map(|b| (b.id.as_str(), b)).collect();
    new.iter().any(|fresh| {
        by_id.get(fresh.id.as_str()).is_none_or(|prev| {
            prev.status != fresh.status
                || prev.check_in != fresh.check_in
                || prev.check_out != fresh.check_out
                || prev.guests != fresh.guests
        })
    })
}
