//! Remote booking API access.
//!
//! [`BookingApiClient`] is the reqwest-backed implementation; the
//! [`BookingSource`] and [`StatusSource`] traits are the seams the cache
//! reconciler and poller consume, so tests can substitute scripted fakes.

mod client;
mod types;


pub use client::{ApiError, BookingApiClient};
pub use types::{BookingPage, BookingStatusResponse};

use innsync_core::FilterOptions;
use innsync_core::booking::BookingStatus;

/// The remote source of truth for a hotel's booking list.
pub trait BookingSource {
    /// Fetch the filtered, sorted, paginated booking list for a hotel.
    fn list_hotel_bookings(
        &self,
        hotel_id: &str,
        filters: &FilterOptions,
        token: Option<&str>,
    ) -> impl Future<Output = Result<BookingPage, ApiError>>;
}

/// The remote source of a single booking's lifecycle status.
pub trait StatusSource {
    fn booking_status(
        &self,
        booking_id: &str,
        token: Option<&str>,
    ) -> impl Future<Output = Result<BookingStatus, ApiError>>;
}
