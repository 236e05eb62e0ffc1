//! Booking API response types.
//!
//! Deserialization structs matching the booking platform's JSON responses.

use serde::Deserialize;

use innsync_core::booking::{Booking, BookingStatus};

/// One page of a filtered hotel booking list.
///
/// Pagination metadata is best-effort; older API versions omit it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPage {
    pub data: Vec<Booking>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Response of the booking status endpoint polled after checkout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusResponse {
    pub status: BookingStatus,
    #[serde(default)]
    pub payment_status: Option<String>,
}
