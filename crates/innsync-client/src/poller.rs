//! Bounded booking-status polling.
//!
//! After checkout the booking sits in `PENDING` until the payment provider
//! confirms or rejects it. The poller checks the status endpoint on a fixed
//! interval after an initial delay, up to an attempt cap, then gives up so
//! the screen can show a "still pending" message. No in-flight request is
//! aborted; the loop simply stops scheduling new attempts.

use std::time::Duration;

use tracing::{debug, warn};

use innsync_core::booking::BookingStatus;
use innsync_core::config::PollerConfig;

use crate::api::StatusSource;

/// Outcome of a polling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// A terminal status was observed.
    Settled(BookingStatus),
    /// The attempt cap was reached; `last_status` is the most recent
    /// non-terminal status seen, if any attempt succeeded at all.
    ExhaustedAttempts { last_status: Option<BookingStatus> },
}

/// Poll a booking's status until it settles or the attempt cap is hit.
///
/// Transient fetch failures count as attempts rather than aborting the run;
/// the cap bounds total work regardless of what the attempts return.
pub async fn poll_booking_status<S: StatusSource>(
    source: &S,
    booking_id: &str,
    token: Option<&str>,
    config: &PollerConfig,
) -> PollOutcome {
    tokio::time::sleep(Duration::from_secs(config.initial_delay_secs)).await;

    let mut last_status = None;
    for attempt in 1..=config.max_attempts {
        if attempt > 1 {
            tokio::time::sleep(Duration::from_secs(config.interval_secs)).await;
        }

        match source.booking_status(booking_id, token).await {
            Ok(status) if status.is_terminal() => {
                debug!(booking_id, %status, attempt, "Booking settled");
                return PollOutcome::Settled(status);
            }
            Ok(status) => {
                debug!(booking_id, %status, attempt, "Booking still pending");
                last_status = Some(status);
            }
            Err(e) => {
                warn!(booking_id, error = %e, attempt, "Status check failed");
            }
        }
    }

    PollOutcome::ExhaustedAttempts { last_status }
}
