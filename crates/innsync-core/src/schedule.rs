//! Check-in/check-out instant adjustment.
//!
//! Hotels configure their check-in and check-out times as a minute-of-day
//! offset (0–1439). These helpers turn a user-selected calendar date into
//! the concrete instant submitted with a booking.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

const MINUTES_PER_DAY: u32 = 24 * 60;

fn at_minute(day: NaiveDate, minute_of_day: u32) -> DateTime<Utc> {
    let secs = minute_of_day.min(MINUTES_PER_DAY - 1) * 60;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or(NaiveTime::MIN);
    day.and_time(time).and_utc()
}

/// Compute the check-in instant for a selected date.
///
/// Future dates use the hotel's configured minute-of-day verbatim. When the
/// selected date is today and the configured time has already passed, the
/// booking takes effect immediately at `now`. Past dates fall through to the
/// configured instant unmodified; rejecting them is the caller's job.
pub fn adjusted_check_in(
    selected: NaiveDate,
    check_in_minute: u32,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    let configured = at_minute(selected, check_in_minute);
    if selected == now.date_naive() && now > configured {
        now
    } else {
        configured
    }
}

/// Compute the check-out instant for a selected date: the date's midnight
/// plus the hotel's configured minute-of-day. No today special-casing.
pub fn adjusted_check_out(selected: NaiveDate, check_out_minute: u32) -> DateTime<Utc> {
    at_minute(selected, check_out_minute)
}
