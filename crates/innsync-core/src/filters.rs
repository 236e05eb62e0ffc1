//! Booking list filter options and their query-string encoding.

use chrono::NaiveDate;

use crate::booking::{BookingStatus, RoomStatus};

/// Date-range presets understood by the booking filter endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    Custom,
}

impl TimeRange {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::ThisWeek => "thisWeek",
            Self::ThisMonth => "thisMonth",
            Self::Custom => "custom",
        }
    }
}

/// Sort key for booking lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    CheckIn,
    CheckOut,
    BookingTime,
}

impl SortBy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CheckIn => "checkIn",
            Self::CheckOut => "checkOut",
            Self::BookingTime => "bookingTime",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filter options for a hotel booking list request.
///
/// Every field is optional; absent fields are omitted from the outbound
/// request entirely rather than sent as empty or null values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub status: Option<BookingStatus>,
    pub time_range: Option<TimeRange>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub room_status: Option<RoomStatus>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl FilterOptions {
    /// Encode the set options as query-string pairs.
    ///
    /// Dates are encoded `yyyy-MM-dd`; enums as their literal wire strings.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(range) = self.time_range {
            pairs.push(("timeRange", range.as_str().to_string()));
        }
        if let Some(date) = self.start_date {
            pairs.push(("startDate", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.end_date {
            pairs.push(("endDate", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(room) = self.room_status {
            pairs.push(("roomStatus", room.as_str().to_string()));
        }
        if let Some(sort) = self.sort_by {
            pairs.push(("sortBy", sort.as_str().to_string()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}
