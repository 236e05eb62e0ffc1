//! `innsync` Core Library
//!
//! Shared functionality for innsync components:
//! - Booking domain model and wire types
//! - Cache policy: retention pruning and shallow change detection
//! - Check-in/check-out schedule adjustment
//! - Configuration resolution and common error types

pub mod booking;
pub mod config;
pub mod error;
pub mod filters;
pub mod reconcile;
pub mod schedule;
pub mod tracing_init;

pub use booking::{Booking, BookingStatus, CacheEnvelope, RoomStatus};
pub use config::Config;
pub use error::{Error, Result};
pub use filters::FilterOptions;
