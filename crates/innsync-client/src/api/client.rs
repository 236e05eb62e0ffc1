//! Booking platform REST API client.
//!
//! Uses reqwest to call the hotel booking endpoints. Non-2xx responses are
//! surfaced as [`ApiError::Api`]; transport and body-decode failures as
//! [`ApiError::Http`].

use thiserror::Error;

use innsync_core::FilterOptions;
use innsync_core::booking::BookingStatus;
use innsync_core::config::ApiConfig;

use super::types::{BookingPage, BookingStatusResponse};
use super::{BookingSource, StatusSource};

/// Booking API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Booking API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Booking platform REST API client.
#[derive(Debug, Clone)]
pub struct BookingApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookingApiClient {
    /// Create a new booking API client.
    ///
    /// The bearer token is passed per request rather than baked into the
    /// client; unauthenticated calls are legal and the server decides.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.is_empty() {
            return Err(ApiError::Config("base_url is empty".into()));
        }

        // Ensure a TLS crypto provider is installed (reqwest uses rustls-no-provider).
        // The `Err` case just means it was already installed and is safe to ignore.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Build the API v1 URL for a given path.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    /// Check HTTP response status, returning error for non-success codes.
    fn check_status(resp: &reqwest::Response) -> Result<(), ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").into(),
            });
        }
        Ok(())
    }

    fn authorized(
        &self,
        url: &str,
        query: &[(&'static str, String)],
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let mut req = self.http.get(url).query(query);
        if let Some(t) = token {
            req = req.bearer_auth(t);
        }
        req
    }

    /// Fetch the current lifecycle status of one booking, with the full
    /// response body (the poller only needs the status field; screens also
    /// read the payment state).
    pub async fn booking_status_detail(
        &self,
        booking_id: &str,
        token: Option<&str>,
    ) -> Result<BookingStatusResponse, ApiError> {
        let url = self.api_url(&format!("/bookings/{booking_id}/status"));
        let resp = self.authorized(&url, &[], token).send().await?;
        Self::check_status(&resp)?;
        Ok(resp.json().await?)
    }
}

impl BookingSource for BookingApiClient {
    async fn list_hotel_bookings(
        &self,
        hotel_id: &str,
        filters: &FilterOptions,
        token: Option<&str>,
    ) -> Result<BookingPage, ApiError> {
        let url = self.api_url(&format!("/hotels/{hotel_id}/bookings/filter"));
        let resp = self
            .authorized(&url, &filters.query_pairs(), token)
            .send()
            .await?;
        Self::check_status(&resp)?;
        Ok(resp.json().await?)
    }
}

impl StatusSource for BookingApiClient {
    async fn booking_status(
        &self,
        booking_id: &str,
        token: Option<&str>,
    ) -> Result<BookingStatus, ApiError> {
        Ok(self.booking_status_detail(booking_id, token).await?.status)
    }
}
