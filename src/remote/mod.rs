//! Typed access to the REST backend.
//!
//! The API traits are the seam between the sync engines and the network:
//! production code talks through [`client::HttpClient`], tests substitute
//! canned implementations.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

pub mod client;
pub mod connectivity;
pub mod dto;

pub use client::HttpClient;
pub use connectivity::{Connectivity, TcpProbe};

use dto::{AddonDto, AddonGroupDto, CategoryDto, OrdersData, ProductDto};

/// Envelope wrapping every backend response. Application-level success is
/// `status == 200` with a non-null `data`, independent of the HTTP status.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Errors raised while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a decodable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx HTTP status.
    #[error("http status {status}")]
    Http { status: u16 },
}

/// Paging and filter parameters for the orders endpoint.
#[derive(Debug, Clone)]
pub struct OrdersQuery {
    pub limit: u32,
    pub page: u32,
    pub status: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl OrdersQuery {
    /// First page with the given cap, no status or date filter.
    pub fn first_page(limit: u32) -> Self {
        Self {
            limit,
            page: 1,
            status: None,
            start_date: None,
            end_date: None,
        }
    }
}

/// Catalog endpoints.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn get_categories(&self) -> Result<ApiEnvelope<Vec<CategoryDto>>, ApiError>;
    async fn get_products(
        &self,
        category_id: Option<&str>,
    ) -> Result<ApiEnvelope<Vec<ProductDto>>, ApiError>;
    async fn get_addon_groups(&self) -> Result<ApiEnvelope<Vec<AddonGroupDto>>, ApiError>;
    async fn get_addons(&self) -> Result<ApiEnvelope<Vec<AddonDto>>, ApiError>;
}

/// Orders endpoints.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn get_orders(&self, query: OrdersQuery) -> Result<ApiEnvelope<OrdersData>, ApiError>;
}

/// Accepted backend timestamp renderings, tried in order.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a backend timestamp leniently.
///
/// Falls back to the current time when no format matches, so one malformed
/// record can never abort a whole sync.
pub fn parse_remote_timestamp(value: &str) -> NaiveDateTime {
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return parsed.naive_utc();
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return parsed;
        }
    }
    Utc::now().naive_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offset_timestamps() {
        let parsed = parse_remote_timestamp("2026-03-01T10:30:00+07:00");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(3, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn parses_zulu_timestamps() {
        let parsed = parse_remote_timestamp("2026-03-01T10:30:00Z");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn parses_bare_timestamps() {
        let parsed = parse_remote_timestamp("2026-03-01T10:30:00");
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn malformed_timestamp_falls_back_to_now() {
        let before = Utc::now().naive_utc();
        let parsed = parse_remote_timestamp("not-a-date");
        let after = Utc::now().naive_utc();
        assert!(parsed >= before && parsed <= after);
    }
}
