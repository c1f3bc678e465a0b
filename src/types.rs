//! Common types and data structures

use std::collections::HashMap;

/// Body returned by the rate-quotation endpoint
#[derive(Debug, serde::Deserialize)]
pub struct RatesResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(rename = "error-type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub time_last_update_unix: Option<i64>,
    #[serde(default)]
    pub rates: Option<HashMap<String, f64>>,
}

/// Snapshot of the inputs a fetch was issued with
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub seq: u64,
    pub source: String,
    pub target: String,
    pub amount: String,
}

/// A rate quote for one currency pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub rate: f64,
    /// Provider's last update time, seconds since the epoch
    pub updated_unix: Option<i64>,
}

/// Sent from a fetch task back to the UI thread, exactly once per request
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCompletion {
    pub request: FetchRequest,
    pub quote: Option<Quote>,
    /// The provider answered but had no rate for the target code
    pub rate_missing: bool,
}
