//! Exchange-rate providers

use crate::types::{FetchCompletion, FetchRequest, Quote, RatesResponse};
use std::future::Future;
use thiserror::Error;
use tracing::{debug, warn};

/// Every way a rate lookup can fail. The UI shows all of them the same way;
/// the variants only matter for the log.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("provider reported an error: {0}")]
    Provider(String),

    #[error("no {target} rate in response for base {base}")]
    MissingRate { base: String, target: String },
}

/// A service that quotes the rate from one currency to another.
pub trait RateProvider {
    fn fetch_quote(
        &self,
        base: &str,
        target: &str,
    ) -> impl Future<Output = Result<Quote, RateError>> + Send;
}

/// open.er-api.com: `GET {base_url}/{base}` returns every rate relative to `base`.
pub struct ErApi {
    client: reqwest::Client,
    base_url: String,
}

impl ErApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, base: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), base)
    }
}

impl RateProvider for ErApi {
    async fn fetch_quote(&self, base: &str, target: &str) -> Result<Quote, RateError> {
        let url = self.endpoint(base);
        debug!(url = %url, "Requesting rates");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Status(status));
        }

        let body = response.bytes().await?;
        let parsed: RatesResponse = serde_json::from_slice(&body)?;
        quote_from_response(parsed, base, target)
    }
}

/// Pick the `target` rate out of a decoded response.
pub fn quote_from_response(
    response: RatesResponse,
    base: &str,
    target: &str,
) -> Result<Quote, RateError> {
    if response.result.as_deref() == Some("error") {
        return Err(RateError::Provider(
            response.error_type.unwrap_or_else(|| "unknown".to_string()),
        ));
    }

    let missing = || RateError::MissingRate {
        base: base.to_string(),
        target: target.to_string(),
    };

    let rate = response
        .rates
        .as_ref()
        .and_then(|rates| rates.get(target))
        .copied()
        .ok_or_else(missing)?;

    Ok(Quote {
        rate,
        updated_unix: response.time_last_update_unix,
    })
}

/// Run one request to completion. Never fails: errors are logged and come
/// back as a completion without a quote.
pub async fn run_fetch<P: RateProvider>(provider: &P, request: FetchRequest) -> FetchCompletion {
    let mut rate_missing = false;
    let quote = match provider.fetch_quote(&request.source, &request.target).await {
        Ok(quote) => {
            debug!(
                seq = request.seq,
                source = %request.source,
                target = %request.target,
                rate = quote.rate,
                "Rate received"
            );
            Some(quote)
        }
        Err(e) => {
            warn!(
                seq = request.seq,
                source = %request.source,
                target = %request.target,
                error = %e,
                "Rate fetch failed"
            );
            rate_missing = matches!(e, RateError::MissingRate { .. });
            None
        }
    };

    FetchCompletion {
        request,
        quote,
        rate_missing,
    }
}
