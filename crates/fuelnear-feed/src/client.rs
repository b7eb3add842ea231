//! HTTP client for the Spanish fuel-price REST service.
//!
//! Wraps `reqwest` with feed-specific envelope validation. The service
//! replies with an object envelope whose `ListaEESSPrecio` member holds the
//! station records; every record is a mapping of Spanish field names to
//! string values, coordinates in comma-decimal notation.

use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Url};

use fuelnear_core::{AppConfig, RawStationRecord};

use crate::error::FeedError;
use crate::types::StationBatch;

/// Path of the nationwide station listing, relative to the base URL.
const STATIONS_ENDPOINT: &str = "EstacionesTerrestres/";

/// Client for the fuel-price REST service.
///
/// Use [`CarburantesClient::new`] for production or
/// [`CarburantesClient::with_base_url`] to point at a mock server in tests.
pub struct CarburantesClient {
    client: Client,
    base_url: Url,
}

impl CarburantesClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FeedError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, FeedError> {
        Self::with_base_url(
            &config.feed_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FeedError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so join() appends the
        // endpoint instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| FeedError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches the current nationwide station listing.
    ///
    /// Entries of `ListaEESSPrecio` that are not JSON objects are skipped
    /// with a debug log rather than failing the batch; record-level
    /// validation belongs to normalization, not the transport.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] on network failure or a non-2xx status.
    /// - [`FeedError::Deserialize`] if the body is not valid JSON.
    /// - [`FeedError::Api`] if the envelope reports a non-OK
    ///   `ResultadoConsulta`.
    /// - [`FeedError::MalformedBatch`] if `ListaEESSPrecio` is absent or
    ///   not an array.
    pub async fn fetch_stations(&self) -> Result<StationBatch, FeedError> {
        let url = self.stations_url()?;
        let body = self.request_json(&url).await?;
        Self::check_result_status(&body)?;

        let Some(list) = body.get("ListaEESSPrecio") else {
            return Err(FeedError::MalformedBatch {
                reason: "missing ListaEESSPrecio".to_owned(),
            });
        };
        let Some(entries) = list.as_array() else {
            return Err(FeedError::MalformedBatch {
                reason: "ListaEESSPrecio is not an array".to_owned(),
            });
        };

        let records: Vec<RawStationRecord> = entries
            .iter()
            .filter_map(|entry| match entry {
                serde_json::Value::Object(fields) => Some(RawStationRecord::from(fields.clone())),
                _ => {
                    tracing::debug!("skipping non-object entry in ListaEESSPrecio");
                    None
                }
            })
            .collect();

        let published_at = body
            .get("Fecha")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);

        tracing::debug!(count = records.len(), "fetched station batch");

        Ok(StationBatch {
            fetched_at: Utc::now(),
            published_at,
            records,
        })
    }

    fn stations_url(&self) -> Result<Url, FeedError> {
        self.base_url
            .join(STATIONS_ENDPOINT)
            .map_err(|e| FeedError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, FeedError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FeedError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Checks the envelope's `ResultadoConsulta` member, when present.
    fn check_result_status(body: &serde_json::Value) -> Result<(), FeedError> {
        if let Some(status) = body
            .get("ResultadoConsulta")
            .and_then(serde_json::Value::as_str)
        {
            if status != "OK" {
                return Err(FeedError::Api(status.to_owned()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> CarburantesClient {
        CarburantesClient::with_base_url(base_url, 30, "fuelnear-tests/0.1")
            .expect("client construction should not fail")
    }

    #[test]
    fn stations_url_appends_the_endpoint() {
        let client = test_client("https://example.test/PreciosCarburantes");
        assert_eq!(
            client.stations_url().unwrap().as_str(),
            "https://example.test/PreciosCarburantes/EstacionesTerrestres/"
        );
    }

    #[test]
    fn stations_url_tolerates_trailing_slash() {
        let client = test_client("https://example.test/PreciosCarburantes/");
        assert_eq!(
            client.stations_url().unwrap().as_str(),
            "https://example.test/PreciosCarburantes/EstacionesTerrestres/"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = CarburantesClient::with_base_url("not a url", 30, "fuelnear-tests/0.1");
        assert!(matches!(result, Err(FeedError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn result_status_ok_passes() {
        let body = serde_json::json!({ "ResultadoConsulta": "OK" });
        assert!(CarburantesClient::check_result_status(&body).is_ok());
    }

    #[test]
    fn result_status_absent_passes() {
        let body = serde_json::json!({ "ListaEESSPrecio": [] });
        assert!(CarburantesClient::check_result_status(&body).is_ok());
    }

    #[test]
    fn result_status_error_is_surfaced() {
        let body = serde_json::json!({ "ResultadoConsulta": "ERROR P.1" });
        let err = CarburantesClient::check_result_status(&body).unwrap_err();
        assert!(matches!(err, FeedError::Api(ref s) if s == "ERROR P.1"));
    }
}
