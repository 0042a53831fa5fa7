use reqwest::{Client, StatusCode};

use crate::{error::WeatherError, model::WeatherRecord, query::{BASE_URL, CityQuery}};

/// Transport adapter for the current-weather endpoint.
///
/// Issues exactly one GET per [`fetch`](WeatherClient::fetch) call and
/// classifies every failure into the closed [`WeatherError`] set; nothing is
/// retried here. The base URL is held per-instance so tests can point it at
/// a local mock server.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch and decode the current weather for `query`.
    pub async fn fetch(
        &self,
        query: &CityQuery,
        api_key: &str,
    ) -> Result<WeatherRecord, WeatherError> {
        let url = query.to_url_with_base(&self.base_url, api_key)?;

        tracing::debug!(city = %query.city(), units = query.units().as_str(), "requesting weather");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        let status = res.status();
        match status {
            StatusCode::UNAUTHORIZED => return Err(WeatherError::Unauthorized),
            StatusCode::NOT_FOUND => return Err(WeatherError::NotFound),
            s if !s.is_success() => {
                return Err(WeatherError::Network(format!(
                    "Weather request failed with status {s}"
                )));
            }
            _ => {}
        }

        let body = res
            .bytes()
            .await
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        tracing::debug!(status = %status, bytes = body.len(), "response received");

        WeatherRecord::decode(&body)
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}
