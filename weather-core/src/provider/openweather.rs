use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{FetchError, WeatherQuery, WeatherResult};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Unit system sent with every request. Temperatures come back in Fahrenheit.
const UNITS: &str = "imperial";

/// Current-weather client for the OpenWeather 2.5 API.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the provider at a different endpoint (a proxy, or a mock server in tests).
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self { api_key, base_url: base_url.into(), http: Client::new() }
    }

    /// Build the request URL for `query`: `q` for a city, `lat`+`lon` for a
    /// coordinate pair, always followed by `appid` and `units`.
    pub fn request_url(&self, query: &WeatherQuery) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url).map_err(|_| FetchError::InvalidQuery)?;

        {
            let mut pairs = url.query_pairs_mut();
            match query {
                WeatherQuery::City(name) => {
                    pairs.append_pair("q", name);
                }
                WeatherQuery::Coordinates { latitude, longitude } => {
                    if !latitude.is_finite() || !longitude.is_finite() {
                        return Err(FetchError::InvalidQuery);
                    }
                    pairs
                        .append_pair("lat", &latitude.to_string())
                        .append_pair("lon", &longitude.to_string());
                }
            }
            pairs.append_pair("appid", &self.api_key).append_pair("units", UNITS);
        }

        Ok(url)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherResult, FetchError> {
        let url = self.request_url(query)?;

        tracing::debug!(%query, "requesting current weather from OpenWeather");

        let res = self.http.get(url).send().await.map_err(|e| {
            tracing::debug!(error = %e, "OpenWeather request failed");
            FetchError::TransportFailure(e)
        })?;

        let status = res.status();
        let body = res.bytes().await.map_err(FetchError::TransportFailure)?;

        if !status.is_success() || body.is_empty() {
            tracing::debug!(%status, len = body.len(), "OpenWeather returned an invalid response");
            return Err(FetchError::InvalidResponse { status });
        }

        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!(error = %e, "OpenWeather payload did not match the expected shape");
            FetchError::DecodingFailure(e)
        })
    }
}
