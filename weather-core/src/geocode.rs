//! Reverse geocoding: turn a coordinate pair into the locality name that is
//! then used as a city query. Uses Nominatim (OpenStreetMap), no API key needed.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt::Debug;
use thiserror::Error;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";
const USER_AGENT: &str = concat!("weather-core/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("geocoding service returned status {0}")]
    Status(StatusCode),

    #[error("geocoding response could not be parsed: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync + Debug {
    /// Locality (city, town, ...) at the given point, or `None` if the
    /// service knows of none.
    async fn locality(&self, latitude: f64, longitude: f64)
    -> Result<Option<String>, GeocodeError>;
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
}

impl NominatimAddress {
    fn locality(self) -> Option<String> {
        self.city
            .or(self.town)
            .or(self.village)
            .or(self.municipality)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
    http: Client,
}

impl NominatimGeocoder {
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_base_url(NOMINATIM_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GeocodeError> {
        // Nominatim's usage policy rejects requests without a User-Agent.
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { base_url: base_url.into(), http })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn locality(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<String>, GeocodeError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
                ("zoom", "10".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::debug!(%status, "reverse geocode returned an error status");
            return Err(GeocodeError::Status(status));
        }

        let body = res.bytes().await?;
        let parsed: NominatimResponse = serde_json::from_slice(&body)?;

        let place = parsed.address.and_then(NominatimAddress::locality);
        match &place {
            Some(name) => tracing::info!(latitude, longitude, %name, "reverse geocoded"),
            None => tracing::debug!(latitude, longitude, "no locality at this point"),
        }

        Ok(place)
    }
}
