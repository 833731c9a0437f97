//! Glue between a location source, the reverse geocoder and the weather
//! provider. Each call takes one input and yields one report.

use thiserror::Error;

use crate::{
    FetchError, WeatherResult,
    geocode::{GeocodeError, ReverseGeocoder},
    provider::WeatherProvider,
};

/// A single "new location available" event.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationUpdate {
    Coordinates { latitude: f64, longitude: f64 },
    /// A place name the caller already resolved.
    Place(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// The city the weather was fetched for, as shown to the user.
    pub city: String,
    pub weather: WeatherResult,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to retrieve location: {0}")]
    Location(#[from] GeocodeError),

    #[error("No city found near {latitude}, {longitude}")]
    NoLocality { latitude: f64, longitude: f64 },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Debug)]
pub struct WeatherSession {
    provider: Box<dyn WeatherProvider>,
    geocoder: Box<dyn ReverseGeocoder>,
}

impl WeatherSession {
    pub fn new(provider: Box<dyn WeatherProvider>, geocoder: Box<dyn ReverseGeocoder>) -> Self {
        Self { provider, geocoder }
    }

    /// Resolve the update to a city name, then fetch weather for it.
    pub async fn on_location(&self, update: LocationUpdate) -> Result<WeatherReport, SessionError> {
        let city = match update {
            LocationUpdate::Place(name) => name,
            LocationUpdate::Coordinates { latitude, longitude } => self
                .geocoder
                .locality(latitude, longitude)
                .await?
                .ok_or(SessionError::NoLocality { latitude, longitude })?,
        };

        self.refresh(&city).await
    }

    /// Fetch weather for a user-entered string (city name or `lat,lon`).
    pub async fn refresh(&self, city: &str) -> Result<WeatherReport, SessionError> {
        let weather = self.provider.fetch_input(city).await?;
        Ok(WeatherReport { city: city.to_string(), weather })
    }
}
