//! Core library for the `weather` app.
//!
//! This crate defines:
//! - Input classification (city name vs. `lat,lon`)
//! - The OpenWeather fetcher and its error taxonomy
//! - Reverse geocoding and the session that ties location to weather
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod geocode;
pub mod model;
pub mod provider;
pub mod query;
pub mod session;

pub use config::Config;
pub use error::FetchError;
pub use geocode::{GeocodeError, NominatimGeocoder, ReverseGeocoder};
pub use model::{Condition, Readings, WeatherResult};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use query::{WeatherQuery, classify};
pub use session::{LocationUpdate, SessionError, WeatherReport, WeatherSession};
