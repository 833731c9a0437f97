use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config, FetchError, WeatherQuery, WeatherResult, provider::openweather::OpenWeatherProvider,
    query::classify,
};

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Perform one request for `query`. Completes exactly once; no retries.
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherResult, FetchError>;

    /// Classify a raw user string, then fetch it.
    async fn fetch_input(&self, input: &str) -> Result<WeatherResult, FetchError> {
        let query = classify(input);
        self.fetch(&query).await
    }
}

/// Build the OpenWeather provider from the stored configuration.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;

    let provider = match config.base_url.as_deref() {
        Some(base_url) => OpenWeatherProvider::with_base_url(api_key.to_owned(), base_url),
        None => OpenWeatherProvider::new(api_key.to_owned()),
    };

    Ok(Box::new(provider))
}
