use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;
use weather_core::{
    Config, LocationUpdate, NominatimGeocoder, WeatherSession, provider::provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city or coordinates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show weather for a city name or a `lat,lon` pair.
    Show {
        /// City name, e.g. "New York", or coordinates, e.g. "40.7128,-74.0060".
        input: String,
    },

    /// Look up the city at a coordinate pair, then show its weather.
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { input } => {
                let session = session_from_config()?;
                let report = session.refresh(&input).await?;
                print!("{}", render::report(&report));
                Ok(())
            }
            Command::Locate { lat, lon } => {
                let session = session_from_config()?;
                let report = session
                    .on_location(LocationUpdate::Coordinates { latitude: lat, longitude: lon })
                    .await?;
                print!("{}", render::report(&report));
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_help_message("Get one at https://home.openweathermap.org/api_keys")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.require_api_key()?;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

fn session_from_config() -> anyhow::Result<WeatherSession> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let geocoder = match config.geocoder_url.as_deref() {
        Some(url) => NominatimGeocoder::with_base_url(url),
        None => NominatimGeocoder::new(),
    }
    .context("Failed to build geocoding client")?;

    Ok(WeatherSession::new(provider, Box::new(geocoder)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_takes_raw_input() {
        let cli = Cli::try_parse_from(["weather", "show", "40.7128,-74.0060"]).unwrap();
        assert!(matches!(cli.command, Command::Show { input } if input == "40.7128,-74.0060"));
    }

    #[test]
    fn locate_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["weather", "locate", "--lat", "40.7128", "--lon", "-74.006"])
            .unwrap();
        match cli.command {
            Command::Locate { lat, lon } => {
                assert_eq!(lat, 40.7128);
                assert_eq!(lon, -74.006);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn locate_requires_both_coordinates() {
        assert!(Cli::try_parse_from(["weather", "locate", "--lat", "1.0"]).is_err());
    }
}
