use std::fmt;

/// What the caller asked weather for: a place name or a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl WeatherQuery {
    pub fn city(name: impl Into<String>) -> Self {
        WeatherQuery::City(name.into())
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        WeatherQuery::Coordinates { latitude, longitude }
    }
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherQuery::City(name) => f.write_str(name),
            WeatherQuery::Coordinates { latitude, longitude } => {
                write!(f, "{latitude},{longitude}")
            }
        }
    }
}

/// Decide whether `input` is a `lat,lon` pair or a free-text place name.
///
/// Empty segments between commas are skipped, so `"1,,2"` still counts as two
/// parts. Anything that is not exactly two finite numbers is returned as a
/// city name, untouched. Coordinates are not range-checked.
pub fn classify(input: &str) -> WeatherQuery {
    let parts: Vec<&str> = input.split(',').filter(|p| !p.is_empty()).collect();

    match parts.as_slice() {
        [lat, lon] => match (parse_finite(lat), parse_finite(lon)) {
            (Some(latitude), Some(longitude)) => WeatherQuery::Coordinates { latitude, longitude },
            _ => WeatherQuery::City(input.to_string()),
        },
        _ => WeatherQuery::City(input.to_string()),
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
