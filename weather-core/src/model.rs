use serde::{Deserialize, Serialize};

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Current conditions as returned by the OpenWeather `weather` endpoint
/// with `units=imperial`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub main: Readings,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    /// Degrees Fahrenheit.
    pub temp: f64,
    /// hPa.
    pub pressure: i32,
    /// Percent, 0..=100.
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: i32,
    pub description: String,
    pub icon: String,
}

impl WeatherResult {
    pub fn temperature(&self) -> f64 {
        self.main.temp
    }

    pub fn humidity(&self) -> u8 {
        self.main.humidity
    }

    pub fn pressure(&self) -> i32 {
        self.main.pressure
    }

    /// The first condition entry; the API lists the dominant one first.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

impl Condition {
    /// URL of the 2x PNG for this condition's icon.
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@2x.png", self.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"main":{"temp":75.0,"pressure":1012,"humidity":60},"weather":[{"id":800,"description":"Clear sky","icon":"01d"}]}"#;

    #[test]
    fn decodes_sample_payload() {
        let parsed: WeatherResult = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(parsed.temperature(), 75.0);
        assert_eq!(parsed.humidity(), 60);
        assert_eq!(parsed.pressure(), 1012);

        let cond = parsed.primary_condition().unwrap();
        assert_eq!(cond.id, 800);
        assert_eq!(cond.description, "Clear sky");
        assert_eq!(cond.icon, "01d");
    }

    #[test]
    fn ignores_fields_it_does_not_model() {
        let body = r#"{
            "coord": {"lon": -74.006, "lat": 40.7128},
            "name": "New York",
            "main": {"temp": 51.3, "feels_like": 49.0, "pressure": 1020, "humidity": 71},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10n"}],
            "wind": {"speed": 4.6}
        }"#;

        let parsed: WeatherResult = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.main.temp, 51.3);
        assert_eq!(parsed.weather[0].description, "light rain");
    }

    #[test]
    fn missing_main_block_is_rejected() {
        let err = serde_json::from_str::<WeatherResult>(r#"{"weather": []}"#).unwrap_err();
        assert!(err.to_string().contains("main"));
    }

    #[test]
    fn fractional_humidity_is_rejected() {
        let body = r#"{"main":{"temp":1.0,"pressure":1000,"humidity":50.5},"weather":[]}"#;
        assert!(serde_json::from_str::<WeatherResult>(body).is_err());
    }

    #[test]
    fn empty_condition_list_decodes() {
        let body = r#"{"main":{"temp":1.0,"pressure":1000,"humidity":5},"weather":[]}"#;
        let parsed: WeatherResult = serde_json::from_str(body).unwrap();
        assert!(parsed.primary_condition().is_none());
    }

    #[test]
    fn icon_url_uses_double_density_png() {
        let cond = Condition { id: 800, description: "Clear sky".into(), icon: "01d".into() };
        assert_eq!(cond.icon_url(), "https://openweathermap.org/img/wn/01d@2x.png");
    }
}
