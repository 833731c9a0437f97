use std::fmt::Write as _;

use weather_core::WeatherReport;

/// Text shown for a successful fetch, one field per line.
pub fn report(report: &WeatherReport) -> String {
    let weather = &report.weather;
    let condition = weather.primary_condition();

    let mut out = String::new();
    let _ = writeln!(out, "City: {}", report.city);
    let _ = writeln!(out, "Temperature: {}°F", weather.temperature().ceil() as i64);
    let _ = writeln!(out, "Humidity: {}%", weather.humidity());
    let _ = writeln!(
        out,
        "Description: {}",
        condition.map(|c| c.description.as_str()).unwrap_or("N/A")
    );
    if let Some(c) = condition {
        let _ = writeln!(out, "Icon: {}", c.icon_url());
    }
    out
}
