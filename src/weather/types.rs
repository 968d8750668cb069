//! Weather data types

use serde::{Deserialize, Serialize};

/// Icon key for a weather condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherIcon {
    Sun,
    Cloud,
    CloudRain,
    Snowflake,
    Bolt,
    CloudDrizzle,
    Smog,
}

impl WeatherIcon {
    /// Map a provider condition group (e.g. `"Clouds"`) to an icon.
    /// Unknown conditions show the sun.
    pub fn for_condition(condition: &str) -> Self {
        match condition {
            "Clear" => WeatherIcon::Sun,
            "Clouds" => WeatherIcon::Cloud,
            "Rain" => WeatherIcon::CloudRain,
            "Snow" => WeatherIcon::Snowflake,
            "Thunderstorm" => WeatherIcon::Bolt,
            "Drizzle" => WeatherIcon::CloudDrizzle,
            "Mist" | "Fog" => WeatherIcon::Smog,
            _ => WeatherIcon::Sun,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "sun",
            WeatherIcon::Cloud => "cloud",
            WeatherIcon::CloudRain => "cloud-rain",
            WeatherIcon::Snowflake => "snowflake",
            WeatherIcon::Bolt => "bolt",
            WeatherIcon::CloudDrizzle => "cloud-drizzle",
            WeatherIcon::Smog => "smog",
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current conditions as shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub icon: WeatherIcon,
    pub temperature_f: i32,
    pub description: String,
    pub location_name: String,
}

impl WeatherReading {
    /// Reading shown whenever live weather cannot be obtained
    pub fn fallback() -> Self {
        Self {
            icon: WeatherIcon::Sun,
            temperature_f: 72,
            description: "Sunny".to_string(),
            location_name: "New York, NY".to_string(),
        }
    }

    /// Build a reading from raw provider fields
    pub fn from_conditions(
        condition: &str,
        description: &str,
        temperature_f: f64,
        location_name: impl Into<String>,
    ) -> Self {
        Self {
            icon: WeatherIcon::for_condition(condition),
            temperature_f: temperature_f.round() as i32,
            description: capitalize_first(description),
            location_name: location_name.into(),
        }
    }

    /// Temperature label, e.g. `72°F`
    pub fn temperature_label(&self) -> String {
        format!("{}°F", self.temperature_f)
    }
}

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
