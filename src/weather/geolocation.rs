//! Geolocation sources

use super::{Coordinates, Geolocator, WeatherError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Coordinates taken from configuration
#[derive(Debug, Clone)]
pub struct FixedLocation {
    coords: Option<Coordinates>,
}

impl FixedLocation {
    pub fn new(coords: Coordinates) -> Self {
        Self {
            coords: Some(coords),
        }
    }

    /// Build from optional config values; both are required
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            coords: latitude
                .zip(longitude)
                .map(|(lat, lon)| Coordinates::new(lat, lon)),
        }
    }
}

#[async_trait]
impl Geolocator for FixedLocation {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn locate(&self) -> Result<Coordinates, WeatherError> {
        self.coords.ok_or_else(|| {
            WeatherError::Unavailable("latitude and longitude are not configured".to_string())
        })
    }
}

/// Geolocation turned off by the user
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeolocation;

#[async_trait]
impl Geolocator for DisabledGeolocation {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn locate(&self) -> Result<Coordinates, WeatherError> {
        Err(WeatherError::PermissionDenied)
    }
}

/// Approximate position from the public IP address
pub struct IpGeolocator {
    client: Client,
    url: String,
}

impl IpGeolocator {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("Daybook/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpLookupResponse {
    fn into_coordinates(self) -> Result<Coordinates, WeatherError> {
        if let Some(status) = self.status.as_deref() {
            if status != "success" {
                return Err(WeatherError::Unavailable(
                    self.message.unwrap_or_else(|| status.to_string()),
                ));
            }
        }

        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            _ => Err(WeatherError::Parse(
                "lookup response has no coordinates".to_string(),
            )),
        }
    }
}

#[async_trait]
impl Geolocator for IpGeolocator {
    fn name(&self) -> &str {
        "ip"
    }

    async fn locate(&self) -> Result<Coordinates, WeatherError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(WeatherError::from_request)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        body.into_coordinates()
    }
}
