//! Weather Adapter
//!
//! Produces the current-conditions readout. Two seams:
//!
//! - **Geolocator**: where the user is (`FixedLocation`, `IpGeolocator`)
//! - **WeatherProvider**: conditions at a location (`OpenWeatherMapClient`)
//!
//! [`WeatherService`] composes them and never fails: every error is logged
//! and replaced by [`WeatherReading::fallback`]. Weather is decorative.

mod geolocation;
mod openweather;
mod types;

pub use geolocation::{DisabledGeolocation, FixedLocation, IpGeolocator};
pub use openweather::OpenWeatherMapClient;
pub use types::{Coordinates, WeatherIcon, WeatherReading};

use crate::config::{GeolocationMode, WeatherConfig};
use async_trait::async_trait;
use std::sync::Arc;

/// Source of the user's coordinates
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Resolve the current position
    async fn locate(&self) -> Result<Coordinates, WeatherError>;
}

/// Source of current conditions
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Fetch current conditions at `coords`
    async fn current(&self, coords: Coordinates) -> Result<WeatherReading, WeatherError>;
}

/// Errors that can occur while obtaining weather
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Geolocation unavailable: {0}")]
    Unavailable(String),

    #[error("Geolocation permission denied")]
    PermissionDenied,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No weather API key configured")]
    MissingApiKey,
}

impl WeatherError {
    /// Classify a transport error the way callers care about
    pub(crate) fn from_request(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            WeatherError::Timeout
        } else {
            WeatherError::Request(e)
        }
    }
}

/// Geolocation followed by a provider lookup, with a fixed fallback
#[derive(Clone)]
pub struct WeatherService {
    geolocator: Arc<dyn Geolocator>,
    provider: Option<Arc<dyn WeatherProvider>>,
}

impl WeatherService {
    pub fn new(geolocator: Arc<dyn Geolocator>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            geolocator,
            provider: Some(provider),
        }
    }

    /// A service with no provider; always yields the fallback reading
    pub fn offline() -> Self {
        Self {
            geolocator: Arc::new(DisabledGeolocation),
            provider: None,
        }
    }

    /// Build the production service from configuration
    pub fn from_config(config: &WeatherConfig) -> Self {
        let geolocator: Arc<dyn Geolocator> = match config.geolocation {
            GeolocationMode::Ip => match IpGeolocator::new(
                &config.geolocation_url,
                config.request_timeout_secs,
            ) {
                Ok(g) => Arc::new(g),
                Err(e) => {
                    tracing::warn!(error = %e, "IP geolocation unavailable");
                    Arc::new(DisabledGeolocation)
                }
            },
            GeolocationMode::Fixed => Arc::new(FixedLocation::from_parts(
                config.latitude,
                config.longitude,
            )),
            GeolocationMode::None => Arc::new(DisabledGeolocation),
        };

        let provider: Option<Arc<dyn WeatherProvider>> = match config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {
                match OpenWeatherMapClient::new(&config.base_url, key, config.request_timeout_secs)
                {
                    Ok(client) => Some(Arc::new(client)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Weather client unavailable");
                        None
                    }
                }
            }
            _ => None,
        };

        Self {
            geolocator,
            provider,
        }
    }

    /// Whether a live provider is configured
    pub fn is_live(&self) -> bool {
        self.provider.is_some()
    }

    /// Current conditions, or the fallback reading on any failure
    pub async fn current(&self) -> WeatherReading {
        match self.try_current().await {
            Ok(reading) => {
                tracing::debug!(
                    location = %reading.location_name,
                    temperature_f = reading.temperature_f,
                    "Weather updated"
                );
                reading
            }
            Err(e) => {
                tracing::warn!(error = %e, "Weather lookup failed, using default reading");
                WeatherReading::fallback()
            }
        }
    }

    /// Current conditions, surfacing the failure
    pub async fn try_current(&self) -> Result<WeatherReading, WeatherError> {
        let provider = self.provider.as_ref().ok_or(WeatherError::MissingApiKey)?;
        let coords = self.geolocator.locate().await?;

        tracing::debug!(
            geolocator = self.geolocator.name(),
            provider = provider.name(),
            "Fetching weather"
        );
        provider.current(coords).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubProvider {
        result: fn() -> Result<WeatherReading, WeatherError>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(result: fn() -> Result<WeatherReading, WeatherError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn current(&self, _coords: Coordinates) -> Result<WeatherReading, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    fn here() -> Arc<dyn Geolocator> {
        Arc::new(FixedLocation::new(Coordinates::new(47.6, -122.3)))
    }

    #[tokio::test]
    async fn test_live_reading_passes_through() {
        let provider = Arc::new(StubProvider::new(|| {
            Ok(WeatherReading::from_conditions(
                "Clouds",
                "overcast clouds",
                61.2,
                "Seattle",
            ))
        }));
        let service = WeatherService::new(here(), provider.clone());

        let reading = service.current().await;
        assert_eq!(reading.icon, WeatherIcon::Cloud);
        assert_eq!(reading.location_name, "Seattle");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back() {
        let provider = Arc::new(StubProvider::new(|| Err(WeatherError::Timeout)));
        let service = WeatherService::new(here(), provider);

        assert_eq!(service.current().await, WeatherReading::fallback());
    }

    #[tokio::test]
    async fn test_api_error_falls_back() {
        let provider = Arc::new(StubProvider::new(|| {
            Err(WeatherError::Api {
                status: 401,
                message: "Invalid API key".to_string(),
            })
        }));
        let service = WeatherService::new(here(), provider);

        assert_eq!(service.current().await, WeatherReading::fallback());
    }

    #[tokio::test]
    async fn test_denied_geolocation_skips_provider() {
        let provider = Arc::new(StubProvider::new(|| Ok(WeatherReading::fallback())));
        let service = WeatherService::new(Arc::new(DisabledGeolocation), provider.clone());

        let err = service.try_current().await.unwrap_err();
        assert!(matches!(err, WeatherError::PermissionDenied));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert_eq!(service.current().await, WeatherReading::fallback());
    }

    #[tokio::test]
    async fn test_missing_coordinates_is_unavailable() {
        let provider = Arc::new(StubProvider::new(|| Ok(WeatherReading::fallback())));
        let service =
            WeatherService::new(Arc::new(FixedLocation::from_parts(None, Some(1.0))), provider);

        let err = service.try_current().await.unwrap_err();
        assert!(matches!(err, WeatherError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_offline_service() {
        let service = WeatherService::offline();
        assert!(!service.is_live());
        assert!(matches!(
            service.try_current().await,
            Err(WeatherError::MissingApiKey)
        ));
        assert_eq!(service.current().await, WeatherReading::fallback());
    }

    #[tokio::test]
    async fn test_from_config_without_key_is_offline() {
        let config = WeatherConfig {
            api_key: Some("   ".to_string()),
            ..WeatherConfig::default()
        };
        let service = WeatherService::from_config(&config);
        assert!(!service.is_live());
        assert_eq!(service.current().await, WeatherReading::fallback());
    }
}
