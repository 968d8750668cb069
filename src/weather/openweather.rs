//! OpenWeatherMap current-weather client
//!
//! `GET {base_url}/data/2.5/weather?lat=..&lon=..&appid=..&units=imperial`

use super::{Coordinates, WeatherError, WeatherProvider, WeatherReading};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Client for the OpenWeatherMap current-weather endpoint
pub struct OpenWeatherMapClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherMapClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("Daybook/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    weather: Vec<Condition>,
    main: MainReadings,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

impl CurrentWeatherResponse {
    fn into_reading(self) -> Result<WeatherReading, WeatherError> {
        let condition = self
            .weather
            .first()
            .ok_or_else(|| WeatherError::Parse("response has no weather conditions".into()))?;

        Ok(WeatherReading::from_conditions(
            &condition.main,
            &condition.description,
            self.main.temp,
            self.name,
        ))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapClient {
    fn name(&self) -> &str {
        "openweathermap"
    }

    async fn current(&self, coords: Coordinates) -> Result<WeatherReading, WeatherError> {
        let latitude = coords.latitude.to_string();
        let longitude = coords.longitude.to_string();

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("lat", latitude.as_str()),
                ("lon", longitude.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
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

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        body.into_reading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::WeatherIcon;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use std::collections::HashMap;

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_parse_response() {
        let body: CurrentWeatherResponse = serde_json::from_str(
            r#"{
                "weather": [{"id": 500, "main": "Rain", "description": "moderate rain"}],
                "main": {"temp": 48.3, "humidity": 90},
                "name": "Portland"
            }"#,
        )
        .unwrap();

        let reading = body.into_reading().unwrap();
        assert_eq!(reading.icon, WeatherIcon::CloudRain);
        assert_eq!(reading.temperature_f, 48);
        assert_eq!(reading.description, "Moderate rain");
        assert_eq!(reading.location_name, "Portland");
    }

    #[test]
    fn test_parse_empty_conditions() {
        let body: CurrentWeatherResponse =
            serde_json::from_str(r#"{"weather": [], "main": {"temp": 70}, "name": "X"}"#).unwrap();
        assert!(matches!(body.into_reading(), Err(WeatherError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_sends_query_and_maps_response() {
        let router = Router::new().route(
            "/data/2.5/weather",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("units").map(String::as_str), Some("imperial"));
                assert_eq!(params.get("appid").map(String::as_str), Some("secret"));
                assert_eq!(params.get("lat").map(String::as_str), Some("40.5"));
                Json(serde_json::json!({
                    "weather": [{"main": "Snow", "description": "light snow"}],
                    "main": {"temp": 29.6},
                    "name": "Buffalo"
                }))
            }),
        );
        let base_url = spawn_server(router).await;

        let client = OpenWeatherMapClient::new(format!("{}/", base_url), "secret", 5).unwrap();
        let reading = client
            .current(Coordinates::new(40.5, -78.9))
            .await
            .unwrap();

        assert_eq!(reading.icon, WeatherIcon::Snowflake);
        assert_eq!(reading.temperature_f, 30);
        assert_eq!(reading.description, "Light snow");
        assert_eq!(reading.location_name, "Buffalo");
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let router = Router::new().route(
            "/data/2.5/weather",
            get(|| async { (StatusCode::UNAUTHORIZED, "Invalid API key") }),
        );
        let base_url = spawn_server(router).await;

        let client = OpenWeatherMapClient::new(base_url, "bad", 5).unwrap();
        match client.current(Coordinates::new(0.0, 0.0)).await {
            Err(WeatherError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        // Bind then drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = OpenWeatherMapClient::new(format!("http://{}", addr), "key", 2).unwrap();
        let result = client.current(Coordinates::new(0.0, 0.0)).await;
        assert!(matches!(
            result,
            Err(WeatherError::Request(_)) | Err(WeatherError::Timeout)
        ));
    }
}
