use crate::foundation::error::{PawtrailError, PawtrailResult};
use crate::geo::point::LatLng;
use crate::walk::model::WeatherSnapshot;
use crate::weather::codes::{celsius_to_fahrenheit, summary_for_code};

/// Wire shape of the upstream `current_weather` payload.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct WeatherResponse {
    pub(crate) current_weather: CurrentWeather,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct CurrentWeather {
    /// Temperature in degrees Celsius.
    pub(crate) temperature: f64,
    /// WMO weather interpretation code.
    pub(crate) weathercode: u32,
}

/// Client for the third-party current-weather API.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a client against `base_url` (no trailing slash).
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the current weather at `at`, converted to the domain snapshot
    /// (Fahrenheit + short summary).
    pub async fn current(&self, at: LatLng) -> PawtrailResult<WeatherSnapshot> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.base_url, at.lat, at.lng
        );

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PawtrailError::upstream(format!("weather fetch failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(PawtrailError::upstream(format!(
                "weather service returned {}",
                resp.status()
            )));
        }

        let parsed: WeatherResponse = resp
            .json()
            .await
            .map_err(|e| PawtrailError::upstream(format!("unexpected weather payload: {e}")))?;

        Ok(snapshot_from(parsed.current_weather))
    }
}

pub(crate) fn snapshot_from(current: CurrentWeather) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_f: celsius_to_fahrenheit(current.temperature).round() as i32,
        summary: summary_for_code(current.weathercode).to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/weather/client.rs"]
mod tests;
