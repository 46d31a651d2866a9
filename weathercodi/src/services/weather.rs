//! Weather service
//!
//! Serves a fixed table of conditions per location. The configured delay
//! stands in for a network round trip; there is no live source.

use crate::error::{AppError, Result};
use crate::models::WeatherData;
use crate::services::settings::LatencySettings;
use rand::Rng;
use std::time::Duration;

/// Locations present in the static table
pub const LOCATIONS: [&str; 5] = ["서울", "경기도", "부산", "대구", "인천"];

/// Look up the static entry for `location`
pub fn lookup(location: &str) -> Option<WeatherData> {
    let (temperature, condition, humidity, wind_speed, feels_like, precipitation) = match location
    {
        "서울" => (18.0, "흐림", 65, 3.2, 16.0, 20),
        "경기도" => (16.0, "구름 많음", 70, 2.8, 14.0, 30),
        "부산" => (22.0, "맑음", 60, 4.5, 21.0, 10),
        "대구" => (24.0, "맑음", 45, 2.1, 25.0, 0),
        "인천" => (15.0, "비", 85, 5.2, 12.0, 80),
        _ => return None,
    };

    Some(WeatherData {
        location: location.to_string(),
        temperature,
        condition: condition.to_string(),
        humidity,
        wind_speed,
        feels_like,
        precipitation,
    })
}

#[derive(Clone)]
pub struct WeatherService {
    latency: LatencySettings,
}

impl WeatherService {
    pub fn new(latency: LatencySettings) -> Self {
        Self { latency }
    }

    /// Current conditions for `location`, after the simulated delay
    pub async fn current(&self, location: &str) -> Result<WeatherData> {
        let delay = self.pick_delay();
        if !delay.is_zero() {
            tracing::debug!("Simulating weather lookup latency: {:?}", delay);
            tokio::time::sleep(delay).await;
        }

        let weather =
            lookup(location).ok_or_else(|| AppError::UnknownLocation(location.to_string()))?;

        tracing::info!(
            "Weather for {}: {}°C, {}",
            weather.location,
            weather.temperature,
            weather.condition
        );

        Ok(weather)
    }

    /// Available locations, in display order
    pub fn locations(&self) -> &'static [&'static str] {
        &LOCATIONS
    }

    fn pick_delay(&self) -> Duration {
        match self.latency.weather_delay_range() {
            Some((min, max)) if max > 0 && min <= max => {
                Duration::from_millis(rand::thread_rng().gen_range(min..=max))
            }
            Some((min, max)) if min > max => {
                tracing::warn!(
                    "Ignoring inverted weather delay range {}..={}ms",
                    min,
                    max
                );
                Duration::ZERO
            }
            _ => Duration::ZERO,
        }
    }
}
