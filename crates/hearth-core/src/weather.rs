//! Weather readout: a TTL read-through cache over the Open-Meteo API.
//!
//! The last successful response is persisted with its timestamp; a cache
//! younger than the TTL is served without touching the network, and any
//! fetch failure falls back to the stale snapshot (shown with its age) or
//! a placeholder.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::config::CoreConfig;
use crate::constants::{
    WEATHER_CACHE_FILE, WEATHER_CACHE_TTL_SECS, WEATHER_ENDPOINT, WEATHER_LATITUDE,
    WEATHER_LONGITUDE,
};

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// A successful reading, persisted as the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub weather_code: i64,
    pub fetched_at: u64,
}

impl WeatherSnapshot {
    pub fn age_secs(&self) -> u64 {
        now_secs().saturating_sub(self.fetched_at)
    }

    pub fn is_fresh(&self) -> bool {
        self.age_secs() < WEATHER_CACHE_TTL_SECS
    }
}

/// What the UI should display after a refresh attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherUpdate {
    Current(WeatherSnapshot),
    /// Fetch failed; show the stale snapshot with its age, or a placeholder.
    Offline(Option<WeatherSnapshot>),
}

// Open-Meteo response shape; only the fields we read.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: i64,
}

pub struct WeatherService {
    client: reqwest::Client,
    cache_path: PathBuf,
    cached: Option<WeatherSnapshot>,
}

impl WeatherService {
    pub fn new(config: &CoreConfig) -> Self {
        let cache_path = config.data_dir.join(WEATHER_CACHE_FILE);
        let cached = fs::read_to_string(&cache_path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok());
        Self {
            client: reqwest::Client::new(),
            cache_path,
            cached,
        }
    }

    pub fn cached(&self) -> Option<&WeatherSnapshot> {
        self.cached.as_ref()
    }

    /// Refresh the reading: serve the cache while it is fresh, otherwise hit
    /// the network. Never fails; a fetch error degrades to `Offline`.
    pub async fn refresh(&mut self) -> WeatherUpdate {
        if let Some(snapshot) = &self.cached {
            if snapshot.is_fresh() {
                return WeatherUpdate::Current(snapshot.clone());
            }
        }

        match self.fetch().await {
            Ok(snapshot) => {
                self.store_cache(&snapshot);
                WeatherUpdate::Current(snapshot)
            }
            Err(e) => {
                tracing::warn!("weather fetch failed: {e}");
                WeatherUpdate::Offline(self.cached.clone())
            }
        }
    }

    async fn fetch(&self) -> Result<WeatherSnapshot, reqwest::Error> {
        let url = format!(
            "{WEATHER_ENDPOINT}?latitude={WEATHER_LATITUDE}&longitude={WEATHER_LONGITUDE}&current_weather=true"
        );
        let response: ForecastResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(WeatherSnapshot {
            temperature: response.current_weather.temperature,
            weather_code: response.current_weather.weathercode,
            fetched_at: now_secs(),
        })
    }

    fn store_cache(&mut self, snapshot: &WeatherSnapshot) {
        self.cached = Some(snapshot.clone());
        if let Some(parent) = self.cache_path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(snapshot) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.cache_path, json) {
                    tracing::warn!("skipping weather cache write: {e}");
                }
            }
            Err(e) => tracing::warn!("skipping weather cache write: {e}"),
        }
    }
}

/// Short condition label for an Open-Meteo WMO weather code.
pub fn condition_label(code: i64) -> &'static str {
    match code {
        0 => "Clear",
        1..=3 => "Partly cloudy",
        45 | 48 => "Fog",
        51..=57 => "Drizzle",
        61..=67 => "Rain",
        71..=77 => "Snow",
        80..=82 => "Showers",
        85 | 86 => "Snow showers",
        95..=99 => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Human-friendly age for a stale reading.
pub fn relative_age(age_secs: u64) -> String {
    if age_secs < 60 {
        "just now".to_string()
    } else if age_secs < 3600 {
        format!("{}m ago", age_secs / 60)
    } else if age_secs < 86400 {
        format!("{}h ago", age_secs / 3600)
    } else {
        format!("{}d ago", age_secs / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_snapshot_short_circuits_by_age() {
        let fresh = WeatherSnapshot {
            temperature: 29.4,
            weather_code: 1,
            fetched_at: now_secs(),
        };
        assert!(fresh.is_fresh());

        let stale = WeatherSnapshot {
            fetched_at: now_secs() - WEATHER_CACHE_TTL_SECS - 1,
            ..fresh
        };
        assert!(!stale.is_fresh());
    }

    #[test]
    fn cached_snapshot_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig::new(dir.path());
        let snapshot = WeatherSnapshot {
            temperature: 31.0,
            weather_code: 0,
            fetched_at: now_secs(),
        };
        {
            let mut service = WeatherService::new(&config);
            service.store_cache(&snapshot);
        }
        let service = WeatherService::new(&config);
        assert_eq!(service.cached(), Some(&snapshot));
    }

    #[test]
    fn forecast_response_decodes() {
        let body = r#"{
            "latitude": -7.25,
            "longitude": 112.75,
            "current_weather": { "temperature": 30.1, "weathercode": 2, "windspeed": 6.3 }
        }"#;
        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.current_weather.temperature, 30.1);
        assert_eq!(parsed.current_weather.weathercode, 2);
    }

    #[test]
    fn relative_age_buckets() {
        assert_eq!(relative_age(5), "just now");
        assert_eq!(relative_age(120), "2m ago");
        assert_eq!(relative_age(7200), "2h ago");
        assert_eq!(relative_age(200_000), "2d ago");
    }

    #[test]
    fn condition_labels_cover_common_codes() {
        assert_eq!(condition_label(0), "Clear");
        assert_eq!(condition_label(2), "Partly cloudy");
        assert_eq!(condition_label(63), "Rain");
        assert_eq!(condition_label(95), "Thunderstorm");
        assert_eq!(condition_label(42), "Unknown");
    }
}
