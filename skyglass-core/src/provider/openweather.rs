use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::{
    Config, SearchError,
    model::{PlaceSuggestion, WeatherSnapshot},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    geocoding_url: String,
    weather_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        let defaults = Config::default();
        Self {
            api_key,
            geocoding_url: defaults.geocoding_url,
            weather_url: defaults.weather_url,
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            api_key: config.api_key().to_string(),
            geocoding_url: config.geocoding_url.clone(),
            weather_url: config.weather_url.clone(),
            http,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SearchError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(SearchError::NotFound { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_weather(&self, query: &[(&str, &str)]) -> Result<WeatherSnapshot, SearchError> {
        let parsed: OwCurrentResponse = self.get_json(&self.weather_url, query).await?;
        parsed.into_snapshot()
    }
}

#[derive(Debug, Deserialize)]
struct OwGeoPlace {
    name: String,
    #[serde(default)]
    country: String,
    lat: f64,
    lon: f64,
}

impl From<OwGeoPlace> for PlaceSuggestion {
    fn from(place: OwGeoPlace) -> Self {
        PlaceSuggestion {
            name: place.name,
            country: place.country,
            latitude: place.lat,
            longitude: place.lon,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    #[serde(default)]
    deg: u16,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
    visibility: u32,
    sys: OwSys,
}

impl OwCurrentResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, SearchError> {
        let condition = self.weather.into_iter().next().ok_or(SearchError::MissingConditions)?;

        Ok(WeatherSnapshot {
            city_name: self.name,
            condition_main: condition.main,
            description: condition.description,
            icon_id: condition.icon,
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            humidity_pct: self.main.humidity,
            pressure_hpa: self.main.pressure,
            wind_speed_mps: self.wind.speed,
            wind_direction_deg: self.wind.deg,
            visibility_meters: self.visibility,
            sunrise_epoch_sec: self.sys.sunrise,
            sunset_epoch_sec: self.sys.sunset,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<PlaceSuggestion>, SearchError> {
        let limit = limit.to_string();
        let places: Vec<OwGeoPlace> = self
            .get_json(&self.geocoding_url, &[("q", query), ("limit", limit.as_str())])
            .await?;

        debug!(count = places.len(), "geocoding lookup answered");
        Ok(places.into_iter().map(PlaceSuggestion::from).collect())
    }

    #[instrument(skip(self))]
    async fn weather_by_name(&self, name: &str) -> Result<WeatherSnapshot, SearchError> {
        self.fetch_weather(&[("q", name), ("units", "metric")]).await
    }

    #[instrument(skip(self))]
    async fn weather_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, SearchError> {
        let lat = latitude.to_string();
        let lon = longitude.to_string();
        self.fetch_weather(&[("lat", lat.as_str()), ("lon", lon.as_str()), ("units", "metric")])
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
