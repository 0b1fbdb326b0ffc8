use crate::{
    Config, SearchError,
    model::{PlaceSuggestion, WeatherSnapshot},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// The two read-only lookups the client depends on.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Free-text place search, at most `limit` candidates, in provider order.
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<PlaceSuggestion>, SearchError>;

    async fn weather_by_name(&self, name: &str) -> Result<WeatherSnapshot, SearchError>;

    async fn weather_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, SearchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    if !config.has_api_key() {
        tracing::warn!(
            "No OpenWeather API key configured; requests will be rejected by the provider. \
             Run `skyglass configure` or set {}.",
            crate::config::API_KEY_ENV
        );
    }

    let provider = OpenWeatherProvider::from_config(config)?;
    Ok(Arc::new(provider))
}
