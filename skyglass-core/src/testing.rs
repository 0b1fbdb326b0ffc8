//! In-memory provider for controller tests.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    SearchError,
    model::{PlaceSuggestion, WeatherSnapshot, sample_snapshot},
    provider::WeatherProvider,
};

/// A recorded provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Geocode(String),
    ByName(String),
    ByCoordinates(f64, f64),
}

#[derive(Debug, Default)]
pub struct FakeProvider {
    calls: Mutex<Vec<Call>>,
    places: Vec<PlaceSuggestion>,
    fail_geocode: bool,
    weather: Option<WeatherSnapshot>,
}

impl FakeProvider {
    /// Every lookup succeeds; weather responses report `city_name`.
    pub fn answering(city_name: &str) -> Self {
        Self {
            places: vec![
                place("London", "GB", 51.5073, -0.1276),
                place("London", "CA", 42.9832, -81.2430),
            ],
            weather: Some(sample_snapshot(city_name, "Clear")),
            ..Self::default()
        }
    }

    /// Every lookup fails with a 404.
    pub fn failing() -> Self {
        Self { fail_geocode: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn geocode_queries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Geocode(q) => Some(q),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn weather(&self) -> Result<WeatherSnapshot, SearchError> {
        self.weather.clone().ok_or_else(not_found)
    }
}

pub fn place(name: &str, country: &str, latitude: f64, longitude: f64) -> PlaceSuggestion {
    PlaceSuggestion { name: name.into(), country: country.into(), latitude, longitude }
}

fn not_found() -> SearchError {
    SearchError::NotFound {
        status: StatusCode::NOT_FOUND,
        body: r#"{"cod":"404","message":"city not found"}"#.into(),
    }
}

#[async_trait]
impl WeatherProvider for FakeProvider {
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<PlaceSuggestion>, SearchError> {
        self.record(Call::Geocode(query.to_string()));
        if self.fail_geocode {
            return Err(not_found());
        }
        Ok(self.places.iter().take(limit as usize).cloned().collect())
    }

    async fn weather_by_name(&self, name: &str) -> Result<WeatherSnapshot, SearchError> {
        self.record(Call::ByName(name.to_string()));
        self.weather()
    }

    async fn weather_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, SearchError> {
        self.record(Call::ByCoordinates(latitude, longitude));
        self.weather()
    }
}
