use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    SearchError,
    model::{TemperatureUnit, WeatherSnapshot},
    provider::WeatherProvider,
};

/// Which screen the client is on.
///
/// `NoSearch` and `Error` both show the input form; `Success` shows the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    NoSearch,
    Error,
    Success,
}

#[derive(Debug)]
pub struct WeatherSearchController {
    provider: Arc<dyn WeatherProvider>,
    query: String,
    weather: Option<WeatherSnapshot>,
    unit: TemperatureUnit,
    error: Option<String>,
    phase: SearchPhase,
}

impl WeatherSearchController {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            query: String::new(),
            weather: None,
            unit: TemperatureUnit::default(),
            error: None,
            phase: SearchPhase::NoSearch,
        }
    }

    /// Current input text; after a successful search, the city label.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Look up weather by city name.
    ///
    /// On success the label becomes the provider's canonical city name.
    pub async fn search_by_name(&mut self, name: &str) -> Result<(), SearchError> {
        self.ensure_form_showing()?;

        let name = name.trim();
        if name.is_empty() {
            let err = SearchError::EmptyQuery;
            self.fail(&err);
            return Err(err);
        }

        self.error = None;
        match self.provider.weather_by_name(name).await {
            Ok(snapshot) => {
                let label = snapshot.city_name.clone();
                self.accept(snapshot, label);
                Ok(())
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Look up weather at a coordinate pair, labelling the result `display_name`.
    pub async fn search_by_coordinates(
        &mut self,
        latitude: f64,
        longitude: f64,
        display_name: &str,
    ) -> Result<(), SearchError> {
        self.ensure_form_showing()?;

        self.error = None;
        match self.provider.weather_by_coordinates(latitude, longitude).await {
            Ok(snapshot) => {
                self.accept(snapshot, display_name.to_string());
                Ok(())
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Drop the result and go back to an empty form. The unit is kept.
    pub fn reset(&mut self) {
        self.weather = None;
        self.query.clear();
        self.error = None;
        self.phase = SearchPhase::NoSearch;
    }

    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggle();
    }

    // A result must be dismissed with `reset` before the next search.
    fn ensure_form_showing(&self) -> Result<(), SearchError> {
        if self.phase == SearchPhase::Success {
            warn!("search rejected while a result is showing");
            return Err(SearchError::ResultActive);
        }
        Ok(())
    }

    fn accept(&mut self, snapshot: WeatherSnapshot, label: String) {
        info!(city = %label, condition = %snapshot.condition_main, "weather lookup succeeded");
        self.weather = Some(snapshot);
        self.query = label;
        self.error = None;
        self.phase = SearchPhase::Success;
    }

    fn fail(&mut self, err: &SearchError) {
        info!(error = %err, "weather lookup failed");
        self.error = Some(err.user_message().to_string());
        self.phase = SearchPhase::Error;
    }
}
