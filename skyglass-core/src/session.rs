//! The search form and result screen as one unit of state.

use std::sync::Arc;

use crate::{
    Config, SearchError,
    autocomplete::{AutocompleteController, AutocompletePhase},
    model::{PlaceSuggestion, TemperatureUnit, WeatherSnapshot},
    provider::WeatherProvider,
    search::{SearchPhase, WeatherSearchController},
};

/// Read-only view of everything a renderer needs.
#[derive(Debug, Clone, Copy)]
pub struct SearchState<'a> {
    pub query: &'a str,
    pub suggestions: &'a [PlaceSuggestion],
    pub weather: Option<&'a WeatherSnapshot>,
    pub display_unit: TemperatureUnit,
    pub error_message: Option<&'a str>,
    pub phase: SearchPhase,
    pub autocomplete: AutocompletePhase,
}

/// Owns both controllers and keeps them consistent: suggestions are always
/// empty while a weather result is showing.
#[derive(Debug)]
pub struct SearchSession {
    search: WeatherSearchController,
    autocomplete: AutocompleteController,
}

impl SearchSession {
    pub fn new(provider: Arc<dyn WeatherProvider>, config: &Config) -> Self {
        Self {
            search: WeatherSearchController::new(Arc::clone(&provider)),
            autocomplete: AutocompleteController::new(provider, config),
        }
    }

    pub fn state(&self) -> SearchState<'_> {
        SearchState {
            query: self.search.query(),
            suggestions: self.autocomplete.suggestions(),
            weather: self.search.weather(),
            display_unit: self.search.unit(),
            error_message: self.search.error_message(),
            phase: self.search.phase(),
            autocomplete: self.autocomplete.phase(),
        }
    }

    /// Input text changed. While a result is showing the city label is left
    /// alone and no suggestions are fetched.
    pub fn type_query(&mut self, text: &str) {
        let suppressed = self.search.weather().is_some();
        if !suppressed {
            self.search.set_query(text);
        }
        self.autocomplete.on_query_change(text, suppressed);
    }

    /// Wait until pending suggestions have arrived (or been abandoned).
    pub async fn settle_suggestions(&mut self) {
        self.autocomplete.settle().await;
    }

    /// Search by the current input text.
    pub async fn submit(&mut self) -> Result<(), SearchError> {
        let query = self.search.query().to_string();
        let result = self.search.search_by_name(&query).await;
        self.sync_suggestions();
        result
    }

    /// Search at a suggestion's coordinates, keeping its name as the label.
    pub async fn search_place(&mut self, place: &PlaceSuggestion) -> Result<(), SearchError> {
        let result = self
            .search
            .search_by_coordinates(place.latitude, place.longitude, &place.name)
            .await;
        self.sync_suggestions();
        result
    }

    /// "New search": back to an empty form.
    pub fn reset(&mut self) {
        self.search.reset();
        self.autocomplete.clear();
    }

    pub fn toggle_unit(&mut self) {
        self.search.toggle_unit();
    }

    fn sync_suggestions(&mut self) {
        if self.search.weather().is_some() {
            self.autocomplete.clear();
        }
    }
}
