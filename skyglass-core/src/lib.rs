//! Core library for the `skyglass` weather lookup client.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider behind the [`WeatherProvider`] trait
//! - The search and autocomplete controllers, combined in [`SearchSession`]
//! - Display mapping: unit conversion, reading labels, background selection
//!
//! It is used by `skyglass-cli`, but has no terminal dependencies of its own.

pub mod autocomplete;
pub mod background;
pub mod config;
pub mod convert;
pub mod describe;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;
pub mod search;
pub mod session;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{ErrorKind, SearchError};
pub use model::{PlaceSuggestion, TemperatureUnit, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
pub use report::WeatherReport;
pub use search::SearchPhase;
pub use session::{SearchSession, SearchState};
