use std::fmt;

use serde::{Deserialize, Serialize};

use crate::background::is_daytime;

/// A place candidate returned by the geocoding lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceSuggestion {
    /// Identity of a suggestion within one list.
    pub fn key(&self) -> String {
        format!("{}-{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for PlaceSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}, {}", self.name, self.country)
        }
    }
}

/// One complete weather report, as returned by a single lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city_name: String,
    /// Weather category such as "Clear", "Clouds" or "Rain".
    pub condition_main: String,
    pub description: String,
    pub icon_id: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub wind_direction_deg: u16,
    pub visibility_meters: u32,
    pub sunrise_epoch_sec: i64,
    pub sunset_epoch_sec: i64,
}

impl WeatherSnapshot {
    pub fn is_day_at(&self, now_epoch_sec: i64) -> bool {
        is_daytime(now_epoch_sec, self.sunrise_epoch_sec, self.sunset_epoch_sec)
    }

    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon_id)
    }
}

/// Temperature unit used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn toggle(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_snapshot(city_name: &str, condition_main: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        city_name: city_name.to_string(),
        condition_main: condition_main.to_string(),
        description: "clear sky".to_string(),
        icon_id: "01d".to_string(),
        temperature_c: 18.4,
        feels_like_c: 17.6,
        humidity_pct: 64,
        pressure_hpa: 1014,
        wind_speed_mps: 4.1,
        wind_direction_deg: 250,
        visibility_meters: 10_000,
        sunrise_epoch_sec: 1_700_000_000,
        sunset_epoch_sec: 1_700_030_000,
    }
}
