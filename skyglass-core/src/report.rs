//! Presentation mapping from a [`WeatherSnapshot`] to display strings.

use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::{
    background::{Background, select},
    convert::format_temperature,
    describe::{humidity_label, visibility_label, wind_direction_label},
    model::{TemperatureUnit, WeatherSnapshot},
};

/// Everything the result screen shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub description: String,
    pub icon_url: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub visibility: String,
    pub pressure: String,
    pub sunrise: String,
    pub sunset: String,
    pub background: Background,
}

impl WeatherReport {
    /// Build a report for `snapshot`, labelled `city`, at time `now`.
    /// Sunrise and sunset are shown as `HH:MM` in the timezone of `now`.
    pub fn new<Tz: TimeZone>(
        snapshot: &WeatherSnapshot,
        city: &str,
        unit: TemperatureUnit,
        now: DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        let tz = now.timezone();
        let is_day = snapshot.is_day_at(now.timestamp());

        Self {
            city: city.to_string(),
            description: snapshot.description.clone(),
            icon_url: snapshot.icon_url(),
            temperature: format_temperature(snapshot.temperature_c, unit),
            feels_like: format_temperature(snapshot.feels_like_c, unit),
            humidity: format!(
                "{}% ({})",
                snapshot.humidity_pct,
                humidity_label(snapshot.humidity_pct)
            ),
            wind: format!(
                "{} m/s ({})",
                snapshot.wind_speed_mps,
                wind_direction_label(i32::from(snapshot.wind_direction_deg))
            ),
            visibility: visibility_label(snapshot.visibility_meters).to_string(),
            pressure: format!("{} hPa", snapshot.pressure_hpa),
            sunrise: clock_label(snapshot.sunrise_epoch_sec, &tz),
            sunset: clock_label(snapshot.sunset_epoch_sec, &tz),
            background: select(Some(snapshot.condition_main.as_str()), Some(is_day)),
        }
    }
}

/// `HH:MM` (24h) for a unix timestamp, or `--:--` if it is out of range.
pub fn clock_label<Tz: TimeZone>(epoch_sec: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(utc) => utc.with_timezone(tz).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
