//! Temperature conversion for display.
//!
//! Both branches round half away from zero (`f64::round`), so `0.5` becomes `1`
//! and `-0.5` becomes `-1`.

use crate::model::TemperatureUnit;

/// Convert a Celsius reading into the display unit, rounded to a whole degree.
pub fn convert(temp_c: f64, unit: TemperatureUnit) -> f64 {
    let value = match unit {
        TemperatureUnit::Celsius => temp_c,
        TemperatureUnit::Fahrenheit => temp_c * 9.0 / 5.0 + 32.0,
    };
    // -0.0 + 0.0 is +0.0; keeps "-0" out of the output
    value.round() + 0.0
}

/// Render a Celsius reading as e.g. `"21°C"` or `"70°F"`.
pub fn format_temperature(temp_c: f64, unit: TemperatureUnit) -> String {
    format!("{}{}", convert(temp_c, unit), unit.symbol())
}
