use skyglass_core::{PlaceSuggestion, TemperatureUnit, WeatherReport};

/// The °C | °F switch, with the active unit bracketed.
pub fn unit_switch(unit: TemperatureUnit) -> String {
    match unit {
        TemperatureUnit::Celsius => "[°C] | °F".to_string(),
        TemperatureUnit::Fahrenheit => "°C | [°F]".to_string(),
    }
}

pub fn report_lines(report: &WeatherReport, unit: TemperatureUnit) -> Vec<String> {
    let background = if report.background.is_video() {
        format!("{} (looping video)", report.background.asset())
    } else {
        report.background.asset().to_string()
    };

    vec![
        format!("{}    {}", report.city, unit_switch(unit)),
        format!("  {}", report.description),
        format!("  Temperature  {}", report.temperature),
        format!("  Feels like   {}", report.feels_like),
        format!("  Humidity     {}", report.humidity),
        format!("  Wind         {}", report.wind),
        format!("  Visibility   {}", report.visibility),
        format!("  Sunrise      {}", report.sunrise),
        format!("  Sunset       {}", report.sunset),
        format!("  Pressure     {}", report.pressure),
        format!("  Icon         {}", report.icon_url),
        format!("  Background   {background}"),
    ]
}

pub fn print_report(report: &WeatherReport, unit: TemperatureUnit) {
    println!();
    for line in report_lines(report, unit) {
        println!("{line}");
    }
    println!();
}

pub fn print_suggestions(suggestions: &[PlaceSuggestion]) {
    if suggestions.is_empty() {
        println!("No matching places.");
        return;
    }
    for place in suggestions {
        println!("{place}  ({:.4}, {:.4})", place.latitude, place.longitude);
    }
}
