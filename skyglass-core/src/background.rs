//! Decorative background selection keyed to weather category and time of day.

/// Background assets, referenced by symbolic file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Thunderstorm,
    Rain,
    Snow,
    ClearDay,
    ClearNight,
    CloudsDay,
    CloudsNight,
    Haze,
    /// Looping video shown when there is no result or the category is unknown.
    DefaultVideo,
}

impl Background {
    pub fn asset(&self) -> &'static str {
        match self {
            Background::Thunderstorm => "Thunderstorm.gif",
            Background::Rain => "Rain.gif",
            Background::Snow => "Snow.gif",
            Background::ClearDay => "ClearDay.gif",
            Background::ClearNight => "ClearNight.gif",
            Background::CloudsDay => "CloudsDay.gif",
            Background::CloudsNight => "CloudsNight.gif",
            Background::Haze => "Haze.gif",
            Background::DefaultVideo => "video1.mp4",
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Background::DefaultVideo)
    }
}

/// Pick the background for a weather category.
///
/// `Clear` and `Clouds` have day and night variants; a missing `is_day` counts
/// as night. Everything else maps to a single asset.
pub fn select(main: Option<&str>, is_day: Option<bool>) -> Background {
    let Some(main) = main else {
        return Background::DefaultVideo;
    };
    let day = is_day.unwrap_or(false);

    match main {
        "Thunderstorm" => Background::Thunderstorm,
        "Drizzle" | "Rain" => Background::Rain,
        "Snow" => Background::Snow,
        "Mist" | "Smoke" | "Haze" | "Fog" => Background::Haze,
        "Clear" if day => Background::ClearDay,
        "Clear" => Background::ClearNight,
        "Clouds" if day => Background::CloudsDay,
        "Clouds" => Background::CloudsNight,
        _ => Background::DefaultVideo,
    }
}

/// True when `now` lies strictly between sunrise and sunset.
pub fn is_daytime(now_epoch_sec: i64, sunrise_epoch_sec: i64, sunset_epoch_sec: i64) -> bool {
    now_epoch_sec > sunrise_epoch_sec && now_epoch_sec < sunset_epoch_sec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_weather_falls_back_to_video() {
        assert_eq!(select(None, None), Background::DefaultVideo);
        assert_eq!(select(None, Some(true)), Background::DefaultVideo);
        assert!(select(None, Some(false)).is_video());
    }

    #[test]
    fn clear_and_clouds_follow_day_night() {
        assert_eq!(select(Some("Clear"), Some(true)), Background::ClearDay);
        assert_eq!(select(Some("Clear"), Some(false)), Background::ClearNight);
        assert_eq!(select(Some("Clouds"), Some(true)), Background::CloudsDay);
        assert_eq!(select(Some("Clouds"), Some(false)), Background::CloudsNight);
        assert_eq!(select(Some("Clear"), None), Background::ClearNight);
    }

    #[test]
    fn single_asset_categories_ignore_day_night() {
        for is_day in [Some(true), Some(false), None] {
            assert_eq!(select(Some("Thunderstorm"), is_day), Background::Thunderstorm);
            assert_eq!(select(Some("Drizzle"), is_day), Background::Rain);
            assert_eq!(select(Some("Rain"), is_day), Background::Rain);
            assert_eq!(select(Some("Snow"), is_day), Background::Snow);
            for haze in ["Mist", "Smoke", "Haze", "Fog"] {
                assert_eq!(select(Some(haze), is_day), Background::Haze);
            }
        }
    }

    #[test]
    fn unknown_category_falls_back_to_video() {
        assert_eq!(select(Some("UnknownCategory"), Some(true)), Background::DefaultVideo);
        assert_eq!(select(Some("Tornado"), Some(false)), Background::DefaultVideo);
        // categories are case sensitive, as the provider sends them
        assert_eq!(select(Some("clear"), Some(true)), Background::DefaultVideo);
    }

    #[test]
    fn assets_are_symbolic_names() {
        assert_eq!(select(Some("Clear"), Some(true)).asset(), "ClearDay.gif");
        assert_eq!(select(Some("Fog"), None).asset(), "Haze.gif");
        assert_eq!(Background::DefaultVideo.asset(), "video1.mp4");
    }

    #[test]
    fn daytime_bounds_are_exclusive() {
        assert!(is_daytime(150, 100, 200));
        assert!(!is_daytime(100, 100, 200));
        assert!(!is_daytime(200, 100, 200));
        assert!(!is_daytime(50, 100, 200));
    }
}
