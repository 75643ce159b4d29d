//! Provider icon code to display glyph lookup.
//!
//! Icon codes are `NN` plus `d`/`n` for day or night,
//! see <https://openweathermap.org/weather-conditions>.

/// Glyph for an icon code, or `""` when the code is not in the table.
pub fn glyph(icon_code: &str) -> &'static str {
    match icon_code {
        "01d" => "☀️",
        "01n" => "🌙",
        "02d" => "⛅",
        "02n" | "03d" | "03n" | "04d" | "04n" => "☁️",
        "09d" | "09n" | "10n" => "🌧️",
        "10d" => "🌦️",
        "11d" => "⛈️",
        "11n" => "🌩️",
        "13d" => "🌨️",
        "13n" => "❄️",
        "50d" => "🌫️",
        "50n" => "🌁",
        _ => {
            tracing::debug!(icon_code, "no glyph for icon code");
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_has_day_and_night_glyphs() {
        for family in ["01", "02", "03", "04", "09", "10", "11", "13", "50"] {
            assert!(!glyph(&format!("{family}d")).is_empty(), "{family}d");
            assert!(!glyph(&format!("{family}n")).is_empty(), "{family}n");
        }
    }

    #[test]
    fn clear_sky_differs_between_day_and_night() {
        assert_ne!(glyph("01d"), glyph("01n"));
    }

    #[test]
    fn broken_clouds_use_the_cloud_glyph() {
        assert_eq!(glyph("04d"), "☁️");
    }

    #[test]
    fn unknown_codes_map_to_empty() {
        for code in ["99x", "", "01", "01D", "04x"] {
            assert_eq!(glyph(code), "", "{code:?}");
        }
    }
}
