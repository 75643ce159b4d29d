//! Human-readable rendering of a [`WeatherReading`].
//!
//! Values are printed in whatever unit system they were requested in; the
//! unit suffixes are purely presentational.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::{
    config::{Options, Units},
    icon,
    model::WeatherReading,
};

const SEPARATOR: &str = "========================";

/// `Mon _2 15:04:05`, day of month space-padded.
const STAMP: &str = "%b %e %H:%M:%S";

/// Pick the one-line or the verbose rendering according to `options`.
pub fn render(reading: &WeatherReading, options: &Options, now: DateTime<Utc>) -> String {
    if options.verbose {
        report(reading, options.units, now)
    } else {
        summary(reading, options.units)
    }
}

pub fn summary(reading: &WeatherReading, units: Units) -> String {
    format!(
        "{}  {}  {:.0} °{}\n",
        reading.city_name,
        condition(reading),
        reading.temperature,
        units.temperature_symbol(),
    )
}

/// Multi-line report. `now` is shifted by the reading's UTC offset to give
/// the city's local time.
pub fn report(reading: &WeatherReading, units: Units, now: DateTime<Utc>) -> String {
    let local = local_time(now, reading.utc_offset_secs);

    let mut out = String::new();
    out.push_str(&format!("{} {}\n", reading.city_name, local.format(STAMP)));
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!("condition: {}\n", condition(reading)));
    out.push_str(&format!(
        "temperature: {:.0} °{}\n",
        reading.temperature,
        units.temperature_symbol()
    ));
    out.push_str(&format!("pressure: {:.0} hPa\n", reading.pressure));
    out.push_str(&format!("humidity: {:.1}%\n", reading.humidity));
    out.push_str(&format!(
        "wind: {:.0}° {:.1} {}\n",
        reading.wind_direction,
        reading.wind_speed,
        units.wind_speed_symbol()
    ));
    out
}

fn condition(reading: &WeatherReading) -> String {
    match (icon::glyph(&reading.icon_code), reading.condition.as_str()) {
        ("", description) => description.to_string(),
        (glyph, "") => glyph.to_string(),
        (glyph, description) => format!("{glyph} {description}"),
    }
}

fn local_time(now: DateTime<Utc>, offset_secs: i64) -> DateTime<FixedOffset> {
    let offset = i32::try_from(offset_secs)
        .ok()
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| {
            tracing::warn!(offset_secs, "utc offset out of range, showing UTC");
            Utc.fix()
        });
    now.with_timezone(&offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn paris() -> WeatherReading {
        WeatherReading {
            city_name: "Paris".into(),
            utc_offset_secs: 3600,
            visibility: 10000.0,
            temperature: 3.2,
            pressure: 1011.0,
            humidity: 81.0,
            wind_speed: 7.7,
            wind_direction: 10.0,
            condition_group: "Clouds".into(),
            condition: "broken clouds".into(),
            icon_code: "04d".into(),
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn summary_metric() {
        assert_eq!(summary(&paris(), Units::Metric), "Paris  ☁️ broken clouds  3 °C\n");
    }

    #[test]
    fn summary_imperial_uses_fahrenheit_without_conversion() {
        let mut reading = paris();
        reading.temperature = 37.8;
        assert_eq!(summary(&reading, Units::Imperial), "Paris  ☁️ broken clouds  38 °F\n");
    }

    #[test]
    fn summary_without_glyph_or_condition() {
        let mut reading = paris();
        reading.icon_code = String::new();
        reading.condition = String::new();
        assert_eq!(summary(&reading, Units::Metric), "Paris    3 °C\n");
    }

    #[test]
    fn summary_unknown_icon_shows_description_only() {
        let mut reading = paris();
        reading.icon_code = "99x".into();
        assert_eq!(summary(&reading, Units::Metric), "Paris  broken clouds  3 °C\n");
    }

    #[test]
    fn glyph_without_description_has_no_trailing_space() {
        let mut reading = paris();
        reading.condition = String::new();

        assert_eq!(summary(&reading, Units::Metric), "Paris  ☁️  3 °C\n");
        let out = report(&reading, Units::Metric, noon());
        assert_eq!(out.lines().nth(2), Some("condition: ☁️"));
    }

    #[test]
    fn verbose_report_lines() {
        let out = report(&paris(), Units::Metric, noon());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines,
            [
                "Paris Jan  5 13:00:00",
                "========================",
                "condition: ☁️ broken clouds",
                "temperature: 3 °C",
                "pressure: 1011 hPa",
                "humidity: 81.0%",
                "wind: 10° 7.7 m/s",
            ]
        );
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn verbose_report_imperial_and_negative_offset() {
        let mut reading = paris();
        reading.city_name = "New York".into();
        reading.utc_offset_secs = -5 * 3600;
        reading.wind_speed = 12.34;

        let out = report(&reading, Units::Imperial, noon());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "New York Jan  5 07:00:00");
        assert_eq!(lines[3], "temperature: 3 °F");
        assert_eq!(lines[6], "wind: 10° 12.3 mi/h");
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let mut reading = paris();
        reading.utc_offset_secs = 90_000;

        let out = report(&reading, Units::Metric, noon());
        assert!(out.starts_with("Paris Jan  5 12:00:00\n"));
    }

    #[test]
    fn render_follows_verbose_flag() {
        let mut options = Options {
            api_key: "KEY".into(),
            units: Units::Metric,
            verbose: false,
            city: "Paris".into(),
        };
        assert_eq!(render(&paris(), &options, noon()).lines().count(), 1);

        options.verbose = true;
        assert_eq!(render(&paris(), &options, noon()).lines().count(), 7);
    }
}
