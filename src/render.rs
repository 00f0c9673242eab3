//! Spoken-style text rendering and reading selection.

use crate::constants::READING_SEPARATOR;
use crate::error::{Result, SugarError};
use crate::models::Reading;

/// Render a single reading
pub fn render_one(reading: &Reading) -> String {
    format!(
        "At {}. The sugar level is {}. ",
        reading.display_time(),
        reading.glucose_value()
    )
}

/// Render readings in order, each followed by a separator
pub fn render_many(readings: &[Reading]) -> String {
    readings
        .iter()
        .map(|reading| render_one(reading) + READING_SEPARATOR)
        .collect()
}

/// Render readings as a pretty-printed JSON array
pub fn render_json(readings: &[Reading]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(readings)
}

/// Parse a requested count, which must be a positive integer
pub fn parse_count(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(SugarError::InvalidCount {
            value: value.to_string(),
        }),
    }
}

/// Select the readings to report
///
/// With no requested count only the first (most recent) reading is selected;
/// otherwise the first `n` readings.
pub fn select_readings<'a>(readings: &'a [Reading], requested: Option<&str>) -> Result<&'a [Reading]> {
    let count = match requested {
        Some(value) => parse_count(value)?,
        None => 1,
    };

    readings.get(..count).ok_or(SugarError::IndexOutOfRange {
        requested: count,
        available: readings.len(),
    })
}

/// Render the selection for a requested count
///
/// A missing count renders the latest reading on its own; an explicit count
/// renders that many readings with separators.
pub fn render_selection(readings: &[Reading], requested: Option<&str>) -> Result<String> {
    let selected = select_readings(readings, requested)?;

    Ok(match requested {
        Some(_) => render_many(selected),
        None => render_one(&selected[0]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GlucoseValue;
    use chrono::{Duration, TimeZone, Utc};

    fn reading(display_time: &str, tenths: u64) -> Reading {
        let instant = Utc.with_ymd_and_hms(2018, 3, 26, 3, 59, 41).unwrap();
        Reading::new(instant, display_time, GlucoseValue::from_tenths(tenths))
    }

    fn five_readings() -> Vec<Reading> {
        let latest = Utc.with_ymd_and_hms(2018, 3, 26, 3, 59, 41).unwrap();
        (0..5)
            .map(|i| {
                let instant = latest - Duration::minutes(5 * i);
                Reading::new(
                    instant,
                    instant.format("%Y-%m-%d %H:%M:%S").to_string(),
                    GlucoseValue::from_tenths(86 + i as u64),
                )
            })
            .collect()
    }

    #[test]
    fn test_render_one_exact_format() {
        let text = render_one(&reading("2018-03-26 03:59:41", 86));
        assert_eq!(text, "At 2018-03-26 03:59:41. The sugar level is 8.6. ");
    }

    #[test]
    fn test_render_many_appends_separator() {
        let readings = vec![
            reading("2018-03-26 03:59:41", 86),
            reading("2018-03-26 03:54:42", 89),
        ];

        assert_eq!(
            render_many(&readings),
            "At 2018-03-26 03:59:41. The sugar level is 8.6.  \nAt 2018-03-26 03:54:42. The sugar level is 8.9.  \n"
        );
        assert_eq!(render_many(&[]), "");
    }

    #[test]
    fn test_select_default_is_first_reading() {
        let readings = five_readings();
        let selected = select_readings(&readings, None).unwrap();

        assert_eq!(selected, &readings[..1]);
    }

    #[test]
    fn test_select_first_n() {
        let readings = five_readings();
        let selected = select_readings(&readings, Some("2")).unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0], readings[0]);
        assert_eq!(selected[1], readings[1]);

        assert_eq!(select_readings(&readings, Some("5")).unwrap().len(), 5);
    }

    #[test]
    fn test_select_too_many_is_out_of_range() {
        let readings = five_readings();

        match select_readings(&readings, Some("10")) {
            Err(SugarError::IndexOutOfRange {
                requested,
                available,
            }) => {
                assert_eq!(requested, 10);
                assert_eq!(available, 5);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_select_from_empty_feed_is_out_of_range() {
        assert!(matches!(
            select_readings(&[], None),
            Err(SugarError::IndexOutOfRange {
                requested: 1,
                available: 0
            })
        ));
    }

    #[test]
    fn test_invalid_counts() {
        let readings = five_readings();

        for value in ["0", "-1", "three", "", "2.5"] {
            assert!(
                matches!(
                    select_readings(&readings, Some(value)),
                    Err(SugarError::InvalidCount { .. })
                ),
                "expected InvalidCount for '{}'",
                value
            );
        }
    }

    #[test]
    fn test_render_selection() {
        let readings = five_readings();

        let latest = render_selection(&readings, None).unwrap();
        assert_eq!(latest, "At 2018-03-26 03:59:41. The sugar level is 8.6. ");

        let two = render_selection(&readings, Some("2")).unwrap();
        assert_eq!(
            two,
            "At 2018-03-26 03:59:41. The sugar level is 8.6.  \nAt 2018-03-26 03:54:41. The sugar level is 8.7.  \n"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&[reading("2018-03-26 03:59:41", 86)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["display_time"], "2018-03-26 03:59:41");
        assert_eq!(value[0]["glucose_value"], serde_json::json!(8.6));
        assert_eq!(value[0]["instant"], "2018-03-26T03:59:41Z");
    }
}
