//! Feed timestamp parsing and display rendering.
//!
//! Feed timestamps are ISO-8601 local date-times followed by an optional
//! UTC offset in one of several spellings:
//!
//! - `+HH:MM` (colon form, `2018-03-26T03:59:41.000+00:00`)
//! - `+HHMM` (compact form, `2018-03-26T03:59:41.000+0000`)
//! - `+HH` or `Z` (hour-only form, `2018-03-26T03:59:41.000Z`)
//!
//! A missing offset means UTC.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::LazyLock;

use crate::config::{Config, DisplayPolicy};
use crate::constants::DISPLAY_TIME_FORMAT;
use crate::error::{Result, SugarError};

static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<local>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d{1,9})?)(?:(?P<zulu>Z)|(?P<sign>[+-])(?P<hours>\d{2})(?::?(?P<minutes>\d{2}))?)?$",
    )
    .expect("timestamp pattern compiles")
});

/// Largest offset accepted, in seconds (18 hours)
const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// Parses feed timestamps and renders instants for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimestampParser {
    time_zone: Tz,
    display_policy: DisplayPolicy,
}

impl TimestampParser {
    pub fn new(time_zone: Tz, display_policy: DisplayPolicy) -> Self {
        Self {
            time_zone,
            display_policy,
        }
    }

    /// Build a parser from the display settings in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.time_zone(), config.display_policy())
    }

    /// Parse a feed timestamp into an absolute instant
    pub fn parse(&self, text: &str) -> Result<DateTime<Utc>> {
        parse_timestamp(text)
    }

    /// Render an instant as a display string according to the display policy
    pub fn render(&self, instant: &DateTime<Utc>) -> String {
        match self.display_policy {
            DisplayPolicy::Utc => instant.format(DISPLAY_TIME_FORMAT).to_string(),
            DisplayPolicy::Local => instant
                .with_timezone(&self.time_zone)
                .format(DISPLAY_TIME_FORMAT)
                .to_string(),
        }
    }
}

/// Parse a feed timestamp with any of the accepted offset forms
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    let captures = TIMESTAMP_PATTERN.captures(text).ok_or_else(|| {
        SugarError::malformed_timestamp(
            text,
            "expected 'YYYY-MM-DDTHH:MM:SS[.fff]' with optional offset '+HH:MM', '+HHMM', '+HH' or 'Z'",
        )
    })?;

    let local = &captures["local"];
    let naive = NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| SugarError::malformed_timestamp(text, e.to_string()))?;

    let offset_seconds = match captures.name("sign") {
        Some(sign) => {
            let hours: i32 = captures["hours"].parse().unwrap_or(0);
            let minutes: i32 = captures
                .name("minutes")
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0);

            if minutes >= 60 {
                return Err(SugarError::malformed_timestamp(
                    text,
                    format!("offset minutes {} out of range", minutes),
                ));
            }

            let magnitude = hours * 3600 + minutes * 60;
            if magnitude > MAX_OFFSET_SECONDS {
                return Err(SugarError::malformed_timestamp(
                    text,
                    "offset exceeds 18 hours",
                ));
            }

            if sign.as_str() == "-" { -magnitude } else { magnitude }
        }
        None => 0,
    };

    let offset = FixedOffset::east_opt(offset_seconds)
        .ok_or_else(|| SugarError::malformed_timestamp(text, "offset out of range"))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| SugarError::malformed_timestamp(text, "ambiguous local time"))
}
