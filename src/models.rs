//! Core data structures for glucose readings.
//!
//! Defines the display-unit glucose value, the immutable parsed reading and
//! the borrowed per-line record used while parsing.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::constants::fields;

/// Glucose value in display units, held as whole tenths
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlucoseValue {
    tenths: u64,
}

impl GlucoseValue {
    /// Build a value from a count of tenths (`86` is `8.6`)
    pub fn from_tenths(tenths: u64) -> Self {
        Self { tenths }
    }

    /// Value expressed in tenths
    pub fn tenths(&self) -> u64 {
        self.tenths
    }

    /// Value as a float, for callers doing arithmetic
    pub fn as_f64(&self) -> f64 {
        self.tenths as f64 / 10.0
    }
}

impl fmt::Display for GlucoseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl Serialize for GlucoseValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// A parsed, unit-converted glucose reading
///
/// Built once per feed line and never mutated; the display time is derived
/// from the instant at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    instant: DateTime<Utc>,
    display_time: String,
    glucose_value: GlucoseValue,
}

impl Reading {
    pub fn new(
        instant: DateTime<Utc>,
        display_time: impl Into<String>,
        glucose_value: GlucoseValue,
    ) -> Self {
        Self {
            instant,
            display_time: display_time.into(),
            glucose_value,
        }
    }

    /// Absolute time of the reading
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Reading time as rendered for display
    pub fn display_time(&self) -> &str {
        &self.display_time
    }

    /// Glucose value in display units
    pub fn glucose_value(&self) -> GlucoseValue {
        self.glucose_value
    }
}

/// Tab-split fields of one feed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub timestamp: &'a str,
    pub record_id: &'a str,
    pub glucose: &'a str,
    pub trend: Option<&'a str>,
    pub device: Option<&'a str>,
}

impl<'a> RawRecord<'a> {
    /// Map split fields onto a record, `None` when required fields are missing
    pub fn from_fields(parts: &[&'a str]) -> Option<Self> {
        if parts.len() < fields::MIN_FIELDS {
            return None;
        }

        Some(Self {
            timestamp: parts[fields::TIMESTAMP],
            record_id: parts[fields::RECORD_ID],
            glucose: parts[fields::GLUCOSE],
            trend: parts.get(fields::TREND).copied(),
            device: parts.get(fields::DEVICE).copied(),
        })
    }
}
