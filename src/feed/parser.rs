//! Feed body parsing
//!
//! A feed body is newline-separated records whose fields are separated by
//! runs of tabs:
//!
//! ```text
//! 2018-03-26T03:59:41.000+0000	1522036781857	154	FortyFiveDown	BLU00514
//! 2018-03-26T03:54:42.000+0000	1522036482155	160	FortyFiveDown	BLU00514
//! ```

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use super::stats::{ParseResult, ParseStats};
use crate::config::{Config, ParsePolicy};
use crate::constants::fields;
use crate::converter::convert;
use crate::error::{Result, SugarError};
use crate::models::{RawRecord, Reading};
use crate::timestamp::TimestampParser;

static TAB_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+").expect("tab pattern compiles"));

/// Parser turning a raw feed body into readings
#[derive(Debug, Clone, Copy)]
pub struct FeedParser {
    timestamps: TimestampParser,
    policy: ParsePolicy,
}

impl FeedParser {
    pub fn new(timestamps: TimestampParser, policy: ParsePolicy) -> Self {
        Self { timestamps, policy }
    }

    /// Build a parser from the display and parse settings in `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(TimestampParser::from_config(config), config.parse_policy())
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    /// Parse a body according to the configured policy
    ///
    /// Under [`ParsePolicy::FailFast`] the first malformed line aborts the
    /// parse; under [`ParsePolicy::Skip`] malformed lines are logged and left out.
    pub fn parse_with_policy(&self, body: &str) -> Result<Vec<Reading>> {
        match self.policy {
            ParsePolicy::FailFast => self.parse(body),
            ParsePolicy::Skip => Ok(self.parse_lenient(body).readings),
        }
    }

    /// Parse every line, failing on the first malformed one
    pub fn parse(&self, body: &str) -> Result<Vec<Reading>> {
        let readings = feed_lines(body)
            .map(|(line_number, line)| self.parse_line(line_number, line))
            .collect::<Result<Vec<_>>>()?;

        debug!("Parsed {} readings from feed", readings.len());
        Ok(readings)
    }

    /// Parse every line, skipping malformed ones and recording why
    pub fn parse_lenient(&self, body: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut readings = Vec::new();

        for (line_number, line) in feed_lines(body) {
            stats.total_lines += 1;

            match self.parse_line(line_number, line) {
                Ok(reading) => {
                    readings.push(reading);
                    stats.readings_parsed += 1;
                }
                Err(e) => {
                    warn!("Skipping feed line: {}", e);
                    stats.lines_skipped += 1;
                    stats.errors.push(e.to_string());
                }
            }
        }

        info!(
            "Parsed {} of {} feed lines ({} skipped)",
            stats.readings_parsed, stats.total_lines, stats.lines_skipped
        );

        ParseResult { readings, stats }
    }

    /// Parse one feed line; `line_number` is 1-based and used in errors
    pub fn parse_line(&self, line_number: usize, line: &str) -> Result<Reading> {
        let parts = split_fields(line);
        let record = RawRecord::from_fields(&parts).ok_or_else(|| {
            SugarError::malformed_line(
                line_number,
                line,
                format!(
                    "expected at least {} tab-separated fields, found {}",
                    fields::MIN_FIELDS,
                    parts.len()
                ),
            )
        })?;

        let instant = self
            .timestamps
            .parse(record.timestamp)
            .map_err(|e| SugarError::malformed_line(line_number, line, e.to_string()))?;

        let raw = record.glucose.trim().parse::<u32>().map_err(|e| {
            SugarError::malformed_line(
                line_number,
                line,
                format!("invalid glucose value '{}': {}", record.glucose, e),
            )
        })?;

        Ok(Reading::new(
            instant,
            self.timestamps.render(&instant),
            convert(raw),
        ))
    }
}

/// Non-empty lines of a body, paired with their 1-based line number
fn feed_lines(body: &str) -> impl Iterator<Item = (usize, &str)> {
    body.split('\n')
        .enumerate()
        .map(|(index, line)| (index + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.is_empty())
}

/// Split a line on runs of tabs
fn split_fields(line: &str) -> Vec<&str> {
    TAB_RUN.split(line).collect()
}
