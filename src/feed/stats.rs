//! Parsing statistics and result structures for feed processing

use crate::models::Reading;

/// Parsing result with readings and basic statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Successfully parsed readings, in feed order
    pub readings: Vec<Reading>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParseStats {
    /// Total number of non-empty lines encountered
    pub total_lines: usize,

    /// Number of readings successfully parsed
    pub readings_parsed: usize,

    /// Number of lines skipped due to errors
    pub lines_skipped: usize,

    /// List of parsing errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            readings_parsed: 0,
            lines_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.readings_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// True when every line produced a reading
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = ParseStats::new();
        assert_eq!(stats.success_rate(), 0.0);
        assert!(stats.is_clean());
    }

    #[test]
    fn test_success_rate() {
        let stats = ParseStats {
            total_lines: 4,
            readings_parsed: 3,
            lines_skipped: 1,
            errors: vec!["line 2".to_string()],
        };

        assert_eq!(stats.success_rate(), 75.0);
        assert!(!stats.is_clean());
    }
}
