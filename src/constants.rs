//! Application constants for the sugar checker
//!
//! Default endpoints, environment variable names, unit conversion and
//! display formats used throughout the crate.

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Environment variable holding the feed endpoint
pub const ENV_SERVER_URL: &str = "SERVER_URL";

/// Environment variable holding the display timezone (IANA name)
pub const ENV_TIME_ZONE: &str = "TIME_ZONE";

/// Environment variable selecting the display policy (`utc` or `local`)
pub const ENV_DISPLAY_POLICY: &str = "DISPLAY_POLICY";

/// Environment variable selecting the parse policy (`fail-fast` or `skip`)
pub const ENV_PARSE_POLICY: &str = "PARSE_POLICY";

/// Feed endpoint used when `SERVER_URL` is unset
pub const DEFAULT_SERVER_URL: &str = "https://blackdot101.herokuapp.com/api/v1/entries";

/// Display timezone used when `TIME_ZONE` is unset
pub const DEFAULT_TIME_ZONE: &str = "Pacific/Auckland";

// =============================================================================
// Feed Format
// =============================================================================

/// Feed line field positions
pub mod fields {
    /// Timestamp text, e.g. `2018-03-26T03:59:41.000+0000`
    pub const TIMESTAMP: usize = 0;

    /// Epoch-millisecond record id (unused)
    pub const RECORD_ID: usize = 1;

    /// Raw glucose measurement in mg/dL
    pub const GLUCOSE: usize = 2;

    /// Trend label such as `FortyFiveDown` (unused)
    pub const TREND: usize = 3;

    /// Sensor/device id (unused)
    pub const DEVICE: usize = 4;

    /// Minimum number of fields a usable line must carry
    pub const MIN_FIELDS: usize = GLUCOSE + 1;
}

// =============================================================================
// Units and Display
// =============================================================================

/// Divisor converting mg/dL into mmol/L
pub const MGDL_PER_MMOL: u64 = 18;

/// Format used for rendered reading times
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator appended after every reading in a multi-reading rendering
pub const READING_SEPARATOR: &str = " \n";
