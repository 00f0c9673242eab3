//! Configuration management and validation.
//!
//! Configuration is read once at startup (environment first, then CLI
//! overrides) and handed by value to the components that need it.

use chrono_tz::Tz;
use reqwest::Url;
use std::str::FromStr;
use tracing::{debug, info};

use crate::constants::{
    DEFAULT_SERVER_URL, DEFAULT_TIME_ZONE, ENV_DISPLAY_POLICY, ENV_PARSE_POLICY, ENV_SERVER_URL,
    ENV_TIME_ZONE,
};
use crate::error::{Result, SugarError};

/// How reading times are rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPolicy {
    /// Always normalize to UTC before formatting
    #[default]
    Utc,
    /// Convert into the configured display timezone
    Local,
}

impl FromStr for DisplayPolicy {
    type Err = SugarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" | "configured" => Ok(Self::Local),
            other => Err(SugarError::configuration(format!(
                "Unknown display policy '{}' (expected 'utc' or 'local')",
                other
            ))),
        }
    }
}

/// What to do with a feed line that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Abort the whole parse on the first malformed line
    #[default]
    FailFast,
    /// Record the failure and continue with the next line
    Skip,
}

impl FromStr for ParsePolicy {
    type Err = SugarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fail-fast" | "failfast" | "strict" => Ok(Self::FailFast),
            "skip" | "lenient" => Ok(Self::Skip),
            other => Err(SugarError::configuration(format!(
                "Unknown parse policy '{}' (expected 'fail-fast' or 'skip')",
                other
            ))),
        }
    }
}

/// Process-wide settings, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    server_url: Url,
    time_zone: Tz,
    display_policy: DisplayPolicy,
    parse_policy: ParsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: Url::parse(DEFAULT_SERVER_URL).expect("default server url is valid"),
            time_zone: chrono_tz::Pacific::Auckland,
            display_policy: DisplayPolicy::default(),
            parse_policy: ParsePolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = lookup(ENV_SERVER_URL).unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let time_zone = lookup(ENV_TIME_ZONE).unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string());

        let display_policy = match lookup(ENV_DISPLAY_POLICY) {
            Some(value) => value.parse()?,
            None => DisplayPolicy::default(),
        };
        let parse_policy = match lookup(ENV_PARSE_POLICY) {
            Some(value) => value.parse()?,
            None => ParsePolicy::default(),
        };

        let config = Self {
            server_url: parse_server_url(&server_url)?,
            time_zone: parse_time_zone(&time_zone)?,
            display_policy,
            parse_policy,
        };

        info!("Setting display time zone to: {}", config.time_zone);
        debug!(
            "Loaded configuration: url={}, display={:?}, parse={:?}",
            config.server_url, config.display_policy, config.parse_policy
        );

        Ok(config)
    }

    /// Override the feed endpoint
    pub fn with_server_url(mut self, url: &str) -> Result<Self> {
        self.server_url = parse_server_url(url)?;
        Ok(self)
    }

    /// Override the display timezone
    pub fn with_time_zone(mut self, name: &str) -> Result<Self> {
        self.time_zone = parse_time_zone(name)?;
        Ok(self)
    }

    /// Override the display policy
    pub fn with_display_policy(mut self, policy: DisplayPolicy) -> Self {
        self.display_policy = policy;
        self
    }

    /// Override the parse policy
    pub fn with_parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.parse_policy = policy;
        self
    }

    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn display_policy(&self) -> DisplayPolicy {
        self.display_policy
    }

    pub fn parse_policy(&self) -> ParsePolicy {
        self.parse_policy
    }
}

fn parse_server_url(value: &str) -> Result<Url> {
    let url = Url::parse(value.trim()).map_err(|e| {
        SugarError::configuration(format!("Invalid server url '{}': {}", value, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(SugarError::configuration(format!(
            "Unsupported url scheme '{}' in '{}'",
            scheme, value
        ))),
    }
}

fn parse_time_zone(value: &str) -> Result<Tz> {
    value.trim().parse::<Tz>().map_err(|e| {
        SugarError::configuration(format!("Invalid time zone '{}': {}", value, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_environment_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.server_url().as_str(), DEFAULT_SERVER_URL);
        assert_eq!(config.time_zone(), chrono_tz::Pacific::Auckland);
        assert_eq!(config.display_policy(), DisplayPolicy::Utc);
        assert_eq!(config.parse_policy(), ParsePolicy::FailFast);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_environment_values_are_used() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_URL", "http://localhost:8080/api/v1/entries"),
            ("TIME_ZONE", "Europe/London"),
            ("DISPLAY_POLICY", "local"),
            ("PARSE_POLICY", "skip"),
        ]))
        .unwrap();

        assert_eq!(config.server_url().as_str(), "http://localhost:8080/api/v1/entries");
        assert_eq!(config.time_zone(), chrono_tz::Europe::London);
        assert_eq!(config.display_policy(), DisplayPolicy::Local);
        assert_eq!(config.parse_policy(), ParsePolicy::Skip);
    }

    #[test]
    fn test_invalid_time_zone_rejected() {
        let result = Config::from_lookup(lookup_from(&[("TIME_ZONE", "Mars/Olympus_Mons")]));
        assert!(matches!(result, Err(SugarError::Configuration { .. })));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = Config::from_lookup(lookup_from(&[("SERVER_URL", "not a url")]));
        assert!(matches!(result, Err(SugarError::Configuration { .. })));

        let result = Config::default().with_server_url("ftp://example.com/entries");
        assert!(matches!(result, Err(SugarError::Configuration { .. })));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result = Config::from_lookup(lookup_from(&[("PARSE_POLICY", "sometimes")]));
        assert!(matches!(result, Err(SugarError::Configuration { .. })));

        assert!("nowhere".parse::<DisplayPolicy>().is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_server_url("https://example.com/entries")
            .unwrap()
            .with_time_zone("UTC")
            .unwrap()
            .with_display_policy(DisplayPolicy::Local)
            .with_parse_policy(ParsePolicy::Skip);

        assert_eq!(config.server_url().host_str(), Some("example.com"));
        assert_eq!(config.time_zone(), chrono_tz::UTC);
        assert_eq!(config.display_policy(), DisplayPolicy::Local);
        assert_eq!(config.parse_policy(), ParsePolicy::Skip);
    }
}
