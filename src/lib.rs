//! Sugar Checker Library
//!
//! Fetches a tab-delimited feed of blood-glucose readings over HTTP and turns
//! it into spoken-style text for a voice assistant.
//!
//! This library provides tools for:
//! - Fetching the raw feed from a configured endpoint
//! - Parsing feed timestamps with colon, compact, hour-only or `Z` offsets
//! - Converting mg/dL measurements into mmol/L with half-up rounding
//! - Rendering one or several readings as text
//! - Typed errors for transport, parse and selection failures

pub mod cli;
pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod feed;
pub mod models;
pub mod render;
pub mod service;
pub mod timestamp;

// Re-export commonly used types
pub use config::{Config, DisplayPolicy, ParsePolicy};
pub use error::{Result, SugarError};
pub use feed::{FeedClient, FeedParser, ParseResult, ParseStats};
pub use models::{GlucoseValue, Reading};
pub use service::SugarChecker;
pub use timestamp::TimestampParser;
