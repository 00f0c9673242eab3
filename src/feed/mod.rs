//! Feed fetching and parsing
//!
//! The feed is fetched in one request and parsed fully in memory:
//! - [`client`] - HTTP GET against the configured endpoint
//! - [`parser`] - line and field splitting into [`Reading`](crate::models::Reading)s
//! - [`stats`] - statistics for lenient parsing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sugar_checker::config::Config;
//! use sugar_checker::feed::{FeedClient, FeedParser};
//!
//! # async fn example() -> sugar_checker::Result<()> {
//! let config = Config::from_env()?;
//! let body = FeedClient::from_config(&config).fetch().await?;
//! let readings = FeedParser::from_config(&config).parse(&body)?;
//!
//! println!("Latest reading: {}", readings[0].glucose_value());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod parser;
pub mod stats;

pub use client::FeedClient;
pub use parser::FeedParser;
pub use stats::{ParseResult, ParseStats};
