//! Command-line interface components.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::config::{Config, DisplayPolicy, ParsePolicy};
use crate::render::{render_json, select_readings};
use crate::service::SugarChecker;

#[derive(Parser, Debug)]
#[command(name = "sugar-checker")]
#[command(about = "Fetch the latest blood-glucose readings and read them out")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Number of most recent readings to report (defaults to the latest one)
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<String>,

    /// Feed endpoint, overriding SERVER_URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Display time zone, overriding TIME_ZONE
    #[arg(long, value_name = "TZ")]
    pub time_zone: Option<String>,

    /// Render times in the display time zone instead of UTC
    #[arg(long)]
    pub local_time: bool,

    /// Skip malformed feed lines instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// How readings are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Spoken-style sentences
    Text,
    /// JSON array of readings
    Json,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Apply command-line overrides on top of an environment-derived config
    pub fn apply_to(&self, mut config: Config) -> crate::Result<Config> {
        if let Some(url) = &self.url {
            config = config.with_server_url(url)?;
        }
        if let Some(time_zone) = &self.time_zone {
            config = config.with_time_zone(time_zone)?;
        }
        if self.local_time {
            config = config.with_display_policy(DisplayPolicy::Local);
        }
        if self.skip_malformed {
            config = config.with_parse_policy(ParsePolicy::Skip);
        }
        Ok(config)
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sugar_checker={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Run one query and return the text to print
pub async fn run(args: &Args) -> Result<String> {
    let config = Config::from_env().context("Failed to load configuration from environment")?;
    let config = args
        .apply_to(config)
        .context("Invalid command-line configuration")?;

    let checker = SugarChecker::new(&config);

    match args.format {
        OutputFormat::Text => Ok(checker.get_readings(args.count.as_deref()).await?),
        OutputFormat::Json => {
            let readings = checker.fetch_readings().await?;
            let selected = select_readings(&readings, args.count.as_deref())?;
            render_json(selected).context("Failed to serialize readings")
        }
    }
}
