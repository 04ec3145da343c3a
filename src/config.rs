//! Configuration and CLI argument handling

use clap::Parser;

use crate::intervals::{parse_interval, Interval};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "activity-reminder")]
#[command(about = "Reminds you to take a break on a repeating countdown")]
#[command(version)]
pub struct Config {
    /// Port for the control API
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address for the control API
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Interval to start at launch (15m, 30m, 45m, 1h, 1.5h, 2h, 4h)
    #[arg(short, long, value_parser = parse_interval)]
    pub interval: Option<Interval>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
