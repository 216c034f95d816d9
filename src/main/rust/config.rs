use std::time::Duration;

use clap::Parser;

use crate::domain::errors::Result;
use crate::domain::value_objects::{Endpoint, ReporterConfig, DEFAULT_BASE_URL};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "mircord-reporter",
    version = "0.1.0",
    about = "Publishes bot server and shard counts to the Mircord stats collector"
)]
pub struct Config {
    /// Mircord API key, sent as the Authorization header
    #[arg(long, env = "MIRCORD_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Stats collector URL
    #[arg(long, env = "MIRCORD_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds between scheduled updates (non-positive falls back to 120)
    #[arg(long, env = "MIRCORD_UPDATE_INTERVAL", default_value = "120", allow_hyphen_values = true)]
    pub update_interval: i64,

    /// Seconds to wait before retrying a throttled update (non-positive falls back to 120)
    #[arg(long, env = "MIRCORD_RETRY_AFTER", default_value = "120", allow_hyphen_values = true)]
    pub retry_after: i64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "10")]
    pub request_timeout: u64,

    /// Server count to publish
    #[arg(long, env = "MIRCORD_SERVERS", default_value = "0")]
    pub servers: u64,

    /// Shard count to publish
    #[arg(long, env = "MIRCORD_SHARDS", default_value = "1")]
    pub shards: u64,

    /// Metrics server port
    #[arg(long, env = "METRICS_PORT", default_value = "9003")]
    pub metrics_port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Minimum allowed port (ports below 1024 are privileged)
const MIN_USER_PORT: u16 = 1024;

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("API key cannot be empty");
        }

        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            anyhow::bail!("Collector URL must start with http:// or https://");
        }

        Self::validate_port(self.metrics_port, "metrics")?;

        if self.request_timeout == 0 {
            anyhow::bail!("Request timeout cannot be 0");
        }

        Ok(())
    }

    fn validate_port(port: u16, name: &str) -> anyhow::Result<()> {
        if port == 0 {
            anyhow::bail!("Invalid {} port: port cannot be 0", name);
        }
        if port < MIN_USER_PORT {
            anyhow::bail!(
                "Invalid {} port: {} is a privileged port (< {}). Use a port >= {}",
                name,
                port,
                MIN_USER_PORT,
                MIN_USER_PORT
            );
        }
        Ok(())
    }

    pub fn to_endpoint(&self) -> Result<Endpoint> {
        Endpoint::new(self.base_url.clone(), self.api_key.clone())
    }

    pub fn to_reporter_config(&self) -> ReporterConfig {
        ReporterConfig::new(self.retry_after, self.update_interval)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
