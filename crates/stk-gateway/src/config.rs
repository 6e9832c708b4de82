//! Configuration for the payment gateway.

use crate::confirm::ConfirmConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// PayHero provider configuration
    #[serde(default)]
    pub payhero: PayHeroConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment confirmation polling configuration
    #[serde(default)]
    pub confirm: ConfirmSettings,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayHeroConfig {
    /// PayHero API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Authorization header value for PayHero requests
    #[serde(default)]
    pub auth_token: String,

    /// Merchant channel/account identifier receiving the funds
    #[serde(default)]
    pub channel_id: String,

    /// Payment provider identifier
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Customer name used when the caller supplies none
    #[serde(default = "default_customer_name")]
    pub default_customer_name: String,

    /// Optional callback URL passed through to the provider
    #[serde(default)]
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmSettings {
    /// Total wall-clock budget for confirmation polling
    #[serde(default = "default_budget", with = "humantime_serde")]
    pub budget: Duration,

    /// Delay between consecutive status polls
    #[serde(default = "default_interval", with = "humantime_serde")]
    pub interval: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Global requests per minute
    #[serde(default = "default_global_rpm")]
    pub global_per_minute: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for PayHeroConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            auth_token: String::new(),
            channel_id: String::new(),
            provider: default_provider(),
            default_customer_name: default_customer_name(),
            callback_url: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for ConfirmSettings {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            interval: default_interval(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            global_per_minute: default_global_rpm(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://backend.payhero.co.ke/api/v2".into()
}

fn default_provider() -> String {
    "m-pesa".into()
}

fn default_customer_name() -> String {
    "Customer".into()
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_budget() -> Duration {
    Duration::from_secs(30)
}

fn default_interval() -> Duration {
    Duration::from_secs(5)
}

fn default_global_rpm() -> u32 {
    60
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Assemble the poller configuration from the provider and
    /// polling sections.
    pub fn confirm_config(&self) -> ConfirmConfig {
        ConfirmConfig {
            provider: self.payhero.provider.clone(),
            channel_id: self.payhero.channel_id.clone(),
            default_customer_name: self.payhero.default_customer_name.clone(),
            callback_url: self.payhero.callback_url.clone(),
            budget: self.confirm.budget,
            interval: self.confirm.interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ConfirmSettings::default();
        assert_eq!(settings.budget, Duration::from_secs(30));
        assert_eq!(settings.interval, Duration::from_secs(5));

        let payhero = PayHeroConfig::default();
        assert_eq!(payhero.provider, "m-pesa");
        assert!(payhero.channel_id.is_empty());
    }
}
