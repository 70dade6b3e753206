// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.
//!
//! Scoring parameters that the product has not pinned down (collective-day
//! point value, the assumed-duration fallback) live here so deployments can
//! set them explicitly instead of inheriting a hardcode.

use std::env;

use crate::services::RuleSet;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Active scoring rule set
    pub rules: RuleSet,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            rules: RuleSet::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = RuleSet::default();
        let rules = RuleSet {
            version: env::var("RULES_VERSION").unwrap_or(defaults.version),
            min_qualifying_minutes: parse_var(
                "MIN_QUALIFYING_MINUTES",
                defaults.min_qualifying_minutes,
            )?,
            collective_day_points: parse_var(
                "COLLECTIVE_DAY_POINTS",
                defaults.collective_day_points,
            )?,
            individual_day_points: defaults.individual_day_points,
            manual_day_points: defaults.manual_day_points,
            assumed_duration_minutes: parse_optional_var("ASSUMED_DURATION_MINUTES")?,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: parse_var("PORT", 8080)?,
            rules,
        })
    }
}

/// Parse an env var with a default when unset; a set-but-invalid value is
/// an error rather than a silent fallback.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

fn parse_optional_var<T: std::str::FromStr>(
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
