use anyhow::{anyhow, Context, Result};

use crate::matching::weights::MatchWeights;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or weights are invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub match_weights: MatchWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_weights: match_weights_from_env()?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Default weights, each overridable by its own `MATCH_WEIGHT_*` variable.
fn match_weights_from_env() -> Result<MatchWeights> {
    weights_from(|key| std::env::var(key).ok())
}

/// Builds and validates match weights, reading overrides through `lookup`.
fn weights_from(lookup: impl Fn(&str) -> Option<String>) -> Result<MatchWeights> {
    let defaults = MatchWeights::default();
    let weight = |key: &str, default: f64| -> Result<f64> {
        match lookup(key) {
            Some(raw) => parse_weight(key, &raw),
            None => Ok(default),
        }
    };

    let weights = MatchWeights {
        skills: weight("MATCH_WEIGHT_SKILLS", defaults.skills)?,
        experience: weight("MATCH_WEIGHT_EXPERIENCE", defaults.experience)?,
        education: weight("MATCH_WEIGHT_EDUCATION", defaults.education)?,
        location: weight("MATCH_WEIGHT_LOCATION", defaults.location)?,
    };
    weights
        .validate()
        .map_err(|e| anyhow!(e))
        .context("Invalid MATCH_WEIGHT_* configuration")?;
    Ok(weights)
}

fn parse_weight(key: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("{key} must be a number, got '{raw}'"))
}
