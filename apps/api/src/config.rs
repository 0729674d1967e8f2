use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Start the editor from the demo profile instead of a blank one.
    pub seed_profile: bool,
    pub toast_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            seed_profile: true,
            toast_duration_ms: 5_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            seed_profile: match lookup("SEED_PROFILE") {
                Some(v) => parse_bool(&v)
                    .with_context(|| format!("SEED_PROFILE must be true or false, got '{v}'"))?,
                None => defaults.seed_profile,
            },
            toast_duration_ms: match lookup("TOAST_DURATION_MS") {
                Some(v) => v
                    .parse::<u64>()
                    .context("TOAST_DURATION_MS must be a whole number of milliseconds")?,
                None => defaults.toast_duration_ms,
            },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.seed_profile);
        assert_eq!(config.toast_duration_ms, 5_000);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("SEED_PROFILE", "off"),
            ("TOAST_DURATION_MS", "2500"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert!(!config.seed_profile);
        assert_eq!(config.toast_duration_ms, 2_500);
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(Config::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SEED_PROFILE", "maybe")])).is_err());
    }
}
