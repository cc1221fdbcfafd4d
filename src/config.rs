use std::env;

use anyhow::{Context, Result};

pub const BOT_NAME: &str = "Tardigrade1";
pub const SEED_VAR: &str = "TARDIGRADE_SEED";
pub const LOG_VAR: &str = "TARDIGRADE_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

/// Start-up settings. The engine passes no arguments, so anything tunable
/// comes from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bot_name: String,
    /// Fixed seed for target sampling; fresh entropy when absent.
    pub seed: Option<u64>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(SEED_VAR) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_VAR, raw))?,
            ),
            None => None,
        };
        let log_filter = lookup(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            bot_name: BOT_NAME.to_string(),
            seed,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bot_name, BOT_NAME);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_seed_and_filter() {
        let config = config_from(&[(SEED_VAR, " 42 "), (LOG_VAR, "debug")]).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn rejects_a_malformed_seed() {
        let err = config_from(&[(SEED_VAR, "soon")]).unwrap_err();
        assert!(err.to_string().contains(SEED_VAR));
    }
}
