use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 18000;
const DEFAULT_STORE_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upper bound for every wait on the league store.
    pub store_timeout: Duration,
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            store_timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();

        ServerConfig {
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            store_timeout: Duration::from_millis(parse_or(
                "STORE_TIMEOUT_MS",
                lookup("STORE_TIMEOUT_MS"),
                DEFAULT_STORE_TIMEOUT_MS,
            )),
            seed_file: lookup("SEED_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{}='{}' is not valid, using {}", key, raw, default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), ServerConfig::default());
    }

    #[test]
    fn test_values_from_env() {
        let config = config(&[("PORT", "8080"), ("STORE_TIMEOUT_MS", "150"), ("SEED_FILE", "seed.json")]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.store_timeout, Duration::from_millis(150));
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config(&[("PORT", "eighty"), ("STORE_TIMEOUT_MS", "-1"), ("SEED_FILE", " ")]);

        assert_eq!(config, ServerConfig::default());
    }
}
