use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://database.db".into());
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => 5,
        };
        anyhow::ensure!(
            max_connections > 0,
            "DATABASE_MAX_CONNECTIONS must be a positive integer"
        );
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".into());
        let port = match lookup("APP_PORT") {
            Some(v) => v.parse::<u16>().context("APP_PORT must be a port number")?,
            None => 8000,
        };
        Ok(Self {
            database_url,
            max_connections,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url, "sqlite://database.db");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://other.db"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "9090"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));
    }

    #[test]
    fn rejects_zero_max_connections() {
        let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("DATABASE_MAX_CONNECTIONS"));
    }
}
