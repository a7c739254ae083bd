//! Environment configuration for the server process.

use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection string. Defaults to a local file-backed SQLite store.
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: env_or("DATABASE_URL", "sqlite://pizzeria.db"),
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:5555"),
            max_connections: env_or("MAX_CONNECTIONS", "5")
                .parse()
                .unwrap_or(5),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        tracing::debug!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let config = AppConfig::from_env();
        assert_eq!(config.max_connections, 5);
        assert!(config.bind_addr.contains(':'));
    }
}
