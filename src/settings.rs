//! Runtime settings read from the environment (optionally seeded from `.env`).

use crate::error::ConfigError;

/// Store used when `DATABASE_URL` is unset: a SQLite file next to the process, created on first open.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://starwars.db?mode=rwc";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub body_limit: usize,
}

impl Settings {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Missing keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .map(|s| normalize_database_url(&s))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?;
        let body_limit = parse_or("BODY_LIMIT_BYTES", lookup("BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT)?;
        Ok(Settings {
            database_url,
            host,
            port,
            max_connections,
            body_limit,
        })
    }

    /// `host:port` for the listener. Hostnames are resolved when binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Hosted Postgres providers hand out `postgres://`; keep the canonical scheme.
fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn falls_back_to_sqlite_file() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.port, 3000);
        assert_eq!(s.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn rewrites_postgres_scheme() {
        let s = settings(&[("DATABASE_URL", "postgres://u:p@db:5432/sw")]).unwrap();
        assert_eq!(s.database_url, "postgresql://u:p@db:5432/sw");
    }

    #[test]
    fn hostname_is_kept_for_binding() {
        let s = settings(&[("HOST", "localhost"), ("PORT", "8080")]).unwrap();
        assert_eq!(s.bind_addr(), "localhost:8080");
    }

    #[tokio::test]
    async fn hostname_bind_addr_resolves() {
        let s = settings(&[("HOST", "localhost"), ("PORT", "0")]).unwrap();
        let listener = tokio::net::TcpListener::bind(s.bind_addr()).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[test]
    fn rejects_bad_port() {
        let err = settings(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }
}
