use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CORS_ORIGINS: &str = "http://127.0.0.1:8080,http://127.0.0.1:3000";
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Pages are kept in memory when unset
    pub database_url: Option<String>,
    pub cors_origins: Vec<String>,
    pub max_body_bytes: usize,
    pub frontend_dist: String,
}

#[derive(Debug, Error)]
#[error("invalid value for {name}: {value:?}")]
pub struct InvalidVar {
    pub name: &'static str,
    pub value: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database_url: None,
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            frontend_dist: DEFAULT_FRONTEND_DIST.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, InvalidVar> {
        dotenvy::from_path(".env").ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, InvalidVar>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|_| InvalidVar { name: "BIND_ADDR", value: bind.clone() })?;

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|_| InvalidVar { name: "MAX_BODY_BYTES", value: value.clone() })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            bind_addr,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            cors_origins: split_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())),
            max_body_bytes,
            frontend_dist: lookup("FRONTEND_DIST").unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string()),
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(config.database_url.is_none());
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn test_reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "0.0.0.0:8000"),
            ("DATABASE_URL", "postgres://localhost/lander"),
            ("CORS_ORIGINS", "https://a.example, https://b.example ,"),
            ("MAX_BODY_BYTES", "2048"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/lander"));
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.max_body_bytes, 2048);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = ServerConfig::from_lookup(lookup_from(&[("MAX_BODY_BYTES", "lots")])).unwrap_err();
        assert_eq!(err.name, "MAX_BODY_BYTES");
        assert_eq!(err.to_string(), "invalid value for MAX_BODY_BYTES: \"lots\"");
        assert!(ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "nowhere")])).is_err());
    }
}
