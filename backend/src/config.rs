use axum::http::HeaderValue;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const STAGING_PORT: u16 = 3100;
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("FRONTEND_URL is not a valid origin: {0:?}")]
    InvalidFrontendUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("staging") => Environment::Staging,
            Some("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Environment::Staging => STAGING_PORT,
            _ => DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    pub port: u16,
    pub dist_dir: PathBuf,
    pub frontend_url: HeaderValue,
}

impl ServerConfig {
    /// Reads `ENVIRONMENT`, `PORT`, `SITE_DIST_DIR` and `FRONTEND_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = Environment::parse(non_empty("ENVIRONMENT").as_deref());
        let port = match non_empty("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => environment.default_port(),
        };
        let dist_dir = non_empty("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let raw_url = non_empty("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        let frontend_url = HeaderValue::from_str(raw_url.trim_end_matches('/'))
            .map_err(|_| ConfigError::InvalidFrontendUrl(raw_url.clone()))?;

        Ok(ServerConfig {
            environment,
            port,
            dist_dir,
            frontend_url,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.frontend_url, "http://localhost:8080");
    }

    #[test]
    fn staging_moves_the_default_port() {
        let config = config(&[("ENVIRONMENT", "staging")]).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.port, 3100);
    }

    #[test]
    fn explicit_port_wins() {
        let config = config(&[("ENVIRONMENT", "staging"), ("PORT", "8000")]).unwrap();
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn rejects_bad_port() {
        assert_eq!(
            config(&[("PORT", "http")]).unwrap_err(),
            ConfigError::InvalidPort("http".into())
        );
        assert!(config(&[("PORT", "0")]).is_err());
    }

    #[test]
    fn frontend_url_trailing_slash_is_dropped() {
        let config = config(&[("FRONTEND_URL", "https://lexia.id/")]).unwrap();
        assert_eq!(config.frontend_url, "https://lexia.id");
    }

    #[test]
    fn rejects_unprintable_origin() {
        assert!(matches!(
            config(&[("FRONTEND_URL", "https://lexia.id\n")]),
            Err(ConfigError::InvalidFrontendUrl(_))
        ));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = config(&[("SITE_DIST_DIR", " "), ("PORT", "")]).unwrap();
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.port, 3000);
        assert_eq!(config.index_file(), PathBuf::from("frontend/dist/index.html"));
    }
}
