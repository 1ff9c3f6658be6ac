use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub mongo: MongoConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// `ENV=production` selects production; anything else is development.
    pub fn from_env() -> Self {
        Self::parse(env::var("ENV").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Whether a local `.env` file should be loaded at startup
    pub fn loads_dotenv(&self) -> bool {
        !matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub request_timeout_secs: u64,
    /// Allowed CORS origins; `["*"]` allows any origin
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8080;

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            request_timeout_secs: 15,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let uri = get("MONGO_URI").ok_or(ConfigError::Missing("MONGO_URI"))?;
        let database = get("MONGO_DB").ok_or(ConfigError::Missing("MONGO_DB"))?;

        let config = Self {
            environment: Environment::parse(get("ENV").as_deref()),
            mongo: MongoConfig { uri, database },
            server: ServerConfig::default(),
        };

        config.with_overrides(get)
    }

    fn with_overrides<F>(mut self, get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = get("PORT") {
            self.server.port = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: v })?;
        }
        if let Some(v) = get("HTTP_REQUEST_TIMEOUT_SECS") {
            self.server.request_timeout_secs = match v.trim().parse() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "HTTP_REQUEST_TIMEOUT_SECS",
                        value: v,
                    })
                }
            };
        }
        if let Some(v) = get("CORS_ALLOWED_ORIGINS") {
            self.server.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(self)
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn requires_mongo_variables() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing("MONGO_URI"));
        assert_eq!(
            load(&[("MONGO_URI", "mongodb://localhost:27017")]).unwrap_err(),
            ConfigError::Missing("MONGO_DB")
        );
        assert_eq!(
            load(&[("MONGO_DB", "testdb")]).unwrap_err(),
            ConfigError::Missing("MONGO_URI")
        );
        assert_eq!(
            load(&[("MONGO_URI", ""), ("MONGO_DB", "testdb")]).unwrap_err(),
            ConfigError::Missing("MONGO_URI")
        );
    }

    #[test]
    fn missing_variable_message_names_it() {
        assert_eq!(
            ConfigError::Missing("MONGO_DB").to_string(),
            "MONGO_DB is required"
        );
    }

    #[test]
    fn applies_defaults() {
        let config = load(&[
            ("MONGO_URI", "mongodb://localhost:27017"),
            ("MONGO_DB", "testdb"),
        ])
        .unwrap();
        assert_eq!(config.mongo.uri, "mongodb://localhost:27017");
        assert_eq!(config.mongo.database, "testdb");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.server.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn applies_overrides() {
        let config = load(&[
            ("MONGO_URI", "mongodb://db:27017"),
            ("MONGO_DB", "menus"),
            ("PORT", "9090"),
            ("ENV", "production"),
            ("HTTP_REQUEST_TIMEOUT_SECS", "30"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example"),
        ])
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.environment, Environment::Production);
        assert!(!config.environment.loads_dotenv());
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(
            config.server.cors_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn rejects_invalid_port() {
        let err = load(&[
            ("MONGO_URI", "mongodb://db:27017"),
            ("MONGO_DB", "menus"),
            ("PORT", "eighty"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn non_production_environments_load_dotenv() {
        assert_eq!(Environment::parse(Some("staging")), Environment::Development);
        assert_eq!(Environment::parse(None), Environment::Development);
        assert!(Environment::Development.loads_dotenv());
    }
}
