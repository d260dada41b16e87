use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Which car store backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Mongo,
    Memory,
}

/// Credentials and location of the MongoDB deployment.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub scheme: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub database: String,
}

impl MongoConfig {
    /// Connection string with the password percent-encoded.
    pub fn uri(&self) -> String {
        let user: String = url::form_urlencoded::byte_serialize(self.user.as_bytes()).collect();
        let password: String =
            url::form_urlencoded::byte_serialize(self.password.as_bytes()).collect();
        format!(
            "{}://{}:{}@{}/?retryWrites=true&w=majority&authSource=admin",
            self.scheme, user, password, self.host
        )
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreKind,
    /// Present whenever `store` is `StoreKind::Mongo`.
    pub mongo: Option<MongoConfig>,
    pub server_port: u16,
    pub log_level: String,
    pub frontend_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("CAR_STORE").as_deref() {
            None | Some("mongo") => StoreKind::Mongo,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "CAR_STORE",
                    value: other.to_string(),
                })
            }
        };

        let mongo = match store {
            StoreKind::Mongo => Some(MongoConfig::from_lookup(&lookup)?),
            StoreKind::Memory => None,
        };

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: raw,
            })?,
            None => 8000,
        };

        Ok(Config {
            store,
            mongo,
            server_port,
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            frontend_dir: lookup("FRONTEND_DIR")
                .unwrap_or_else(|| "frontend".to_string())
                .into(),
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| "static".to_string())
                .into(),
        })
    }
}

impl MongoConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingEnvVar(name))
        };

        Ok(MongoConfig {
            scheme: lookup("MONGO_SCHEME").unwrap_or_else(|| "mongodb+srv".to_string()),
            user: required("MONGO_USER")?,
            password: required("MONGO_PASS")?,
            host: required("MONGO_HOST")?,
            database: lookup("DB_NAME").unwrap_or_else(|| "car_dealer".to_string()),
        })
    }
}
