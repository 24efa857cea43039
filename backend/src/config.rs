use std::path::PathBuf;
use std::time::Duration;

use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not valid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub port: u16,
    pub engine_url: Url,
    pub engine_timeout: Duration,
    pub images_dir: PathBuf,
    pub frontend_dir: PathBuf,
}

impl AppConfig {
    /// Reads the process environment, after `.env` has been loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("COMPARISON_ENGINE_URL").ok_or(ConfigError::Missing("COMPARISON_ENGINE_URL"))?;
        let engine_url = Url::parse(&raw_url).map_err(|e| ConfigError::Invalid {
            name: "COMPARISON_ENGINE_URL",
            reason: e.to_string(),
        })?;

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => 8081,
        };

        let timeout_secs = match lookup("ENGINE_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "ENGINE_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => 300,
        };

        let frontend_dir = lookup("FRONTEND_DIR").map(PathBuf::from).unwrap_or_else(|| {
            match lookup("CARGO_MANIFEST_DIR") {
                Some(manifest_dir) => PathBuf::from(format!("{}/../frontend/dist", manifest_dir)),
                None => PathBuf::from("/usr/src/app/frontend/dist"),
            }
        });

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            engine_url,
            engine_timeout: Duration::from_secs(timeout_secs),
            images_dir: lookup("IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("images")),
            frontend_dir,
        })
    }

    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
