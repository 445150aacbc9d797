use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_UPLOAD_DIR, ENV_API_KEY, ENV_BIND_ADDR, ENV_MAX_UPLOAD_BYTES,
    ENV_RELAY_TIMEOUT_SECS, ENV_UPLOAD_DIR, ENV_VISION_API_URL, ENV_VISION_MODEL,
    RELAY_SOURCE_FILE, VISION_API_URL, VISION_MODEL,
};
use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is required but not set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Settings resolved once at startup and shared read-only with every handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub bind_addr: SocketAddr,
    pub upload_dir: PathBuf,
    pub api_url: String,
    pub model: String,
    /// Hard cap on the `/image` request body; unset means no cap.
    pub max_upload_bytes: Option<usize>,
    pub relay_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_API_KEY))?;

        let bind_addr = parse_or(&lookup, ENV_BIND_ADDR, DEFAULT_BIND_ADDR)?;
        let max_upload_bytes = lookup(ENV_MAX_UPLOAD_BYTES)
            .map(|raw| parse::<usize>(ENV_MAX_UPLOAD_BYTES, &raw))
            .transpose()?;
        let relay_timeout = lookup(ENV_RELAY_TIMEOUT_SECS)
            .map(|raw| parse::<u64>(ENV_RELAY_TIMEOUT_SECS, &raw))
            .transpose()?
            .map(Duration::from_secs);

        Ok(Config {
            api_key,
            bind_addr,
            upload_dir: PathBuf::from(
                lookup(ENV_UPLOAD_DIR).unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            api_url: lookup(ENV_VISION_API_URL).unwrap_or_else(|| VISION_API_URL.to_string()),
            model: lookup(ENV_VISION_MODEL).unwrap_or_else(|| VISION_MODEL.to_string()),
            max_upload_bytes,
            relay_timeout,
        })
    }

    pub fn relay_source_path(&self) -> PathBuf {
        self.upload_dir.join(RELAY_SOURCE_FILE)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    parse(key, &raw)
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
