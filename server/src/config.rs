//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8100";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `BACKEND_URL` must be an absolute `http(s)` origin.
    #[error("invalid BACKEND_URL: {0}")]
    InvalidBackendUrl(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub backend_url: String,
    pub timeouts: ProxyTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: upstream receiving `/api/*`, default `http://127.0.0.1:8100`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    /// - `PROXY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` or `BACKEND_URL` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let backend_url = parse_backend_url(std::env::var("BACKEND_URL").ok().as_deref())?;
        let timeouts = ProxyTimeouts {
            request_secs: env_parse_u64("PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS),
            connect_secs: env_parse_u64("PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { port, backend_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_BACKEND_URL.to_owned()),
        Some(value) => value,
    };
    let has_scheme = value.starts_with("http://") || value.starts_with("https://");
    let has_host = value.split("://").nth(1).is_some_and(|rest| !rest.trim_matches('/').is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::InvalidBackendUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}
