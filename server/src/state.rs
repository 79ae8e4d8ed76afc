//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the upstream backend and that backend's
//! origin; there is no server-side session or data cache.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ConfigError, ServerConfig};

/// Clone is required by Axum; the client is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, backend: Arc::from(config.backend_url.as_str()) })
    }
}
