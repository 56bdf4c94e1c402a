//! Shared host state for the `/api` forwarder.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct HostState {
    pub http: reqwest::Client,
    pub upstream: Option<Arc<str>>,
}

impl HostState {
    /// # Errors
    ///
    /// Returns the reqwest error when the TLS backend cannot initialize.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self { http, upstream: config.api_upstream.as_deref().map(Arc::from) })
    }
}
