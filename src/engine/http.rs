//! HTTP request engine
//!
//! Blocking HTTP transport used for real load runs. One client is built per
//! worker; requests carry no custom headers and no cookie state, so every
//! GET is independent of the ones before it.

use super::{RequestCompletion, RequestEngine};
use crate::config::TargetConfig;
use crate::Result;
use anyhow::Context;
use std::time::Duration;

/// Request engine backed by a blocking HTTP client
pub struct HttpEngine {
    client: reqwest::blocking::Client,
}

impl HttpEngine {
    /// Create a new HTTP engine for the given target
    ///
    /// Applies the per-request transport timeout when one is configured;
    /// otherwise requests may block indefinitely, matching a run with no
    /// timeout mechanism.
    pub fn new(target: &TargetConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(target.timeout_secs.map(Duration::from_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl RequestEngine for HttpEngine {
    fn get(&mut self, url: &str) -> Result<RequestCompletion> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {} failed", url))?;

        let status = response.status().as_u16();

        // Read the body to completion so elapsed time covers the transfer
        let body = response
            .bytes()
            .with_context(|| format!("Failed to read response body from {}", url))?;

        Ok(RequestCompletion {
            status,
            body_bytes: body.len() as u64,
        })
    }

    fn fetch_body(&mut self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {} failed", url))?;

        response
            .text()
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}
