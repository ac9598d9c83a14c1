//! Mock request engine for testing
//!
//! Simulates GET requests without touching the network, making timing tests
//! fast and deterministic. The engine can be configured with a fixed
//! per-request latency and with failure injection, either failing every
//! request or starting at the Nth.

use super::{RequestCompletion, RequestEngine};
use crate::Result;
use std::thread;
use std::time::Duration;

/// Mock request engine
///
/// Every `get` sleeps for the configured latency and then either succeeds
/// with a canned 200 response or fails with a simulated transport fault.
pub struct MockEngine {
    /// Simulated per-request latency
    latency: Duration,
    /// Canned response body
    body: String,
    /// Fail every request from this sequence number on (0 = fail all)
    fail_from: Option<usize>,
    /// Number of requests served so far
    served: usize,
}

impl MockEngine {
    /// Create a mock engine with zero latency that succeeds every request
    pub fn new() -> Self {
        Self {
            latency: Duration::ZERO,
            body: "mock response".to_string(),
            fail_from: None,
            served: 0,
        }
    }

    /// Create a mock engine with a fixed per-request latency
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::new()
        }
    }

    /// Fail every request from the given sequence number on
    ///
    /// `fail_from(0)` fails all requests; `fail_from(2)` serves two requests
    /// normally and fails the third.
    pub fn fail_from(mut self, request: usize) -> Self {
        self.fail_from = Some(request);
        self
    }

    /// Number of requests this engine has been asked to perform
    pub fn served(&self) -> usize {
        self.served
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestEngine for MockEngine {
    fn get(&mut self, _url: &str) -> Result<RequestCompletion> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        let sequence = self.served;
        self.served += 1;

        if let Some(fail_from) = self.fail_from {
            if sequence >= fail_from {
                anyhow::bail!("simulated transport fault on request {}", sequence);
            }
        }

        Ok(RequestCompletion {
            status: 200,
            body_bytes: self.body.len() as u64,
        })
    }

    fn fetch_body(&mut self, url: &str) -> Result<String> {
        self.get(url)?;
        Ok(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_mock_engine_success() {
        let mut engine = MockEngine::new();
        let completion = engine.get("http://example.com/").unwrap();

        assert_eq!(completion.status, 200);
        assert_eq!(completion.body_bytes, "mock response".len() as u64);
        assert_eq!(engine.served(), 1);
    }

    #[test]
    fn test_mock_engine_latency() {
        let mut engine = MockEngine::with_latency(Duration::from_millis(20));

        let start = Instant::now();
        engine.get("http://example.com/").unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_mock_engine_fail_all() {
        let mut engine = MockEngine::new().fail_from(0);
        assert!(engine.get("http://example.com/").is_err());
    }

    #[test]
    fn test_mock_engine_fail_from_nth() {
        let mut engine = MockEngine::new().fail_from(2);

        assert!(engine.get("http://example.com/").is_ok());
        assert!(engine.get("http://example.com/").is_ok());
        assert!(engine.get("http://example.com/").is_err());
        assert_eq!(engine.served(), 3);
    }

    #[test]
    fn test_mock_engine_fetch_body() {
        let mut engine = MockEngine::new();
        assert_eq!(engine.fetch_body("http://example.com/").unwrap(), "mock response");
        // The diagnostic fetch counts as exactly one request
        assert_eq!(engine.served(), 1);
    }
}
