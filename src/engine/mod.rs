//! Request engine abstraction
//!
//! This module defines the core abstraction for request engines in HTTPulse.
//! A request engine is responsible for performing a single blocking GET
//! against the target URL and reporting what came back. The worker threads
//! are agnostic to the underlying transport, which keeps the timing loop
//! independent of any concrete HTTP client and makes it testable against a
//! simulated transport.
//!
//! # Engine Types
//!
//! - **Http**: real network requests via a blocking HTTP client (default)
//! - **Mock**: simulated requests with configurable latency and failure
//!   injection, used in tests

use crate::config::{Config, EngineKind};
use crate::Result;

pub mod http;
pub mod mock;

/// Request engine trait for all transports
///
/// Engines must be `Send` so they can be handed to worker threads, but are
/// not required to be `Sync`: each worker owns its own engine instance.
///
/// A call to [`get`](RequestEngine::get) blocks until the response body has
/// been fully received or the transport reports a fault. Timing happens in
/// the caller, around the call, so engines do not measure anything
/// themselves.
pub trait RequestEngine: Send {
    /// Perform one blocking GET against `url`, reading the full response body.
    ///
    /// A non-2xx status is not an error: the completion carries the status
    /// code but callers record elapsed time regardless. Only transport-level
    /// faults (connection refused, DNS failure, timeout) return `Err`.
    fn get(&mut self, url: &str) -> Result<RequestCompletion>;

    /// Perform one GET against `url` and return the response body as text.
    ///
    /// Used by the one-shot verbose diagnostic fetch, never by the timed
    /// worker loop.
    fn fetch_body(&mut self, url: &str) -> Result<String>;
}

/// Completed request
///
/// What an engine observed for one GET. Recorded, never judged: workers do
/// not branch on the status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestCompletion {
    /// HTTP status code of the response
    pub status: u16,
    /// Number of body bytes received
    pub body_bytes: u64,
}

/// Create a request engine from configuration
///
/// Engine construction performs no network I/O; the first request happens
/// inside the worker loop.
pub fn create(config: &Config) -> Result<Box<dyn RequestEngine>> {
    let engine: Box<dyn RequestEngine> = match config.workers.engine {
        EngineKind::Http => Box::new(http::HttpEngine::new(&config.target)?),
        EngineKind::Mock => Box::new(mock::MockEngine::new()),
    };

    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, TargetConfig, WorkerConfig};

    fn config_with_engine(engine: EngineKind) -> Config {
        Config {
            target: TargetConfig {
                url: "http://127.0.0.1:1/".to_string(),
                timeout_secs: None,
            },
            workers: WorkerConfig {
                processes: 1,
                requests_per_process: 1,
                engine,
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_create_http_engine() {
        // Construction must not touch the network even for an unreachable URL
        assert!(create(&config_with_engine(EngineKind::Http)).is_ok());
    }

    #[test]
    fn test_create_mock_engine() {
        let mut engine = create(&config_with_engine(EngineKind::Mock)).unwrap();
        let completion = engine.get("http://127.0.0.1:1/").unwrap();
        assert_eq!(completion.status, 200);
    }
}
