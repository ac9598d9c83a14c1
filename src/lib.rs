//! HTTPulse - minimal HTTP load-generation tool
//!
//! HTTPulse issues a configurable volume of GET requests against a single
//! target URL, distributing the work across a fixed number of concurrent
//! workers, and reports per-request and per-worker latency plus an overall
//! average.
//!
//! # Architecture
//!
//! - **Request engines**: pluggable transport behind a trait (HTTP, mock)
//! - **Workers**: one thread per worker, strictly sequential timed requests
//! - **Coordinator**: explicit spawn/join barrier, mean-of-means reduction
//! - **Stats**: per-request samples plus latency histograms per worker

pub mod config;
pub mod coordinator;
pub mod engine;
pub mod output;
pub mod stats;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use engine::RequestEngine;

/// Result type used throughout HTTPulse
pub type Result<T> = anyhow::Result<T>;
