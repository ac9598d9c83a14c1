//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete run configuration
///
/// Built once at startup (from CLI arguments, optionally merged with a TOML
/// configuration file) and shared read-only into the coordinator and every
/// worker via `Arc<Config>`. Never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub target: TargetConfig,
    #[serde(default)]
    pub workers: WorkerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// URL to issue GET requests against
    pub url: String,
    /// Per-request transport timeout in seconds (no timeout when unset)
    pub timeout_secs: Option<u64>,
}

/// Worker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Number of concurrent workers
    #[serde(default = "default_processes")]
    pub processes: usize,
    /// Number of sequential requests each worker performs
    #[serde(default = "default_requests")]
    pub requests_per_process: usize,
    /// Request engine backing the workers
    #[serde(default)]
    pub engine: EngineKind,
}

fn default_processes() -> usize {
    1
}

fn default_requests() -> usize {
    1
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            processes: default_processes(),
            requests_per_process: default_requests(),
            engine: EngineKind::default(),
        }
    }
}

/// Request engine type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Real HTTP GET requests over the network
    Http,
    /// Simulated requests with zero latency (testing)
    Mock,
}

impl Default for EngineKind {
    fn default() -> Self {
        Self::Http
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Http => write!(f, "http"),
            EngineKind::Mock => write!(f, "mock"),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Fetch the target once and print the response body before the run
    #[serde(default)]
    pub verbose: bool,
    /// Print a latency percentile summary after the total average line
    #[serde(default)]
    pub show_percentiles: bool,
    /// Emit diagnostic output on stderr
    #[serde(default)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_config_defaults() {
        let workers = WorkerConfig::default();
        assert_eq!(workers.processes, 1);
        assert_eq!(workers.requests_per_process, 1);
        assert_eq!(workers.engine, EngineKind::Http);
    }

    #[test]
    fn test_engine_kind_display() {
        assert_eq!(EngineKind::Http.to_string(), "http");
        assert_eq!(EngineKind::Mock.to_string(), "mock");
    }
}
