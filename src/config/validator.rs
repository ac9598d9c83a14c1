//! Configuration validation

use super::{Config, TargetConfig, WorkerConfig};
use anyhow::{Context, Result};

/// Validate complete configuration
///
/// Runs before any worker is created; a configuration that fails here never
/// issues a network request.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_target(&config.target)?;
    validate_workers(&config.workers)?;

    Ok(())
}

/// Validate target configuration
pub fn validate_target(target: &TargetConfig) -> Result<()> {
    if target.url.is_empty() {
        anyhow::bail!("target URL must not be empty");
    }

    let url = reqwest::Url::parse(&target.url)
        .with_context(|| format!("invalid target URL: {}", target.url))?;

    match url.scheme() {
        "http" | "https" => {}
        other => anyhow::bail!("unsupported URL scheme '{}' (expected http or https)", other),
    }

    if let Some(secs) = target.timeout_secs {
        if secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1");
        }
    }

    Ok(())
}

/// Validate worker configuration
///
/// Both counts must be at least 1 so every average divides by a positive
/// request count.
pub fn validate_workers(workers: &WorkerConfig) -> Result<()> {
    if workers.processes == 0 {
        anyhow::bail!("processes must be at least 1");
    }

    if workers.requests_per_process == 0 {
        anyhow::bail!("requests_per_process must be at least 1");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineKind, OutputConfig};

    fn valid_config() -> Config {
        Config {
            target: TargetConfig {
                url: "http://example.com/".to_string(),
                timeout_secs: None,
            },
            workers: WorkerConfig {
                processes: 2,
                requests_per_process: 5,
                engine: EngineKind::Http,
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_url() {
        let mut config = valid_config();
        config.target.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_relative_url() {
        let mut config = valid_config();
        config.target.url = "example.com/index.html".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_non_http_scheme() {
        let mut config = valid_config();
        config.target.url = "ftp://example.com/".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_https_accepted() {
        let mut config = valid_config();
        config.target.url = "https://example.com/".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_processes() {
        let mut config = valid_config();
        config.workers.processes = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_requests() {
        let mut config = valid_config();
        config.workers.requests_per_process = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_timeout() {
        let mut config = valid_config();
        config.target.timeout_secs = Some(0);
        assert!(validate_config(&config).is_err());
    }
}
