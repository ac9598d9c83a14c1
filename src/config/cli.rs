//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// HTTPulse - minimal HTTP load-generation tool
#[derive(Parser, Debug)]
#[command(name = "httpulse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target URL to issue GET requests against
    ///
    /// Not required when --config supplies a target
    #[arg(value_name = "URL", required_unless_present = "config")]
    pub url: Option<String>,

    // === Basic Options ===
    /// Number of worker processes to utilize
    #[arg(short = 'p', long, default_value = "1")]
    pub processes: usize,

    /// Number of requests per process
    #[arg(short = 'r', long, default_value = "1")]
    pub requests: usize,

    /// Fetch the target once and print the response body before the timed run
    #[arg(short = 'v', long)]
    pub verbose: bool,

    // === Transport Options ===
    /// Per-request timeout in seconds (no timeout if omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    // === Output Options ===
    /// Print a latency percentile summary after the total average line
    #[arg(long)]
    pub show_percentiles: bool,

    // === Configuration File ===
    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Enable debug output on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments
    ///
    /// Count checks run here, before any configuration is built, so a zero
    /// worker or request count is rejected as an argument error rather than
    /// surfacing later as a division by zero.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.processes == 0 {
            anyhow::bail!("processes must be at least 1");
        }

        if self.requests == 0 {
            anyhow::bail!("requests must be at least 1");
        }

        if let Some(secs) = self.timeout {
            if secs == 0 {
                anyhow::bail!("timeout must be at least 1 second");
            }
        }

        if let Some(url) = &self.url {
            if url.is_empty() {
                anyhow::bail!("target URL must not be empty");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["httpulse", "http://example.com/"]);
        assert_eq!(cli.url.as_deref(), Some("http://example.com/"));
        assert_eq!(cli.processes, 1);
        assert_eq!(cli.requests, 1);
        assert!(!cli.verbose);
        assert!(cli.timeout.is_none());
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&["httpulse", "-p", "4", "-r", "10", "-v", "http://example.com/"]);
        assert_eq!(cli.processes, 4);
        assert_eq!(cli.requests, 10);
        assert!(cli.verbose);
    }

    #[test]
    fn test_url_is_last_positional() {
        let cli = parse(&["httpulse", "-p", "2", "http://example.com/index.html"]);
        assert_eq!(cli.url.as_deref(), Some("http://example.com/index.html"));
    }

    #[test]
    fn test_missing_url_rejected() {
        assert!(Cli::try_parse_from(["httpulse", "-p", "2"]).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["httpulse", "--bogus", "http://example.com/"]).is_err());
    }

    #[test]
    fn test_non_integer_count_rejected() {
        assert!(Cli::try_parse_from(["httpulse", "-p", "many", "http://example.com/"]).is_err());
    }

    #[test]
    fn test_validate_zero_processes() {
        let cli = parse(&["httpulse", "-p", "0", "http://example.com/"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_zero_requests() {
        let cli = parse(&["httpulse", "-r", "0", "http://example.com/"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_config_file_makes_url_optional() {
        let cli = parse(&["httpulse", "--config", "run.toml"]);
        assert!(cli.url.is_none());
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("run.toml")));
    }
}
