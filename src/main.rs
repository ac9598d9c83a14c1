//! HTTPulse CLI entry point

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use httpulse::config::{
    cli::Cli, toml as config_toml, validator, Config, EngineKind, OutputConfig, TargetConfig,
    WorkerConfig,
};
use httpulse::coordinator::Coordinator;
use httpulse::engine;
use std::process;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = parse_cli();

    if let Err(err) = cli.validate() {
        usage_error(err);
    }

    // Build configuration from CLI (and config file, if given)
    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) => usage_error(err),
    };

    if let Err(err) = validator::validate_config(&config) {
        usage_error(err);
    }

    if config.output.debug {
        eprintln!("DEBUG: configuration: {:?}", config);
    }

    // One-shot diagnostic fetch: downloads the body and prints it verbatim,
    // fully separate from (and strictly before) the timed worker requests
    if config.output.verbose {
        let mut engine = engine::create(&config)?;
        let body = engine
            .fetch_body(&config.target.url)
            .context("verbose fetch failed")?;
        println!("{}", body);
    }

    let coordinator = Coordinator::new(Arc::new(config));
    coordinator.run().context("load run failed")?;

    Ok(())
}

/// Parse CLI arguments
///
/// `-h`/`--version` print to stdout and exit 0; any other parse problem
/// (unknown flag, non-integer count, missing URL) prints the usage text to
/// stdout and exits 1.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                process::exit(0);
            }
            _ => {
                print_usage();
                process::exit(1);
            }
        },
    }
}

/// Build configuration from CLI arguments
fn build_config(cli: &Cli) -> Result<Config> {
    if let Some(ref path) = cli.config {
        let config = config_toml::parse_toml_file(path)?;
        return config_toml::merge_cli_with_config(cli, config);
    }

    let url = cli
        .url
        .clone()
        .ok_or_else(|| anyhow::anyhow!("target URL required"))?;

    Ok(Config {
        target: TargetConfig {
            url,
            timeout_secs: cli.timeout,
        },
        workers: WorkerConfig {
            processes: cli.processes,
            requests_per_process: cli.requests,
            engine: EngineKind::Http,
        },
        output: OutputConfig {
            verbose: cli.verbose,
            show_percentiles: cli.show_percentiles,
            debug: cli.debug,
        },
    })
}

/// Report an argument error: detail on stderr, usage on stdout, exit 1
fn usage_error(err: anyhow::Error) -> ! {
    eprintln!("error: {:#}", err);
    print_usage();
    process::exit(1);
}

fn print_usage() {
    let mut cmd = Cli::command();
    let _ = cmd.print_help();
}
