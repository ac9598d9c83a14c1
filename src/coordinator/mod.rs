//! Coordinator
//!
//! Orchestrates workers and aggregates results: spawns exactly one thread
//! per configured worker, waits for all of them at a join barrier, and
//! reduces the collected per-worker averages to the run total.
//!
//! The spawn/join is explicit rather than pool-based so failure propagation
//! stays controllable: a single failed worker fails the whole run, and the
//! total average line is never printed for a failed run. Averaging over
//! fewer than the configured number of workers would silently bias the mean.

use crate::config::Config;
use crate::engine::{self, RequestEngine};
use crate::output;
use crate::stats::aggregator::RunAggregator;
use crate::stats::{RunResult, WorkerResult};
use crate::worker::Worker;
use crate::Result;
use anyhow::Context;
use std::sync::Arc;
use std::thread;

/// Factory producing one engine per worker id; used by tests to inject
/// deterministic transports
pub type EngineFactory = Box<dyn Fn(usize) -> Box<dyn RequestEngine>>;

/// Coordinator that spawns workers and reduces their results
pub struct Coordinator {
    /// Shared configuration
    config: Arc<Config>,

    /// Engine factory override; production runs build engines from config
    engine_factory: Option<EngineFactory>,
}

impl Coordinator {
    /// Create a coordinator that builds engines from the configuration
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            engine_factory: None,
        }
    }

    /// Create a coordinator with an explicit per-worker engine factory
    pub fn with_engine_factory(config: Arc<Config>, factory: EngineFactory) -> Self {
        Self {
            config,
            engine_factory: Some(factory),
        }
    }

    /// Run all workers to completion and aggregate their results
    ///
    /// Workers get distinct IDs in `[0, processes)` and run concurrently on
    /// their own OS threads; each performs blocking network I/O without
    /// stalling its siblings. Completion order is irrelevant to the result.
    ///
    /// # Errors
    ///
    /// Fails if any worker fails (transport fault or panic). All threads are
    /// joined before the failure is surfaced, and no total is printed.
    pub fn run(&self) -> Result<RunResult> {
        let processes = self.config.workers.processes;

        if self.config.output.debug {
            eprintln!(
                "DEBUG: spawning {} workers ({} CPU cores available)",
                processes,
                num_cpus::get()
            );
        }

        // Build every engine up front: construction is network-free, so a
        // bad configuration surfaces before the first request is issued.
        let mut engines = Vec::with_capacity(processes);
        for id in 0..processes {
            let engine = match &self.engine_factory {
                Some(factory) => factory(id),
                None => engine::create(&self.config)?,
            };
            engines.push(engine);
        }

        let mut handles = Vec::with_capacity(processes);
        for (id, engine) in engines.into_iter().enumerate() {
            let config = Arc::clone(&self.config);
            let handle = thread::Builder::new()
                .name(format!("worker-{}", id))
                .spawn(move || -> Result<WorkerResult> {
                    let mut worker = Worker::with_engine(id, config, engine);
                    worker.run()
                })
                .with_context(|| format!("failed to spawn worker {}", id))?;
            handles.push(handle);
        }

        // Join barrier: every thread is reaped before any failure surfaces
        let mut aggregator = RunAggregator::new();
        let mut first_failure: Option<anyhow::Error> = None;
        for (id, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(result)) => aggregator.add_worker(result),
                Ok(Err(err)) => {
                    if first_failure.is_none() {
                        first_failure = Some(err.context(format!("worker {} failed", id)));
                    }
                }
                Err(_) => {
                    if first_failure.is_none() {
                        first_failure = Some(anyhow::anyhow!("worker {} terminated abnormally", id));
                    }
                }
            }
        }

        if let Some(err) = first_failure {
            return Err(err);
        }

        let result = aggregator.finish()?;
        output::text::print_total_average(&result);
        if self.config.output.show_percentiles {
            output::text::print_latency_summary(&result.latency);
        }

        Ok(result)
    }
}
