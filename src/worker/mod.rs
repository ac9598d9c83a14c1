//! Worker implementation
//!
//! The Worker is the core execution unit: it performs a fixed count of
//! strictly sequential timed GET requests against the target URL and
//! produces a `WorkerResult`. Request *i+1* starts only after request *i*
//! completes; there is no intra-worker concurrency.
//!
//! # Thread Safety
//!
//! Each worker owns its engine and statistics and is designed to run in its
//! own thread. Workers share no mutable state and communicate only through
//! the returned result.

use crate::config::Config;
use crate::engine::{self, RequestEngine};
use crate::output;
use crate::stats::{RequestSample, WorkerResult, WorkerStats};
use crate::util::time::Timestamp;
use crate::Result;
use anyhow::Context;
use std::sync::Arc;

/// Worker that executes timed requests
pub struct Worker {
    /// Worker ID (0-indexed, distinct per worker within a run)
    id: usize,

    /// Shared configuration
    config: Arc<Config>,

    /// Request engine performing the transport calls
    engine: Box<dyn RequestEngine>,

    /// Statistics collector, exclusively owned by this worker
    stats: WorkerStats,
}

impl Worker {
    /// Create a new worker with an engine built from the configuration
    ///
    /// Engine construction performs no network I/O.
    pub fn new(id: usize, config: Arc<Config>) -> Result<Self> {
        let engine = engine::create(&config)?;
        Ok(Self::with_engine(id, config, engine))
    }

    /// Create a new worker with an explicit engine
    pub fn with_engine(id: usize, config: Arc<Config>, engine: Box<dyn RequestEngine>) -> Self {
        Self {
            id,
            config,
            engine,
            stats: WorkerStats::new(),
        }
    }

    /// Main execution loop
    ///
    /// Performs exactly `requests_per_process` sequential requests, printing
    /// each sample and the final per-worker average as they become known.
    /// Timing wraps the whole transport call, body transfer included, and is
    /// recorded regardless of the response status code.
    ///
    /// # Errors
    ///
    /// A transport fault aborts the run immediately: no further requests are
    /// issued and the error propagates to the coordinator. There is no
    /// per-request retry.
    pub fn run(&mut self) -> Result<WorkerResult> {
        let requests = self.config.workers.requests_per_process;
        let url = self.config.target.url.clone();

        for sequence in 0..requests {
            let start = Timestamp::now();
            let completion = self
                .engine
                .get(&url)
                .with_context(|| format!("worker {}: request {} to {} failed", self.id, sequence, url))?;
            let elapsed = start.elapsed();

            if self.config.output.debug && completion.status >= 400 {
                eprintln!(
                    "DEBUG: worker {}: request {} returned status {}",
                    self.id, sequence, completion.status
                );
            }

            let sample = RequestSample {
                worker_id: self.id,
                sequence,
                elapsed,
            };
            output::text::print_sample(&sample);
            self.stats.record(sample, completion.body_bytes);
        }

        let stats = std::mem::take(&mut self.stats);
        let result = stats.into_result(self.id)?;
        output::text::print_worker_average(result.worker_id, result.average);

        Ok(result)
    }
}
