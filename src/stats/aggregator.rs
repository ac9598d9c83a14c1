//! Run aggregation
//!
//! Collects `WorkerResult`s from all workers, preserving worker-id
//! association, and reduces them to the final `RunResult`. Completion order
//! is irrelevant; identity is not.

use crate::stats::histogram::LatencyHistogram;
use crate::stats::{RunResult, WorkerResult};
use crate::Result;
use std::collections::HashMap;

/// Aggregator for per-worker results
///
/// The overall average is the arithmetic mean of the per-worker averages
/// (a mean of means): every worker contributes equally, independent of how
/// latency was distributed across its individual requests.
#[derive(Debug, Default)]
pub struct RunAggregator {
    /// Per-worker results (worker_id -> result)
    workers: HashMap<usize, WorkerResult>,
}

impl RunAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the result of one worker
    pub fn add_worker(&mut self, result: WorkerResult) {
        self.workers.insert(result.worker_id, result);
    }

    /// Number of workers collected so far
    pub fn num_workers(&self) -> usize {
        self.workers.len()
    }

    /// Result for a specific worker, if collected
    pub fn worker_result(&self, worker_id: usize) -> Option<&WorkerResult> {
        self.workers.get(&worker_id)
    }

    /// Sorted list of collected worker IDs
    pub fn worker_ids(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.workers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Reduce the collected results to the final run aggregate
    ///
    /// # Errors
    ///
    /// Returns an error if no worker results were collected; an empty run
    /// has no meaningful average.
    pub fn finish(&self) -> Result<RunResult> {
        if self.workers.is_empty() {
            anyhow::bail!("no worker results collected");
        }

        let sum: std::time::Duration = self.workers.values().map(|w| w.average).sum();
        let overall_average = sum / self.workers.len() as u32;

        let mut latency = LatencyHistogram::new();
        let mut total_requests = 0u64;
        let mut total_bytes = 0u64;
        for worker in self.workers.values() {
            latency.merge(&worker.latency)?;
            total_requests += worker.samples.len() as u64;
            total_bytes += worker.total_bytes;
        }

        Ok(RunResult {
            overall_average,
            total_requests,
            total_bytes,
            latency,
        })
    }
}
