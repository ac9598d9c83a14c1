//! Statistics collection and aggregation
//!
//! Each worker records one `RequestSample` per request into its own
//! `WorkerStats` (exclusively owned, no cross-worker writes) and turns the
//! collection into a `WorkerResult` when its loop finishes. The coordinator
//! merges all worker results through the `RunAggregator` into the final
//! `RunResult`.

pub mod aggregator;
pub mod histogram;

use histogram::LatencyHistogram;
use std::time::Duration;

/// One measured request
///
/// Created by a worker immediately after a request completes; immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSample {
    /// Worker that issued the request (0-indexed)
    pub worker_id: usize,
    /// Position of the request within the worker's run (0-indexed)
    pub sequence: usize,
    /// Wall-clock time around the request, including body transfer
    pub elapsed: Duration,
}

/// Per-worker statistics collector
///
/// Owned exclusively by one worker for the duration of its run.
#[derive(Debug, Default)]
pub struct WorkerStats {
    samples: Vec<RequestSample>,
    latency: LatencyHistogram,
    total_elapsed: Duration,
    total_bytes: u64,
}

impl WorkerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request
    pub fn record(&mut self, sample: RequestSample, body_bytes: u64) {
        self.total_elapsed += sample.elapsed;
        self.total_bytes += body_bytes;
        self.latency.record(sample.elapsed);
        self.samples.push(sample);
    }

    /// Number of requests recorded so far
    pub fn request_count(&self) -> usize {
        self.samples.len()
    }

    /// Sum of all recorded elapsed times
    pub fn total_elapsed(&self) -> Duration {
        self.total_elapsed
    }

    /// Total body bytes received
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Finish the collection and produce the worker's result
    ///
    /// The average is the arithmetic mean over exactly the recorded samples;
    /// an empty collection has no meaningful average and is an error.
    pub fn into_result(self, worker_id: usize) -> crate::Result<WorkerResult> {
        if self.samples.is_empty() {
            anyhow::bail!("worker {} recorded no samples", worker_id);
        }

        let average = self.total_elapsed / self.samples.len() as u32;

        Ok(WorkerResult {
            worker_id,
            average,
            samples: self.samples,
            latency: self.latency,
            total_bytes: self.total_bytes,
        })
    }
}

/// Summary of one worker's run
#[derive(Debug, Clone)]
pub struct WorkerResult {
    /// Worker that produced this result (0-indexed)
    pub worker_id: usize,
    /// Arithmetic mean of the worker's per-request elapsed times
    pub average: Duration,
    /// Every sample the worker recorded, in request order
    pub samples: Vec<RequestSample>,
    /// Latency histogram over the worker's samples
    pub latency: LatencyHistogram,
    /// Total body bytes the worker received
    pub total_bytes: u64,
}

/// Final aggregate over all workers
///
/// `overall_average` is the mean of the per-worker averages, weighting every
/// worker equally regardless of how its individual requests were distributed.
/// It is not a flat mean over all samples.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub overall_average: Duration,
    pub total_requests: u64,
    pub total_bytes: u64,
    pub latency: LatencyHistogram,
}
