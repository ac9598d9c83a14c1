//! Text output
//!
//! Formatting and printing of the console lines. The format helpers are
//! separate from the printing functions so the exact line layout is testable.

use crate::stats::histogram::LatencyHistogram;
use crate::stats::{RequestSample, RunResult};
use crate::util::time::format_duration;
use std::time::Duration;

/// Format one per-request line
pub fn format_sample(sample: &RequestSample) -> String {
    format!(
        "Process: {}, Request: {}, Elapsed Time: {:.2}",
        sample.worker_id,
        sample.sequence,
        sample.elapsed.as_secs_f64()
    )
}

/// Format one per-worker average line
pub fn format_worker_average(worker_id: usize, average: Duration) -> String {
    format!(
        "Process: {}, AVERAGE   , Elapsed Time: {:.2}",
        worker_id,
        average.as_secs_f64()
    )
}

/// Format the run total line
pub fn format_total_average(result: &RunResult) -> String {
    format!(
        "TOTAL AVERAGE ELAPSED TIME: {:.2}",
        result.overall_average.as_secs_f64()
    )
}

/// Print one request sample as it completes
pub fn print_sample(sample: &RequestSample) {
    println!("{}", format_sample(sample));
}

/// Print a worker's average once its loop finishes
pub fn print_worker_average(worker_id: usize, average: Duration) {
    println!("{}", format_worker_average(worker_id, average));
}

/// Print the final run total
pub fn print_total_average(result: &RunResult) {
    println!("{}", format_total_average(result));
}

/// Print a latency summary for the whole run (opt-in via --show-percentiles)
pub fn print_latency_summary(latency: &LatencyHistogram) {
    println!();
    println!("Latency:");

    if latency.is_empty() {
        println!("  No latency data collected");
        return;
    }

    if let Some(min) = latency.min() {
        println!("  Min:    {}", format_duration(min));
    }
    if let Some(mean) = latency.mean() {
        println!("  Mean:   {}", format_duration(mean));
    }
    if let Some(max) = latency.max() {
        println!("  Max:    {}", format_duration(max));
    }

    println!();
    println!("  Percentiles:");
    for &p in &[50.0, 90.0, 95.0, 99.0, 99.9] {
        if let Some(val) = latency.percentile(p) {
            println!("    p{:5.2}: {}", p, format_duration(val));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sample() {
        let sample = RequestSample {
            worker_id: 1,
            sequence: 3,
            elapsed: Duration::from_millis(1234),
        };
        assert_eq!(
            format_sample(&sample),
            "Process: 1, Request: 3, Elapsed Time: 1.23"
        );
    }

    #[test]
    fn test_format_sample_sub_hundredth() {
        let sample = RequestSample {
            worker_id: 0,
            sequence: 0,
            elapsed: Duration::from_millis(4),
        };
        assert_eq!(
            format_sample(&sample),
            "Process: 0, Request: 0, Elapsed Time: 0.00"
        );
    }

    #[test]
    fn test_format_worker_average() {
        assert_eq!(
            format_worker_average(2, Duration::from_secs(2)),
            "Process: 2, AVERAGE   , Elapsed Time: 2.00"
        );
    }

    #[test]
    fn test_format_total_average() {
        let mut latency = LatencyHistogram::new();
        latency.record(Duration::from_secs(3));
        let result = RunResult {
            overall_average: Duration::from_secs(3),
            total_requests: 1,
            total_bytes: 0,
            latency,
        };
        assert_eq!(
            format_total_average(&result),
            "TOTAL AVERAGE ELAPSED TIME: 3.00"
        );
    }

    #[test]
    fn test_format_total_average_rounds_to_two_decimals() {
        let result = RunResult {
            overall_average: Duration::from_millis(2349),
            total_requests: 1,
            total_bytes: 0,
            latency: LatencyHistogram::new(),
        };
        assert_eq!(
            format_total_average(&result),
            "TOTAL AVERAGE ELAPSED TIME: 2.35"
        );
    }
}
