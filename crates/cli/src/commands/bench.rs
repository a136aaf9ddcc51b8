//! Mapping throughput harness.
//!
//! Runs the mapper over one order repeatedly and reports mean latency and
//! throughput. Iterations can be spread over several blocking worker tasks;
//! the mapper holds no shared state, so workers never contend.
//!
//! # Usage
//!
//! ```bash
//! om-cli bench fixtures/shopify-order.json --iterations 100000 --warmup 10000
//!
//! # Include JSON decoding in each iteration, on 4 workers
//! om-cli bench fixtures/shopify-order.json --include-decode --workers 4
//! ```

use std::hint::black_box;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use order_mapper_core::{MapError, OrderMapper, SourceOrder};
use tracing::{debug, info};

use super::read_file;
use crate::error::CliError;

/// Parameters for one bench run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchOptions {
    /// Measured iterations, split across workers.
    pub iterations: u64,
    /// Unmeasured iterations run first on a single worker.
    pub warmup: u64,
    /// Number of blocking worker tasks.
    pub workers: usize,
    /// Decode the JSON text on every iteration instead of once up front.
    pub include_decode: bool,
}

/// Result of a bench run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchReport {
    pub iterations: u64,
    pub workers: usize,
    pub elapsed: Duration,
}

impl BenchReport {
    /// Mean wall-clock nanoseconds per mapping.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ns_per_op(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }

    /// Mappings completed per second of wall-clock time.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ops_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return f64::INFINITY;
        }
        self.iterations as f64 / secs
    }
}

/// What each iteration does.
struct Workload {
    text: Arc<str>,
    order: SourceOrder,
    include_decode: bool,
}

impl Workload {
    fn run(&self, iterations: u64) -> Result<(), MapError> {
        for _ in 0..iterations {
            if self.include_decode {
                black_box(OrderMapper::map_str(black_box(&self.text))?);
            } else {
                black_box(OrderMapper::map(black_box(&self.order)));
            }
        }
        Ok(())
    }
}

/// Bench the mapper against the order in `input`.
///
/// # Errors
///
/// Returns an error if `iterations` or `workers` is zero, the input cannot be
/// read or decoded, or a worker task fails.
pub async fn run(input: &Path, options: BenchOptions) -> Result<BenchReport, CliError> {
    if options.iterations == 0 {
        return Err(CliError::InvalidArgument(
            "iterations must be greater than zero".to_string(),
        ));
    }
    if options.workers == 0 {
        return Err(CliError::InvalidArgument(
            "workers must be greater than zero".to_string(),
        ));
    }

    let text: Arc<str> = read_file(input).await?.into();
    let order: SourceOrder = serde_json::from_str(&text).map_err(MapError::from)?;
    let workload = Arc::new(Workload {
        text,
        order,
        include_decode: options.include_decode,
    });

    info!(
        input = %input.display(),
        iterations = options.iterations,
        warmup = options.warmup,
        workers = options.workers,
        include_decode = options.include_decode,
        "Starting bench"
    );

    if options.warmup > 0 {
        let warm = Arc::clone(&workload);
        tokio::task::spawn_blocking(move || warm.run(options.warmup)).await??;
        debug!(warmup = options.warmup, "Warmup complete");
    }

    let started = Instant::now();
    let handles: Vec<_> = split_iterations(options.iterations, options.workers)
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let worker = Arc::clone(&workload);
            tokio::task::spawn_blocking(move || worker.run(count))
        })
        .collect();
    for handle in handles {
        handle.await??;
    }
    let elapsed = started.elapsed();

    let report = BenchReport {
        iterations: options.iterations,
        workers: options.workers,
        elapsed,
    };

    info!(
        iterations = report.iterations,
        workers = report.workers,
        elapsed_ms = report.elapsed.as_secs_f64() * 1_000.0,
        ns_per_op = format_args!("{:.1}", report.ns_per_op()),
        ops_per_sec = format_args!("{:.0}", report.ops_per_sec()),
        "Bench complete"
    );

    Ok(report)
}

/// Divide `total` iterations over `workers` as evenly as possible.
///
/// The first `total % workers` workers take one extra iteration.
fn split_iterations(total: u64, workers: usize) -> Vec<u64> {
    let workers_u64 = workers as u64;
    let base = total / workers_u64;
    let extra = total % workers_u64;
    (0..workers_u64)
        .map(|i| base + u64::from(i < extra))
        .collect()
}
