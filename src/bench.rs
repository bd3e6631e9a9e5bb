//! Micro-benchmark harness that races the sorting algorithms against each other.
//!
//! [`SortBenchmark`] runs each configured [`Algorithm`] on a fresh copy of the input,
//! timing it with a monotonic clock, and collects the timings into a [`SortReport`].
//! The caller's input is never mutated.
//!
//! ```
//! use sortkit::SortBenchmark;
//!
//! let report = SortBenchmark::new().run_by(&[3, 1, 2], |a, b| a.cmp(b));
//! assert_eq!(report.summary.len(), 11);
//! assert_eq!(report.sorted, vec![1, 2, 3]);
//! assert!(report.fastest.rate <= report.slowest.rate);
//! ```

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::algo::Algorithm;
use crate::compare::default_compare;
use crate::core::{into_ok, lift};
use crate::error::Result;
use crate::value::CanonicalString;

/// Elapsed time of one benchmarked subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timing<K> {
    pub id: K,
    pub elapsed: Duration,
}

/// The fastest or slowest subject of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Extreme<K> {
    pub id: K,
    pub rate: Duration,
}

impl<K> Extreme<K> {
    /// The rate in fractional milliseconds.
    pub fn rate_ms(&self) -> f64 {
        self.rate.as_secs_f64() * 1000.0
    }
}

/// Fastest, slowest and total time over `summary`.
///
/// Both extremes start out as `initial`, the fastest with an unbeatable rate and the
/// slowest with a zero rate. Only strictly faster or slower timings replace them, so the
/// first of several equal timings wins, and if every timing is zero the slowest stays
/// `initial`.
pub(crate) fn rank<K: Copy>(summary: &[Timing<K>], initial: K) -> (Extreme<K>, Extreme<K>, Duration) {
    let mut fastest = Extreme {
        id: initial,
        rate: Duration::MAX,
    };
    let mut slowest = Extreme {
        id: initial,
        rate: Duration::ZERO,
    };
    let mut total = Duration::ZERO;

    for timing in summary {
        if fastest.rate > timing.elapsed {
            fastest = Extreme {
                id: timing.id,
                rate: timing.elapsed,
            };
        }
        if slowest.rate < timing.elapsed {
            slowest = Extreme {
                id: timing.id,
                rate: timing.elapsed,
            };
        }
        total += timing.elapsed;
    }

    (fastest, slowest, total)
}

/// Result of a [`SortBenchmark`] run.
#[derive(Debug, Clone, Serialize)]
pub struct SortReport<T> {
    pub fastest: Extreme<Algorithm>,
    pub slowest: Extreme<Algorithm>,
    /// One entry per algorithm, in the order they ran.
    pub summary: Vec<Timing<Algorithm>>,
    /// Sum of all elapsed times.
    pub total_time: Duration,
    /// A copy of the benchmarked input.
    pub source: Vec<T>,
    /// Output of the last algorithm that ran, which is not necessarily the fastest.
    pub sorted: Vec<T>,
}

impl<T> SortReport<T> {
    /// Elapsed time of `algorithm`, if it was part of the run.
    pub fn elapsed(&self, algorithm: Algorithm) -> Option<Duration> {
        self.summary
            .iter()
            .find(|timing| timing.id == algorithm)
            .map(|timing| timing.elapsed)
    }
}

/// Runs a set of sorting algorithms over the same input and reports their timings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBenchmark {
    algorithms: Vec<Algorithm>,
}

impl Default for SortBenchmark {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl SortBenchmark {
    /// A benchmark over all eleven algorithms.
    pub fn new() -> Self {
        Self::default()
    }

    /// A benchmark over `algorithms`, run in the given order.
    pub fn with_algorithms(algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        Self {
            algorithms: algorithms.into_iter().collect(),
        }
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// Runs every algorithm with a fallible comparator. The first comparator error
    /// aborts the whole run.
    pub fn try_run_by<T, E, F>(&self, input: &[T], mut compare: F) -> std::result::Result<SortReport<T>, E>
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
    {
        let mut summary = Vec::with_capacity(self.algorithms.len());
        let mut sorted = Vec::new();

        for &algorithm in &self.algorithms {
            let start = Instant::now();
            let output = algorithm.try_sort_by(input.to_vec(), &mut compare)?;
            let elapsed = start.elapsed();

            tracing::debug!(
                %algorithm,
                len = input.len(),
                elapsed_us = elapsed.as_secs_f64() * 1e6,
                "sort finished"
            );

            summary.push(Timing {
                id: algorithm,
                elapsed,
            });
            sorted = output;
        }

        let (fastest, slowest, total_time) = rank(&summary, Algorithm::Shell);
        tracing::info!(
            fastest = %fastest.id,
            slowest = %slowest.id,
            total_us = total_time.as_secs_f64() * 1e6,
            "sort benchmark complete"
        );

        Ok(SortReport {
            fastest,
            slowest,
            summary,
            total_time,
            source: input.to_vec(),
            sorted,
        })
    }

    /// Runs every algorithm with an infallible comparator.
    pub fn run_by<T, F>(&self, input: &[T], compare: F) -> SortReport<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        into_ok(self.try_run_by(input, lift(compare)))
    }

    /// Runs every algorithm with [`default_compare`].
    pub fn run<T>(&self, input: &[T]) -> Result<SortReport<T>>
    where
        T: Clone + CanonicalString,
    {
        self.try_run_by(input, |a, b| default_compare(a, b))
    }
}
