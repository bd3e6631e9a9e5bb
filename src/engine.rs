//! [`SortEngine`]: one entry point for sorting, natural sorting and benchmarking,
//! driven by a [`SortConfig`].

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::algo::Algorithm;
use crate::bench::{SortBenchmark, SortReport};
use crate::clone::{CloneBenchmark, CloneReport, DeepCopy};
use crate::config::SortConfig;
use crate::error::Result;
use crate::natural::natural_sort_with;
use crate::value::CanonicalString;

#[derive(Debug, Clone, Default)]
pub struct SortEngine {
    config: SortConfig,
}

impl SortEngine {
    /// An engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with a validated configuration.
    pub fn with_config(config: SortConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts with `algorithm` and the default comparator.
    pub fn sort<T: CanonicalString>(&self, algorithm: Algorithm, v: Vec<T>) -> Result<Vec<T>> {
        algorithm.sort(v)
    }

    pub fn sort_by<T, F>(&self, algorithm: Algorithm, v: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algorithm.sort_by(v, compare)
    }

    pub fn try_sort_by<T, E, F>(
        &self,
        algorithm: Algorithm,
        v: Vec<T>,
        compare: F,
    ) -> std::result::Result<Vec<T>, E>
    where
        F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
    {
        algorithm.try_sort_by(v, compare)
    }

    /// Natural sort on the `Display` form, with the configured run order.
    pub fn natural_sort<T: fmt::Display>(&self, v: Vec<T>) -> Vec<T> {
        natural_sort_with(v, |item| item.to_string(), self.config.natural_runs)
    }

    pub fn natural_sort_by_key<T, K>(&self, v: Vec<T>, key: K) -> Vec<T>
    where
        K: FnMut(&T) -> String,
    {
        natural_sort_with(v, key, self.config.natural_runs)
    }

    fn sort_benchmark(&self) -> SortBenchmark {
        SortBenchmark::with_algorithms(self.config.algorithms.iter().copied())
    }

    /// Benchmarks the configured algorithms with the default comparator.
    pub fn benchmark<T>(&self, input: &[T]) -> Result<SortReport<T>>
    where
        T: Clone + CanonicalString,
    {
        self.sort_benchmark().run(input)
    }

    pub fn benchmark_by<T, F>(&self, input: &[T], compare: F) -> SortReport<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_benchmark().run_by(input, compare)
    }

    pub fn try_benchmark_by<T, E, F>(
        &self,
        input: &[T],
        compare: F,
    ) -> std::result::Result<SortReport<T>, E>
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
    {
        self.sort_benchmark().try_run_by(input, compare)
    }

    /// Benchmarks the configured copying methods.
    pub fn clone_benchmark<T>(&self, input: &[T]) -> Result<CloneReport<T>>
    where
        T: DeepCopy + Serialize + DeserializeOwned,
    {
        CloneBenchmark::with_methods(self.config.clone_methods.iter().copied()).run(input)
    }
}
