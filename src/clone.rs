//! Array copying strategies and a benchmark harness that compares them.
//!
//! Each [`CloneMethod`] produces an independent copy of a slice in a different way:
//! slicing, concatenation, front or back insertion, indexed reads, iterator adaptors,
//! a JSON round trip and a recursive deep copy. [`CloneBenchmark`] times them the same
//! way [`SortBenchmark`](crate::SortBenchmark) times the sorts.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::bench::{Extreme, Timing, rank};
use crate::error::{Result, SortError};
use crate::value::Value;

/// A value that can be copied recursively, rebuilding every nested container.
///
/// For most types this is the same as [`Clone`].
pub trait DeepCopy: Clone {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

macro_rules! deep_copy_is_clone {
    ($($t:ty),*) => {
        $( impl DeepCopy for $t {} )*
    };
}

deep_copy_is_clone!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String
);

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(DeepCopy::deep_copy)
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl DeepCopy for Value {
    fn deep_copy(&self) -> Self {
        match self {
            Value::Array(items) => Value::Array(items.deep_copy()),
            Value::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.deep_copy()))
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

/// A strategy for copying a slice into a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CloneMethod {
    Slice,
    Concat,
    Unshift,
    Push,
    Index,
    Apply,
    Map,
    Json,
    Spread,
    From,
    RecursionDeep,
}

impl CloneMethod {
    /// Every method, in the order the benchmark runs them.
    pub const ALL: [CloneMethod; 11] = [
        CloneMethod::Slice,
        CloneMethod::Concat,
        CloneMethod::Unshift,
        CloneMethod::Push,
        CloneMethod::Index,
        CloneMethod::Apply,
        CloneMethod::Map,
        CloneMethod::Json,
        CloneMethod::Spread,
        CloneMethod::From,
        CloneMethod::RecursionDeep,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CloneMethod::Slice => "slice",
            CloneMethod::Concat => "concat",
            CloneMethod::Unshift => "unshift",
            CloneMethod::Push => "push",
            CloneMethod::Index => "index",
            CloneMethod::Apply => "apply",
            CloneMethod::Map => "map",
            CloneMethod::Json => "json",
            CloneMethod::Spread => "spread",
            CloneMethod::From => "from",
            CloneMethod::RecursionDeep => "recursionDeep",
        }
    }

    /// Copies `input` with this method.
    ///
    /// Only [`CloneMethod::Json`] can fail, when `T` does not survive a JSON round trip.
    pub fn copy<T>(self, input: &[T]) -> Result<Vec<T>>
    where
        T: DeepCopy + Serialize + DeserializeOwned,
    {
        Ok(match self {
            CloneMethod::Slice => slice(input),
            CloneMethod::Concat => concat(input),
            CloneMethod::Unshift => unshift(input),
            CloneMethod::Push => push(input),
            CloneMethod::Index => index(input),
            CloneMethod::Apply => apply(input),
            CloneMethod::Map => map(input),
            CloneMethod::Json => return json(input),
            CloneMethod::Spread => spread(input),
            CloneMethod::From => from(input),
            CloneMethod::RecursionDeep => recursion_deep(input),
        })
    }
}

impl fmt::Display for CloneMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CloneMethod {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        CloneMethod::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SortError::invalid_argument(format!("unknown clone method '{s}'")))
    }
}

pub fn slice<T: Clone>(input: &[T]) -> Vec<T> {
    input.to_vec()
}

/// Concatenates `input` onto an empty slice.
pub fn concat<T: Clone>(input: &[T]) -> Vec<T> {
    [&[][..], input].concat()
}

/// Inserts elements at the front, walking the input from its end.
pub fn unshift<T: Clone>(input: &[T]) -> Vec<T> {
    let mut response = VecDeque::new();
    for item in input.iter().rev() {
        response.push_front(item.clone());
    }
    Vec::from(response)
}

/// Appends elements one by one to a vector that starts without capacity.
pub fn push<T: Clone>(input: &[T]) -> Vec<T> {
    let mut response = Vec::new();
    for item in input {
        response.push(item.clone());
    }
    response
}

/// Reads every element by index into a vector preallocated to the input length.
#[allow(clippy::needless_range_loop)]
pub fn index<T: Clone>(input: &[T]) -> Vec<T> {
    let mut response = Vec::with_capacity(input.len());
    for i in 0..input.len() {
        response.push(input[i].clone());
    }
    response
}

/// Converts the slice with `Vec::from`.
pub fn apply<T: Clone>(input: &[T]) -> Vec<T> {
    Vec::from(input)
}

#[allow(clippy::map_clone)]
pub fn map<T: Clone>(input: &[T]) -> Vec<T> {
    input.iter().map(|item| item.clone()).collect()
}

/// Serializes to JSON and parses the result back.
///
/// Values without a JSON form do not survive: undefined becomes `null`, for example.
pub fn json<T>(input: &[T]) -> Result<Vec<T>>
where
    T: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_string(input)?;
    Ok(serde_json::from_str(&encoded)?)
}

pub fn spread<T: Clone>(input: &[T]) -> Vec<T> {
    input.iter().cloned().collect()
}

#[allow(clippy::from_iter_instead_of_collect)]
pub fn from<T: Clone>(input: &[T]) -> Vec<T> {
    Vec::from_iter(input.iter().cloned())
}

/// Copies every element with [`DeepCopy`], rebuilding nested arrays and objects.
pub fn recursion_deep<T: DeepCopy>(input: &[T]) -> Vec<T> {
    input.iter().map(DeepCopy::deep_copy).collect()
}

/// Result of a [`CloneBenchmark`] run.
#[derive(Debug, Clone, Serialize)]
pub struct CloneReport<T> {
    pub fastest: Extreme<CloneMethod>,
    pub slowest: Extreme<CloneMethod>,
    /// One entry per method, in the order they ran.
    pub summary: Vec<Timing<CloneMethod>>,
    pub total_time: std::time::Duration,
    pub source: Vec<T>,
    /// Output of the last method that ran.
    pub copied: Vec<T>,
}

/// Runs a set of copying strategies over the same input and reports their timings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneBenchmark {
    methods: Vec<CloneMethod>,
}

impl Default for CloneBenchmark {
    fn default() -> Self {
        Self {
            methods: CloneMethod::ALL.to_vec(),
        }
    }
}

impl CloneBenchmark {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_methods(methods: impl IntoIterator<Item = CloneMethod>) -> Self {
        Self {
            methods: methods.into_iter().collect(),
        }
    }

    pub fn methods(&self) -> &[CloneMethod] {
        &self.methods
    }

    pub fn run<T>(&self, input: &[T]) -> Result<CloneReport<T>>
    where
        T: DeepCopy + Serialize + DeserializeOwned,
    {
        let mut summary = Vec::with_capacity(self.methods.len());
        let mut copied = Vec::new();

        for &method in &self.methods {
            let start = Instant::now();
            let output = method.copy(input)?;
            let elapsed = start.elapsed();

            tracing::debug!(
                %method,
                len = input.len(),
                elapsed_us = elapsed.as_secs_f64() * 1e6,
                "copy finished"
            );

            summary.push(Timing {
                id: method,
                elapsed,
            });
            copied = output;
        }

        let (fastest, slowest, total_time) = rank(&summary, CloneMethod::Slice);
        tracing::info!(
            fastest = %fastest.id,
            slowest = %slowest.id,
            total_us = total_time.as_secs_f64() * 1e6,
            "clone benchmark complete"
        );

        Ok(CloneReport {
            fastest,
            slowest,
            summary,
            total_time,
            source: input.to_vec(),
            copied,
        })
    }
}
