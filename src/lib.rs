//! # Sortkit
//!
//! `sortkit` is a collection of classic comparison sorts, a natural-order ("human")
//! string sort, and a micro-benchmark harness that races the sorts against each other.
//!
//! It implements eleven textbook algorithms with their textbook trade-offs intact:
//! **bubble**, **selection**, **insertion**, **Shell**, **simple counting**, **comb**,
//! **merge**, **heap**, **quick**, **shaker** and **gnome** sort. None of them is meant to
//! beat `slice::sort`; they exist to be studied, compared and benchmarked.
//!
//! ## Key Features
//!
//! - **Generic comparators**: every algorithm accepts a plain `Ordering` comparator or a
//!   fallible one whose first error aborts the sort.
//! - **Default comparator**: without a comparator, elements are ordered by their string
//!   form (see [`CanonicalString`]), with undefined values last.
//! - **Natural sort**: [`natural_sort`] orders `file2` before `file10`.
//! - **Benchmarking**: [`SortBenchmark`] times each algorithm on copies of the same
//!   input and reports the fastest, the slowest and the total time.
//!
//! ## Usage
//!
//! ```rust
//! use sortkit::Algorithm;
//!
//! let sorted = Algorithm::Merge.sort_by(vec![5, 4, 3, 2, 1], |a, b| a.cmp(b));
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! ### Default comparator
//!
//! ```rust
//! use sortkit::{Algorithm, Value};
//!
//! let sorted = Algorithm::Quick
//!     .sort(vec![Value::from(10), Value::Undefined, Value::from(9), Value::Null])
//!     .unwrap();
//!
//! // "10" < "9" < "null", undefined last.
//! assert_eq!(
//!     sorted,
//!     vec![Value::from(10), Value::from(9), Value::Null, Value::Undefined]
//! );
//! ```
//!
//! ### Benchmarking
//!
//! ```rust
//! use sortkit::SortBenchmark;
//!
//! let report = SortBenchmark::new().run(&[3, 1, 2]).unwrap();
//! println!("fastest: {} ({:.3} ms)", report.fastest.id, report.fastest.rate_ms());
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Quadratic**: bubble, selection, insertion, simple counting, shaker and gnome sort.
//!   Quick sort degrades to quadratic time on sorted and reverse sorted input, since it
//!   always pivots on the first element.
//! - **Sub-quadratic**: Shell and comb sort (gap sequences), merge and heap sort
//!   (`O(N log N)`).
//! - **Stable**: bubble, insertion, shaker and gnome sort.

pub mod algo;
pub mod array;
pub mod bench;
pub mod clone;
pub mod compare;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod natural;
pub mod value;

pub use algo::Algorithm;
pub use bench::{Extreme, SortBenchmark, SortReport, Timing};
pub use clone::{CloneBenchmark, CloneMethod, CloneReport, DeepCopy};
pub use compare::default_compare;
pub use config::SortConfig;
pub use engine::SortEngine;
pub use error::{Result, SortError};
pub use natural::{RunOrder, natural_sort, natural_sort_by_key};
pub use value::{CanonicalString, Value};

pub mod prelude {
    pub use crate::algo::Algorithm;
    pub use crate::bench::SortBenchmark;
    pub use crate::clone::CloneBenchmark;
    pub use crate::compare::default_compare;
    pub use crate::engine::SortEngine;
    pub use crate::natural::{natural_sort, natural_sort_by_key};
    pub use crate::value::{CanonicalString, Value};
}
