//! General-purpose helpers for working with sequences.

use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::error::{Result, SortError};
use crate::value::Value;

/// Picks a uniformly random element, or `None` for an empty slice.
pub fn random<T>(v: &[T]) -> Option<&T> {
    random_with(v, &mut rand::rng())
}

pub fn random_with<'a, T, R: Rng + ?Sized>(v: &'a [T], rng: &mut R) -> Option<&'a T> {
    v.choose(rng)
}

/// Splits `v` into chunks of `chunk` elements, followed by the shorter remainder if
/// there is one.
///
/// ```
/// use sortkit::array::split_on;
///
/// assert_eq!(split_on(&[1, 2, 3], 2).unwrap(), vec![vec![1, 2], vec![3]]);
/// ```
pub fn split_on<T: Clone>(v: &[T], chunk: usize) -> Result<Vec<Vec<T>>> {
    if chunk == 0 {
        return Err(SortError::invalid_argument("chunk size must be positive"));
    }

    let complete = v.chunks_exact(chunk);
    let remainder = complete.remainder();
    let mut response: Vec<Vec<T>> = complete.map(<[T]>::to_vec).collect();
    if !remainder.is_empty() {
        response.push(remainder.to_vec());
    }
    Ok(response)
}

/// Splits `v` into consecutive groups of at most `elements_in_chunk` elements.
///
/// ```
/// use sortkit::array::split_to;
///
/// assert_eq!(split_to(&[1, 2, 3], 1).unwrap(), vec![vec![1], vec![2], vec![3]]);
/// ```
pub fn split_to<T: Clone>(v: &[T], elements_in_chunk: usize) -> Result<Vec<Vec<T>>> {
    if elements_in_chunk == 0 {
        return Err(SortError::invalid_argument(
            "elements per chunk must be positive",
        ));
    }
    Ok(v.chunks(elements_in_chunk).map(<[T]>::to_vec).collect())
}

/// Returns a shuffled copy of `v` (Fisher-Yates).
pub fn shuffle<T: Clone>(v: &[T]) -> Vec<T> {
    shuffle_with(v, &mut rand::rng())
}

pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(v: &[T], rng: &mut R) -> Vec<T> {
    let mut response = v.to_vec();
    response.shuffle(rng);
    response
}

/// Inserts `element` at `index`, or at the end if `index` is past it.
pub fn insert<T>(mut v: Vec<T>, index: usize, element: T) -> Vec<T> {
    let index = index.min(v.len());
    v.insert(index, element);
    v
}

/// Removes repeated values, keeping the first occurrence of each.
pub fn make_unique<T: Eq + Hash + Clone>(v: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(v.len());
    v.into_iter().filter(|item| seen.insert(item.clone())).collect()
}

pub fn last<T>(v: &[T]) -> Option<&T> {
    v.last()
}

/// Drops `0`, `NaN`, `""`, `false`, `null` and undefined values.
pub fn remove_false_values(mut v: Vec<Value>) -> Vec<Value> {
    v.retain(Value::is_truthy);
    v
}

/// Builds a vector of `len` elements produced by `element`.
///
/// ```
/// use sortkit::array::generate;
///
/// let mut i = 1;
/// assert_eq!(generate(3, || { i += 1; i }), vec![2, 3, 4]);
/// ```
pub fn generate<T, F: FnMut() -> T>(len: usize, element: F) -> Vec<T> {
    std::iter::repeat_with(element).take(len).collect()
}

/// Aggregates over numeric slices.
///
/// `NaN` anywhere in the input makes `min` and `max` return `NaN`.
pub mod number {
    pub fn min(v: &[f64]) -> f64 {
        v.iter().fold(f64::INFINITY, |acc, &x| {
            if acc.is_nan() || x.is_nan() {
                f64::NAN
            } else {
                acc.min(x)
            }
        })
    }

    pub fn max(v: &[f64]) -> f64 {
        v.iter().fold(f64::NEG_INFINITY, |acc, &x| {
            if acc.is_nan() || x.is_nan() {
                f64::NAN
            } else {
                acc.max(x)
            }
        })
    }

    /// Arithmetic mean, or `None` for an empty slice.
    pub fn average(v: &[f64]) -> Option<f64> {
        if v.is_empty() {
            return None;
        }
        Some(total(v) / v.len() as f64)
    }

    pub fn total(v: &[f64]) -> f64 {
        v.iter().sum()
    }
}
