//! Core helpers shared by the sorting modules.
//!
//! This module defines:
//! - [`is_sorted_by`]: checks the non-decreasing property under a comparator.
//! - Internal helpers to adapt infallible comparators, to permute a buffer
//!   into a computed order and to merge sort under a comparator that may be
//!   inconsistent.

use std::cmp::Ordering;
use std::convert::Infallible;

/// Returns `true` if no adjacent pair of `v` is ordered `Greater` by `compare`.
///
/// # Examples
///
/// ```
/// use sortkit::core::is_sorted_by;
///
/// assert!(is_sorted_by(&[1, 2, 2, 3], |a, b| a.cmp(b)));
/// assert!(!is_sorted_by(&[3, 1], |a, b| a.cmp(b)));
/// ```
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Lifts an infallible comparator into the fallible shape every algorithm is written
/// against.
#[inline(always)]
pub(crate) fn lift<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Result<Ordering, Infallible>
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| Ok(compare(a, b))
}

#[inline(always)]
pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Reorders `data` so that position `i` holds the element previously at `order[i]`.
///
/// `order` must be a permutation of `0..data.len()`. Each cycle of the permutation is
/// walked once, swapping the element that belongs in the current hole into place.
pub(crate) fn apply_permutation<T>(data: &mut [T], mut order: Vec<usize>) {
    for start in 0..data.len() {
        let mut hole = start;
        loop {
            // A settled position points at itself.
            let source = std::mem::replace(&mut order[hole], hole);
            if source == start {
                break;
            }
            data.swap(hole, source);
            hole = source;
        }
    }
}

/// Stable top-down merge sort that takes the left element unless the right one is
/// strictly less.
///
/// Unlike `slice::sort_by` it never panics on a comparator that is not a total order;
/// the output is then some permutation of the input.
pub(crate) fn stable_merge_sort_by<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_merge_recursive(v, &mut compare)
}

fn stable_merge_recursive<T, F>(mut v: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return v;
    }

    let right = v.split_off(v.len() / 2);
    let left = stable_merge_recursive(v, compare);
    let right = stable_merge_recursive(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if compare(r, l) == Ordering::Less {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
