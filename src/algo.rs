//! The eleven classic comparison sorts.
//!
//! Every algorithm comes in two shapes:
//! - `try_<name>_sort(v, compare)` takes a fallible comparator and stops at the first
//!   error it returns, handing that error back unchanged.
//! - `<name>_sort_by(v, compare)` takes a plain `Ordering` comparator.
//!
//! All of them take ownership of the input and return the sorted sequence. In-place
//! algorithms hand back the same buffer; merge, quick and simple counting sort build a
//! new one. Inputs of length 0 or 1 are returned without calling the comparator.
//!
//! [`Algorithm`] names each implementation and dispatches to it, which is what the
//! benchmark harness iterates over.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compare::default_compare;
use crate::core::{apply_permutation, into_ok, lift};
use crate::error::{Result, SortError};
use crate::value::CanonicalString;

/// Shrink factor of the comb sort gap sequence.
const COMB_SHRINK_FACTOR: f64 = 1.247330950103979;

/// A sorting algorithm, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    #[serde(rename = "Shell")]
    Shell,
    SimpleCounting,
    Comb,
    Merge,
    Heap,
    Quick,
    Shaker,
    Gnome,
}

impl Algorithm {
    /// Every algorithm, in the order the benchmark runs them.
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::SimpleCounting,
        Algorithm::Comb,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Shaker,
        Algorithm::Gnome,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Shell => "Shell",
            Algorithm::SimpleCounting => "simpleCounting",
            Algorithm::Comb => "comb",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Quick => "quick",
            Algorithm::Shaker => "shaker",
            Algorithm::Gnome => "gnome",
        }
    }

    /// Whether elements that compare equal keep their relative order.
    ///
    /// Merge sort is not listed: its merge step takes the right-hand element on ties.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Shaker | Algorithm::Gnome
        )
    }

    /// Whether the algorithm sorts inside the buffer it was given.
    pub fn is_in_place(self) -> bool {
        !matches!(
            self,
            Algorithm::SimpleCounting | Algorithm::Merge | Algorithm::Quick
        )
    }

    /// Sorts `v` with a fallible comparator.
    pub fn try_sort_by<T, E, F>(self, v: Vec<T>, compare: F) -> std::result::Result<Vec<T>, E>
    where
        F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
    {
        match self {
            Algorithm::Bubble => try_bubble_sort(v, compare),
            Algorithm::Selection => try_selection_sort(v, compare),
            Algorithm::Insertion => try_insertion_sort(v, compare),
            Algorithm::Shell => try_shell_sort(v, compare),
            Algorithm::SimpleCounting => try_simple_counting_sort(v, compare),
            Algorithm::Comb => try_comb_sort(v, compare),
            Algorithm::Merge => try_merge_sort(v, compare),
            Algorithm::Heap => try_heap_sort(v, compare),
            Algorithm::Quick => try_quick_sort(v, compare),
            Algorithm::Shaker => try_shaker_sort(v, compare),
            Algorithm::Gnome => try_gnome_sort(v, compare),
        }
    }

    /// Sorts `v` with an infallible comparator.
    pub fn sort_by<T, F>(self, v: Vec<T>, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        into_ok(self.try_sort_by(v, lift(compare)))
    }

    /// Sorts `v` with [`default_compare`].
    ///
    /// ```
    /// use sortkit::Algorithm;
    ///
    /// let sorted = Algorithm::Heap.sort(vec![10, 9, 1]).unwrap();
    /// assert_eq!(sorted, vec![1, 10, 9]); // compared as strings
    /// ```
    pub fn sort<T: CanonicalString>(self, v: Vec<T>) -> Result<Vec<T>> {
        self.try_sort_by(v, |a, b| default_compare(a, b))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Parses an algorithm name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SortError::invalid_argument(format!("unknown algorithm '{s}'")))
    }
}

macro_rules! by_variant {
    ($(#[$doc:meta])* $name:ident => $fallible:ident) => {
        $(#[$doc])*
        pub fn $name<T, F>(v: Vec<T>, compare: F) -> Vec<T>
        where
            F: FnMut(&T, &T) -> Ordering,
        {
            into_ok($fallible(v, lift(compare)))
        }
    };
}

/// Bubble sort: passes of adjacent swaps, each pass one element shorter. Stable.
pub fn try_bubble_sort<T, E, F>(mut v: Vec<T>, mut compare: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    if v.len() <= 1 {
        return Ok(v);
    }

    let end = v.len() - 1;
    for i in 0..end {
        for j in 0..end - i {
            if compare(&v[j], &v[j + 1])? == Ordering::Greater {
                v.swap(j, j + 1);
            }
        }
    }
    Ok(v)
}

by_variant!(
    /// Infallible [`try_bubble_sort`].
    bubble_sort_by => try_bubble_sort
);

/// Selection sort: moves the minimum of the unsorted suffix to its front.
pub fn try_selection_sort<T, E, F>(
    mut v: Vec<T>,
    mut compare: F,
) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    let len = v.len();
    if len <= 1 {
        return Ok(v);
    }

    for i in 0..len - 1 {
        let mut min = i;
        for j in i + 1..len {
            if compare(&v[j], &v[min])? == Ordering::Less {
                min = j;
            }
        }
        v.swap(min, i);
    }
    Ok(v)
}

by_variant!(
    /// Infallible [`try_selection_sort`].
    selection_sort_by => try_selection_sort
);

/// Insertion sort: shifts each element left into the sorted prefix. Stable.
pub fn try_insertion_sort<T, E, F>(
    mut v: Vec<T>,
    mut compare: F,
) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    if v.len() <= 1 {
        return Ok(v);
    }

    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[j])? == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
    Ok(v)
}

by_variant!(
    /// Infallible [`try_insertion_sort`].
    insertion_sort_by => try_insertion_sort
);

/// Shell sort: gapped insertion sort.
///
/// The gap starts at `len / 2` and shrinks to `gap * 5 / 11`, except that a gap of 2
/// is followed by 1. The last pass always runs with a gap of 1.
pub fn try_shell_sort<T, E, F>(mut v: Vec<T>, mut compare: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    let len = v.len();
    if len <= 1 {
        return Ok(v);
    }

    let mut gap = len / 2;
    while gap > 0 {
        for j in 0..len {
            let mut k = j;
            while k >= gap && compare(&v[k - gap], &v[k])? == Ordering::Greater {
                v.swap(k - gap, k);
                k -= gap;
            }
        }
        gap = if gap == 2 { 1 } else { gap * 5 / 11 };
    }
    Ok(v)
}

by_variant!(
    /// Infallible [`try_shell_sort`].
    shell_sort_by => try_shell_sort
);

/// Simple counting sort: ranks every element by pairwise comparison, then places each
/// element at its rank.
///
/// For each pair `(i, j)` with `i < j`, the rank of `j` grows if `v[i] < v[j]`,
/// otherwise the rank of `i` grows. With a consistent comparator the ranks form a
/// permutation and equal elements come out in reverse input order. Should an
/// inconsistent comparator produce colliding ranks, the colliding elements keep their
/// input order at that rank and no element is lost.
pub fn try_simple_counting_sort<T, E, F>(
    mut v: Vec<T>,
    mut compare: F,
) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    let len = v.len();
    if len <= 1 {
        return Ok(v);
    }

    let mut ranks = vec![0usize; len];
    for i in 0..len - 1 {
        for j in i + 1..len {
            if compare(&v[i], &v[j])? == Ordering::Less {
                ranks[j] += 1;
            } else {
                ranks[i] += 1;
            }
        }
    }

    // Each element takes part in `len - 1` comparisons, so every rank is below `len`.
    let mut slots: Vec<Vec<usize>> = vec![Vec::new(); len];
    for (index, &rank) in ranks.iter().enumerate() {
        slots[rank].push(index);
    }
    let order: Vec<usize> = slots.into_iter().flatten().collect();

    apply_permutation(&mut v, order);
    Ok(v)
}

by_variant!(
    /// Infallible [`try_simple_counting_sort`].
    simple_counting_sort_by => try_simple_counting_sort
);

/// Comb sort: bubble sort over a shrinking gap.
///
/// The gap starts at `len / 1.2473...` and is divided by the same factor after every
/// pass while it stays above 1; each pass uses the rounded gap. Once the gap sequence is
/// exhausted, gap-1 passes repeat until one makes no swap.
pub fn try_comb_sort<T, E, F>(mut v: Vec<T>, mut compare: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    let len = v.len();
    if len <= 1 {
        return Ok(v);
    }

    let mut gap_factor = len as f64 / COMB_SHRINK_FACTOR;
    while gap_factor > 1.0 {
        let gap = gap_factor.round() as usize;
        for j in gap..len {
            let i = j - gap;
            if compare(&v[i], &v[j])? == Ordering::Greater {
                v.swap(i, j);
            }
        }
        gap_factor /= COMB_SHRINK_FACTOR;
    }

    // The gap sequence alone may leave adjacent inversions behind.
    loop {
        let mut swapped = false;
        for i in 0..len - 1 {
            if compare(&v[i], &v[i + 1])? == Ordering::Greater {
                v.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(v)
}

by_variant!(
    /// Infallible [`try_comb_sort`].
    comb_sort_by => try_comb_sort
);

/// Top-down merge sort.
///
/// Splits at `len / 2` and merges the sorted halves, taking the left element only when
/// it is strictly less than the right one. On ties the right element goes first, so
/// equal elements from different halves swap their relative order.
pub fn try_merge_sort<T, E, F>(v: Vec<T>, mut compare: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    merge_sort_recursive(v, &mut compare)
}

fn merge_sort_recursive<T, E, F>(mut v: Vec<T>, compare: &mut F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    if v.len() <= 1 {
        return Ok(v);
    }

    let right = v.split_off(v.len() / 2);
    let left = merge_sort_recursive(v, compare)?;
    let right = merge_sort_recursive(right, compare)?;
    merge_runs(left, right, compare)
}

fn merge_runs<T, E, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if compare(l, r)? == Ordering::Less {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

by_variant!(
    /// Infallible [`try_merge_sort`].
    merge_sort_by => try_merge_sort
);

/// Heap sort: builds a max-heap, then repeatedly swaps the root to the end of the
/// shrinking heap.
pub fn try_heap_sort<T, E, F>(mut v: Vec<T>, mut compare: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    let len = v.len();
    if len <= 1 {
        return Ok(v);
    }

    for node in (0..=len / 2).rev() {
        sift_down(&mut v, node, &mut compare)?;
    }

    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, &mut compare)?;
    }
    Ok(v)
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<T, E, F>(v: &mut [T], mut node: usize, compare: &mut F) -> std::result::Result<(), E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    loop {
        let left = 2 * node + 1;
        let right = left + 1;
        let mut max = node;

        // The left child wins ties between children.
        if left < v.len() && compare(&v[left], &v[max])? == Ordering::Greater {
            max = left;
        }
        if right < v.len() && compare(&v[right], &v[max])? == Ordering::Greater {
            max = right;
        }

        if max == node {
            return Ok(());
        }

        v.swap(max, node);
        node = max;
    }
}

by_variant!(
    /// Infallible [`try_heap_sort`].
    heap_sort_by => try_heap_sort
);

/// Quicksort with the first element as pivot.
///
/// Elements strictly less than the pivot go left, all others right, and the result is
/// `sorted(left) + [pivot] + sorted(right)`. The pivot choice is deterministic, so
/// already sorted and reverse sorted inputs take quadratic time.
pub fn try_quick_sort<T, E, F>(v: Vec<T>, mut compare: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    if v.len() <= 1 {
        return Ok(v);
    }

    let mut sorted = Vec::with_capacity(v.len());
    // Pending work, popped from the end: the "less" side is always on top, so output
    // is produced left to right without native recursion.
    let mut stack = vec![QuickTask::Sort(v)];

    while let Some(task) = stack.pop() {
        let items = match task {
            QuickTask::Emit(pivot) => {
                sorted.push(pivot);
                continue;
            }
            QuickTask::Sort(items) if items.len() <= 1 => {
                sorted.extend(items);
                continue;
            }
            QuickTask::Sort(items) => items,
        };

        let mut items = items.into_iter();
        let Some(pivot) = items.next() else {
            continue;
        };

        let mut less = Vec::new();
        let mut rest = Vec::new();
        for item in items {
            if compare(&item, &pivot)? == Ordering::Less {
                less.push(item);
            } else {
                rest.push(item);
            }
        }

        stack.push(QuickTask::Sort(rest));
        stack.push(QuickTask::Emit(pivot));
        stack.push(QuickTask::Sort(less));
    }

    Ok(sorted)
}

enum QuickTask<T> {
    Sort(Vec<T>),
    Emit(T),
}

by_variant!(
    /// Infallible [`try_quick_sort`].
    quick_sort_by => try_quick_sort
);

/// Shaker (cocktail) sort: alternating forward and backward bubble passes that shrink
/// the unsorted window from both ends. Stops early once a pass makes no swap. Stable.
pub fn try_shaker_sort<T, E, F>(mut v: Vec<T>, mut compare: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    if v.len() <= 1 {
        return Ok(v);
    }

    let mut low = 0;
    let mut high = v.len() - 1;
    let mut swapped = true;

    while low < high && swapped {
        swapped = false;
        for k in low..high {
            if compare(&v[k], &v[k + 1])? == Ordering::Greater {
                v.swap(k, k + 1);
                swapped = true;
            }
        }
        high -= 1;

        if swapped {
            swapped = false;
            for k in (low + 1..=high).rev() {
                if compare(&v[k], &v[k - 1])? == Ordering::Less {
                    v.swap(k, k - 1);
                    swapped = true;
                }
            }
        }
        low += 1;
    }
    Ok(v)
}

by_variant!(
    /// Infallible [`try_shaker_sort`].
    shaker_sort_by => try_shaker_sort
);

/// Gnome sort: walks forward while adjacent pairs are ordered, swaps and steps back on
/// an inversion, then jumps ahead to where the forward walk left off. Only strict
/// inversions are swapped, so the sort is stable.
pub fn try_gnome_sort<T, E, F>(mut v: Vec<T>, mut compare: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    let len = v.len();
    if len <= 1 {
        return Ok(v);
    }

    let mut i = 1;
    let mut resume = 2;
    while i < len {
        if compare(&v[i - 1], &v[i])? != Ordering::Greater {
            i = resume;
            resume += 1;
        } else {
            v.swap(i - 1, i);
            i -= 1;
            if i == 0 {
                i = resume;
                resume += 1;
            }
        }
    }
    Ok(v)
}

by_variant!(
    /// Infallible [`try_gnome_sort`].
    gnome_sort_by => try_gnome_sort
);
