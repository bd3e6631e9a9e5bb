//! Natural-order ("human") sorting.
//!
//! Keys are split into runs of ASCII digits and runs of everything else, and compared
//! run by run, so `item2` sorts before `item10`. At the same run position a digit run
//! sorts before a text run; when one key runs out of runs first it sorts first.
//!
//! The split is done lazily: each element gets a splitter that only parses as many
//! runs as the comparisons so far have asked for, and keeps them for later comparisons.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{apply_permutation, stable_merge_sort_by};
use crate::error::{Result, SortError};

/// How two runs of the same kind are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOrder {
    /// Digit runs compare as exact integers of any length, text runs compare as strings.
    #[default]
    Lexicographic,
    /// Every run is converted to a double and compared numerically. Text runs almost
    /// always convert to `NaN` and then compare equal, so only digit runs, run kinds and
    /// run counts decide the order.
    Legacy,
}

impl fmt::Display for RunOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunOrder::Lexicographic => "lexicographic",
            RunOrder::Legacy => "legacy",
        })
    }
}

impl FromStr for RunOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexicographic" => Ok(RunOrder::Lexicographic),
            "legacy" => Ok(RunOrder::Legacy),
            other => Err(SortError::invalid_argument(format!(
                "unknown run order '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Run {
    start: usize,
    end: usize,
    digits: bool,
    /// The run converted to a double, used by [`RunOrder::Legacy`].
    numeric_value: f64,
}

/// Lazily parsed run decomposition of one key.
#[derive(Debug)]
pub(crate) struct Splitter {
    key: String,
    runs: Vec<Run>,
    cursor: usize,
    completed: bool,
}

impl Splitter {
    pub(crate) fn new(key: String) -> Self {
        Self {
            key,
            runs: Vec::new(),
            cursor: 0,
            completed: false,
        }
    }

    /// Returns the run at `index`, parsing further into the key if needed.
    fn run(&mut self, index: usize) -> Option<Run> {
        while self.runs.len() <= index && !self.completed {
            self.parse_next();
        }
        self.runs.get(index).copied()
    }

    fn parsed_runs(&self) -> usize {
        self.runs.len()
    }

    fn text(&self, run: Run) -> &str {
        &self.key[run.start..run.end]
    }

    fn parse_next(&mut self) {
        let bytes = self.key.as_bytes();
        if self.cursor >= bytes.len() {
            self.completed = true;
            return;
        }

        // Run borders only fall next to ASCII digits, which are always char boundaries.
        let start = self.cursor;
        let digits = bytes[start].is_ascii_digit();
        let end = bytes[start..]
            .iter()
            .position(|b| b.is_ascii_digit() != digits)
            .map_or(bytes.len(), |offset| start + offset);

        let text = &self.key[start..end];
        let numeric_value = if digits {
            parse_digits(text)
        } else {
            text_to_number(text)
        };

        self.runs.push(Run {
            start,
            end,
            digits,
            numeric_value,
        });
        self.cursor = end;
    }
}

fn parse_digits(text: &str) -> f64 {
    // Rust float parsing accepts any digit string, rounding like the host does.
    text.parse().unwrap_or(f64::NAN)
}

/// Numeric conversion of a run without digits: blank text is zero, the infinity
/// literals are infinite, anything else is `NaN`.
fn text_to_number(text: &str) -> f64 {
    match text.trim() {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => f64::NAN,
    }
}

/// Compares two digit strings as unbounded non-negative integers.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_splitters(a: &mut Splitter, b: &mut Splitter, order: RunOrder) -> Ordering {
    let mut index = 0;
    loop {
        let (Some(left), Some(right)) = (a.run(index), b.run(index)) else {
            // One key is exhausted; the one with fewer runs comes first.
            return a.parsed_runs().cmp(&b.parsed_runs());
        };

        if left.digits != right.digits {
            return if left.digits {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let ord = match order {
            RunOrder::Legacy => left
                .numeric_value
                .partial_cmp(&right.numeric_value)
                .unwrap_or(Ordering::Equal),
            RunOrder::Lexicographic if left.digits => {
                compare_digit_runs(a.text(left), b.text(right))
            }
            RunOrder::Lexicographic => a.text(left).cmp(b.text(right)),
        };
        if ord != Ordering::Equal {
            return ord;
        }

        index += 1;
    }
}

/// Compares two strings in natural order.
///
/// ```
/// use sortkit::natural::{natural_compare, RunOrder};
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_compare("file9", "file10", RunOrder::Lexicographic), Ordering::Less);
/// assert_eq!(natural_compare("10", "a", RunOrder::Lexicographic), Ordering::Less);
/// ```
pub fn natural_compare(a: &str, b: &str, order: RunOrder) -> Ordering {
    let mut a = Splitter::new(a.to_string());
    let mut b = Splitter::new(b.to_string());
    compare_splitters(&mut a, &mut b, order)
}

/// Sorts elements in natural order of their `Display` form.
///
/// ```
/// use sortkit::natural_sort;
///
/// let sorted = natural_sort(vec!["item2", "item10", "item1"]);
/// assert_eq!(sorted, vec!["item1", "item2", "item10"]);
/// ```
pub fn natural_sort<T: fmt::Display>(v: Vec<T>) -> Vec<T> {
    natural_sort_with(v, |item| item.to_string(), RunOrder::default())
}

/// Sorts elements in natural order of the string `key` extracts from each.
pub fn natural_sort_by_key<T, K>(v: Vec<T>, key: K) -> Vec<T>
where
    K: FnMut(&T) -> String,
{
    natural_sort_with(v, key, RunOrder::default())
}

/// Sorts elements in natural order of their extracted keys, comparing same-kind runs
/// according to `order`.
///
/// The sort is stable: elements whose keys compare equal keep their input order. The
/// key extractor is called exactly once per element.
pub fn natural_sort_with<T, K>(mut v: Vec<T>, mut key: K, order: RunOrder) -> Vec<T>
where
    K: FnMut(&T) -> String,
{
    if v.len() <= 1 {
        return v;
    }

    let splitters: Vec<RefCell<Splitter>> = v
        .iter()
        .map(|item| RefCell::new(Splitter::new(key(item))))
        .collect();

    // Legacy run order is not a total order.
    let indices = stable_merge_sort_by((0..v.len()).collect(), |&a: &usize, &b: &usize| {
        if a == b {
            return Ordering::Equal;
        }
        compare_splitters(
            &mut splitters[a].borrow_mut(),
            &mut splitters[b].borrow_mut(),
            order,
        )
    });

    apply_permutation(&mut v, indices);
    v
}
