//! The comparator used when the caller supplies none.

use std::cmp::Ordering;

use crate::error::Result;
use crate::value::CanonicalString;

/// Compares two elements by their canonical string form.
///
/// Undefined elements sort after every defined element and compare equal to each
/// other. Defined elements are converted with [`CanonicalString`] and compared by
/// UTF-16 code unit order, so `10` sorts before `9`.
///
/// Fails if either element has no string form; the error aborts any sort using this
/// comparator.
pub fn default_compare<T: CanonicalString + ?Sized>(a: &T, b: &T) -> Result<Ordering> {
    match (a.is_undefined(), b.is_undefined()) {
        (true, true) => return Ok(Ordering::Equal),
        (true, false) => return Ok(Ordering::Greater),
        (false, true) => return Ok(Ordering::Less),
        (false, false) => {}
    }

    let a = a.canonical_string()?;
    let b = b.canonical_string()?;

    // Code unit order differs from byte order only for characters outside the BMP,
    // which compare as surrogate pairs.
    if a.is_ascii() && b.is_ascii() {
        return Ok(a.as_bytes().cmp(b.as_bytes()));
    }
    Ok(a.encode_utf16().cmp(b.encode_utf16()))
}
