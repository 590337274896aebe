//! Pre-built datasets for common transducer scenarios.

use crate::nested::Nested;
use std::collections::BTreeMap;

/// `0..10` as a vector.
///
/// # Example
///
/// ```
/// use ironfold::testing::digits;
///
/// assert_eq!(digits().len(), 10);
/// ```
#[must_use]
pub fn digits() -> Vec<i32> {
    (0..10).collect()
}

/// Each digit keyed by itself.
#[must_use]
pub fn digit_map() -> BTreeMap<u32, i32> {
    (0..10u32).zip(0..10).collect()
}

/// A stream with consecutive and scattered repeats.
#[must_use]
pub fn run_with_repeats() -> Vec<i32> {
    vec![0, 0, 1, 2, 2, 3, 4, 2, 3, 1, 2, 2, 0]
}

/// `[1, 2, [3, 4, 5], 6, 7, 8, 9]`.
#[must_use]
pub fn nested_sample() -> Vec<Nested<i32>> {
    vec![
        Nested::one(1),
        Nested::one(2),
        Nested::many([3, 4, 5]),
        Nested::one(6),
        Nested::one(7),
        Nested::one(8),
        Nested::one(9),
    ]
}

/// `{a: 1, b: 2, c: 3, d: 4}`.
#[must_use]
pub fn letter_map() -> BTreeMap<String, i32> {
    [("a", 1), ("b", 2), ("c", 3), ("d", 4)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
