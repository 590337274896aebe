//! Assertion functions for driver outputs.

use crate::driver::RunSummary;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Assert that a driver's sequence output matches `expected`, element by
/// element.
///
/// On failure the message names the first differing position, or the
/// surplus/missing tail when only the lengths differ.
///
/// # Panics
///
/// Panics if the sequences differ.
///
/// # Example
///
/// ```
/// use ironfold::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    if let Some(i) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        panic!(
            "Sequence mismatch at position {i}: produced {:?}, wanted {:?}\n  produced: {actual:?}\n  wanted:   {expected:?}",
            actual[i], expected[i]
        );
    }
    let shared = actual.len().min(expected.len());
    assert!(
        actual.len() == expected.len(),
        "Sequence length mismatch: produced {} elements, wanted {}\n  extra produced: {:?}\n  never produced: {:?}",
        actual.len(),
        expected.len(),
        &actual[shared..],
        &expected[shared..]
    );
}

/// Assert that two mappings hold the same entries.
///
/// Reports missing keys, unexpected keys and differing values separately.
///
/// # Panics
///
/// Panics if the mappings differ.
///
/// # Example
///
/// ```
/// use ironfold::testing::assert_maps_equal;
/// use std::collections::BTreeMap;
///
/// let actual = BTreeMap::from([("b", 10), ("d", 20)]);
/// assert_maps_equal(&actual, &BTreeMap::from([("d", 20), ("b", 10)]));
/// ```
pub fn assert_maps_equal<K, V>(actual: &BTreeMap<K, V>, expected: &BTreeMap<K, V>)
where
    K: Debug + Ord,
    V: Debug + PartialEq,
{
    let missing: Vec<&K> = expected.keys().filter(|k| !actual.contains_key(*k)).collect();
    let extra: Vec<&K> = actual.keys().filter(|k| !expected.contains_key(*k)).collect();
    let differing: Vec<(&K, &V, &V)> = expected
        .iter()
        .filter_map(|(k, e)| actual.get(k).filter(|a| *a != e).map(|a| (k, e, a)))
        .collect();

    assert!(
        missing.is_empty() && extra.is_empty() && differing.is_empty(),
        "Mapping mismatch:\n  Missing keys: {missing:?}\n  Extra keys: {extra:?}\n  Differing (key, expected, actual): {differing:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert how many elements a run pulled and whether it stopped early.
///
/// # Panics
///
/// Panics if either figure differs.
pub fn assert_run(summary: &RunSummary, pulled: usize, terminated: bool) {
    assert_eq!(
        (summary.pulled, summary.terminated),
        (pulled, terminated),
        "Run mismatch:\n  Expected: pulled {pulled}, terminated {terminated}\n  Actual: {summary:?}"
    );
}
