//! Elements that are either a single value or a run of values.
//!
//! Heterogeneous sources like `[1, 2, [3, 4, 5], 6]` are written as a
//! `Vec<Nested<i32>>`. Stages ahead of a `flat_map`/`flatten` see whole
//! `Nested` elements; stages after it see the individual values.

use serde::{Deserialize, Serialize};

/// A single value, or a nested run of values spliced in by flattening.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Nested<T> {
    pub const fn one(value: T) -> Self {
        Self::One(value)
    }

    pub fn many(values: impl IntoIterator<Item = T>) -> Self {
        Self::Many(values.into_iter().collect())
    }

    /// Number of values this element flattens into.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> IntoIterator for Nested<T> {
    type Item = T;
    type IntoIter = NestedIter<T>;

    fn into_iter(self) -> NestedIter<T> {
        match self {
            Self::One(value) => NestedIter::One(Some(value)),
            Self::Many(values) => NestedIter::Many(values.into_iter()),
        }
    }
}

/// Iterator over the values of a [`Nested`].
#[derive(Clone, Debug)]
pub enum NestedIter<T> {
    One(Option<T>),
    Many(std::vec::IntoIter<T>),
}

impl<T> Iterator for NestedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            Self::One(slot) => slot.take(),
            Self::Many(values) => values.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::One(slot) => {
                let n = usize::from(slot.is_some());
                (n, Some(n))
            }
            Self::Many(values) => values.size_hint(),
        }
    }
}
