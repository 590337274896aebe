//! Collection adapters: how drivers read sources and build outputs.
//!
//! Two shapes exist. Sequences are read in index order and grow by appending;
//! mappings are read as `(key, value)` entries in their natural order and grow
//! by inserting entries. Transducers never see any of this: the driver picks
//! the adapters from the static types of the source and target and hands the
//! chain a plain [`Reducer`].
//!
//! - [`Collection`] - the reading side, implemented by every source
//! - [`Target`] - the writing side, implemented by every output
//! - [`SameShape`] - which output `seq` builds for a given source
//! - [`SeqSink`] / [`Sink`] - the base reducers of `seq` and `into`

use crate::reducer::{Reducer, Step};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;
use std::ops::{Range, RangeInclusive};

/// Structural shape of a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Ordered elements, appended in order.
    Sequence,
    /// Key-value entries, inserted by key.
    Mapping,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence => f.write_str("sequence"),
            Self::Mapping => f.write_str("mapping"),
        }
    }
}

/* ===================== reading ===================== */

/// A source a driver can fold over.
pub trait Collection {
    /// Element handed to the transducer chain. Mappings yield `(K, V)`.
    type Item;
    /// Iterator over the elements in natural order.
    type Elements: Iterator<Item = Self::Item>;
    /// Shape of this collection.
    const SHAPE: Shape;

    /// Consume the collection into its elements.
    fn elements(self) -> Self::Elements;
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Elements = std::vec::IntoIter<T>;
    const SHAPE: Shape = Shape::Sequence;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Elements = std::collections::vec_deque::IntoIter<T>;
    const SHAPE: Shape = Shape::Sequence;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Elements = std::array::IntoIter<T, N>;
    const SHAPE: Shape = Shape::Sequence;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T: Clone> Collection for &'a [T] {
    type Item = T;
    type Elements = std::iter::Cloned<std::slice::Iter<'a, T>>;
    const SHAPE: Shape = Shape::Sequence;

    fn elements(self) -> Self::Elements {
        self.iter().cloned()
    }
}

impl<A> Collection for Range<A>
where
    Range<A>: Iterator<Item = A>,
{
    type Item = A;
    type Elements = Self;
    const SHAPE: Shape = Shape::Sequence;

    fn elements(self) -> Self {
        self
    }
}

impl<A> Collection for RangeInclusive<A>
where
    RangeInclusive<A>: Iterator<Item = A>,
{
    type Item = A;
    type Elements = Self;
    const SHAPE: Shape = Shape::Sequence;

    fn elements(self) -> Self {
        self
    }
}

impl<T> Collection for BTreeSet<T> {
    type Item = T;
    type Elements = std::collections::btree_set::IntoIter<T>;
    const SHAPE: Shape = Shape::Sequence;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = (K, V);
    type Elements = std::collections::btree_map::IntoIter<K, V>;
    const SHAPE: Shape = Shape::Mapping;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Item = (K, V);
    type Elements = std::collections::hash_map::IntoIter<K, V>;
    const SHAPE: Shape = Shape::Mapping;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

/* ===================== writing ===================== */

/// An output a driver can append elements to.
pub trait Target<T> {
    /// Add one element: push for sequences, insert for mappings.
    fn append(&mut self, item: T);
}

impl<T> Target<T> for Vec<T> {
    fn append(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Target<T> for VecDeque<T> {
    fn append(&mut self, item: T) {
        self.push_back(item);
    }
}

impl Target<char> for String {
    fn append(&mut self, item: char) {
        self.push(item);
    }
}

impl<T: Ord> Target<T> for BTreeSet<T> {
    fn append(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T, S> Target<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn append(&mut self, item: T) {
        self.insert(item);
    }
}

impl<K: Ord, V> Target<(K, V)> for BTreeMap<K, V> {
    fn append(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K, V, S> Target<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn append(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

/// Names the collection `seq` builds from a source when the chain produces
/// elements of type `U`: sequences give a `Vec<U>`, mappings give a mapping of
/// the same kind.
pub trait SameShape<U>: Collection {
    /// The output collection.
    type Output: Target<U> + Default;
}

impl<T, U> SameShape<U> for Vec<T> {
    type Output = Vec<U>;
}

impl<T, U> SameShape<U> for VecDeque<T> {
    type Output = VecDeque<U>;
}

impl<T, U, const N: usize> SameShape<U> for [T; N] {
    type Output = Vec<U>;
}

impl<T: Clone, U> SameShape<U> for &[T] {
    type Output = Vec<U>;
}

impl<A, U> SameShape<U> for Range<A>
where
    Range<A>: Iterator<Item = A>,
{
    type Output = Vec<U>;
}

impl<A, U> SameShape<U> for RangeInclusive<A>
where
    RangeInclusive<A>: Iterator<Item = A>,
{
    type Output = Vec<U>;
}

impl<T, U: Ord> SameShape<U> for BTreeSet<T> {
    type Output = BTreeSet<U>;
}

impl<K, V, K2: Ord, V2> SameShape<(K2, V2)> for BTreeMap<K, V> {
    type Output = BTreeMap<K2, V2>;
}

impl<K, V, S, K2: Eq + Hash, V2> SameShape<(K2, V2)> for HashMap<K, V, S> {
    type Output = HashMap<K2, V2>;
}

/* ===================== base reducers ===================== */

/// Base reducer of `seq`: builds the [`SameShape`] output of source `S`.
pub struct SeqSink<S>(PhantomData<fn(S)>);

impl<S> SeqSink<S> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S> Default for SeqSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, U> Reducer<U> for SeqSink<S>
where
    S: SameShape<U>,
{
    type Acc = S::Output;

    fn init(&self) -> S::Output {
        S::Output::default()
    }

    fn step(&mut self, mut acc: S::Output, item: U) -> Step<S::Output> {
        acc.append(item);
        Step::Continue(acc)
    }
}

/// Base reducer of `into`: appends into a target of type `C`.
///
/// `into` seeds the fold with the caller's target and never calls `init`.
/// The `Default` bound on the [`Reducer`] impl is only there so `init` has an
/// identity to return, e.g. when a `Sink` is handed to
/// [`transduce`](crate::transduce); targets used with `into` must still
/// implement it.
pub struct Sink<C>(PhantomData<fn(C)>);

impl<C> Sink<C> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<C> Default for Sink<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, T> Reducer<T> for Sink<C>
where
    C: Target<T> + Default,
{
    type Acc = C;

    fn init(&self) -> C {
        C::default()
    }

    fn step(&mut self, mut acc: C, item: T) -> Step<C> {
        acc.append(item);
        Step::Continue(acc)
    }
}
