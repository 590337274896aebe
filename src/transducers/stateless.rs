//! Element-wise stages: map, filter, flat_map and friends.
//!
//! None of these keep memory between elements, so their live reducers are a
//! downstream reducer plus a shared handle on the stage's callback.

use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;
use std::sync::Arc;

/* ===================== map ===================== */

/// Definition of a `map` stage. Built by [`map`].
pub struct Map<F> {
    f: Arc<F>,
}

impl<F> Clone for Map<F> {
    fn clone(&self) -> Self {
        Self { f: Arc::clone(&self.f) }
    }
}

/// Replace every element with `f(element)`.
///
/// Mapping sources hand `f` a `(key, value)` pair and expect a pair back.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// assert_eq!(seq(&map(|n: i32| n * 10), vec![1, 2, 3]), vec![10, 20, 30]);
/// ```
pub fn map<T, U, F>(f: F) -> Map<F>
where
    F: Fn(T) -> U,
{
    Map { f: Arc::new(f) }
}

/// Live reducer of a [`Map`] stage.
pub struct MapReducer<R, F> {
    inner: R,
    f: Arc<F>,
}

impl<R, F> Transducer<R> for Map<F> {
    type Output = MapReducer<R, F>;

    fn apply(&self, reducer: R) -> Self::Output {
        MapReducer {
            inner: reducer,
            f: Arc::clone(&self.f),
        }
    }
}

impl<T, U, R, F> Reducer<T> for MapReducer<R, F>
where
    F: Fn(T) -> U,
    R: Reducer<U>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let mapped = (*self.f)(item);
        self.inner.step(acc, mapped)
    }
}

/* ===================== filter ===================== */

/// Definition of a `filter` stage. Built by [`filter`].
pub struct Filter<P> {
    pred: Arc<P>,
}

impl<P> Clone for Filter<P> {
    fn clone(&self) -> Self {
        Self {
            pred: Arc::clone(&self.pred),
        }
    }
}

/// Keep only the elements for which `pred` returns `true`.
pub fn filter<T, P>(pred: P) -> Filter<P>
where
    P: Fn(&T) -> bool,
{
    Filter {
        pred: Arc::new(pred),
    }
}

/// Live reducer of a [`Filter`] stage.
pub struct FilterReducer<R, P> {
    inner: R,
    pred: Arc<P>,
}

impl<R, P> Transducer<R> for Filter<P> {
    type Output = FilterReducer<R, P>;

    fn apply(&self, reducer: R) -> Self::Output {
        FilterReducer {
            inner: reducer,
            pred: Arc::clone(&self.pred),
        }
    }
}

impl<T, R, P> Reducer<T> for FilterReducer<R, P>
where
    P: Fn(&T) -> bool,
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if (*self.pred)(&item) {
            self.inner.step(acc, item)
        } else {
            Step::Continue(acc)
        }
    }
}

/* ===================== filter_with_acc ===================== */

/// Definition of an accumulator-aware filter. Built by [`filter_with_acc`].
pub struct FilterWithAcc<P> {
    pred: Arc<P>,
}

impl<P> Clone for FilterWithAcc<P> {
    fn clone(&self) -> Self {
        Self {
            pred: Arc::clone(&self.pred),
        }
    }
}

/// Keep the elements for which `pred(element, accumulator)` returns `true`.
///
/// The accumulator is the driver's own output as built so far: a `Vec` for
/// sequences, the output map for mappings, the scalar after a `reduce` stage.
///
/// # Example
/// ```
/// use ironfold::*;
/// use std::collections::BTreeMap;
///
/// let source = BTreeMap::from([("a", 1), ("b", 2), ("c", 1)]);
/// let unique_values = filter_with_acc(|(_, v): &(&str, i32), acc: &BTreeMap<&str, i32>| {
///     !acc.values().any(|seen| seen == v)
/// });
/// assert_eq!(seq(&unique_values, source), BTreeMap::from([("a", 1), ("b", 2)]));
/// ```
pub fn filter_with_acc<T, A, P>(pred: P) -> FilterWithAcc<P>
where
    P: Fn(&T, &A) -> bool,
{
    FilterWithAcc {
        pred: Arc::new(pred),
    }
}

/// Live reducer of a [`FilterWithAcc`] stage.
pub struct FilterWithAccReducer<R, P> {
    inner: R,
    pred: Arc<P>,
}

impl<R, P> Transducer<R> for FilterWithAcc<P> {
    type Output = FilterWithAccReducer<R, P>;

    fn apply(&self, reducer: R) -> Self::Output {
        FilterWithAccReducer {
            inner: reducer,
            pred: Arc::clone(&self.pred),
        }
    }
}

impl<T, R, P> Reducer<T> for FilterWithAccReducer<R, P>
where
    R: Reducer<T>,
    P: Fn(&T, &R::Acc) -> bool,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if (*self.pred)(&item, &acc) {
            self.inner.step(acc, item)
        } else {
            Step::Continue(acc)
        }
    }
}

/* ===================== flat_map ===================== */

/// Definition of a `flat_map` stage. Built by [`flat_map`].
pub struct FlatMap<F> {
    f: Arc<F>,
}

impl<F> Clone for FlatMap<F> {
    fn clone(&self) -> Self {
        Self { f: Arc::clone(&self.f) }
    }
}

/// Replace every element with the elements of `f(element)`, one level deep.
///
/// Sub-elements are folded one at a time. A downstream stage that stops the
/// fold does so in the middle of a run of sub-elements, and the rest of that
/// run is never produced.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// let xf = flat_map(|n: u32| vec![n; n as usize]);
/// assert_eq!(seq(&xf, vec![1, 2, 3]), vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn flat_map<T, I, F>(f: F) -> FlatMap<F>
where
    F: Fn(T) -> I,
    I: IntoIterator,
{
    FlatMap { f: Arc::new(f) }
}

/// Live reducer of a [`FlatMap`] stage.
pub struct FlatMapReducer<R, F> {
    inner: R,
    f: Arc<F>,
}

impl<R, F> Transducer<R> for FlatMap<F> {
    type Output = FlatMapReducer<R, F>;

    fn apply(&self, reducer: R) -> Self::Output {
        FlatMapReducer {
            inner: reducer,
            f: Arc::clone(&self.f),
        }
    }
}

impl<T, I, R, F> Reducer<T> for FlatMapReducer<R, F>
where
    F: Fn(T) -> I,
    I: IntoIterator,
    R: Reducer<I::Item>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        fold_each(&mut self.inner, acc, (*self.f)(item))
    }
}

/// Fold every sub-element into `inner`, stopping at the first `Done`.
fn fold_each<R, I>(inner: &mut R, mut acc: R::Acc, items: I) -> Step<R::Acc>
where
    I: IntoIterator,
    R: Reducer<I::Item>,
{
    for sub in items {
        match inner.step(acc, sub) {
            Step::Continue(next) => acc = next,
            done @ Step::Done(_) => return done,
        }
    }
    Step::Continue(acc)
}

/* ===================== flatten ===================== */

/// Definition of a `flatten` stage. Built by [`flatten`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Flatten;

/// Splice iterable elements into the stream, one level deep.
///
/// Equivalent to `flat_map` with the identity function. Works with any
/// `IntoIterator` element, including [`Nested`](crate::Nested).
#[must_use]
pub const fn flatten() -> Flatten {
    Flatten
}

/// Live reducer of a [`Flatten`] stage.
pub struct FlattenReducer<R> {
    inner: R,
}

impl<R> Transducer<R> for Flatten {
    type Output = FlattenReducer<R>;

    fn apply(&self, reducer: R) -> Self::Output {
        FlattenReducer { inner: reducer }
    }
}

impl<T, R> Reducer<T> for FlattenReducer<R>
where
    T: IntoIterator,
    R: Reducer<T::Item>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        fold_each(&mut self.inner, acc, item)
    }
}

/* ===================== inspect ===================== */

/// Definition of an `inspect` stage. Built by [`inspect`].
pub struct Inspect<F> {
    f: Arc<F>,
}

impl<F> Clone for Inspect<F> {
    fn clone(&self) -> Self {
        Self { f: Arc::clone(&self.f) }
    }
}

/// Call `f` on every element that reaches this point, passing it on unchanged.
pub fn inspect<T, F>(f: F) -> Inspect<F>
where
    F: Fn(&T),
{
    Inspect { f: Arc::new(f) }
}

/// Live reducer of an [`Inspect`] stage.
pub struct InspectReducer<R, F> {
    inner: R,
    f: Arc<F>,
}

impl<R, F> Transducer<R> for Inspect<F> {
    type Output = InspectReducer<R, F>;

    fn apply(&self, reducer: R) -> Self::Output {
        InspectReducer {
            inner: reducer,
            f: Arc::clone(&self.f),
        }
    }
}

impl<T, R, F> Reducer<T> for InspectReducer<R, F>
where
    F: Fn(&T),
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        (*self.f)(&item);
        self.inner.step(acc, item)
    }
}
