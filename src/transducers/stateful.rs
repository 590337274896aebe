//! Stages that remember what they have seen: dedupe, take, skip, take_until,
//! skip_while.
//!
//! The definitions built here carry configuration only. Counters, flags and
//! seen-sets are created inside [`Transducer::apply`], so every driver run
//! starts from a clean slate even when the same definition is reused.

use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

/* ===================== dedupe ===================== */

/// Definition of a consecutive-dedupe stage. Built by [`dedupe`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Dedupe<T>(PhantomData<fn(T)>);

/// Drop an element when it equals the element right before it.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// assert_eq!(seq(&dedupe(), vec![1, 1, 2, 1, 1]), vec![1, 2, 1]);
/// ```
#[must_use]
pub fn dedupe<T>() -> Dedupe<T> {
    Dedupe(PhantomData)
}

/// Live reducer of a [`Dedupe`] stage.
pub struct DedupeReducer<R, T> {
    inner: R,
    last: Option<T>,
}

impl<R, T> Transducer<R> for Dedupe<T> {
    type Output = DedupeReducer<R, T>;

    fn apply(&self, reducer: R) -> Self::Output {
        DedupeReducer {
            inner: reducer,
            last: None,
        }
    }
}

impl<T, R> Reducer<T> for DedupeReducer<R, T>
where
    T: PartialEq + Clone,
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.last.as_ref() == Some(&item) {
            return Step::Continue(acc);
        }
        self.last = Some(item.clone());
        self.inner.step(acc, item)
    }
}

/* ===================== dedupe_all ===================== */

/// Definition of a cumulative-dedupe stage. Built by [`dedupe_all`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DedupeAll<T>(PhantomData<fn(T)>);

/// Drop every element equal to one already let through; first occurrence wins.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// assert_eq!(seq(&dedupe_all(), vec![1, 1, 2, 1, 3]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn dedupe_all<T>() -> DedupeAll<T> {
    DedupeAll(PhantomData)
}

/// Live reducer of a [`DedupeAll`] stage.
pub struct DedupeAllReducer<R, T> {
    inner: R,
    seen: HashSet<T>,
}

impl<R, T> Transducer<R> for DedupeAll<T> {
    type Output = DedupeAllReducer<R, T>;

    fn apply(&self, reducer: R) -> Self::Output {
        DedupeAllReducer {
            inner: reducer,
            seen: HashSet::new(),
        }
    }
}

impl<T, R> Reducer<T> for DedupeAllReducer<R, T>
where
    T: Eq + Hash + Clone,
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.seen.contains(&item) {
            return Step::Continue(acc);
        }
        self.seen.insert(item.clone());
        self.inner.step(acc, item)
    }
}

/* ===================== take ===================== */

/// Definition of a `take` stage. Built by [`take`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Take {
    limit: Option<usize>,
}

/// Let the first `n` elements through, then stop the fold.
///
/// `take(None)` never stops. The fold stops right after the `n`-th element is
/// folded, so the source is not pulled any further than needed.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// assert_eq!(seq(&take(2), 0..10), vec![0, 1]);
/// assert_eq!(seq(&take(None), 0..3), vec![0, 1, 2]);
/// ```
pub fn take(n: impl Into<Option<usize>>) -> Take {
    Take { limit: n.into() }
}

/// Live reducer of a [`Take`] stage.
pub struct TakeReducer<R> {
    inner: R,
    remaining: Option<usize>,
}

impl<R> Transducer<R> for Take {
    type Output = TakeReducer<R>;

    fn apply(&self, reducer: R) -> Self::Output {
        TakeReducer {
            inner: reducer,
            remaining: self.limit,
        }
    }
}

impl<T, R> Reducer<T> for TakeReducer<R>
where
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        match self.remaining {
            None => self.inner.step(acc, item),
            Some(0) => Step::Done(acc),
            Some(n) => {
                self.remaining = Some(n - 1);
                let next = self.inner.step(acc, item);
                if n == 1 {
                    Step::Done(next.into_inner())
                } else {
                    next
                }
            }
        }
    }
}

/* ===================== skip ===================== */

/// Definition of a `skip` stage. Built by [`skip`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Skip {
    count: usize,
}

/// Drop the first `n` elements and let the rest through.
#[must_use]
pub const fn skip(n: usize) -> Skip {
    Skip { count: n }
}

/// Live reducer of a [`Skip`] stage.
pub struct SkipReducer<R> {
    inner: R,
    remaining: usize,
}

impl<R> Transducer<R> for Skip {
    type Output = SkipReducer<R>;

    fn apply(&self, reducer: R) -> Self::Output {
        SkipReducer {
            inner: reducer,
            remaining: self.count,
        }
    }
}

impl<T, R> Reducer<T> for SkipReducer<R>
where
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return Step::Continue(acc);
        }
        self.inner.step(acc, item)
    }
}

/* ===================== take_until ===================== */

/// Definition of a `take_until` stage. Built by [`take_until`].
pub struct TakeUntil<P> {
    pred: Arc<P>,
}

impl<P> Clone for TakeUntil<P> {
    fn clone(&self) -> Self {
        Self {
            pred: Arc::clone(&self.pred),
        }
    }
}

/// Let elements through while `pred` holds; stop the fold at the first one
/// that fails it.
///
/// The failing element is not folded. Placed before a `flat_map`, the stage
/// judges whole elements; placed after, it judges the flattened ones.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// assert_eq!(seq(&take_until(|n: &i32| *n != 4), 0..100), vec![0, 1, 2, 3]);
/// ```
pub fn take_until<T, P>(pred: P) -> TakeUntil<P>
where
    P: Fn(&T) -> bool,
{
    TakeUntil {
        pred: Arc::new(pred),
    }
}

/// Live reducer of a [`TakeUntil`] stage.
pub struct TakeUntilReducer<R, P> {
    inner: R,
    pred: Arc<P>,
}

impl<R, P> Transducer<R> for TakeUntil<P> {
    type Output = TakeUntilReducer<R, P>;

    fn apply(&self, reducer: R) -> Self::Output {
        TakeUntilReducer {
            inner: reducer,
            pred: Arc::clone(&self.pred),
        }
    }
}

impl<T, R, P> Reducer<T> for TakeUntilReducer<R, P>
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
            Step::Done(acc)
        }
    }
}

/* ===================== skip_while ===================== */

/// Definition of a `skip_while` stage. Built by [`skip_while`].
pub struct SkipWhile<P> {
    pred: Arc<P>,
}

impl<P> Clone for SkipWhile<P> {
    fn clone(&self) -> Self {
        Self {
            pred: Arc::clone(&self.pred),
        }
    }
}

/// Drop elements while `pred` holds; from the first one that fails it, let
/// everything through.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// let xf = skip_while(|n: &i32| *n < 3);
/// assert_eq!(seq(&xf, vec![1, 2, 3, 1, 5]), vec![3, 1, 5]);
/// ```
pub fn skip_while<T, P>(pred: P) -> SkipWhile<P>
where
    P: Fn(&T) -> bool,
{
    SkipWhile {
        pred: Arc::new(pred),
    }
}

/// Live reducer of a [`SkipWhile`] stage.
pub struct SkipWhileReducer<R, P> {
    inner: R,
    pred: Arc<P>,
    passing: bool,
}

impl<R, P> Transducer<R> for SkipWhile<P> {
    type Output = SkipWhileReducer<R, P>;

    fn apply(&self, reducer: R) -> Self::Output {
        SkipWhileReducer {
            inner: reducer,
            pred: Arc::clone(&self.pred),
            passing: false,
        }
    }
}

impl<T, R, P> Reducer<T> for SkipWhileReducer<R, P>
where
    P: Fn(&T) -> bool,
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        if !self.passing {
            if (*self.pred)(&item) {
                return Step::Continue(acc);
            }
            self.passing = true;
        }
        self.inner.step(acc, item)
    }
}
