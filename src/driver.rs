//! Drivers: the entry points that run a transducer chain over a collection.
//!
//! Every driver does the same four things:
//! 1. build a base reducer for the output (a [`SeqSink`], a [`Sink`], or one
//!    supplied by the caller),
//! 2. apply the transducer to it, which allocates every stage's private state,
//! 3. feed the source's elements into the wrapped reducer in natural order,
//! 4. stop at the first [`Step::Done`], or at the end of the source, and
//!    return the accumulator.
//!
//! The free functions ([`seq`], [`into`], [`transduce`] and the curried
//! [`seq_fn`] / [`into_fn`]) run with a default [`Driver`]. Build a `Driver`
//! yourself to label its log events or to get a [`RunSummary`] back.

use crate::adapter::{Collection, SeqSink, Shape, Sink};
use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Accumulator type produced by running `X` over `S` with [`seq`].
pub type SeqAcc<S, X> =
    <<X as Transducer<SeqSink<S>>>::Output as Reducer<<S as Collection>::Item>>::Acc;

/// Accumulator type produced by running `X` over `S` on top of reducer `R`.
pub type TransduceAcc<R, S, X> =
    <<X as Transducer<R>>::Output as Reducer<<S as Collection>::Item>>::Acc;

const DEFAULT_LABEL: &str = "ironfold";

/// Driver configuration.
///
/// The defaults are what the free functions use: no label, no per-element
/// tracing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Driver {
    /// Name attached to the log events of runs started by this driver.
    pub label: Option<String>,
    /// Emit a `trace` event for every element pulled from the source.
    pub trace_elements: bool,
}

/// What happened during one driver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Shape of the source that was read.
    pub shape: Shape,
    /// Elements pulled from the source.
    pub pulled: usize,
    /// Whether a stage signalled [`Step::Done`].
    pub terminated: bool,
}

impl Driver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn with_element_tracing(mut self, enabled: bool) -> Self {
        self.trace_elements = enabled;
        self
    }

    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    /// Run `xf` over `source`, building an output of the source's shape.
    pub fn seq<S, X>(&self, xf: &X, source: S) -> SeqAcc<S, X>
    where
        S: Collection,
        X: Transducer<SeqSink<S>>,
        X::Output: Reducer<S::Item>,
    {
        self.seq_with_summary(xf, source).0
    }

    /// [`seq`](Self::seq), also returning a [`RunSummary`].
    pub fn seq_with_summary<S, X>(&self, xf: &X, source: S) -> (SeqAcc<S, X>, RunSummary)
    where
        S: Collection,
        X: Transducer<SeqSink<S>>,
        X::Output: Reducer<S::Item>,
    {
        let mut reducer = xf.apply(SeqSink::new());
        let init = reducer.init();
        self.run(&mut reducer, init, S::SHAPE, source.elements())
    }

    /// Run `xf` over `source`, appending into `target`.
    ///
    /// Named apart from the free [`into`] so that method calls on an owned
    /// `Driver` never resolve to [`Into::into`].
    pub fn into_target<C, S, X>(&self, target: C, xf: &X, source: S) -> C
    where
        S: Collection,
        X: Transducer<Sink<C>>,
        X::Output: Reducer<S::Item, Acc = C>,
    {
        self.into_target_with_summary(target, xf, source).0
    }

    /// [`into_target`](Self::into_target), also returning a [`RunSummary`].
    pub fn into_target_with_summary<C, S, X>(&self, target: C, xf: &X, source: S) -> (C, RunSummary)
    where
        S: Collection,
        X: Transducer<Sink<C>>,
        X::Output: Reducer<S::Item, Acc = C>,
    {
        let mut reducer = xf.apply(Sink::new());
        self.run(&mut reducer, target, S::SHAPE, source.elements())
    }

    /// Run `xf` over `source` on top of a caller-supplied base reducer,
    /// starting from the wrapped reducer's `init`.
    pub fn transduce<R, S, X>(&self, xf: &X, reducer: R, source: S) -> TransduceAcc<R, S, X>
    where
        S: Collection,
        X: Transducer<R>,
        X::Output: Reducer<S::Item>,
    {
        let mut reducer = xf.apply(reducer);
        let init = reducer.init();
        self.run(&mut reducer, init, S::SHAPE, source.elements()).0
    }

    /// The fold loop shared by every driver.
    pub(crate) fn run<R, I>(
        &self,
        reducer: &mut R,
        init: R::Acc,
        shape: Shape,
        items: I,
    ) -> (R::Acc, RunSummary)
    where
        I: IntoIterator,
        R: Reducer<I::Item>,
    {
        let label = self.label();
        let mut acc = init;
        let mut pulled = 0usize;
        let mut terminated = false;

        for item in items {
            if self.trace_elements {
                trace!(label, index = pulled, "element pulled");
            }
            pulled += 1;
            match reducer.step(acc, item) {
                Step::Continue(next) => acc = next,
                Step::Done(last) => {
                    acc = last;
                    terminated = true;
                    break;
                }
            }
        }

        debug!(label, %shape, pulled, terminated, "run finished");
        (
            acc,
            RunSummary {
                shape,
                pulled,
                terminated,
            },
        )
    }
}

/// Run `xf` over `source` and build an output of the same shape: sequences
/// produce a `Vec`, mappings produce the same kind of mapping.
///
/// Ending the chain with [`reduce`](crate::reduce) turns the output into the
/// reduced value.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// let xf = compose!(
///     filter(|n: &i32| n % 2 == 0),
///     map(|n: i32| n * 10),
///     map(|n: i32| n / 2),
/// );
/// assert_eq!(seq(&xf, 0..10), vec![0, 10, 20, 30, 40]);
/// ```
pub fn seq<S, X>(xf: &X, source: S) -> SeqAcc<S, X>
where
    S: Collection,
    X: Transducer<SeqSink<S>>,
    X::Output: Reducer<S::Item>,
{
    Driver::default().seq(xf, source)
}

/// Curried [`seq`]: keep the transducer, supply sources later.
///
/// The returned function can be called any number of times; every call
/// applies the transducer afresh.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// let first_two = seq_fn(take(2));
/// assert_eq!(first_two(vec![1, 2, 3]), vec![1, 2]);
/// assert_eq!(first_two(vec![4, 5, 6]), vec![4, 5]);
/// ```
pub fn seq_fn<S, X>(xf: X) -> impl Fn(S) -> SeqAcc<S, X>
where
    S: Collection,
    X: Transducer<SeqSink<S>>,
    X::Output: Reducer<S::Item>,
{
    move |source| seq(&xf, source)
}

/// Run `xf` over `source`, appending every produced element into `target`.
///
/// `target` seeds the fold, so anything already in it is kept.
///
/// # Example
/// ```
/// use ironfold::*;
/// use std::collections::BTreeMap;
///
/// let source = BTreeMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
/// let xf = compose!(
///     filter(|(_, v): &(&str, i32)| v % 2 == 0),
///     map(|(k, v): (&str, i32)| (k, v * 5)),
/// );
/// let out = into(BTreeMap::new(), &xf, source);
/// assert_eq!(out, BTreeMap::from([("b", 10), ("d", 20)]));
/// ```
pub fn into<C, S, X>(target: C, xf: &X, source: S) -> C
where
    S: Collection,
    X: Transducer<Sink<C>>,
    X::Output: Reducer<S::Item, Acc = C>,
{
    Driver::default().into_target(target, xf, source)
}

/// Curried [`into`]. Every call starts from a clone of `target`.
pub fn into_fn<C, S, X>(target: C, xf: X) -> impl Fn(S) -> C
where
    C: Clone,
    S: Collection,
    X: Transducer<Sink<C>>,
    X::Output: Reducer<S::Item, Acc = C>,
{
    move |source| into(target.clone(), &xf, source)
}

/// Run `xf` over `source` on top of your own base reducer.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// struct Count;
///
/// impl<T> Reducer<T> for Count {
///     type Acc = usize;
///     fn init(&self) -> usize {
///         0
///     }
///     fn step(&mut self, acc: usize, _item: T) -> Step<usize> {
///         Step::Continue(acc + 1)
///     }
/// }
///
/// let evens = filter(|n: &u32| n % 2 == 0);
/// assert_eq!(transduce(&evens, Count, 0..10u32), 5);
/// ```
pub fn transduce<R, S, X>(xf: &X, reducer: R, source: S) -> TransduceAcc<R, S, X>
where
    S: Collection,
    X: Transducer<R>,
    X::Output: Reducer<S::Item>,
{
    Driver::default().transduce(xf, reducer, source)
}
