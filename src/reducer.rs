//! The reducer protocol and the early-termination signal.
//!
//! A [`Reducer`] pairs an identity accumulator with a step function that folds
//! one element into that accumulator. Every step answers with a [`Step`]: either
//! keep going with the new accumulator, or stop here with a final one.
//!
//! Transducers never touch collections directly; they only wrap one reducer in
//! another. The drivers in [`crate::driver`] supply the innermost reducer.

/// Outcome of folding one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step<A> {
    /// Keep folding with this accumulator.
    Continue(A),
    /// Stop folding; this accumulator is final.
    Done(A),
}

impl<A> Step<A> {
    /// `true` when the fold must stop.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// The accumulator, whether or not the fold stopped.
    pub fn into_inner(self) -> A {
        match self {
            Self::Continue(acc) | Self::Done(acc) => acc,
        }
    }

    /// Transform the accumulator while keeping the continue/stop decision.
    pub fn map<B, F: FnOnce(A) -> B>(self, f: F) -> Step<B> {
        match self {
            Self::Continue(acc) => Step::Continue(f(acc)),
            Self::Done(acc) => Step::Done(f(acc)),
        }
    }
}

/// Wrap `acc` as a final accumulator.
///
/// Returned from [`Reducer::step`] to stop the fold before the source is
/// exhausted. Every enclosing stage hands it back untouched and the driver
/// unwraps it.
///
/// # Example
/// ```
/// use ironfold::{reduced, Step};
///
/// assert_eq!(reduced(vec![1, 2]), Step::Done(vec![1, 2]));
/// ```
pub const fn reduced<A>(acc: A) -> Step<A> {
    Step::Done(acc)
}

/// A fold over elements of type `T`.
///
/// `step` is the only place an accumulator changes. Implementations may keep
/// private mutable state (counters, last-seen values), which lives exactly as
/// long as the reducer does: one driver run.
pub trait Reducer<T> {
    /// The accumulator threaded through the fold.
    type Acc;

    /// Identity accumulator, used when the driver has no seed of its own.
    fn init(&self) -> Self::Acc;

    /// Fold `item` into `acc`.
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc>;
}
