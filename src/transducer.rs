//! The transducer trait and composition.
//!
//! A transducer is a *definition*: it holds the callbacks of a stage and
//! nothing else. [`Transducer::apply`] turns it into a live reducer wrapped
//! around a downstream reducer, and that call is the only place per-run state
//! gets allocated. A definition can therefore be stored and reused across any
//! number of driver runs.

/// Wraps a downstream reducer `R` into a new reducer.
pub trait Transducer<R> {
    /// The live reducer produced by [`apply`](Transducer::apply).
    type Output;

    /// Wrap `reducer`, allocating fresh private state.
    fn apply(&self, reducer: R) -> Self::Output;
}

impl<R, X> Transducer<R> for &X
where
    X: Transducer<R> + ?Sized,
{
    type Output = X::Output;

    fn apply(&self, reducer: R) -> Self::Output {
        (**self).apply(reducer)
    }
}

/// Two transducers chained; elements flow through the first, then the second.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compose<A, B>(pub A, pub B);

impl<R, A, B> Transducer<R> for Compose<A, B>
where
    B: Transducer<R>,
    A: Transducer<B::Output>,
{
    type Output = A::Output;

    fn apply(&self, reducer: R) -> Self::Output {
        self.0.apply(self.1.apply(reducer))
    }
}

/// Chain `first` and `second`; elements reach `first` before `second`.
///
/// See [`compose!`](crate::compose!) for chaining more than two stages.
pub const fn compose<A, B>(first: A, second: B) -> Compose<A, B> {
    Compose(first, second)
}

/// The transducer that leaves its reducer untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<R> Transducer<R> for Identity {
    type Output = R;

    fn apply(&self, reducer: R) -> R {
        reducer
    }
}

/// Identity transducer, the unit of [`compose`].
#[must_use]
pub const fn identity() -> Identity {
    Identity
}

/// Chain any number of transducers, left to right in data-flow order.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// let xf = compose!(
///     filter(|n: &i32| n % 2 == 0),
///     map(|n: i32| n * 10),
///     take(2),
/// );
/// assert_eq!(seq(&xf, 0..10), vec![0, 20]);
/// ```
#[macro_export]
macro_rules! compose {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose($first, $crate::compose!($($rest),+))
    };
}
