//! `reduce` as the last stage of a chain.

use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;
use std::sync::Arc;

/// Definition of a terminal `reduce` stage. Built by [`reduce`].
pub struct Reduce<F, A> {
    f: Arc<F>,
    init: A,
}

impl<F, A: Clone> Clone for Reduce<F, A> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            init: self.init.clone(),
        }
    }
}

/// Fold the elements reaching this stage into a single value.
///
/// The stage replaces whatever reducer the driver built: after it, the
/// chain's accumulator is the fold state, starting from `init`. Stages placed
/// after a `reduce` never see an element.
///
/// # Example
/// ```
/// use ironfold::*;
///
/// let xf = compose!(
///     filter(|n: &i32| n % 2 == 0),
///     reduce(|sum: i32, n: i32| sum + n, 0),
/// );
/// assert_eq!(seq(&xf, 0..10), 20);
/// ```
pub fn reduce<T, A, F>(f: F, init: A) -> Reduce<F, A>
where
    F: Fn(A, T) -> A,
{
    Reduce {
        f: Arc::new(f),
        init,
    }
}

/// Live reducer of a [`Reduce`] stage.
pub struct ReduceReducer<F, A> {
    f: Arc<F>,
    init: A,
}

impl<R, F, A: Clone> Transducer<R> for Reduce<F, A> {
    type Output = ReduceReducer<F, A>;

    fn apply(&self, _reducer: R) -> Self::Output {
        ReduceReducer {
            f: Arc::clone(&self.f),
            init: self.init.clone(),
        }
    }
}

impl<T, F, A> Reducer<T> for ReduceReducer<F, A>
where
    F: Fn(A, T) -> A,
    A: Clone,
{
    type Acc = A;

    fn init(&self) -> A {
        self.init.clone()
    }

    fn step(&mut self, acc: A, item: T) -> Step<A> {
        Step::Continue((*self.f)(acc, item))
    }
}
