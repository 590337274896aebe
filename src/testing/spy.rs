//! Call-counting spies.

use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts the elements that reach the stages it hands out.
///
/// Clones share the same counter.
///
/// # Example
///
/// ```
/// use ironfold::*;
/// use ironfold::testing::Spy;
///
/// let spy = Spy::new();
/// let xf = compose!(spy.stage(), take(3));
/// assert_eq!(seq(&xf, 0..100), vec![0, 1, 2]);
/// assert_eq!(spy.count(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Spy {
    calls: Arc<AtomicUsize>,
}

impl Spy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements seen so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }

    /// A pass-through stage that bumps this spy's counter.
    #[must_use]
    pub fn stage(&self) -> SpyStage {
        SpyStage {
            calls: Arc::clone(&self.calls),
        }
    }
}

/// Transducer returned by [`Spy::stage`].
#[derive(Clone, Debug)]
pub struct SpyStage {
    calls: Arc<AtomicUsize>,
}

/// Live reducer of a [`SpyStage`].
pub struct SpyReducer<R> {
    inner: R,
    calls: Arc<AtomicUsize>,
}

impl<R> Transducer<R> for SpyStage {
    type Output = SpyReducer<R>;

    fn apply(&self, reducer: R) -> Self::Output {
        SpyReducer {
            inner: reducer,
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T, R: Reducer<T>> Reducer<T> for SpyReducer<R> {
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.step(acc, item)
    }
}
