//! Debug stages for inspecting chains during test execution.

use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;
use std::fmt::Debug;
use tracing::debug;

/// Only the first this-many elements per run are logged individually.
const LOGGED_ELEMENTS: usize = 10;

/// Transducer that logs the elements passing through it. Built by
/// [`debug_inspect`].
#[derive(Clone, Debug)]
pub struct DebugInspect {
    label: String,
}

/// Log the elements that reach this point of a chain at `debug` level.
///
/// The first ten elements of a run are logged with their value, later ones
/// only with their index.
#[must_use]
pub fn debug_inspect(label: impl Into<String>) -> DebugInspect {
    DebugInspect {
        label: label.into(),
    }
}

/// Live reducer of a [`DebugInspect`] stage.
pub struct DebugInspectReducer<R> {
    inner: R,
    label: String,
    seen: usize,
}

impl<R> Transducer<R> for DebugInspect {
    type Output = DebugInspectReducer<R>;

    fn apply(&self, reducer: R) -> Self::Output {
        DebugInspectReducer {
            inner: reducer,
            label: self.label.clone(),
            seen: 0,
        }
    }
}

impl<T, R> Reducer<T> for DebugInspectReducer<R>
where
    T: Debug,
    R: Reducer<T>,
{
    type Acc = R::Acc;

    fn init(&self) -> R::Acc {
        self.inner.init()
    }

    fn step(&mut self, acc: R::Acc, item: T) -> Step<R::Acc> {
        let label = self.label.as_str();
        if self.seen < LOGGED_ELEMENTS {
            debug!(label, index = self.seen, ?item, "element");
        } else {
            debug!(label, index = self.seen, "element");
        }
        self.seen += 1;
        let next = self.inner.step(acc, item);
        if next.is_done() {
            debug!(label, seen = self.seen, "downstream stopped the fold");
        }
        next
    }
}
