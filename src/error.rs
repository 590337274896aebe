//! Errors reported by the dynamic drivers in [`crate::value`].
//!
//! The typed drivers cannot fail: a target that is neither sequence- nor
//! mapping-shaped does not implement [`Target`](crate::Target), and a
//! callback of the wrong kind does not satisfy the stage's `Fn` bound, so both
//! are rejected at compile time.

use thiserror::Error;

/// Why a dynamic driver run was aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransduceError {
    /// The `into` target is neither an array nor an object.
    #[error("into target must be an array or an object, found {found}")]
    InvalidTargetShape { found: &'static str },

    /// The `seq` source is neither an array nor an object.
    #[error("source must be an array or an object, found {found}")]
    InvalidSourceShape { found: &'static str },

    /// An object output received something other than a `[key, value]` pair.
    #[error("object entries must be [key, value] pairs with a string or number key, found {found}")]
    InvalidEntry { found: String },
}
