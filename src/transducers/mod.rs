//! Built-in transducer stages.
//!
//! - [`stateless`]: `map`, `filter`, `filter_with_acc`, `flat_map`, `flatten`, `inspect`
//! - [`stateful`]: `dedupe`, `dedupe_all`, `take`, `skip`, `take_until`, `skip_while`
//! - [`reduce`](mod@reduce): the terminal `reduce` stage
//!
//! Every constructor returns a definition; the matching `*Reducer` type is the
//! live reducer a driver gets when it applies that definition.

pub mod reduce;
pub mod stateful;
pub mod stateless;

pub use reduce::{Reduce, ReduceReducer, reduce};
pub use stateful::{
    Dedupe, DedupeAll, DedupeAllReducer, DedupeReducer, Skip, SkipReducer, SkipWhile,
    SkipWhileReducer, Take, TakeReducer, TakeUntil, TakeUntilReducer, dedupe, dedupe_all, skip,
    skip_while, take, take_until,
};
pub use stateless::{
    Filter, FilterReducer, FilterWithAcc, FilterWithAccReducer, FlatMap, FlatMapReducer,
    Flatten, FlattenReducer, Inspect, InspectReducer, Map, MapReducer, filter, filter_with_acc,
    flat_map, flatten, inspect, map,
};
