//! # Ironfold
//!
//! **Composable transducers** for Rust. Build a chain of transformation stages
//! once, then run it, unchanged, over a `Vec`, a `BTreeMap`, a range, or a JSON
//! value. Every run is a single pass, and stages like `take` stop the pass as
//! soon as the answer is known.
//!
//! ## Key Features
//!
//! - **Collection-agnostic stages** - the same chain runs over sequences and mappings
//! - **Stateless and stateful stages** - map, filter, flat_map, dedupe, take, skip, take_until, skip_while
//! - **Early termination** - a stage can end the run; nothing upstream is pulled afterwards
//! - **Reusable definitions** - per-run state is allocated when a chain is applied, never shared
//! - **Terminal reduce** - end a chain in a scalar instead of a collection
//! - **Dynamic values** - run chains over `serde_json::Value` arrays and objects
//!
//! ## Quick Start
//!
//! ```
//! use ironfold::*;
//!
//! let xf = compose!(
//!     filter(|n: &i32| n % 2 == 0),
//!     map(|n: i32| n * 10),
//!     map(|n: i32| n / 2),
//! );
//!
//! // Sequence in, sequence out.
//! assert_eq!(seq(&xf, 0..10), vec![0, 10, 20, 30, 40]);
//!
//! // The same definition again, now ending in a sum.
//! let total = compose!(&xf, reduce(|sum: i32, n: i32| sum + n, 0));
//! assert_eq!(seq(&total, 0..10), 100);
//! ```
//!
//! ## Core Concepts
//!
//! ### Reducers
//!
//! A [`Reducer`] has an identity accumulator ([`Reducer::init`]) and a
//! [`step`](Reducer::step) that folds one element in. Steps answer with a
//! [`Step`]: [`Step::Continue`] to keep going or [`Step::Done`] (built with
//! [`reduced`]) to stop.
//!
//! ### Transducers
//!
//! A [`Transducer`] wraps one reducer in another. Stage constructors such as
//! [`map`] or [`take`] return *definitions* that only hold callbacks and
//! settings. Applying a definition builds a live reducer, and that is when
//! counters, flags and seen-sets are created, so a definition can be reused
//! across any number of runs.
//!
//! Chains are built with [`compose`] or the [`compose!`] macro. Elements flow
//! through the stages left to right.
//!
//! #### Stateless
//! - [`map`] - transform each element
//! - [`filter`] / [`filter_with_acc`] - keep elements matching a predicate
//! - [`flat_map`] / [`flatten`] - splice nested elements into the stream
//! - [`inspect`] - observe elements without changing them
//!
//! #### Stateful
//! - [`dedupe`] / [`dedupe_all`] - drop consecutive / all repeats
//! - [`take`] / [`skip`] - keep / drop a fixed number of leading elements
//! - [`take_until`] / [`skip_while`] - keep / drop leading elements by predicate
//!
//! #### Terminal
//! - [`reduce`] - fold everything into one value
//!
//! ### Drivers
//!
//! - [`seq`] - output has the source's shape (`Vec` for sequences, the same
//!   mapping type for mappings)
//! - [`into`] - output is appended into a target you pass in
//! - [`transduce`] - output is built by your own base reducer
//! - [`seq_fn`] / [`into_fn`] - curried forms
//! - [`Driver`] - labelled runs with a [`RunSummary`]
//! - [`value`] - the same over `serde_json::Value`, with runtime shape checks
//!
//! ### Mappings
//!
//! Mapping sources hand each stage a `(key, value)` tuple; `map` closures return
//! one back.
//!
//! ```
//! use ironfold::*;
//! use std::collections::BTreeMap;
//!
//! let xf = compose!(
//!     filter(|(_, v): &(&str, i32)| v % 2 == 0),
//!     map(|(k, v): (&str, i32)| (k, v * 10)),
//! );
//! let out = seq(&xf, BTreeMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]));
//! assert_eq!(out, BTreeMap::from([("b", 20), ("d", 40)]));
//! ```
//!
//! ## Module Overview
//!
//! - [`reducer`] - the reducer protocol and the termination signal
//! - [`transducer`] - the transducer trait and composition
//! - [`transducers`] - built-in stages
//! - [`adapter`] - how sources are read and outputs are built
//! - [`driver`] - entry points
//! - [`nested`] - elements that are a value or a run of values
//! - [`value`] - dynamic JSON drivers
//! - [`error`] - errors of the dynamic drivers
//! - [`testing`] - assertions, spies, debug stages and fixtures

pub mod adapter;
pub mod driver;
pub mod error;
pub mod nested;
pub mod reducer;
pub mod testing;
pub mod transducer;
pub mod transducers;
pub mod value;

// General re-exports
pub use adapter::{Collection, SameShape, SeqSink, Shape, Sink, Target};
pub use driver::{Driver, RunSummary, SeqAcc, TransduceAcc, into, into_fn, seq, seq_fn, transduce};
pub use error::TransduceError;
pub use nested::Nested;
pub use reducer::{Reducer, Step, reduced};
pub use transducer::{Compose, Identity, Transducer, compose, identity};
pub use transducers::*;
