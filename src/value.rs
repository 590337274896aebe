//! Drivers over dynamically shaped JSON values.
//!
//! Here the adapter is chosen at runtime by looking at the value: arrays are
//! sequences, objects are mappings, anything else is rejected before a single
//! element is processed. Elements are always `serde_json::Value`s, so one chain
//! runs over both shapes:
//!
//! - array sources yield their items,
//! - object sources yield `[key, value]` pairs as two-element arrays,
//! - object outputs take `[key, value]` pairs back and insert them.
//!
//! # Example
//! ```
//! use ironfold::*;
//! use serde_json::{Value, json};
//!
//! # fn main() -> anyhow::Result<()> {
//! let evens = filter(|entry: &Value| entry[1].as_i64().is_some_and(|v| v % 2 == 0));
//! let out = value::into(json!({}), &evens, json!({"a": 1, "b": 2, "c": 4}))?;
//! assert_eq!(out, json!({"b": 2, "c": 4}));
//! # Ok(())
//! # }
//! ```

use crate::adapter::Shape;
use crate::driver::{Driver, RunSummary};
use crate::error::TransduceError;
use crate::reducer::{Reducer, Step};
use crate::transducer::Transducer;
use anyhow::Result;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Shape of a JSON value, or `None` for scalars and null.
#[must_use]
pub const fn shape_of(value: &Value) -> Option<Shape> {
    match value {
        Value::Array(_) => Some(Shape::Sequence),
        Value::Object(_) => Some(Shape::Mapping),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Items of an array, or the value itself: one level of flattening.
///
/// Pair it with [`flat_map`](crate::flat_map) to flatten nested arrays the
/// way a dynamically typed source expects.
///
/// ```
/// use ironfold::*;
/// use serde_json::{Value, json};
///
/// # fn main() -> anyhow::Result<()> {
/// let doubled = flat_map(|v: Value| {
///     value::spread(v).into_iter().map(|n| json!(n.as_i64().unwrap_or(0) * 2))
/// });
/// assert_eq!(value::seq(&doubled, json!([1, [2, 3], 4]))?, json!([2, 4, 6, 8]));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn spread(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Base reducer for JSON outputs. Malformed object entries are parked in
/// `fault` and stop the fold.
pub struct ValueSink {
    shape: Shape,
    fault: Rc<RefCell<Option<TransduceError>>>,
}

impl ValueSink {
    fn new(shape: Shape) -> (Self, Rc<RefCell<Option<TransduceError>>>) {
        let fault = Rc::new(RefCell::new(None));
        let sink = Self {
            shape,
            fault: Rc::clone(&fault),
        };
        (sink, fault)
    }

    fn reject(&self, acc: Value, error: TransduceError) -> Step<Value> {
        *self.fault.borrow_mut() = Some(error);
        Step::Done(acc)
    }
}

impl Reducer<Value> for ValueSink {
    type Acc = Value;

    fn init(&self) -> Value {
        match self.shape {
            Shape::Sequence => Value::Array(Vec::new()),
            Shape::Mapping => Value::Object(Map::new()),
        }
    }

    fn step(&mut self, acc: Value, item: Value) -> Step<Value> {
        match acc {
            Value::Array(mut items) => {
                items.push(item);
                Step::Continue(Value::Array(items))
            }
            Value::Object(mut entries) => match into_entry(item) {
                Ok((key, value)) => {
                    entries.insert(key, value);
                    Step::Continue(Value::Object(entries))
                }
                Err(err) => self.reject(Value::Object(entries), err),
            },
            other => {
                let found = kind(&other);
                self.reject(other, TransduceError::InvalidTargetShape { found })
            }
        }
    }
}

/// Split a `[key, value]` pair; numeric keys are stringified.
fn into_entry(item: Value) -> Result<(String, Value), TransduceError> {
    match item {
        Value::Array(mut pair) if pair.len() == 2 => {
            let value = pair.pop().unwrap_or(Value::Null);
            match pair.pop() {
                Some(Value::String(key)) => Ok((key, value)),
                Some(Value::Number(n)) => Ok((n.to_string(), value)),
                key => Err(TransduceError::InvalidEntry {
                    found: Value::Array(key.into_iter().chain([value]).collect()).to_string(),
                }),
            }
        }
        other => Err(TransduceError::InvalidEntry {
            found: other.to_string(),
        }),
    }
}

/// Elements of a JSON source: array items, or object entries as pairs.
fn elements(source: Value) -> Box<dyn Iterator<Item = Value>> {
    match source {
        Value::Array(items) => Box::new(items.into_iter()),
        Value::Object(entries) => Box::new(
            entries
                .into_iter()
                .map(|(key, value)| Value::Array(vec![Value::String(key), value])),
        ),
        other => Box::new(std::iter::once(other)),
    }
}

/// Run `xf` over a JSON array or object, producing a value of the same shape.
///
/// # Errors
/// [`TransduceError::InvalidSourceShape`] when `source` is a scalar or null;
/// [`TransduceError::InvalidEntry`] when an object output receives something
/// other than a `[key, value]` pair.
pub fn seq<X>(xf: &X, source: Value) -> Result<Value>
where
    X: Transducer<ValueSink>,
    X::Output: Reducer<Value, Acc = Value>,
{
    Ok(seq_with_summary(&Driver::default(), xf, source)?.0)
}

/// [`seq`] on a configured driver, also returning its [`RunSummary`].
///
/// # Errors
/// Same as [`seq`].
pub fn seq_with_summary<X>(driver: &Driver, xf: &X, source: Value) -> Result<(Value, RunSummary)>
where
    X: Transducer<ValueSink>,
    X::Output: Reducer<Value, Acc = Value>,
{
    let shape = shape_of(&source).ok_or(TransduceError::InvalidSourceShape {
        found: kind(&source),
    })?;
    let (sink, fault) = ValueSink::new(shape);
    let mut reducer = xf.apply(sink);
    let init = reducer.init();
    let outcome = driver.run(&mut reducer, init, shape, elements(source));
    check(&fault)?;
    Ok(outcome)
}

/// Run `xf` over a JSON array or object, appending into `target`.
///
/// The target must be an array or an object; its existing contents are kept.
///
/// # Errors
/// [`TransduceError::InvalidTargetShape`] when `target` is a scalar or null,
/// reported before any element is processed;
/// [`TransduceError::InvalidSourceShape`] when `source` is a scalar or null;
/// [`TransduceError::InvalidEntry`] as for [`seq`].
pub fn into<X>(target: Value, xf: &X, source: Value) -> Result<Value>
where
    X: Transducer<ValueSink>,
    X::Output: Reducer<Value, Acc = Value>,
{
    Ok(into_with_summary(&Driver::default(), target, xf, source)?.0)
}

/// [`into`] on a configured driver, also returning its [`RunSummary`].
///
/// # Errors
/// Same as [`into`].
pub fn into_with_summary<X>(
    driver: &Driver,
    target: Value,
    xf: &X,
    source: Value,
) -> Result<(Value, RunSummary)>
where
    X: Transducer<ValueSink>,
    X::Output: Reducer<Value, Acc = Value>,
{
    let target_shape = shape_of(&target).ok_or(TransduceError::InvalidTargetShape {
        found: kind(&target),
    })?;
    let source_shape = shape_of(&source).ok_or(TransduceError::InvalidSourceShape {
        found: kind(&source),
    })?;
    let (sink, fault) = ValueSink::new(target_shape);
    let mut reducer = xf.apply(sink);
    let outcome = driver.run(&mut reducer, target, source_shape, elements(source));
    check(&fault)?;
    Ok(outcome)
}

fn check(fault: &RefCell<Option<TransduceError>>) -> Result<(), TransduceError> {
    match fault.borrow_mut().take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
