use ironfold::*;
use serde_json::{Value, json};

fn as_int(v: &Value) -> i64 {
    v.as_i64().unwrap_or_default()
}

fn halved_tens_of_even_values() -> impl Transducer<value::ValueSink, Output: Reducer<Value, Acc = Value>> {
    compose!(
        filter(|entry: &Value| as_int(&entry[1]) % 2 == 0),
        map(|entry: Value| json!([entry[0], as_int(&entry[1]) * 10])),
        map(|entry: Value| json!([entry[0], as_int(&entry[1]) / 2])),
    )
}

#[test]
fn into_an_empty_object() -> anyhow::Result<()> {
    let out = value::into(
        json!({}),
        &halved_tens_of_even_values(),
        json!({"a": 1, "b": 2, "c": 3, "d": 4}),
    )?;
    assert_eq!(out, json!({"b": 10, "d": 20}));
    Ok(())
}

#[test]
fn seq_keeps_the_source_shape() -> anyhow::Result<()> {
    let evens = compose!(
        filter(|v: &Value| as_int(v) % 2 == 0),
        map(|v: Value| json!(as_int(&v) * 5)),
    );
    assert_eq!(value::seq(&evens, json!([0, 1, 2, 3, 4]))?, json!([0, 10, 20]));

    let entries = value::seq(&take(2), json!({"x": true, "y": false, "z": null}))?;
    assert_eq!(entries, json!({"x": true, "y": false}));
    Ok(())
}

#[test]
fn object_entries_can_fill_an_array() -> anyhow::Result<()> {
    let keys = map(|entry: Value| entry[0].clone());
    let out = value::into(json!(["start"]), &keys, json!({"b": 1, "a": 2}))?;
    assert_eq!(out, json!(["start", "a", "b"]));
    Ok(())
}

#[test]
fn numeric_keys_are_accepted() -> anyhow::Result<()> {
    let rekey = map(|v: Value| json!([as_int(&v), v]));
    let out = value::into(json!({}), &rekey, json!([7, 8]))?;
    assert_eq!(out, json!({"7": 7, "8": 8}));
    Ok(())
}

#[test]
fn nested_arrays_flatten_through_spread() -> anyhow::Result<()> {
    let doubled = compose!(
        flat_map(|v: Value| value::spread(v).into_iter().map(|n| json!(as_int(&n) * 2))),
        take_until(|v: &Value| as_int(v) != 8),
    );
    let out = value::seq(&doubled, json!([1, 2, [3, 4, 5], 6, 7, 8, 9]))?;
    assert_eq!(out, json!([2, 4, 6]));
    Ok(())
}

#[test]
fn scalar_target_is_rejected_before_processing() {
    let pulled = std::cell::Cell::new(0);
    let xf = inspect(|_: &Value| pulled.set(pulled.get() + 1));
    let err = value::into(json!(3), &xf, json!([1, 2])).unwrap_err();

    assert_eq!(
        err.downcast_ref::<TransduceError>(),
        Some(&TransduceError::InvalidTargetShape { found: "number" })
    );
    assert_eq!(pulled.get(), 0);
}

#[test]
fn scalar_source_is_rejected() {
    let err = value::seq(&identity(), json!("text")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<TransduceError>(),
        Some(&TransduceError::InvalidSourceShape { found: "string" })
    );
}

#[test]
fn malformed_entry_aborts_the_run() {
    let rest = std::cell::Cell::new(0);
    let xf = compose!(map(|v: Value| v), inspect(|_: &Value| rest.set(rest.get() + 1)));
    let err = value::into(json!({}), &xf, json!([["a", 1], "oops", ["c", 3]])).unwrap_err();

    match err.downcast_ref::<TransduceError>() {
        Some(TransduceError::InvalidEntry { found }) => assert_eq!(found, "\"oops\""),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(rest.get(), 2);
}

#[test]
fn summary_reports_the_source_shape() -> anyhow::Result<()> {
    let driver = Driver::new().with_label("json");
    let (out, summary) = value::seq_with_summary(&driver, &skip(1), json!({"a": 1, "b": 2}))?;
    assert_eq!(out, json!({"b": 2}));
    assert_eq!(summary.shape, Shape::Mapping);
    assert_eq!(summary.pulled, 2);
    Ok(())
}

#[test]
fn shape_of_classifies_values() {
    assert_eq!(value::shape_of(&json!([])), Some(Shape::Sequence));
    assert_eq!(value::shape_of(&json!({})), Some(Shape::Mapping));
    assert_eq!(value::shape_of(&Value::Null), None);
}
