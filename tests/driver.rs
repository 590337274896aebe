use ironfold::testing::*;
use ironfold::*;
use std::collections::BTreeMap;

#[test]
fn summary_counts_pulled_elements() {
    let driver = Driver::new();
    let (out, summary) = driver.seq_with_summary(&filter(|n: &i32| n % 3 == 0), digits());
    assert_collections_equal(&out, &[0, 3, 6, 9]);
    assert_eq!(summary.shape, Shape::Sequence);
    assert_run(&summary, 10, false);
}

#[test]
fn summary_of_an_into_run() {
    let driver = Driver::new().with_label("letters");
    let (out, summary) = driver.into_target_with_summary(BTreeMap::new(), &take(2), letter_map());
    assert_eq!(out.len(), 2);
    assert_eq!(summary.shape, Shape::Mapping);
    assert_run(&summary, 2, true);
}

#[test]
fn empty_source_returns_the_initial_accumulator() {
    let (out, summary) = Driver::new().seq_with_summary(&take(3), Vec::<i32>::new());
    assert!(out.is_empty());
    assert_run(&summary, 0, false);

    let kept = into(vec![1, 2], &identity(), Vec::<i32>::new());
    assert_collections_equal(&kept, &[1, 2]);
}

#[test]
fn configured_driver_gives_the_same_results() {
    let xf = compose!(debug_inspect("before"), dedupe(), take(3));
    let traced = Driver::new()
        .with_label("traced")
        .with_element_tracing(true)
        .seq(&xf, run_with_repeats());
    assert_eq!(traced, seq(&xf, run_with_repeats()));
    assert_collections_equal(&traced, &[0, 1, 2]);
}

#[test]
fn driver_config_round_trips_through_json() -> anyhow::Result<()> {
    let driver = Driver::new().with_label("nightly").with_element_tracing(true);
    let text = serde_json::to_string(&driver)?;
    assert_eq!(serde_json::from_str::<Driver>(&text)?, driver);

    let partial: Driver = serde_json::from_str(r#"{"label": "only"}"#)?;
    assert_eq!(partial.label.as_deref(), Some("only"));
    assert!(!partial.trace_elements);
    assert_eq!(serde_json::from_str::<Driver>("{}")?, Driver::default());
    Ok(())
}

#[test]
fn summary_serializes_with_snake_case_shape() -> anyhow::Result<()> {
    let (_, summary) = Driver::new().seq_with_summary(&skip(1), letter_map());
    let json = serde_json::to_value(summary)?;
    assert_eq!(
        json,
        serde_json::json!({"shape": "mapping", "pulled": 4, "terminated": false})
    );
    Ok(())
}

#[test]
fn one_definition_runs_concurrently_without_sharing_state() {
    let xf = compose!(dedupe_all::<i32>(), take(3));
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|offset| {
                let xf = &xf;
                scope.spawn(move || seq(xf, vec![offset, offset, offset + 1, offset, offset + 2, offset + 3]))
            })
            .collect();
        for (offset, handle) in handles.into_iter().enumerate() {
            let offset = i32::try_from(offset).unwrap_or_default();
            let out = handle.join().expect("worker panicked");
            assert_collections_equal(&out, &[offset, offset + 1, offset + 2]);
        }
    });
}

#[test]
fn owned_driver_appends_into_a_target() {
    let evens = filter(|n: &i32| n % 2 == 0);
    let out = Driver::new().with_label("owned").into_target(vec![-2], &evens, digits());
    assert_collections_equal(&out, &[-2, 0, 2, 4, 6, 8]);

    let out = Driver::default().into_target(BTreeMap::new(), &skip(3), letter_map());
    assert_maps_equal(&out, &BTreeMap::from([("d".to_string(), 4)]));
}

#[test]
fn sink_starts_from_an_empty_target_when_transduced() {
    let out: Vec<i32> = transduce(&take(2), Sink::<Vec<i32>>::new(), digits());
    assert_collections_equal(&out, &[0, 1]);
}
