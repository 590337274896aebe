use ironfold::testing::*;
use ironfold::*;
use ordered_float::OrderedFloat;

#[test]
fn dedupe_leaves_distinct_runs_untouched() {
    assert_collections_equal(&seq(&dedupe(), digits()), &digits());
}

#[test]
fn dedupe_drops_consecutive_repeats() {
    let out = seq(&dedupe(), run_with_repeats());
    assert_collections_equal(&out, &[0, 1, 2, 3, 4, 2, 3, 1, 2, 0]);
}

#[test]
fn dedupe_all_keeps_first_occurrences() {
    let out = seq(&dedupe_all(), run_with_repeats());
    assert_collections_equal(&out, &[0, 1, 2, 3, 4]);
}

#[test]
fn dedupe_all_over_floats_needs_a_total_order() {
    let source = [1.5, 2.0, 1.5, 0.25, 2.0].map(OrderedFloat);
    let out = seq(&dedupe_all(), source);
    assert_collections_equal(&out, &[1.5, 2.0, 0.25].map(OrderedFloat));
}

#[test]
fn dedupe_state_resets_between_runs() {
    let run = seq_fn(dedupe_all::<i32>());
    assert_collections_equal(&run(vec![1, 2, 1]), &[1, 2]);
    assert_collections_equal(&run(vec![2, 1, 3]), &[2, 1, 3]);
}

#[test]
fn take_without_a_limit_passes_everything() {
    assert_collections_equal(&seq(&take(None), digits()), &digits());
}

#[test]
fn take_keeps_the_first_n() {
    assert_collections_equal(&seq(&take(2), digits()), &[0, 1]);
    assert_collections_equal(&seq(&take(50), digits()), &digits());
}

#[test]
fn take_stops_pulling_once_satisfied() {
    let (out, summary) = Driver::new().seq_with_summary(&take(3), 0..1_000_000);
    assert_collections_equal(&out, &[0, 1, 2]);
    assert_run(&summary, 3, true);
}

#[test]
fn take_zero_folds_nothing() {
    let (out, summary) = Driver::new().seq_with_summary(&take(0), digits());
    assert!(out.is_empty());
    assert_run(&summary, 1, true);
}

#[test]
fn skip_without_a_count_passes_everything() {
    assert_collections_equal(&seq(&skip(0), digits()), &digits());
}

#[test]
fn skip_drops_the_first_n() {
    assert_collections_equal(&seq(&skip(2), digits()), &[2, 3, 4, 5, 6, 7, 8, 9]);
    assert!(seq(&skip(20), digits()).is_empty());
}

#[test]
fn take_until_stops_at_the_first_failure() {
    let upstream = Spy::new();
    let downstream = Spy::new();
    let run = seq_fn(compose!(
        upstream.stage(),
        take_until(|v: &i32| *v != 4),
        downstream.stage(),
    ));

    let out = run((0..100).collect::<Vec<_>>());
    assert_collections_equal(&out, &[0, 1, 2, 3]);
    assert_eq!(upstream.count(), 5);
    assert_eq!(downstream.count(), 4);

    upstream.reset();
    downstream.reset();

    let out = run(vec![0, 3, 4, 3, 2, 3, 4, 4]);
    assert_collections_equal(&out, &[0, 3]);
    assert_eq!(upstream.count(), 3);
    assert_eq!(downstream.count(), 2);
}

#[test]
fn take_until_that_never_fails_passes_everything() {
    let (out, summary) = Driver::new().seq_with_summary(&take_until(|_: &i32| true), digits());
    assert_collections_equal(&out, &digits());
    assert_run(&summary, 10, false);
}

#[test]
fn skip_while_flips_to_passing_for_good() {
    let out = seq(&skip_while(|v: &i32| *v != 4), digits());
    assert_collections_equal(&out, &[4, 5, 6, 7, 8, 9]);

    let out = seq(&skip_while(|v: &i32| *v < 3), vec![0, 1, 5, 0, 1, 7]);
    assert_collections_equal(&out, &[5, 0, 1, 7]);
}

#[test]
fn skip_while_state_resets_between_runs() {
    let run = seq_fn(skip_while(|v: &i32| *v < 3));
    assert_collections_equal(&run(vec![1, 4, 1]), &[4, 1]);
    assert_collections_equal(&run(vec![1, 2, 1]), &[]);
}

#[test]
fn chain_prefix_can_be_reused_with_different_tails() {
    let xf = compose!(
        filter(|n: &i32| n % 2 == 0),
        map(|n: i32| n * 10),
        map(|n: i32| n / 2),
    );
    let via_take = seq(&compose!(&xf, take(2)), digits());
    let via_skip_take = seq(&compose!(&xf, skip(1), take(1)), digits());
    assert_collections_equal(&via_take, &[0, 10]);
    assert_collections_equal(&via_skip_take, &[10]);
}

#[test]
fn stateful_stages_compose_in_any_order() {
    let a = seq(&compose!(dedupe(), take(4)), run_with_repeats());
    let b = seq(&compose!(take(4), dedupe()), run_with_repeats());
    assert_collections_equal(&a, &[0, 1, 2, 3]);
    assert_collections_equal(&b, &[0, 1, 2]);
}
