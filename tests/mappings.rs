use ironfold::testing::*;
use ironfold::*;
use std::collections::{BTreeMap, HashMap};

macro_rules! halved_tens {
    () => {
        compose!(
            filter(|(_, v): &(u32, i32)| v % 2 == 0),
            map(|(k, v): (u32, i32)| (k, v * 10)),
            map(|(k, v): (u32, i32)| (k, v / 2)),
        )
    };
}

#[test]
fn seq_over_a_mapping_builds_a_mapping() {
    let out = seq(&halved_tens!(), digit_map());
    let expected = BTreeMap::from([(0, 0), (2, 10), (4, 20), (6, 30), (8, 40)]);
    assert_maps_equal(&out, &expected);
}

#[test]
fn curried_seq_over_a_mapping() {
    let run = seq_fn(halved_tens!());
    let out = run(digit_map());
    assert_eq!(out.len(), 5);
    assert_eq!(out.get(&8), Some(&40));
}

#[test]
fn into_an_empty_mapping() {
    let xf = compose!(
        filter(|(_, v): &(String, i32)| v % 2 == 0),
        map(|(k, v): (String, i32)| (k, v * 10)),
        map(|(k, v): (String, i32)| (k, v / 2)),
    );
    let out = into(BTreeMap::new(), &xf, letter_map());
    let expected = BTreeMap::from([("b".to_string(), 10), ("d".to_string(), 20)]);
    assert_maps_equal(&out, &expected);
}

#[test]
fn into_a_seeded_mapping_overwrites_matching_keys() {
    let seed = BTreeMap::from([("a".to_string(), 100), ("z".to_string(), 26)]);
    let out = into(seed, &identity(), letter_map());
    assert_eq!(out.len(), 5);
    assert_eq!(out["a"], 1);
    assert_eq!(out["z"], 26);
}

#[test]
fn reduce_over_mapping_values() {
    let xf = compose!(
        filter(|(_, v): &(u32, i32)| v % 2 == 0),
        map(|(k, v): (u32, i32)| (k, v * 10)),
        map(|(k, v): (u32, i32)| (k, v / 2)),
        reduce(|acc: i32, (_, v): (u32, i32)| acc + v, 0),
    );
    assert_eq!(seq(&xf, digit_map()), 100);
}

#[test]
fn filter_sees_the_mapping_built_so_far() {
    let source: BTreeMap<&str, i32> =
        BTreeMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 1), ("f", 3)]);
    let unseen_values =
        filter_with_acc(|(_, v): &(&str, i32), acc: &BTreeMap<&str, i32>| !acc.values().any(|x| x == v));

    let out = seq(&unseen_values, source);
    assert_maps_equal(&out, &BTreeMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]));
}

#[test]
fn filter_sees_the_vec_built_so_far() {
    let rising = filter_with_acc(|n: &i32, acc: &Vec<i32>| acc.last().is_none_or(|last| n > last));
    let out = seq(&rising, vec![1, 3, 2, 5, 4, 6]);
    assert_collections_equal(&out, &[1, 3, 5, 6]);
}

#[test]
fn mapping_can_be_rekeyed_into_another_mapping_type() {
    let swap = map(|(k, v): (String, i32)| (v, k));
    let out: HashMap<i32, String> = into(HashMap::new(), &swap, letter_map());
    assert_eq!(out.get(&3).map(String::as_str), Some("c"));
}

#[test]
fn mapping_entries_can_be_collected_into_a_sequence() {
    let keys = map(|(k, _): (String, i32)| k);
    let out = into(Vec::new(), &keys, letter_map());
    assert_collections_equal(&out, &["a", "b", "c", "d"].map(String::from));
}

#[test]
fn stateful_stages_work_on_entries() {
    let xf = compose!(skip(1), take(2));
    let out = seq(&xf, letter_map());
    let expected = BTreeMap::from([("b".to_string(), 2), ("c".to_string(), 3)]);
    assert_maps_equal(&out, &expected);
}

#[test]
fn hash_map_sources_keep_their_shape() {
    let source: HashMap<&str, i32> = HashMap::from([("x", 1), ("y", 2)]);
    let out: HashMap<&str, i32> = seq(&map(|(k, v): (&str, i32)| (k, v + 1)), source);
    assert_eq!(out, HashMap::from([("x", 2), ("y", 3)]));
}
