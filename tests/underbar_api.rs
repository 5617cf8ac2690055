//! End-to-end tests of the public API, one section per component.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;
use underbar::*;

// =============================================================================
// Helper functions
// =============================================================================

fn nested(json: &str) -> Vec<Nested<i64>> {
    return serde_json::from_str(json).expect("valid nested json");
}

fn stooge(name: &str, age: i64) -> BTreeMap<String, serde_json::Value> {
    let mut record = BTreeMap::new();
    record.insert("name".to_string(), serde_json::Value::from(name));
    record.insert("age".to_string(), serde_json::Value::from(age));
    return record;
}

// =============================================================================
// Iteration core
// =============================================================================

#[test]
fn each_passes_value_index_and_collection() {
    let input = vec![1, 2, 3];
    let mut calls = Vec::new();
    each(&input, |value, key, collection| {
        calls.push((*value, key, collection.len()));
    });
    assert_eq!(calls, vec![
        (1, Key::Index(0), 3),
        (2, Key::Index(1), 3),
        (3, Key::Index(2), 3),
    ]);
}

#[test]
fn index_of_matches_strict_equality() {
    assert_eq!(index_of(&["a", "b", "a"], &"a"), Some(0));
    assert_eq!(index_of(&[1.0, f64::NAN], &f64::NAN), None);
}

// =============================================================================
// Collection transforms
// =============================================================================

#[test]
fn reduce_seeds_from_first_element_when_initial_omitted() {
    assert_eq!(reduce(&[1, 2, 3], |a, b| a + b, None), Some(6));
    assert_eq!(reduce(&[5], |a, b| a + b * b, None), Some(5));
    assert_eq!(reduce(&[1, 2, 3], |a, b| a + b, Some(10)), Some(16));
}

#[test]
fn reduce_over_mapping_seeds_from_a_value() {
    let mut scores = FxHashMap::default();
    scores.insert("a".to_string(), 3);
    scores.insert("b".to_string(), 4);
    assert_eq!(reduce(&scores, |a, b| a + b, None), Some(7));
}

#[test]
fn filter_result_only_holds_passing_elements() {
    let input = [5, 12, 7, 30, 1];
    let big = filter(&input, |n| *n > 6);
    assert!(big.len() <= input.len());
    assert!(big.iter().all(|n| *n > 6));
    assert_eq!(big, vec![12, 7, 30]);
}

#[test]
fn pluck_and_sort_by_field_work_on_records() {
    let mut people = vec![stooge("moe", 45), stooge("larry", 38), stooge("curly", 52)];
    let names: Vec<String> = pluck(&people, "name")
        .into_iter()
        .map(|name| name.and_then(|v| v.as_str().map(str::to_string)).unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["moe", "larry", "curly"]);

    let ages = pluck(&people, "age");
    assert_eq!(ages[1], Some(serde_json::Value::from(38)));

    sort_by(&mut people, |p: &BTreeMap<String, serde_json::Value>| {
        p.get("age").and_then(|age| age.as_i64()).unwrap_or(0)
    });
    assert_eq!(people[0]["name"], "larry");
    assert_eq!(people[2]["name"], "curly");
}

#[test]
fn contains_every_and_some_on_mappings() {
    let mut flags = BTreeMap::new();
    flags.insert("dark".to_string(), true);
    flags.insert("compact".to_string(), false);
    assert!(contains(&flags, &false));
    assert!(!every(&flags, identity));
    assert!(some(&flags, identity));
}

// =============================================================================
// Object merge
// =============================================================================

#[test]
fn extend_then_defaults() {
    let mut options: FxHashMap<String, i32> = FxHashMap::default();
    options.insert("width".to_string(), 100);

    let user = FxHashMap::from_iter([("height".to_string(), 50)]);
    let fallback = FxHashMap::from_iter([
        ("width".to_string(), 1),
        ("height".to_string(), 1),
        ("depth".to_string(), 1),
    ]);

    extend(&mut options, &[&user]);
    defaults(&mut options, &[&fallback]);

    assert_eq!(options["width"], 100);
    assert_eq!(options["height"], 50);
    assert_eq!(options["depth"], 1);
}

// =============================================================================
// Function decorators
// =============================================================================

#[test]
fn once_side_effect_happens_once() {
    let counter = RefCell::new(0);
    let mut increment = once(|by: i32| {
        *counter.borrow_mut() += by;
        *counter.borrow()
    });
    assert_eq!(increment(1), 1);
    assert_eq!(increment(5), 1);
    assert_eq!(increment(9), 1);
    assert_eq!(*counter.borrow(), 1);
}

#[test]
fn memoize_with_tuple_arguments() {
    let calls = RefCell::new(0);
    let mut add = memoize(|(a, b): &(i32, i32)| {
        *calls.borrow_mut() += 1;
        a + b
    });
    assert_eq!(add((1, 2)), 3);
    assert_eq!(add((1, 2)), 3);
    assert_eq!(add((2, 1)), 3);
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn delay_with_no_arguments() {
    let (tx, rx) = std::sync::mpsc::channel();
    let pending = delay(move |()| tx.send("done").ok(), Duration::from_millis(5), ()).unwrap();
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok("done"));
    pending.join().unwrap();
}

#[test]
fn throttle_with_manual_clock() {
    let clock = ManualClock::new();
    let mut save = throttle_with_clock(|doc: &str| doc.len(), Duration::from_millis(250), clock.clone());
    assert_eq!(save("abc"), 3);
    assert_eq!(save("abcdef"), 3);
    clock.advance(Duration::from_millis(250));
    assert_eq!(save("abcdef"), 6);
}

// =============================================================================
// Array algorithms
// =============================================================================

#[test]
fn uniq_zip_flatten() {
    assert_eq!(uniq(&[1, 2, 1, 3, 1, 4]), vec![1, 2, 3, 4]);

    let zipped = zip(&[&["a", "b", "c", "d"], &["1", "2", "3"]]);
    assert_eq!(zipped.len(), 4);
    assert_eq!(zipped[3], vec![Some("d"), None]);

    assert_eq!(flatten(&nested("[1, [2], [3, [[4]]]]")), vec![1, 2, 3, 4]);
}

#[test]
fn flatten_json_deep_nesting() {
    assert_eq!(flatten(&nested("[[[[[[7]]]]], 8, []]")), vec![7, 8]);
    assert!(flatten(&nested("[]")).is_empty());
}

#[test]
fn intersection_and_difference() {
    assert_eq!(intersection(&[&[1, 2, 3], &[2, 3, 4], &[3, 2, 5]]), vec![2, 3]);
    assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4]]), vec![1, 3]);
    assert_eq!(difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10], &[1]]), vec![3, 4]);
}

#[test]
fn shuffle_leaves_input_untouched() {
    let input = vec!["a", "b", "c", "d", "e"];
    let mut shuffled = shuffle(&input);
    assert_eq!(input, vec!["a", "b", "c", "d", "e"]);
    shuffled.sort();
    assert_eq!(shuffled, input);
}

#[test]
fn invoke_reports_unknown_method() {
    let methods: MethodTable<String, (), String> = MethodTable::new();
    let words = vec!["x".to_string()];
    let error = invoke(&words, methods.method("toUpperCase"), &()).unwrap_err();
    assert_eq!(error.to_string(), "Unknown method: toUpperCase");
}
