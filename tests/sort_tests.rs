#![cfg(feature = "sort")]
//! Integration tests for the sort engine.

use rstest::rstest;
use rust_decimal_macros::dec;
use seqalg::error::AlgebraError;
use seqalg::numeric::Number;
use seqalg::sort::{
    is_sorted, is_sorted_by, sort_in_place, sort_in_place_by, sorted_copy, sorted_copy_by,
    try_sorted_copy_by,
};
use std::cell::Cell;
use std::cmp::Ordering;

#[rstest]
fn test_sort_is_stable_by_first_component() {
    let pairs = vec![(1, "x"), (1, "y"), (0, "z")];
    let sorted = sorted_copy_by(pairs, |pair: &(i32, &str)| pair.0);
    assert_eq!(sorted, vec![(0, "z"), (1, "x"), (1, "y")]);
}

#[rstest]
fn test_sort_mixed_numbers() {
    let mut values = vec![
        Number::from(3_i32),
        Number::from(dec!(-1.5)),
        Number::from(f64::INFINITY),
        Number::from(0.25_f64),
        "1e20".parse().unwrap(),
    ];
    sort_in_place(&mut values);
    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["-1.5", "0.25", "3", "100000000000000000000", "inf"]);
}

#[rstest]
fn test_sorted_copy_leaves_input_alone() {
    let input = vec![2, 1];
    let sorted = sorted_copy(input.iter().copied());
    assert_eq!(input, vec![2, 1]);
    assert_eq!(sorted, vec![1, 2]);
}

#[rstest]
fn test_expensive_keys_are_computed_once_per_element() {
    let evaluations = Cell::new(0);
    let mut words = vec!["delta", "alpha", "charlie", "bravo"];
    sort_in_place_by(&mut words, |word: &&str| {
        evaluations.set(evaluations.get() + 1);
        word.to_string()
    });
    assert_eq!(words, vec!["alpha", "bravo", "charlie", "delta"]);
    assert_eq!(evaluations.get(), 4);
}

#[rstest]
fn test_descending_by_comparator() {
    let sorted = sorted_copy_by(vec![1, 3, 2], |left: &i32, right: &i32| right.cmp(left));
    assert_eq!(sorted, vec![3, 2, 1]);
    assert!(is_sorted_by(&sorted, |left: &i32, right: &i32| right.cmp(left)));
    assert!(!is_sorted(&sorted));
}

#[rstest]
fn test_fallible_sort_reports_incompatible_keys() {
    #[derive(Debug)]
    enum Field {
        Number(i64),
        Text(&'static str),
    }

    let compare = |left: &Field, right: &Field| -> Result<Ordering, AlgebraError> {
        match (left, right) {
            (Field::Number(left), Field::Number(right)) => Ok(left.cmp(right)),
            (Field::Text(left), Field::Text(right)) => Ok(left.cmp(right)),
            _ => Err(AlgebraError::incompatible("cannot compare text with a number")),
        }
    };

    let numbers = try_sorted_copy_by(vec![Field::Number(2), Field::Number(1)], compare).unwrap();
    assert!(matches!(numbers[0], Field::Number(1)));

    let mixed = try_sorted_copy_by(vec![Field::Number(2), Field::Text("a")], compare);
    assert!(matches!(mixed, Err(AlgebraError::IncompatibleKeys { .. })));
}
