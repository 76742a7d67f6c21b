#![cfg(feature = "numeric")]
//! Integration tests for the numeric equivalence and the numeric tower.

use ibig::IBig;
use rstest::rstest;
use rust_decimal_macros::dec;
use seqalg::error::AlgebraError;
use seqalg::numeric::{
    Equivalence, ExactDecimal, Number, NumberKind, NumericOrd, numeric_cmp, numeric_eq,
};
use seqalg::wrappers::{Natural, Unordered};
use std::cmp::Ordering;
use std::collections::HashSet;

// =============================================================================
// Cross-representation equality
// =============================================================================

#[rstest]
fn test_two_equals_two_point_zero() {
    assert!(numeric_eq(&Number::from(2_i32), &Number::from(dec!(2.0))));
    assert!(numeric_eq(&Number::from(2_i32), &Number::from(2.0_f64)));
}

#[rstest]
fn test_int_equals_long() {
    assert!(numeric_eq(&Number::from(2_i32), &Number::from(2_i64)));
    assert!(numeric_eq(&Number::from(2_u8), &Number::from(IBig::from(2))));
}

#[rstest]
fn test_hash_set_merges_equal_numbers() {
    let set: HashSet<Number> = [
        Number::from(10_i32),
        Number::from(dec!(10.000)),
        Number::from(10.0_f32),
        Number::from(IBig::from(10)),
        Number::from(ExactDecimal::new(IBig::from(100), 1)),
        Number::from(10.5_f64),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_float_is_compared_exactly() {
    // 0.1 in binary is slightly above one tenth
    assert_eq!(numeric_cmp(&Number::from(0.1_f64), &Number::from(dec!(0.1))), Ordering::Greater);
    // 0.5 is exact
    assert_eq!(numeric_cmp(&Number::from(0.5_f64), &Number::from(dec!(0.5))), Ordering::Equal);
}

#[rstest]
fn test_big_values_beyond_every_fixed_width() {
    let huge: Number = "123456789012345678901234567890.5".parse().unwrap();
    assert_eq!(huge.kind(), NumberKind::BigDecimal);
    assert!(huge > Number::from(u128::MAX / 10_000_000_000));
    assert!(huge < Number::from(f64::INFINITY));
    assert!(!huge.is_integral());
}

#[rstest]
#[case(f64::NEG_INFINITY, "-1e1000")]
#[case(-1.0e300, "-1")]
#[case(-0.0, "1e-1000")]
#[case(1.0e300, "1e301")]
fn test_float_below_exact(#[case] float: f64, #[case] exact: &str) {
    let exact: Number = exact.parse().unwrap();
    assert!(Number::from(float) < exact);
}

#[rstest]
#[case("1e-2000000")]
#[case("1e2000000")]
#[case("3.25e50000000")]
fn test_huge_exponents_are_rejected(#[case] literal: &str) {
    assert_eq!(
        literal.parse::<Number>(),
        Err(AlgebraError::InvalidNumber { input: literal.to_string() })
    );
}

#[rstest]
fn test_tiny_value_at_the_exponent_bound_stays_comparable() {
    let tiny: Number = "1e-4096".parse().unwrap();
    assert_eq!(tiny.kind(), NumberKind::BigDecimal);
    assert!(tiny > Number::from(0_i32));
    assert!(tiny < Number::from(f64::MIN_POSITIVE));
    let distinct: HashSet<Number> = [tiny.clone(), Number::from(0_i32), tiny].into_iter().collect();
    assert_eq!(distinct.len(), 2);
}

// =============================================================================
// Special values
// =============================================================================

#[rstest]
fn test_nan_is_one_class_above_infinity() {
    let nan = Number::from(f64::NAN);
    assert!(nan.equivalent(&Number::from(-f64::NAN)));
    assert_eq!(nan.numeric_cmp(&Number::from(f64::INFINITY)), Ordering::Greater);
    assert!(nan.to_exact().is_none());
}

#[rstest]
fn test_exact_decimal_rejects_non_finite_floats() {
    assert_eq!(
        ExactDecimal::try_from(f64::INFINITY),
        Err(AlgebraError::NonFiniteFloat { value: f64::INFINITY })
    );
    assert!(ExactDecimal::try_from(f64::NAN).is_err());
}

// =============================================================================
// Structural and wrapped types
// =============================================================================

#[rstest]
fn test_vectors_of_numbers_compare_elementwise() {
    let left = vec![Number::from(1_i32), Number::from(dec!(2.50))];
    let right = vec![Number::from(1.0_f64), Number::from(2.5_f32)];
    assert!(numeric_eq(&left, &right));
    assert!(numeric_eq(&(Number::from(1_i32), "a"), &(Number::from(dec!(1)), "a")));
}

#[rstest]
fn test_wrappers_choose_the_capability() {
    assert!(Natural::<String>::total_order().is_some());
    assert!(Unordered::<String>::total_order().is_none());
    assert!(Number::total_order().is_some());
}
