//! Cross-representation comparison suite.
//!
//! Organized by category:
//!   A. Cross-kind equality (Text, Boolean, numeric)
//!   B. Sign-mismatch boundaries
//!   C. Real coercion
//!   D. Errors
//!   E. JSON values

use std::cmp::Ordering;

use serde_json::json;
use testexpect::{are_equal, compare, ExpectError, Value};

// ──────────────────────────────────────────────
// A. Cross-kind equality
// ──────────────────────────────────────────────

#[test]
fn text_never_equals_a_number() {
    assert!(!are_equal("1", &1).unwrap());
    assert!(!are_equal(&1, "1").unwrap());
}

#[test]
fn boolean_never_equals_a_number() {
    assert!(!are_equal(&true, &1).unwrap());
    assert!(!are_equal(&0u8, &false).unwrap());
}

#[test]
fn text_against_boolean_is_unequal_not_an_error() {
    assert_eq!(are_equal("true", &true), Ok(false));
    assert_eq!(are_equal(&true, "true"), Ok(false));
}

#[test]
fn same_kind_compares_content() {
    assert!(are_equal("abc", &String::from("abc")).unwrap());
    assert!(!are_equal("abc", "abd").unwrap());
    assert!(are_equal(&false, &false).unwrap());
    assert!(!are_equal(&false, &true).unwrap());
}

#[test]
fn integers_of_different_widths_are_equal_by_value() {
    assert!(are_equal(&200u8, &200i64).unwrap());
    assert!(are_equal(&-7i8, &-7isize).unwrap());
    assert!(are_equal(&65_535u16, &65_535usize).unwrap());
    assert!(!are_equal(&-1i32, &u32::MAX).unwrap());
}

// ──────────────────────────────────────────────
// B. Sign-mismatch boundaries
// ──────────────────────────────────────────────

#[test]
fn largest_shared_value_is_equal() {
    assert_eq!(
        compare(&9_223_372_036_854_775_807u64, &9_223_372_036_854_775_807i64),
        Ok(Some(Ordering::Equal))
    );
}

#[test]
fn unsigned_above_signed_range_is_greater() {
    assert_eq!(
        compare(&9_223_372_036_854_775_808u64, &-1i64),
        Ok(Some(Ordering::Greater))
    );
    assert_eq!(
        compare(&9_223_372_036_854_775_808u64, &i64::MAX),
        Ok(Some(Ordering::Greater))
    );
}

#[test]
fn unsigned_zero_is_greater_than_negative_one() {
    assert_eq!(compare(&0u64, &-1i64), Ok(Some(Ordering::Greater)));
    assert_eq!(compare(&-1i64, &0u64), Ok(Some(Ordering::Less)));
}

#[test]
fn narrow_mixed_signs_order_by_value() {
    assert_eq!(compare(&-128i8, &255u8), Ok(Some(Ordering::Less)));
    assert_eq!(compare(&10u16, &9i16), Ok(Some(Ordering::Greater)));
    assert_eq!(compare(&9u32, &9i32), Ok(Some(Ordering::Equal)));
}

#[test]
fn max_unsigned_never_equals_any_signed() {
    for s in [i64::MIN, -1, 0, 1, i64::MAX] {
        assert!(!are_equal(&u64::MAX, &s).unwrap(), "u64::MAX vs {}", s);
    }
}

// ──────────────────────────────────────────────
// C. Real coercion
// ──────────────────────────────────────────────

#[test]
fn whole_float_equals_integer() {
    assert!(are_equal(&2.0f64, &2i32).unwrap());
    assert!(are_equal(&3u64, &3.0f32).unwrap());
}

#[test]
fn fractional_float_does_not_equal_integer() {
    assert!(!are_equal(&2.5f32, &2i32).unwrap());
    assert_eq!(compare(&2.5f32, &2i32), Ok(Some(Ordering::Greater)));
}

#[test]
fn widened_f32_keeps_its_binary_value() {
    // 0.1f32 widens to 0.100000001490116..., not 0.1f64.
    assert!(!are_equal(&0.1f32, &0.1f64).unwrap());
    assert!(are_equal(&0.5f32, &0.5f64).unwrap());
}

#[test]
fn integers_beyond_f64_precision_collapse() {
    // 2^53 + 1 is not representable as f64 and rounds to 2^53.
    let big = (1u64 << 53) + 1;
    assert!(are_equal(&big, &((1u64 << 53) as f64)).unwrap());
}

#[test]
fn nan_is_unordered() {
    assert_eq!(compare(&f64::NAN, &1), Ok(None));
    assert_eq!(are_equal(&f64::NAN, &f64::NAN), Ok(false));
}

#[test]
fn zeroes_of_either_sign_are_equal() {
    assert!(are_equal(&-0.0f64, &0.0f64).unwrap());
    assert!(are_equal(&-0.0f64, &0u8).unwrap());
}

// ──────────────────────────────────────────────
// D. Errors
// ──────────────────────────────────────────────

#[test]
fn ordering_text_is_not_comparable() {
    assert_eq!(
        compare("a", "b"),
        Err(ExpectError::NotComparable {
            left: "str".to_string(),
            right: "str".to_string(),
        })
    );
}

#[test]
fn ordering_boolean_against_number_is_not_comparable() {
    let err = compare(&1u8, &true).unwrap_err();
    assert_eq!(err.to_string(), "can't compare u8 and bool");
}

#[test]
fn containers_are_unsupported_for_equality() {
    let err = are_equal(&json!({ "re": 1, "im": 2 }), &1).unwrap_err();
    assert_eq!(
        err,
        ExpectError::UnsupportedType {
            type_name: "json object".to_string()
        }
    );
    assert!(matches!(
        are_equal(&1, &json!([1])),
        Err(ExpectError::UnsupportedType { .. })
    ));
}

#[test]
fn unsupported_wins_over_not_comparable() {
    assert!(matches!(
        compare(&json!(null), "a"),
        Err(ExpectError::UnsupportedType { .. })
    ));
}

// ──────────────────────────────────────────────
// E. JSON values
// ──────────────────────────────────────────────

#[test]
fn json_numbers_compare_against_native_scalars() {
    assert!(are_equal(&json!(42), &42u8).unwrap());
    assert!(are_equal(&json!(-42), &-42i16).unwrap());
    assert!(are_equal(&json!(1.5), &1.5f32).unwrap());
    assert!(are_equal(&json!(u64::MAX), &u64::MAX).unwrap());
    assert_eq!(compare(&json!(-1), &json!(0)), Ok(Some(Ordering::Less)));
}

#[test]
fn json_text_and_booleans_keep_their_kind() {
    assert!(are_equal(&json!("x"), "x").unwrap());
    assert!(!are_equal(&json!("1"), &1).unwrap());
    assert!(are_equal(&json!(true), &true).unwrap());
}

#[test]
fn classified_values_pass_straight_through() {
    assert!(are_equal(&Value::U16(9), &Value::F64(9.0)).unwrap());
}
