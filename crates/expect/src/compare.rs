//! Type-aware equality and ordering across scalar representations.
//!
//! Text and Boolean values are only ever equal to values of their own
//! category. Numeric values (Signed, Unsigned, Real) compare by magnitude
//! regardless of width or signedness:
//!
//! - same category: widened to the canonical width and compared natively
//! - Signed vs Unsigned: routed through [`compare_sign_mismatch`], which never
//!   reinterprets one signedness as the other
//! - anything vs Real: both restated as `f64`; integers beyond 2^53 lose
//!   precision, a known limitation
//!
//! Results follow the `Ord::cmp` convention: `compare(a, b)` describes `a`
//! relative to `b`. NaN is unordered, so comparisons involving it return
//! `Ok(None)` and never count as equal.

use std::cmp::Ordering;

use tracing::trace;

use crate::value::{Canonical, ToValue, Value};
use crate::ExpectError;

/// Returns true if the two values should be considered equal.
///
/// Never fails for supported scalars: a Text or Boolean operand against a
/// value of any other category is simply unequal. Fails with
/// [`ExpectError::UnsupportedType`] when an operand has no scalar form.
pub fn are_equal<A, B>(a: &A, b: &B) -> Result<bool, ExpectError>
where
    A: ToValue + ?Sized,
    B: ToValue + ?Sized,
{
    let a = a.to_value()?;
    let b = b.to_value()?;
    let equal = values_equal(&a, &b)?;
    trace!(
        target: "testexpect",
        left = a.type_name(),
        right = b.type_name(),
        equal,
        "equality check"
    );
    Ok(equal)
}

/// Orders two numeric values, `a` relative to `b`.
///
/// Returns `Ok(None)` when either operand is NaN. Fails with
/// [`ExpectError::NotComparable`] when either operand is Text or Boolean.
pub fn compare<A, B>(a: &A, b: &B) -> Result<Option<Ordering>, ExpectError>
where
    A: ToValue + ?Sized,
    B: ToValue + ?Sized,
{
    let a = a.to_value()?;
    let b = b.to_value()?;
    let ordering = compare_values(&a, &b)?;
    trace!(
        target: "testexpect",
        left = a.type_name(),
        right = b.type_name(),
        ?ordering,
        "ordering check"
    );
    Ok(ordering)
}

/// Equality on already-classified values.
pub fn values_equal(a: &Value<'_>, b: &Value<'_>) -> Result<bool, ExpectError> {
    match (a.canonical(), b.canonical()) {
        (Canonical::Text(l), Canonical::Text(r)) => Ok(l == r),
        (Canonical::Text(_), _) | (_, Canonical::Text(_)) => Ok(false),
        (Canonical::Boolean(l), Canonical::Boolean(r)) => Ok(l == r),
        (Canonical::Boolean(_), _) | (_, Canonical::Boolean(_)) => Ok(false),
        _ => Ok(compare_values(a, b)? == Some(Ordering::Equal)),
    }
}

/// Ordering on already-classified values.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Result<Option<Ordering>, ExpectError> {
    if !a.category().is_numeric() || !b.category().is_numeric() {
        return Err(ExpectError::NotComparable {
            left: a.type_name().to_string(),
            right: b.type_name().to_string(),
        });
    }

    let ordering = match (a.canonical(), b.canonical()) {
        (Canonical::Signed(l), Canonical::Signed(r)) => Some(l.cmp(&r)),
        (Canonical::Unsigned(l), Canonical::Unsigned(r)) => Some(l.cmp(&r)),
        (Canonical::Unsigned(u), Canonical::Signed(s)) => Some(compare_sign_mismatch(u, s)),
        (Canonical::Signed(s), Canonical::Unsigned(u)) => {
            Some(compare_sign_mismatch(u, s).reverse())
        }
        (l, r) => match (l.to_f64(), r.to_f64()) {
            (Some(l), Some(r)) => l.partial_cmp(&r),
            _ => {
                return Err(ExpectError::NotComparable {
                    left: a.type_name().to_string(),
                    right: b.type_name().to_string(),
                })
            }
        },
    };
    Ok(ordering)
}

/// Orders an unsigned value relative to a signed one without overflow.
///
/// A negative `s` is below every unsigned value, and a `u` above `i64::MAX`
/// is above every signed value. Only the remaining range is converted.
pub fn compare_sign_mismatch(u: u64, s: i64) -> Ordering {
    if s < 0 {
        return Ordering::Greater;
    }
    match i64::try_from(u) {
        Ok(u) => u.cmp(&s),
        Err(_) => Ordering::Greater,
    }
}
