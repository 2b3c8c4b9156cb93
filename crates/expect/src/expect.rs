//! Assertions that stop the running test with a located, formatted message.
//!
//! Every assertion is `#[track_caller]`, so the reported `file:line` is the
//! line in the test that made the assertion. A failed assertion panics in the
//! calling thread, which the test harness records as a failure of that test.
//!
//! ```
//! use testexpect::{Context, Expect};
//!
//! let expect = Context::new();
//! expect.equal("count", &3u8, &3i64);
//! expect.not_equal("label", &"1", &1);
//! expect.nil("missing", &None::<u32>);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::panic::Location;

use tracing::debug;

use crate::report::Failure;
use crate::value::ToValue;
use crate::{are_equal, compare, ExpectError, Options};

/// The assertion surface. Implementors only decide how a failure is reported.
pub trait Expect {
    /// Report a failed assertion and stop the test.
    #[track_caller]
    fn fail(&self, message: fmt::Arguments<'_>) -> !;

    /// Asserts that `actual` is `None`.
    #[track_caller]
    fn nil<T: Debug>(&self, name: &str, actual: &Option<T>) {
        if let Some(value) = actual {
            self.fail(format_args!("expected {} to be nil, got {:?}", name, value));
        }
    }

    /// Asserts that `actual` is `Some`.
    #[track_caller]
    fn not_nil<T>(&self, name: &str, actual: &Option<T>) {
        if actual.is_none() {
            self.fail(format_args!("expected {} to be not nil", name));
        }
    }

    /// Asserts that `result` is `Ok`. `action` describes what was attempted.
    #[track_caller]
    fn no_error<T, E: Display>(&self, action: &str, result: &Result<T, E>) {
        if let Err(err) = result {
            self.fail(format_args!("unexpected error while {}: {}", action, err));
        }
    }

    /// Asserts structural equality through `PartialEq`.
    #[track_caller]
    fn deep_equal<A, E>(&self, name: &str, actual: &A, expected: &E)
    where
        A: PartialEq<E> + Debug + ?Sized,
        E: Debug + ?Sized,
    {
        if actual != expected {
            self.fail(format_args!(
                "expected {} to equal {:?}, got {:?}",
                name, expected, actual
            ));
        }
    }

    /// Asserts structural inequality through `PartialEq`.
    #[track_caller]
    fn not_deep_equal<A, E>(&self, name: &str, actual: &A, not_expected: &E)
    where
        A: PartialEq<E> + Debug + ?Sized,
        E: Debug + ?Sized,
    {
        if actual == not_expected {
            self.fail(format_args!("expected {} to not equal {:?}", name, not_expected));
        }
    }

    /// Asserts type-aware scalar equality: `3u8` equals `3i64` and `2.0`
    /// equals `2`, but `"1"` never equals `1`.
    #[track_caller]
    fn equal<A, E>(&self, name: &str, actual: &A, expected: &E)
    where
        A: ToValue + Debug + ?Sized,
        E: ToValue + Debug + ?Sized,
    {
        if !checked(name, are_equal(actual, expected)) {
            self.fail(format_args!(
                "expected {} to equal {:?}, got {:?}",
                name, expected, actual
            ));
        }
    }

    /// Negation of [`Expect::equal`].
    #[track_caller]
    fn not_equal<A, E>(&self, name: &str, actual: &A, not_expected: &E)
    where
        A: ToValue + Debug + ?Sized,
        E: ToValue + Debug + ?Sized,
    {
        if checked(name, are_equal(actual, not_expected)) {
            self.fail(format_args!("expected {} to not equal {:?}", name, not_expected));
        }
    }

    /// Asserts that both slices have the same length and that elements at the
    /// same index are [`Expect::equal`]. Stops at the first mismatch.
    #[track_caller]
    fn slice_equal<A, E>(&self, name: &str, actual: &[A], expected: &[E])
    where
        A: ToValue + Debug,
        E: ToValue + Debug,
    {
        if actual.len() != expected.len() {
            self.fail(format_args!(
                "expected len({}) to be {}, got {}",
                name,
                expected.len(),
                actual.len()
            ));
        }
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            if !checked(name, are_equal(a, e)) {
                self.fail(format_args!(
                    "expected {}[{}] to equal {:?}, got {:?}",
                    name, i, e, a
                ));
            }
        }
    }

    /// Asserts that `actual` orders strictly below `bound`.
    #[track_caller]
    fn less<A, B>(&self, name: &str, actual: &A, bound: &B)
    where
        A: ToValue + Debug + ?Sized,
        B: ToValue + Debug + ?Sized,
    {
        if checked(name, compare(actual, bound)) != Some(Ordering::Less) {
            self.fail(format_args!(
                "expected {} to be less than {:?}, got {:?}",
                name, bound, actual
            ));
        }
    }

    /// Asserts that `actual` orders strictly above `bound`.
    #[track_caller]
    fn greater<A, B>(&self, name: &str, actual: &A, bound: &B)
    where
        A: ToValue + Debug + ?Sized,
        B: ToValue + Debug + ?Sized,
    {
        if checked(name, compare(actual, bound)) != Some(Ordering::Greater) {
            self.fail(format_args!(
                "expected {} to be greater than {:?}, got {:?}",
                name, bound, actual
            ));
        }
    }
}

/// Unwraps a comparator result. A comparator error means the assertion itself
/// is malformed, which is reported apart from an ordinary failure.
#[track_caller]
fn checked<T>(name: &str, result: Result<T, ExpectError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("invalid assertion on {}: {}", name, err),
    }
}

// ──────────────────────────────────────────────
// Context
// ──────────────────────────────────────────────

/// The default [`Expect`] implementation: fails by panicking with a
/// `file:line FAIL message` report.
#[derive(Debug, Clone)]
pub struct Context {
    options: Options,
}

impl Context {
    /// A context configured from the environment (see [`Options::from_env`]).
    pub fn new() -> Self {
        Self::with_options(Options::from_env())
    }

    pub fn with_options(options: Options) -> Self {
        Context { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Expect for Context {
    #[track_caller]
    fn fail(&self, message: fmt::Arguments<'_>) -> ! {
        let failure = Failure::new(Location::caller(), message.to_string(), &self.options);
        debug!(
            target: "testexpect",
            file = %failure.file,
            line = failure.line,
            message = %failure.message,
            "assertion failed"
        );
        panic!("{}", failure.render(&self.options));
    }
}
