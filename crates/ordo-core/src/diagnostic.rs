// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Comparison Diagnostics
//!
//! Checks that report a failed comparison as a value instead of a `bool`,
//! for test runners and other reporting code. Operands are rendered through
//! [`Stringify`], so the report reads the same whichever strategy a type
//! bound for its rendering.
//!
//! Each failure is also emitted as a `tracing` debug event under the
//! `ordo::diagnostic` target. Successful checks emit nothing.
//!
//! ```rust
//! use ordo_core::diagnostic::{verify_ordering, Mismatch};
//! use ordo_core::ordering::Ordering;
//!
//! assert!(verify_ordering(&1_u8, &2_i64, Ordering::Less).is_ok());
//!
//! let err = verify_ordering(&f64::NAN, &0.0_f64, Ordering::Less).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "expected NaN to compare less to 0.0, but it compared incomparable"
//! );
//! ```

use crate::dispatch::Intrinsic;
use crate::ops::{AreEqual, AreEquivalent, Compare, Stringify};
use crate::ordering::Ordering;
use tracing::debug;

const TARGET: &str = "ordo::diagnostic";

/// A failed comparison check, with both operands rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    /// The operands were expected to be equal but `AreEqual` said otherwise.
    #[error("expected {lhs} to equal {rhs}")]
    NotEqual {
        /// The rendered left operand.
        lhs: String,
        /// The rendered right operand.
        rhs: String,
    },
    /// The operands were expected to be equivalent but `AreEquivalent` said otherwise.
    #[error("expected {lhs} to be equivalent to {rhs}")]
    NotEquivalent {
        /// The rendered left operand.
        lhs: String,
        /// The rendered right operand.
        rhs: String,
    },
    /// `Compare` produced a different ordering than the one expected.
    #[error("expected {lhs} to compare {expected} to {rhs}, but it compared {actual}")]
    Ordering {
        /// The rendered left operand.
        lhs: String,
        /// The rendered right operand.
        rhs: String,
        /// The ordering the check asked for.
        expected: Ordering,
        /// The ordering `Compare` returned.
        actual: Ordering,
    },
}

impl Mismatch {
    /// Returns the rendered left operand.
    pub fn lhs(&self) -> &str {
        match self {
            Mismatch::NotEqual { lhs, .. }
            | Mismatch::NotEquivalent { lhs, .. }
            | Mismatch::Ordering { lhs, .. } => lhs,
        }
    }

    /// Returns the rendered right operand.
    pub fn rhs(&self) -> &str {
        match self {
            Mismatch::NotEqual { rhs, .. }
            | Mismatch::NotEquivalent { rhs, .. }
            | Mismatch::Ordering { rhs, .. } => rhs,
        }
    }
}

/// Checks that `lhs` equals `rhs` in the default context.
#[inline]
pub fn verify_equal<T, U>(lhs: &T, rhs: &U) -> Result<(), Mismatch>
where
    T: ?Sized + AreEqual<U> + Stringify,
    U: ?Sized + Stringify,
{
    verify_equal_in::<Intrinsic, T, U>(lhs, rhs)
}

/// Checks that `lhs` equals `rhs` in the context `Cx`.
pub fn verify_equal_in<Cx, T, U>(lhs: &T, rhs: &U) -> Result<(), Mismatch>
where
    T: ?Sized + AreEqual<U, Cx> + Stringify<Cx>,
    U: ?Sized + Stringify<Cx>,
{
    if <T as AreEqual<U, Cx>>::are_equal(lhs, rhs) {
        return Ok(());
    }
    let mismatch = Mismatch::NotEqual {
        lhs: lhs.stringify(),
        rhs: rhs.stringify(),
    };
    debug!(target: TARGET, lhs = mismatch.lhs(), rhs = mismatch.rhs(), "values are not equal");
    Err(mismatch)
}

/// Checks that `lhs` is equivalent to `rhs` in the default context.
#[inline]
pub fn verify_equivalent<T, U>(lhs: &T, rhs: &U) -> Result<(), Mismatch>
where
    T: ?Sized + AreEquivalent<U> + Stringify,
    U: ?Sized + Stringify,
{
    verify_equivalent_in::<Intrinsic, T, U>(lhs, rhs)
}

/// Checks that `lhs` is equivalent to `rhs` in the context `Cx`.
pub fn verify_equivalent_in<Cx, T, U>(lhs: &T, rhs: &U) -> Result<(), Mismatch>
where
    T: ?Sized + AreEquivalent<U, Cx> + Stringify<Cx>,
    U: ?Sized + Stringify<Cx>,
{
    if <T as AreEquivalent<U, Cx>>::are_equivalent(lhs, rhs) {
        return Ok(());
    }
    let mismatch = Mismatch::NotEquivalent {
        lhs: lhs.stringify(),
        rhs: rhs.stringify(),
    };
    debug!(target: TARGET, lhs = mismatch.lhs(), rhs = mismatch.rhs(), "values are not equivalent");
    Err(mismatch)
}

/// Checks that comparing `lhs` with `rhs` yields `expected` in the default
/// context.
#[inline]
pub fn verify_ordering<T, U>(lhs: &T, rhs: &U, expected: Ordering) -> Result<(), Mismatch>
where
    T: ?Sized + Compare<U> + Stringify,
    U: ?Sized + Stringify,
{
    verify_ordering_in::<Intrinsic, T, U>(lhs, rhs, expected)
}

/// Checks that comparing `lhs` with `rhs` yields `expected` in the context
/// `Cx`.
pub fn verify_ordering_in<Cx, T, U>(lhs: &T, rhs: &U, expected: Ordering) -> Result<(), Mismatch>
where
    T: ?Sized + Compare<U, Cx> + Stringify<Cx>,
    U: ?Sized + Stringify<Cx>,
{
    let actual = <T as Compare<U, Cx>>::compare(lhs, rhs);
    if actual == expected {
        return Ok(());
    }
    let mismatch = Mismatch::Ordering {
        lhs: lhs.stringify(),
        rhs: rhs.stringify(),
        expected,
        actual,
    };
    debug!(
        target: TARGET,
        lhs = mismatch.lhs(),
        rhs = mismatch.rhs(),
        %expected,
        %actual,
        "unexpected ordering"
    );
    Err(mismatch)
}

/// Asserts that two values are equal through `AreEqual`, rendering both
/// through `Stringify` on failure.
///
/// ```rust
/// ordo_core::assert_are_equal!(3_u8, 3.0_f64);
/// ```
///
/// ```rust,should_panic
/// ordo_core::assert_are_equal!(f64::NAN, f64::NAN);
/// ```
#[macro_export]
macro_rules! assert_are_equal {
    ($lhs:expr, $rhs:expr $(,)?) => {
        if let ::std::result::Result::Err(mismatch) =
            $crate::diagnostic::verify_equal(&$lhs, &$rhs)
        {
            ::std::panic!("assertion failed: {}", mismatch);
        }
    };
}

/// Asserts that two values are equivalent through `AreEquivalent`.
///
/// ```rust
/// ordo_core::assert_are_equivalent!(0.0_f64, -0.0_f64);
/// ```
#[macro_export]
macro_rules! assert_are_equivalent {
    ($lhs:expr, $rhs:expr $(,)?) => {
        if let ::std::result::Result::Err(mismatch) =
            $crate::diagnostic::verify_equivalent(&$lhs, &$rhs)
        {
            ::std::panic!("assertion failed: {}", mismatch);
        }
    };
}

/// Asserts that `Compare` of two values yields the expected ordering.
///
/// ```rust
/// use ordo_core::ordering::Ordering;
///
/// ordo_core::assert_ordering!(-1_i8, u64::MAX, Ordering::Less);
/// ordo_core::assert_ordering!(1_i32, f32::NAN, Ordering::Incomparable);
/// ```
#[macro_export]
macro_rules! assert_ordering {
    ($lhs:expr, $rhs:expr, $expected:expr $(,)?) => {
        if let ::std::result::Result::Err(mismatch) =
            $crate::diagnostic::verify_ordering(&$lhs, &$rhs, $expected)
        {
            ::std::panic!("assertion failed: {}", mismatch);
        }
    };
}
