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

//! Exact comparison across primitive numeric types.
//!
//! None of these functions cast lossily. Integers are widened to 128 bits,
//! with the upper half of `u128` handled separately. An integer is compared
//! against a float by splitting the float into its integral part and its
//! fraction, so `9007199254740993_i64` is correctly `Greater` than
//! `9007199254740992.0_f64` even though the cast `as f64` would round it down.

use crate::ordering::Ordering;
use num_traits::{Float, PrimInt};

/// Compares two integers of possibly different widths and signedness.
///
/// # Examples
///
/// ```rust
/// use ordo_core::num::exact::compare_integers;
/// use ordo_core::ordering::Ordering;
///
/// assert_eq!(compare_integers(-1_i8, u128::MAX), Ordering::Less);
/// assert_eq!(compare_integers(255_u8, 255_i64), Ordering::Equivalent);
/// assert_eq!(compare_integers(u128::MAX, i128::MAX), Ordering::Greater);
/// ```
#[inline]
pub fn compare_integers<A, B>(lhs: A, rhs: B) -> Ordering
where
    A: PrimInt,
    B: PrimInt,
{
    match (lhs.to_i128(), rhs.to_i128()) {
        (Some(l), Some(r)) => l.cmp(&r).into(),
        // Only `u128` values above `i128::MAX` fail to widen.
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => lhs.to_u128().cmp(&rhs.to_u128()).into(),
    }
}

/// Compares an integer against a float without rounding either.
///
/// Returns [`Ordering::Incomparable`] if `float` is NaN.
///
/// # Examples
///
/// ```rust
/// use ordo_core::num::exact::compare_integer_float;
/// use ordo_core::ordering::Ordering;
///
/// assert_eq!(compare_integer_float(2_i32, 2.5_f64), Ordering::Less);
/// assert_eq!(compare_integer_float(-3_i64, -3.5_f32), Ordering::Greater);
/// assert_eq!(compare_integer_float(0_u8, -0.0_f64), Ordering::Equivalent);
/// assert_eq!(compare_integer_float(u128::MAX, f64::INFINITY), Ordering::Less);
/// assert_eq!(compare_integer_float(7_u16, f64::NAN), Ordering::Incomparable);
/// ```
pub fn compare_integer_float<I, F>(int: I, float: F) -> Ordering
where
    I: PrimInt,
    F: Float,
{
    if float.is_nan() {
        return Ordering::Incomparable;
    }
    if float.is_infinite() {
        return if float.is_sign_positive() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let whole = float.trunc();
    let two = F::one() + F::one();
    let limit = two.powi(127);

    if whole >= limit {
        // Every float at this magnitude is integral.
        return match (int.to_u128(), whole.to_u128()) {
            (Some(i), Some(w)) => i.cmp(&w).into(),
            _ => Ordering::Less,
        };
    }
    if whole < -limit {
        return Ordering::Greater;
    }

    let w = match whole.to_i128() {
        Some(w) => w,
        // `-2^127` is the only value in range that fails to convert.
        None => i128::MIN,
    };
    match int.to_i128() {
        Some(i) => Ordering::from(i.cmp(&w)).then_with(|| {
            let fraction = float.fract();
            if fraction > F::zero() {
                Ordering::Less
            } else if fraction < F::zero() {
                Ordering::Greater
            } else {
                Ordering::Equivalent
            }
        }),
        None => Ordering::Greater,
    }
}

/// Compares two floats of possibly different precision.
///
/// `f32` widens to `f64` exactly, so the result equals the comparison of the
/// mathematical values. NaN on either side yields `Incomparable`.
#[inline]
pub fn compare_floats<A, B>(lhs: A, rhs: B) -> Ordering
where
    A: Float,
    B: Float,
{
    lhs.to_f64().partial_cmp(&rhs.to_f64()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_across_signedness() {
        assert_eq!(compare_integers(-1_i32, 0_u32), Ordering::Less);
        assert_eq!(compare_integers(u64::MAX, -1_i8), Ordering::Greater);
        assert_eq!(compare_integers(i128::MIN, u128::MIN), Ordering::Less);
        assert_eq!(compare_integers(42_usize, 42_i16), Ordering::Equivalent);
    }

    #[test]
    fn test_integers_above_i128_range() {
        let big = u128::MAX;
        let bigger_than_i128 = i128::MAX as u128 + 1;
        assert_eq!(compare_integers(big, bigger_than_i128), Ordering::Greater);
        assert_eq!(compare_integers(bigger_than_i128, big), Ordering::Less);
        assert_eq!(compare_integers(big, big), Ordering::Equivalent);
        assert_eq!(compare_integers(i128::MAX, bigger_than_i128), Ordering::Less);
    }

    #[test]
    fn test_integer_float_beyond_double_precision() {
        let n = 9_007_199_254_740_993_i64;
        let f = 9_007_199_254_740_992.0_f64;
        assert_eq!(compare_integer_float(n, f), Ordering::Greater);
        assert_eq!(compare_integer_float(n - 1, f), Ordering::Equivalent);
    }

    #[test]
    fn test_integer_float_fractions() {
        assert_eq!(compare_integer_float(1_u8, 1.25_f32), Ordering::Less);
        assert_eq!(compare_integer_float(2_u8, 1.25_f32), Ordering::Greater);
        assert_eq!(compare_integer_float(-1_i8, -1.25_f32), Ordering::Greater);
        assert_eq!(compare_integer_float(-2_i8, -1.25_f32), Ordering::Less);
        assert_eq!(compare_integer_float(0_i8, 0.5_f64), Ordering::Less);
        assert_eq!(compare_integer_float(0_i8, -0.5_f64), Ordering::Greater);
    }

    #[test]
    fn test_integer_float_extremes() {
        let two_pow_127 = 2.0_f64.powi(127);
        assert_eq!(compare_integer_float(i128::MAX, two_pow_127), Ordering::Less);
        assert_eq!(compare_integer_float(i128::MIN, -two_pow_127), Ordering::Equivalent);
        assert_eq!(compare_integer_float(i128::MIN, -two_pow_127 * 2.0), Ordering::Greater);
        assert_eq!(
            compare_integer_float(1_u128 << 127, two_pow_127),
            Ordering::Equivalent
        );
        assert_eq!(compare_integer_float(u128::MAX, two_pow_127 * 2.0), Ordering::Less);
        assert_eq!(compare_integer_float(-5_i32, two_pow_127), Ordering::Less);
        assert_eq!(compare_integer_float(u128::MAX, f32::MAX), Ordering::Greater);
        assert_eq!(compare_integer_float(0_i32, f64::NEG_INFINITY), Ordering::Greater);
    }

    #[test]
    fn test_integer_float_nan() {
        assert!(compare_integer_float(0_i64, f64::NAN).is_incomparable());
        assert!(compare_integer_float(0_i64, -f32::NAN).is_incomparable());
    }

    #[test]
    fn test_floats_across_precision() {
        assert_eq!(compare_floats(0.1_f32, 0.1_f64), Ordering::Greater);
        assert_eq!(compare_floats(0.5_f32, 0.5_f64), Ordering::Equivalent);
        assert_eq!(compare_floats(-0.0_f32, 0.0_f64), Ordering::Equivalent);
        assert_eq!(compare_floats(f32::INFINITY, f64::MAX), Ordering::Greater);
        assert_eq!(compare_floats(f32::NAN, f64::NAN), Ordering::Incomparable);
    }
}
