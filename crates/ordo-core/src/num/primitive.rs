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

//! Same-type bindings for the primitive numeric types.
//!
//! These resolve through std's `PartialEq` and `PartialOrd`, so floats carry
//! IEEE 754 semantics: NaN is `Incomparable` with everything, the two zeros
//! are `Equivalent` and equal, and the infinities bound every finite value.

macro_rules! primitive_bindings {
    ($($t:ty),* $(,)?) => {
        $(
            crate::resolve! {
                AreEqual($t);
                AreEquivalent($t);
                Compare($t);
                Stringify($t);
                Swap($t);
            }
        )*
    };
}

primitive_bindings!(u8, u16, u32, u64, u128, usize);
primitive_bindings!(i8, i16, i32, i64, i128, isize);
primitive_bindings!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::ops::{are_equal, are_equivalent, compare, stringify, swap};
    use crate::ordering::Ordering;
    use crate::priority::{rank_of, Fallback, MemberOperator, NonMemberFunction, Priority};

    #[test]
    fn test_integer_compare() {
        assert_eq!(compare(&1_u8, &2_u8), Ordering::Less);
        assert_eq!(compare(&i64::MIN, &i64::MIN), Ordering::Equivalent);
        assert_eq!(compare(&usize::MAX, &0_usize), Ordering::Greater);
    }

    #[test]
    fn test_float_special_values() {
        assert_eq!(compare(&1.0_f64, &f64::INFINITY), Ordering::Less);
        assert_eq!(compare(&1.0_f64, &f64::NEG_INFINITY), Ordering::Greater);
        assert_eq!(compare(&f32::INFINITY, &f32::INFINITY), Ordering::Equivalent);
        assert_eq!(compare(&f64::NAN, &f64::NAN), Ordering::Incomparable);
        assert_eq!(compare(&0.0_f64, &-0.0_f64), Ordering::Equivalent);
        assert!(!are_equal(&f64::NAN, &f64::NAN));
        assert!(are_equivalent(&0.0_f32, &-0.0_f32));
    }

    #[test]
    fn test_strategies() {
        assert_eq!(rank_of(crate::strategy!(Compare(u64))), MemberOperator::RANK);
        assert_eq!(rank_of(crate::strategy!(AreEqual(f32))), Fallback::RANK);
        assert_eq!(rank_of(crate::strategy!(AreEquivalent(i8))), Fallback::RANK);
        assert_eq!(rank_of(crate::strategy!(Stringify(i8))), NonMemberFunction::RANK);
        assert_eq!(rank_of(crate::strategy!(Swap(f64))), Fallback::RANK);
    }

    #[test]
    fn test_stringify_and_swap() {
        assert_eq!(stringify(&-12_i16), "-12");
        assert_eq!(stringify(&2.5_f64), "2.5");

        let (mut a, mut b) = (f32::NAN, 1.0_f32);
        swap(&mut a, &mut b);
        assert_eq!(a, 1.0);
        assert!(b.is_nan());
    }
}
