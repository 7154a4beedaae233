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

//! Cross-type bindings between primitive numeric types.
//!
//! Every ordered pair of distinct primitive numeric types gets member
//! `IsEqual` and `CompareTo` impls backed by [`exact`](super::exact), and is
//! bound for `AreEqual`, `AreEquivalent` and `Compare`. Equivalence falls
//! back to equality.

use super::exact::{compare_floats, compare_integer_float, compare_integers};
use crate::dispatch::member::{CompareTo, IsEqual};
use crate::ordering::Ordering;

macro_rules! numeric_pair {
    ($a:ty, $b:ty, $cmp:expr) => {
        impl IsEqual<$b> for $a {
            #[inline(always)]
            fn is_equal(&self, other: &$b) -> bool {
                $cmp(*self, *other).is_eq()
            }
        }

        impl CompareTo<$b> for $a {
            #[inline(always)]
            fn compare_to(&self, other: &$b) -> Ordering {
                $cmp(*self, *other)
            }
        }

        crate::resolve! {
            AreEqual($a, $b);
            AreEquivalent($a, $b);
            Compare($a, $b);
        }
    };
}

macro_rules! cross_integers {
    () => {};
    ($head:ty $(, $tail:ty)*) => {
        $(
            numeric_pair!($head, $tail, compare_integers);
            numeric_pair!($tail, $head, compare_integers);
        )*
        cross_integers!($($tail),*);
    };
}

macro_rules! integer_float {
    ($float:ty; $($int:ty),*) => {
        $(
            numeric_pair!($int, $float, compare_integer_float);
            numeric_pair!($float, $int, |f: $float, i: $int| compare_integer_float(i, f).flip());
        )*
    };
}

cross_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

integer_float!(f32; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
integer_float!(f64; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

numeric_pair!(f32, f64, compare_floats);
numeric_pair!(f64, f32, compare_floats);
