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

//! # Lexicographic Sequences
//!
//! Element-wise equality, equivalence, and lexicographic ordering over any
//! two iterables, built on the dispatch points of their elements. The element
//! types need not match; `[1, 2, 3]` of `i32` compares against `[1.0, 2.5]`
//! of `f64` through the numeric bindings.
//!
//! ## Rules
//!
//! - Two sequences are equal when they have the same length and every
//!   aligned pair is equivalent. Sequence equality and sequence equivalence
//!   therefore agree; an element type whose equivalence is coarser than its
//!   equality makes the sequences equal under the coarser relation.
//! - `compare` returns the first aligned result that is not `Equivalent`,
//!   `Incomparable` included. If one sequence is a strict prefix of the other,
//!   the shorter one is `Less`.
//!
//! The same rules back the dispatch impls for slices, arrays, `Vec` and
//! `Option` (where `None` orders before any `Some`).
//!
//! ```rust
//! use ordo_core::ops::compare;
//! use ordo_core::ordering::Ordering;
//!
//! assert_eq!(compare(&[1_i32, 2, 3], &[1_i32, 2, 4]), Ordering::Less);
//! assert_eq!(compare(&[1_i32, 2], &[1_i32, 2, 3]), Ordering::Less);
//! assert_eq!(compare(&vec![2_u8], &vec![1.5_f64]), Ordering::Greater);
//! assert_eq!(compare(&[f64::NAN, 0.0], &[1.0_f64, 0.0]), Ordering::Incomparable);
//! ```

use crate::ops::{AreEqual, AreEquivalent, Compare, Stringify, Swap};
use crate::ordering::Ordering;

/// Returns `true` if both sequences have the same length and all aligned
/// elements are equivalent in the default context.
#[inline]
pub fn are_equal<I, J>(lhs: I, rhs: J) -> bool
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: AreEquivalent<J::Item>,
{
    are_equal_in::<crate::dispatch::Intrinsic, I, J>(lhs, rhs)
}

/// Like [`are_equal`], in the context `Cx`.
#[inline]
pub fn are_equal_in<Cx, I, J>(lhs: I, rhs: J) -> bool
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: AreEquivalent<J::Item, Cx>,
{
    are_equivalent_in::<Cx, I, J>(lhs, rhs)
}

/// Returns `true` if both sequences have the same length and all aligned
/// elements are equivalent in the default context.
#[inline]
pub fn are_equivalent<I, J>(lhs: I, rhs: J) -> bool
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: AreEquivalent<J::Item>,
{
    are_equivalent_in::<crate::dispatch::Intrinsic, I, J>(lhs, rhs)
}

/// Like [`are_equivalent`], in the context `Cx`.
pub fn are_equivalent_in<Cx, I, J>(lhs: I, rhs: J) -> bool
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: AreEquivalent<J::Item, Cx>,
{
    let mut lhs = lhs.into_iter();
    let mut rhs = rhs.into_iter();
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return true,
            (Some(l), Some(r)) => {
                if !<I::Item as AreEquivalent<J::Item, Cx>>::are_equivalent(&l, &r) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Compares two sequences lexicographically in the default context.
///
/// # Examples
///
/// ```rust
/// use ordo_core::ordering::Ordering;
/// use ordo_core::seq;
///
/// let berths = ["A1", "A2", "B1"];
/// let other = vec![String::from("A1"), String::from("A3")];
/// assert_eq!(seq::compare(berths.iter().copied(), other.iter()), Ordering::Less);
/// ```
#[inline]
pub fn compare<I, J>(lhs: I, rhs: J) -> Ordering
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: Compare<J::Item>,
{
    compare_in::<crate::dispatch::Intrinsic, I, J>(lhs, rhs)
}

/// Like [`compare`], in the context `Cx`.
pub fn compare_in<Cx, I, J>(lhs: I, rhs: J) -> Ordering
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: Compare<J::Item, Cx>,
{
    let mut lhs = lhs.into_iter();
    let mut rhs = rhs.into_iter();
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equivalent,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match <I::Item as Compare<J::Item, Cx>>::compare(&l, &r) {
                Ordering::Equivalent => {}
                decided => return decided,
            },
        }
    }
}

/// Renders a sequence as `[a, b, c]` using each element's `Stringify`.
#[inline]
pub fn describe<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Stringify,
{
    describe_in::<crate::dispatch::Intrinsic, I>(items)
}

/// Like [`describe`], in the context `Cx`.
pub fn describe_in<Cx, I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Stringify<Cx>,
{
    let mut out = String::from("[");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&<I::Item as Stringify<Cx>>::stringify(&item));
    }
    out.push(']');
    out
}

impl<T, U, Cx> AreEqual<[U], Cx> for [T]
where
    T: AreEquivalent<U, Cx>,
{
    #[inline]
    fn are_equal(&self, other: &[U]) -> bool {
        are_equal_in::<Cx, _, _>(self.iter(), other.iter())
    }
}

impl<T, U, Cx> AreEquivalent<[U], Cx> for [T]
where
    T: AreEquivalent<U, Cx>,
{
    #[inline]
    fn are_equivalent(&self, other: &[U]) -> bool {
        are_equivalent_in::<Cx, _, _>(self.iter(), other.iter())
    }
}

impl<T, U, Cx> Compare<[U], Cx> for [T]
where
    T: Compare<U, Cx>,
{
    #[inline]
    fn compare(&self, other: &[U]) -> Ordering {
        compare_in::<Cx, _, _>(self.iter(), other.iter())
    }
}

impl<T, Cx> Stringify<Cx> for [T]
where
    T: Stringify<Cx>,
{
    #[inline]
    fn stringify(&self) -> String {
        describe_in::<Cx, _>(self.iter())
    }
}

/// Forwards the read-only dispatch points of an owning sequence to its slice.
macro_rules! sequence_via_slice {
    ([$($params:tt)*] $lhs:ty, $rhs:ty) => {
        impl<$($params)*> AreEqual<$rhs, Cx> for $lhs
        where
            T: AreEquivalent<U, Cx>,
        {
            #[inline]
            fn are_equal(&self, other: &$rhs) -> bool {
                <[T] as AreEqual<[U], Cx>>::are_equal(&self[..], &other[..])
            }
        }

        impl<$($params)*> AreEquivalent<$rhs, Cx> for $lhs
        where
            T: AreEquivalent<U, Cx>,
        {
            #[inline]
            fn are_equivalent(&self, other: &$rhs) -> bool {
                <[T] as AreEquivalent<[U], Cx>>::are_equivalent(&self[..], &other[..])
            }
        }

        impl<$($params)*> Compare<$rhs, Cx> for $lhs
        where
            T: Compare<U, Cx>,
        {
            #[inline]
            fn compare(&self, other: &$rhs) -> Ordering {
                <[T] as Compare<[U], Cx>>::compare(&self[..], &other[..])
            }
        }
    };
}

sequence_via_slice!([T, U, Cx, const N: usize, const M: usize] [T; N], [U; M]);
sequence_via_slice!([T, U, Cx] Vec<T>, Vec<U>);

impl<T, Cx, const N: usize> Stringify<Cx> for [T; N]
where
    T: Stringify<Cx>,
{
    #[inline]
    fn stringify(&self) -> String {
        describe_in::<Cx, _>(self.iter())
    }
}

impl<T, Cx> Stringify<Cx> for Vec<T>
where
    T: Stringify<Cx>,
{
    #[inline]
    fn stringify(&self) -> String {
        describe_in::<Cx, _>(self.iter())
    }
}

impl<T, Cx, const N: usize> Swap<Cx> for [T; N]
where
    T: Swap<Cx>,
{
    /// Swaps element by element, so each element's own strategy applies.
    #[inline]
    fn swap(&mut self, other: &mut Self) {
        for (l, r) in self.iter_mut().zip(other.iter_mut()) {
            <T as Swap<Cx>>::swap(l, r);
        }
    }
}

impl<T, Cx> Swap<Cx> for Vec<T> {
    #[inline]
    fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other)
    }
}

impl<T, U, Cx> AreEqual<Option<U>, Cx> for Option<T>
where
    T: AreEquivalent<U, Cx>,
{
    #[inline]
    fn are_equal(&self, other: &Option<U>) -> bool {
        <Option<T> as AreEquivalent<Option<U>, Cx>>::are_equivalent(self, other)
    }
}

impl<T, U, Cx> AreEquivalent<Option<U>, Cx> for Option<T>
where
    T: AreEquivalent<U, Cx>,
{
    #[inline]
    fn are_equivalent(&self, other: &Option<U>) -> bool {
        match (self, other) {
            (Some(l), Some(r)) => <T as AreEquivalent<U, Cx>>::are_equivalent(l, r),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T, U, Cx> Compare<Option<U>, Cx> for Option<T>
where
    T: Compare<U, Cx>,
{
    #[inline]
    fn compare(&self, other: &Option<U>) -> Ordering {
        match (self, other) {
            (Some(l), Some(r)) => <T as Compare<U, Cx>>::compare(l, r),
            (None, None) => Ordering::Equivalent,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}

impl<T, Cx> Stringify<Cx> for Option<T>
where
    T: Stringify<Cx>,
{
    fn stringify(&self) -> String {
        match self {
            Some(value) => format!("Some({})", <T as Stringify<Cx>>::stringify(value)),
            None => String::from("None"),
        }
    }
}

impl<T, Cx> Swap<Cx> for Option<T> {
    #[inline]
    fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::extension::CompareExtension;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compare_first_difference_decides() {
        assert_eq!(compare([1_i32, 2, 3], [1_i32, 2, 4]), Ordering::Less);
        assert_eq!(compare([1_i32, 3], [1_i32, 2, 4]), Ordering::Greater);
    }

    #[test]
    fn test_compare_prefix_is_less() {
        assert_eq!(compare([1_i32, 2], [1_i32, 2, 3]), Ordering::Less);
        assert_eq!(compare([1_i32, 2, 3], [1_i32, 2]), Ordering::Greater);
        assert_eq!(compare(Vec::<i32>::new(), [0_i32]), Ordering::Less);
    }

    #[test]
    fn test_compare_equal_sequences() {
        assert_eq!(compare([1_i32, 2, 3], [1_i32, 2, 3]), Ordering::Equivalent);
        assert_eq!(
            compare(Vec::<u8>::new(), Vec::<u8>::new()),
            Ordering::Equivalent
        );
    }

    #[test]
    fn test_compare_mixed_element_types() {
        assert_eq!(compare([1_i32, 2, 3], [1.0_f64, 2.0, 3.0]), Ordering::Equivalent);
        assert_eq!(compare([1_i32, 2, 3], [1.0_f64, 2.5]), Ordering::Less);
        assert_eq!(compare([1_u64, 3], [1.0_f32, 2.5]), Ordering::Greater);
    }

    #[test]
    fn test_compare_stops_at_incomparable() {
        assert_eq!(
            compare([1.0_f64, f64::NAN, 0.0], [1.0_f64, 2.0, 9.0]),
            Ordering::Incomparable
        );
        assert_eq!(
            compare([0.0_f64, f64::NAN], [1.0_f64, 2.0]),
            Ordering::Less
        );
    }

    #[test]
    fn test_equality_requires_equal_length() {
        assert!(are_equal([1_u8, 2], [1_u8, 2]));
        assert!(!are_equal([1_u8, 2], [1_u8, 2, 3]));
        assert!(!are_equal([1_u8, 2, 3], [1_u8, 2]));
        assert!(are_equal([1_u8, 2], [1.0_f64, 2.0]));
        assert!(!are_equal([f64::NAN], [f64::NAN]));
    }

    /// Equal only when spelled identically, equivalent regardless of case.
    #[derive(Debug, PartialEq)]
    struct Berth(&'static str);

    impl crate::dispatch::member::IsEquivalent for Berth {
        fn is_equivalent(&self, other: &Self) -> bool {
            self.0.eq_ignore_ascii_case(other.0)
        }
    }

    crate::resolve! {
        AreEqual(Berth);
        AreEquivalent(Berth);
    }

    #[test]
    fn test_sequence_equality_uses_element_equivalence() {
        use crate::ops;

        let a = [Berth("Quay"), Berth("pier")];
        let b = [Berth("QUAY"), Berth("Pier")];
        assert!(!ops::are_equal(&a[0], &b[0]));
        assert!(are_equal(&a, &b));
        assert!(ops::are_equal(&a, &b));
        assert!(ops::are_equal(&a[..], &b[..]));
        assert!(ops::are_equal(
            &vec![Berth("Quay")],
            &vec![Berth("quay")]
        ));
        assert!(ops::are_equal(&Some(Berth("Quay")), &Some(Berth("QUAY"))));
        assert!(!are_equal(&a, &[Berth("Quay"), Berth("dock")]));
        assert!(!are_equal(&a[..1], &b));
    }

    #[test]
    fn test_equivalence_over_signed_zero() {
        assert!(are_equivalent([0.0_f64, 1.0], [-0.0_f64, 1.0]));
        assert!(!are_equivalent([0.0_f64], [0.0_f64, 0.0]));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe([1_i32, 2, 3]), "[1, 2, 3]");
        assert_eq!(describe(Vec::<i32>::new()), "[]");
        assert_eq!(describe(["a", "b"]), "[\"a\", \"b\"]");
    }

    #[test]
    fn test_container_dispatch() {
        use crate::ops;

        let a = vec![1_i32, 2, 3];
        let b = vec![1_i64, 2, 4];
        assert_eq!(ops::compare(&a, &b), Ordering::Less);
        assert!(ops::are_equal(&[1_u8, 2], &[1_u16, 2]));
        assert!(ops::are_equal(&a[..], &[1.0_f64, 2.0, 3.0][..]));
        assert_eq!(ops::stringify(&a), "[1, 2, 3]");
        assert_eq!(ops::stringify(&[Some(1_u8), None]), "[Some(1), None]");
    }

    #[test]
    fn test_option_dispatch() {
        use crate::ops;

        assert_eq!(ops::compare(&None::<i32>, &Some(0_i32)), Ordering::Less);
        assert_eq!(ops::compare(&Some(2_i32), &Some(1.5_f64)), Ordering::Greater);
        assert_eq!(ops::compare(&None::<u8>, &None::<u8>), Ordering::Equivalent);
        assert!(ops::are_equal(&Some(1_u8), &Some(1_i64)));
        assert!(!ops::are_equal(&Some(1_u8), &None::<u8>));
    }

    #[test]
    fn test_swap_containers() {
        use crate::ops;

        let mut a = [1_u8, 2, 3];
        let mut b = [4_u8, 5, 6];
        ops::swap(&mut a, &mut b);
        assert_eq!((a, b), ([4, 5, 6], [1, 2, 3]));

        let mut v = vec![String::from("x")];
        let mut w = Vec::new();
        ops::swap(&mut v, &mut w);
        assert!(v.is_empty());
        assert_eq!(w, vec![String::from("x")]);

        let mut o = Some('k');
        let mut p = None;
        ops::swap(&mut o, &mut p);
        assert_eq!((o, p), (None, Some('k')));
    }

    /// Orders integers by absolute value.
    struct Magnitude;

    impl CompareExtension<i32> for Magnitude {
        fn compare(lhs: &i32, rhs: &i32) -> Ordering {
            lhs.unsigned_abs().cmp(&rhs.unsigned_abs()).into()
        }
    }

    crate::resolve! { Compare(i32) in Magnitude }

    #[test]
    fn test_context_reaches_elements() {
        assert_eq!(compare([-5_i32], [3_i32]), Ordering::Less);
        assert_eq!(compare_in::<Magnitude, _, _>([-5_i32], [3_i32]), Ordering::Greater);
        assert_eq!(
            crate::ops::compare_in::<Magnitude, _, _>(&vec![-5_i32], &vec![3_i32]),
            Ordering::Greater
        );
    }
}
