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

//! Every strategy of a dispatch point gives a different answer for these
//! types, so each test observes which one was bound.

use ordo_core::dispatch::extension::{
    CompareExtension, EqualExtension, StringifyExtension, SwapExtension,
};
use ordo_core::dispatch::member::{CompareTo, Describe, IsEqual, SwapWith};
use ordo_core::ops::{
    are_equal, are_equal_in, are_equivalent, are_equivalent_in, compare, compare_in, stringify,
    stringify_in, swap, swap_in,
};
use ordo_core::ordering::Ordering;
use ordo_core::priority::{
    rank_of, Extension, Fallback, IllFormed, MemberFunction, MemberOperator, NonMemberFunction,
    Priority,
};
use pretty_assertions::assert_eq;
use std::cmp;

/// `PartialOrd` orders naturally, `CompareTo` in reverse, `IsEqual` says
/// everything is equal.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
struct Layered(i32);

impl CompareTo for Layered {
    fn compare_to(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0).into()
    }
}

impl IsEqual for Layered {
    fn is_equal(&self, _: &Self) -> bool {
        true
    }
}

impl Describe for Layered {
    fn describe(&self) -> String {
        format!("layer {}", self.0)
    }
}

impl SwapWith for Layered {
    fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.0, &mut other.0);
        self.0 = -self.0;
        other.0 = -other.0;
    }
}

/// A context with an extension for every dispatch point.
struct Registered;

impl CompareExtension<Layered> for Registered {
    fn compare(_: &Layered, _: &Layered) -> Ordering {
        Ordering::Incomparable
    }
}

impl EqualExtension<Layered> for Registered {
    fn are_equal(_: &Layered, _: &Layered) -> bool {
        false
    }
}

impl StringifyExtension<Layered> for Registered {
    fn stringify(_: &Layered) -> String {
        String::from("registered")
    }
}

impl SwapExtension<Layered> for Registered {
    fn swap(_: &mut Layered, _: &mut Layered) {}
}

ordo_core::resolve! {
    AreEqual(Layered);
    AreEquivalent(Layered);
    Compare(Layered);
    Stringify(Layered);
    Swap(Layered);

    AreEqual(Layered) in Registered;
    AreEquivalent(Layered) in Registered;
    Compare(Layered) in Registered;
    Stringify(Layered) in Registered;
    Swap(Layered) in Registered;
}

#[test]
fn test_extension_outranks_everything() {
    let (a, b) = (Layered(1), Layered(2));
    assert_eq!(compare_in::<Registered, _, _>(&a, &b), Ordering::Incomparable);
    assert!(!are_equal_in::<Registered, _, _>(&a, &a));
    assert_eq!(stringify_in::<Registered, _>(&a), "registered");

    let (mut x, mut y) = (a.clone(), b.clone());
    swap_in::<Registered, _>(&mut x, &mut y);
    assert_eq!((x, y), (a, b));

    assert_eq!(
        rank_of(ordo_core::strategy!(Compare(Layered) in Registered)),
        Extension::RANK
    );
}

#[test]
fn test_member_outranks_operator() {
    assert_eq!(compare(&Layered(1), &Layered(2)), Ordering::Greater);
    assert!(are_equal(&Layered(1), &Layered(2)));
    assert_eq!(stringify(&Layered(4)), "layer 4");

    let (mut x, mut y) = (Layered(1), Layered(2));
    swap(&mut x, &mut y);
    assert_eq!((x, y), (Layered(-2), Layered(-1)));

    assert_eq!(
        rank_of(ordo_core::strategy!(Compare(Layered))),
        MemberFunction::RANK
    );
    assert_eq!(
        rank_of(ordo_core::strategy!(Stringify(Layered))),
        MemberFunction::RANK
    );
}

#[test]
fn test_equivalence_falls_back_within_its_context() {
    assert!(are_equivalent(&Layered(1), &Layered(2)));
    assert!(!are_equivalent_in::<Registered, _, _>(&Layered(1), &Layered(1)));
    assert_eq!(
        rank_of(ordo_core::strategy!(AreEquivalent(Layered) in Registered)),
        Fallback::RANK
    );
}

/// Only std operators.
#[derive(Debug, PartialEq, PartialOrd)]
struct Scalar(f32);

ordo_core::resolve! {
    Compare(Scalar);
    AreEqual(Scalar);
    Stringify(Scalar);
}

#[test]
fn test_operator_strategy() {
    assert_eq!(compare(&Scalar(1.0), &Scalar(2.0)), Ordering::Less);
    assert_eq!(compare(&Scalar(f32::NAN), &Scalar(2.0)), Ordering::Incomparable);
    assert!(are_equal(&Scalar(0.0), &Scalar(-0.0)));
    assert_eq!(stringify(&Scalar(0.5)), "Scalar(0.5)");

    assert_eq!(
        rank_of(ordo_core::strategy!(Compare(Scalar))),
        MemberOperator::RANK
    );
    assert_eq!(rank_of(ordo_core::strategy!(AreEqual(Scalar))), Fallback::RANK);
    assert_eq!(
        rank_of(ordo_core::strategy!(Stringify(Scalar))),
        NonMemberFunction::RANK
    );
}

struct Left(i32);

/// Knows how to compare itself against `Left`, two ways that disagree.
struct Right(i32);

impl CompareTo<Left> for Right {
    fn compare_to(&self, other: &Left) -> Ordering {
        self.0.cmp(&other.0).into()
    }
}

impl PartialEq<Left> for Right {
    fn eq(&self, _: &Left) -> bool {
        false
    }
}

impl PartialOrd<Left> for Right {
    fn partial_cmp(&self, _: &Left) -> Option<cmp::Ordering> {
        None
    }
}

ordo_core::resolve! {
    Compare(Left, Right);
    Compare(Right, Left);
}

#[test]
fn test_reflected_member_outranks_reflected_operator() {
    assert_eq!(compare(&Left(1), &Right(2)), Ordering::Less);
    assert_eq!(compare(&Left(3), &Right(2)), Ordering::Greater);
    assert_eq!(
        rank_of(ordo_core::strategy!(Compare(Left, Right))),
        NonMemberFunction::RANK
    );
}

#[test]
fn test_forward_member_applies_to_its_own_side() {
    assert_eq!(compare(&Right(2), &Left(1)), Ordering::Greater);
    assert_eq!(
        rank_of(ordo_core::strategy!(Compare(Right, Left))),
        MemberFunction::RANK
    );
}

struct Mute;

#[test]
fn test_unresolvable_pairs_select_the_floor() {
    assert_eq!(rank_of(ordo_core::strategy!(Compare(Mute))), IllFormed::RANK);
    assert_eq!(rank_of(ordo_core::strategy!(AreEqual(Mute, Left))), IllFormed::RANK);
    assert_eq!(rank_of(ordo_core::strategy!(Stringify(Mute))), IllFormed::RANK);
    assert_eq!(rank_of(ordo_core::strategy!(Swap(Mute))), Fallback::RANK);
}

#[test]
fn test_resolution_is_fixed_per_pair() {
    let first = compare(&Layered(5), &Layered(7));
    for _ in 0..8 {
        assert_eq!(compare(&Layered(5), &Layered(7)), first);
    }
}
