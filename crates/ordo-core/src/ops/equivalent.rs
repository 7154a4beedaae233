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

//! # Equivalence
//!
//! `AreEquivalent` answers whether two values are interchangeable for
//! ordering purposes. It is distinct from equality: `0.0` and `-0.0` are
//! equivalent under the floating-point comparison, and a case-insensitive
//! key may be equivalent to another spelling while not equal to it.
//!
//! Strategies, highest rank first: an
//! [`EquivalentExtension`](crate::dispatch::extension::EquivalentExtension)
//! on the context, the left operand's
//! [`IsEquivalent`](crate::dispatch::member::IsEquivalent), the right
//! operand's `IsEquivalent`, and finally [`AreEqual`](super::AreEqual) in the
//! same context.

use crate::dispatch::Intrinsic;

/// Equivalence between `Self` and `Rhs` under the context `Cx`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `AreEquivalent` binding against `{Rhs}` in context `{Cx}`",
    label = "equivalence is not bound for this pair",
    note = "bind the pair with the `resolve!` macro, or implement `AreEquivalent` by hand"
)]
pub trait AreEquivalent<Rhs: ?Sized = Self, Cx = Intrinsic> {
    /// Returns `true` if `self` is equivalent to `other`.
    fn are_equivalent(&self, other: &Rhs) -> bool;
}

/// Returns `true` if `lhs` is equivalent to `rhs` in the default context.
#[inline]
pub fn are_equivalent<T, U>(lhs: &T, rhs: &U) -> bool
where
    T: ?Sized + AreEquivalent<U>,
    U: ?Sized,
{
    <T as AreEquivalent<U>>::are_equivalent(lhs, rhs)
}

/// Returns `true` if `lhs` is equivalent to `rhs` in the context `Cx`.
#[inline]
pub fn are_equivalent_in<Cx, T, U>(lhs: &T, rhs: &U) -> bool
where
    T: ?Sized + AreEquivalent<U, Cx>,
    U: ?Sized,
{
    <T as AreEquivalent<U, Cx>>::are_equivalent(lhs, rhs)
}

impl<'a, 'b, T, U, Cx> AreEquivalent<&'b U, Cx> for &'a T
where
    T: ?Sized + AreEquivalent<U, Cx>,
    U: ?Sized,
{
    #[inline(always)]
    fn are_equivalent(&self, other: &&'b U) -> bool {
        <T as AreEquivalent<U, Cx>>::are_equivalent(*self, *other)
    }
}

#[doc(hidden)]
pub mod candidates {
    use crate::dispatch::extension::EquivalentExtension;
    use crate::dispatch::member::IsEquivalent;
    use crate::dispatch::Probe;
    use crate::ops::AreEqual;
    use crate::priority::{Extension, Fallback, IllFormed, MemberFunction, NonMemberFunction};

    mod sealed {
        pub trait Sealed {}
    }

    /// Never implemented. Selected when no strategy applies.
    #[diagnostic::on_unimplemented(
        message = "no strategy implements `AreEquivalent` for `{Self}` against `{Rhs}` in context `{Cx}`",
        label = "equivalence is unresolvable for this pair",
        note = "bind `AreEqual` for the pair, implement `IsEquivalent`, or register an `EquivalentExtension` on the context"
    )]
    pub trait EquivalentUnresolved<Rhs: ?Sized, Cx>: sealed::Sealed {
        fn unresolved(lhs: &Self, rhs: &Rhs) -> bool;
    }

    pub trait EquivalentViaExtension {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn are_equivalent_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> bool;
        fn equivalent_strategy(&self) -> Extension {
            Extension
        }
    }

    impl<T, U, Cx> EquivalentViaExtension for &&&&&Probe<T, U, Cx>
    where
        T: ?Sized,
        U: ?Sized,
        Cx: EquivalentExtension<T, U>,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn are_equivalent_candidate(&self, lhs: &T, rhs: &U) -> bool {
            <Cx as EquivalentExtension<T, U>>::are_equivalent(lhs, rhs)
        }
    }

    pub trait EquivalentViaMember {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn are_equivalent_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> bool;
        fn equivalent_strategy(&self) -> MemberFunction {
            MemberFunction
        }
    }

    impl<T, U, Cx> EquivalentViaMember for &&&&Probe<T, U, Cx>
    where
        T: ?Sized + IsEquivalent<U>,
        U: ?Sized,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn are_equivalent_candidate(&self, lhs: &T, rhs: &U) -> bool {
            lhs.is_equivalent(rhs)
        }
    }

    pub trait EquivalentViaNonMember {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn are_equivalent_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> bool;
        fn equivalent_strategy(&self) -> NonMemberFunction {
            NonMemberFunction
        }
    }

    impl<T, U, Cx> EquivalentViaNonMember for &&Probe<T, U, Cx>
    where
        T: ?Sized,
        U: ?Sized + IsEquivalent<T>,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn are_equivalent_candidate(&self, lhs: &T, rhs: &U) -> bool {
            rhs.is_equivalent(lhs)
        }
    }

    pub trait EquivalentViaFallback {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn are_equivalent_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> bool;
        fn equivalent_strategy(&self) -> Fallback {
            Fallback
        }
    }

    impl<T, U, Cx> EquivalentViaFallback for &Probe<T, U, Cx>
    where
        T: ?Sized + AreEqual<U, Cx>,
        U: ?Sized,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn are_equivalent_candidate(&self, lhs: &T, rhs: &U) -> bool {
            <T as AreEqual<U, Cx>>::are_equal(lhs, rhs)
        }
    }

    pub trait EquivalentIllFormed {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        type Context;
        fn are_equivalent_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> bool
        where
            Self::Lhs: EquivalentUnresolved<Self::Rhs, Self::Context>;
        fn equivalent_strategy(&self) -> IllFormed {
            IllFormed
        }
    }

    impl<T, U, Cx> EquivalentIllFormed for Probe<T, U, Cx>
    where
        T: ?Sized,
        U: ?Sized,
    {
        type Lhs = T;
        type Rhs = U;
        type Context = Cx;

        #[inline(always)]
        fn are_equivalent_candidate(&self, lhs: &T, rhs: &U) -> bool
        where
            T: EquivalentUnresolved<U, Cx>,
        {
            <T as EquivalentUnresolved<U, Cx>>::unresolved(lhs, rhs)
        }
    }
}
