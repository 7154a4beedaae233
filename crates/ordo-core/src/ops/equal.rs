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

//! # Equality
//!
//! `AreEqual` answers whether two values are equal. The strategies, highest
//! rank first:
//!
//! 1. an [`EqualExtension`](crate::dispatch::extension::EqualExtension)
//!    registered on the context,
//! 2. the left operand's [`IsEqual`](crate::dispatch::member::IsEqual),
//! 3. the right operand's `IsEqual`, with the operands exchanged,
//! 4. `PartialEq`.

use crate::dispatch::Intrinsic;

/// Equality between `Self` and `Rhs` under the context `Cx`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `AreEqual` binding against `{Rhs}` in context `{Cx}`",
    label = "equality is not bound for this pair",
    note = "bind the pair with the `resolve!` macro, or implement `AreEqual` by hand"
)]
pub trait AreEqual<Rhs: ?Sized = Self, Cx = Intrinsic> {
    /// Returns `true` if `self` equals `other`.
    fn are_equal(&self, other: &Rhs) -> bool;
}

/// Returns `true` if `lhs` equals `rhs` in the default context.
#[inline]
pub fn are_equal<T, U>(lhs: &T, rhs: &U) -> bool
where
    T: ?Sized + AreEqual<U>,
    U: ?Sized,
{
    <T as AreEqual<U>>::are_equal(lhs, rhs)
}

/// Returns `true` if `lhs` equals `rhs` in the context `Cx`.
///
/// ```rust
/// use ordo_core::dispatch::extension::EqualExtension;
/// use ordo_core::ops::{are_equal, are_equal_in};
///
/// struct CaseInsensitive;
///
/// impl EqualExtension<str> for CaseInsensitive {
///     fn are_equal(lhs: &str, rhs: &str) -> bool {
///         lhs.eq_ignore_ascii_case(rhs)
///     }
/// }
///
/// ordo_core::resolve! { AreEqual(str) in CaseInsensitive }
///
/// assert!(are_equal_in::<CaseInsensitive, _, _>("Bollard", "BOLLARD"));
/// assert!(!are_equal("Bollard", "BOLLARD"));
/// ```
#[inline]
pub fn are_equal_in<Cx, T, U>(lhs: &T, rhs: &U) -> bool
where
    T: ?Sized + AreEqual<U, Cx>,
    U: ?Sized,
{
    <T as AreEqual<U, Cx>>::are_equal(lhs, rhs)
}

impl<'a, 'b, T, U, Cx> AreEqual<&'b U, Cx> for &'a T
where
    T: ?Sized + AreEqual<U, Cx>,
    U: ?Sized,
{
    #[inline(always)]
    fn are_equal(&self, other: &&'b U) -> bool {
        <T as AreEqual<U, Cx>>::are_equal(*self, *other)
    }
}

#[doc(hidden)]
pub mod candidates {
    use crate::dispatch::extension::EqualExtension;
    use crate::dispatch::member::IsEqual;
    use crate::dispatch::Probe;
    use crate::priority::{Extension, Fallback, IllFormed, MemberFunction, NonMemberFunction};

    mod sealed {
        pub trait Sealed {}
    }

    /// Never implemented. Selected when no strategy applies.
    #[diagnostic::on_unimplemented(
        message = "no strategy implements `AreEqual` for `{Self}` against `{Rhs}` in context `{Cx}`",
        label = "equality is unresolvable for this pair",
        note = "implement `PartialEq`, `IsEqual`, or register an `EqualExtension` on the context"
    )]
    pub trait EqualUnresolved<Rhs: ?Sized, Cx>: sealed::Sealed {
        fn unresolved(lhs: &Self, rhs: &Rhs) -> bool;
    }

    pub trait EqualViaExtension {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn are_equal_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> bool;
        fn equal_strategy(&self) -> Extension {
            Extension
        }
    }

    impl<T, U, Cx> EqualViaExtension for &&&&&Probe<T, U, Cx>
    where
        T: ?Sized,
        U: ?Sized,
        Cx: EqualExtension<T, U>,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn are_equal_candidate(&self, lhs: &T, rhs: &U) -> bool {
            <Cx as EqualExtension<T, U>>::are_equal(lhs, rhs)
        }
    }

    pub trait EqualViaMember {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn are_equal_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> bool;
        fn equal_strategy(&self) -> MemberFunction {
            MemberFunction
        }
    }

    impl<T, U, Cx> EqualViaMember for &&&&Probe<T, U, Cx>
    where
        T: ?Sized + IsEqual<U>,
        U: ?Sized,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn are_equal_candidate(&self, lhs: &T, rhs: &U) -> bool {
            lhs.is_equal(rhs)
        }
    }

    pub trait EqualViaNonMember {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn are_equal_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> bool;
        fn equal_strategy(&self) -> NonMemberFunction {
            NonMemberFunction
        }
    }

    impl<T, U, Cx> EqualViaNonMember for &&Probe<T, U, Cx>
    where
        T: ?Sized,
        U: ?Sized + IsEqual<T>,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn are_equal_candidate(&self, lhs: &T, rhs: &U) -> bool {
            rhs.is_equal(lhs)
        }
    }

    pub trait EqualViaFallback {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn are_equal_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> bool;
        fn equal_strategy(&self) -> Fallback {
            Fallback
        }
    }

    impl<T, U, Cx> EqualViaFallback for &Probe<T, U, Cx>
    where
        T: ?Sized + PartialEq<U>,
        U: ?Sized,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn are_equal_candidate(&self, lhs: &T, rhs: &U) -> bool {
            lhs == rhs
        }
    }

    pub trait EqualIllFormed {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        type Context;
        fn are_equal_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> bool
        where
            Self::Lhs: EqualUnresolved<Self::Rhs, Self::Context>;
        fn equal_strategy(&self) -> IllFormed {
            IllFormed
        }
    }

    impl<T, U, Cx> EqualIllFormed for Probe<T, U, Cx>
    where
        T: ?Sized,
        U: ?Sized,
    {
        type Lhs = T;
        type Rhs = U;
        type Context = Cx;

        #[inline(always)]
        fn are_equal_candidate(&self, lhs: &T, rhs: &U) -> bool
        where
            T: EqualUnresolved<U, Cx>,
        {
            <T as EqualUnresolved<U, Cx>>::unresolved(lhs, rhs)
        }
    }
}
