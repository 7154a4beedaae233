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

//! # Three-Way Comparison
//!
//! `Compare` produces a four-state [`Ordering`]. Strategies, highest rank
//! first:
//!
//! | Rank | Strategy            | Source                                          |
//! |------|---------------------|-------------------------------------------------|
//! | 4    | `Extension`         | `Cx: CompareExtension<T, U>`                    |
//! | 3    | `MemberFunction`    | `T: CompareTo<U>`                               |
//! | 2    | `MemberOperator`    | `T: PartialOrd<U>`, `None` maps to `Incomparable` |
//! | 1    | `NonMemberFunction` | `U: CompareTo<T>`, result flipped               |
//! | 0    | `Fallback`          | `U: PartialOrd<T>`, result flipped              |
//!
//! The reflected strategies let a type that only knows how to compare itself
//! against another be used on either side.

use crate::dispatch::Intrinsic;
use crate::ordering::Ordering;

/// Three-way comparison of `Self` against `Rhs` under the context `Cx`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `Compare` binding against `{Rhs}` in context `{Cx}`",
    label = "comparison is not bound for this pair",
    note = "bind the pair with the `resolve!` macro, or implement `Compare` by hand"
)]
pub trait Compare<Rhs: ?Sized = Self, Cx = Intrinsic> {
    /// Compares `self` with `other`.
    fn compare(&self, other: &Rhs) -> Ordering;
}

/// Compares `lhs` with `rhs` in the default context.
///
/// ```rust
/// use ordo_core::ops::compare;
/// use ordo_core::ordering::Ordering;
///
/// assert_eq!(compare(&1_u8, &-1_i64), Ordering::Greater);
/// assert_eq!(compare(&0.0_f64, &-0.0_f64), Ordering::Equivalent);
/// assert_eq!(compare(&3_i32, &f32::NAN), Ordering::Incomparable);
/// ```
#[inline]
pub fn compare<T, U>(lhs: &T, rhs: &U) -> Ordering
where
    T: ?Sized + Compare<U>,
    U: ?Sized,
{
    <T as Compare<U>>::compare(lhs, rhs)
}

/// Compares `lhs` with `rhs` in the context `Cx`.
#[inline]
pub fn compare_in<Cx, T, U>(lhs: &T, rhs: &U) -> Ordering
where
    T: ?Sized + Compare<U, Cx>,
    U: ?Sized,
{
    <T as Compare<U, Cx>>::compare(lhs, rhs)
}

impl<'a, 'b, T, U, Cx> Compare<&'b U, Cx> for &'a T
where
    T: ?Sized + Compare<U, Cx>,
    U: ?Sized,
{
    #[inline(always)]
    fn compare(&self, other: &&'b U) -> Ordering {
        <T as Compare<U, Cx>>::compare(*self, *other)
    }
}

#[doc(hidden)]
pub mod candidates {
    use crate::dispatch::extension::CompareExtension;
    use crate::dispatch::member::CompareTo;
    use crate::dispatch::Probe;
    use crate::ordering::Ordering;
    use crate::priority::{
        Extension, Fallback, IllFormed, MemberFunction, MemberOperator, NonMemberFunction,
    };

    mod sealed {
        pub trait Sealed {}
    }

    /// Never implemented. Selected when no strategy applies.
    #[diagnostic::on_unimplemented(
        message = "no strategy implements `Compare` for `{Self}` against `{Rhs}` in context `{Cx}`",
        label = "comparison is unresolvable for this pair",
        note = "implement `PartialOrd`, `CompareTo`, or register a `CompareExtension` on the context"
    )]
    pub trait CompareUnresolved<Rhs: ?Sized, Cx>: sealed::Sealed {
        fn unresolved(lhs: &Self, rhs: &Rhs) -> Ordering;
    }

    pub trait CompareViaExtension {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn compare_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> Ordering;
        fn compare_strategy(&self) -> Extension {
            Extension
        }
    }

    impl<T, U, Cx> CompareViaExtension for &&&&&Probe<T, U, Cx>
    where
        T: ?Sized,
        U: ?Sized,
        Cx: CompareExtension<T, U>,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn compare_candidate(&self, lhs: &T, rhs: &U) -> Ordering {
            <Cx as CompareExtension<T, U>>::compare(lhs, rhs)
        }
    }

    pub trait CompareViaMember {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn compare_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> Ordering;
        fn compare_strategy(&self) -> MemberFunction {
            MemberFunction
        }
    }

    impl<T, U, Cx> CompareViaMember for &&&&Probe<T, U, Cx>
    where
        T: ?Sized + CompareTo<U>,
        U: ?Sized,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn compare_candidate(&self, lhs: &T, rhs: &U) -> Ordering {
            lhs.compare_to(rhs)
        }
    }

    pub trait CompareViaOperator {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn compare_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> Ordering;
        fn compare_strategy(&self) -> MemberOperator {
            MemberOperator
        }
    }

    impl<T, U, Cx> CompareViaOperator for &&&Probe<T, U, Cx>
    where
        T: ?Sized + PartialOrd<U>,
        U: ?Sized,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn compare_candidate(&self, lhs: &T, rhs: &U) -> Ordering {
            Ordering::from(lhs.partial_cmp(rhs))
        }
    }

    pub trait CompareViaNonMember {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn compare_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> Ordering;
        fn compare_strategy(&self) -> NonMemberFunction {
            NonMemberFunction
        }
    }

    impl<T, U, Cx> CompareViaNonMember for &&Probe<T, U, Cx>
    where
        T: ?Sized,
        U: ?Sized + CompareTo<T>,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn compare_candidate(&self, lhs: &T, rhs: &U) -> Ordering {
            rhs.compare_to(lhs).flip()
        }
    }

    pub trait CompareViaFallback {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        fn compare_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> Ordering;
        fn compare_strategy(&self) -> Fallback {
            Fallback
        }
    }

    impl<T, U, Cx> CompareViaFallback for &Probe<T, U, Cx>
    where
        T: ?Sized,
        U: ?Sized + PartialOrd<T>,
    {
        type Lhs = T;
        type Rhs = U;

        #[inline(always)]
        fn compare_candidate(&self, lhs: &T, rhs: &U) -> Ordering {
            Ordering::from(rhs.partial_cmp(lhs)).flip()
        }
    }

    pub trait CompareIllFormed {
        type Lhs: ?Sized;
        type Rhs: ?Sized;
        type Context;
        fn compare_candidate(&self, lhs: &Self::Lhs, rhs: &Self::Rhs) -> Ordering
        where
            Self::Lhs: CompareUnresolved<Self::Rhs, Self::Context>;
        fn compare_strategy(&self) -> IllFormed {
            IllFormed
        }
    }

    impl<T, U, Cx> CompareIllFormed for Probe<T, U, Cx>
    where
        T: ?Sized,
        U: ?Sized,
    {
        type Lhs = T;
        type Rhs = U;
        type Context = Cx;

        #[inline(always)]
        fn compare_candidate(&self, lhs: &T, rhs: &U) -> Ordering
        where
            T: CompareUnresolved<U, Cx>,
        {
            <T as CompareUnresolved<U, Cx>>::unresolved(lhs, rhs)
        }
    }
}
