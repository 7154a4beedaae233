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

//! # In-Place Exchange
//!
//! `Swap` exchanges two values in place. Strategies, highest rank first: a
//! [`SwapExtension`](crate::dispatch::extension::SwapExtension) on the
//! context, [`SwapWith`](crate::dispatch::member::SwapWith) on the type, and
//! the three-move fallback (`core::mem::swap`), which is available for every
//! sized type and never allocates.
//!
//! ```rust
//! use ordo_core::ops::swap;
//!
//! let mut a = String::from("north");
//! let mut b = String::from("south");
//! swap(&mut a, &mut b);
//! assert_eq!((a.as_str(), b.as_str()), ("south", "north"));
//! ```

use crate::dispatch::Intrinsic;

/// In-place exchange of two `Self` values under the context `Cx`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `Swap` binding in context `{Cx}`",
    label = "swap is not bound for this type",
    note = "bind the type with the `resolve!` macro, or implement `Swap` by hand"
)]
pub trait Swap<Cx = Intrinsic> {
    /// Exchanges the values of `self` and `other`.
    fn swap(&mut self, other: &mut Self);
}

/// Exchanges `lhs` and `rhs` in the default context.
#[inline]
pub fn swap<T>(lhs: &mut T, rhs: &mut T)
where
    T: ?Sized + Swap,
{
    <T as Swap>::swap(lhs, rhs)
}

/// Exchanges `lhs` and `rhs` in the context `Cx`.
#[inline]
pub fn swap_in<Cx, T>(lhs: &mut T, rhs: &mut T)
where
    T: ?Sized + Swap<Cx>,
{
    <T as Swap<Cx>>::swap(lhs, rhs)
}

#[doc(hidden)]
pub mod candidates {
    use crate::dispatch::extension::SwapExtension;
    use crate::dispatch::member::SwapWith;
    use crate::dispatch::Probe;
    use crate::priority::{Extension, Fallback, IllFormed, MemberFunction};

    mod sealed {
        pub trait Sealed {}
    }

    /// Never implemented. Selected when no strategy applies.
    #[diagnostic::on_unimplemented(
        message = "no strategy implements `Swap` for `{Self}` in context `{Cx}`",
        label = "swap is unresolvable for this type",
        note = "unsized types need `SwapWith` or a `SwapExtension` on the context"
    )]
    pub trait SwapUnresolved<Cx>: sealed::Sealed {
        fn unresolved(lhs: &mut Self, rhs: &mut Self);
    }

    pub trait SwapViaExtension {
        type Value: ?Sized;
        fn swap_candidate(&self, lhs: &mut Self::Value, rhs: &mut Self::Value);
        fn swap_strategy(&self) -> Extension {
            Extension
        }
    }

    impl<T, Cx> SwapViaExtension for &&&&&Probe<T, T, Cx>
    where
        T: ?Sized,
        Cx: SwapExtension<T>,
    {
        type Value = T;

        #[inline(always)]
        fn swap_candidate(&self, lhs: &mut T, rhs: &mut T) {
            <Cx as SwapExtension<T>>::swap(lhs, rhs)
        }
    }

    pub trait SwapViaMember {
        type Value: ?Sized;
        fn swap_candidate(&self, lhs: &mut Self::Value, rhs: &mut Self::Value);
        fn swap_strategy(&self) -> MemberFunction {
            MemberFunction
        }
    }

    impl<T, Cx> SwapViaMember for &&&&Probe<T, T, Cx>
    where
        T: ?Sized + SwapWith,
    {
        type Value = T;

        #[inline(always)]
        fn swap_candidate(&self, lhs: &mut T, rhs: &mut T) {
            lhs.swap_with(rhs)
        }
    }

    pub trait SwapViaFallback {
        type Value: ?Sized;
        fn swap_candidate(&self, lhs: &mut Self::Value, rhs: &mut Self::Value);
        fn swap_strategy(&self) -> Fallback {
            Fallback
        }
    }

    impl<T, Cx> SwapViaFallback for &Probe<T, T, Cx> {
        type Value = T;

        #[inline(always)]
        fn swap_candidate(&self, lhs: &mut T, rhs: &mut T) {
            core::mem::swap(lhs, rhs)
        }
    }

    pub trait SwapIllFormed {
        type Value: ?Sized;
        type Context;
        fn swap_candidate(&self, lhs: &mut Self::Value, rhs: &mut Self::Value)
        where
            Self::Value: SwapUnresolved<Self::Context>;
        fn swap_strategy(&self) -> IllFormed {
            IllFormed
        }
    }

    impl<T, Cx> SwapIllFormed for Probe<T, T, Cx>
    where
        T: ?Sized,
    {
        type Value = T;
        type Context = Cx;

        #[inline(always)]
        fn swap_candidate(&self, lhs: &mut T, rhs: &mut T)
        where
            T: SwapUnresolved<Cx>,
        {
            <T as SwapUnresolved<Cx>>::unresolved(lhs, rhs)
        }
    }
}
