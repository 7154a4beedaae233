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

//! # Diagnostic Stringification
//!
//! `Stringify` renders a value for comparison-failure reports. There is no
//! operator form and no fallback: a type must opt in through an extension,
//! [`Describe`](crate::dispatch::member::Describe), or `Debug`.

use crate::dispatch::Intrinsic;

/// Diagnostic rendering of `Self` under the context `Cx`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `Stringify` binding in context `{Cx}`",
    label = "stringification is not bound for this type",
    note = "bind the type with the `resolve!` macro, or implement `Stringify` by hand"
)]
pub trait Stringify<Cx = Intrinsic> {
    /// Renders `self` for diagnostics.
    fn stringify(&self) -> String;
}

/// Renders `value` in the default context.
#[inline]
pub fn stringify<T>(value: &T) -> String
where
    T: ?Sized + Stringify,
{
    <T as Stringify>::stringify(value)
}

/// Renders `value` in the context `Cx`.
#[inline]
pub fn stringify_in<Cx, T>(value: &T) -> String
where
    T: ?Sized + Stringify<Cx>,
{
    <T as Stringify<Cx>>::stringify(value)
}

impl<'a, T, Cx> Stringify<Cx> for &'a T
where
    T: ?Sized + Stringify<Cx>,
{
    #[inline(always)]
    fn stringify(&self) -> String {
        <T as Stringify<Cx>>::stringify(*self)
    }
}

#[doc(hidden)]
pub mod candidates {
    use crate::dispatch::extension::StringifyExtension;
    use crate::dispatch::member::Describe;
    use crate::dispatch::Probe;
    use crate::priority::{Extension, IllFormed, MemberFunction, NonMemberFunction};
    use std::fmt::Debug;

    mod sealed {
        pub trait Sealed {}
    }

    /// Never implemented. Selected when no strategy applies.
    #[diagnostic::on_unimplemented(
        message = "no strategy implements `Stringify` for `{Self}` in context `{Cx}`",
        label = "stringification is unresolvable for this type",
        note = "implement `Debug`, `Describe`, or register a `StringifyExtension` on the context"
    )]
    pub trait StringifyUnresolved<Cx>: sealed::Sealed {
        fn unresolved(value: &Self) -> String;
    }

    pub trait StringifyViaExtension {
        type Value: ?Sized;
        fn stringify_candidate(&self, value: &Self::Value) -> String;
        fn stringify_strategy(&self) -> Extension {
            Extension
        }
    }

    impl<T, Cx> StringifyViaExtension for &&&&&Probe<T, T, Cx>
    where
        T: ?Sized,
        Cx: StringifyExtension<T>,
    {
        type Value = T;

        #[inline(always)]
        fn stringify_candidate(&self, value: &T) -> String {
            <Cx as StringifyExtension<T>>::stringify(value)
        }
    }

    pub trait StringifyViaMember {
        type Value: ?Sized;
        fn stringify_candidate(&self, value: &Self::Value) -> String;
        fn stringify_strategy(&self) -> MemberFunction {
            MemberFunction
        }
    }

    impl<T, Cx> StringifyViaMember for &&&&Probe<T, T, Cx>
    where
        T: ?Sized + Describe,
    {
        type Value = T;

        #[inline(always)]
        fn stringify_candidate(&self, value: &T) -> String {
            value.describe()
        }
    }

    pub trait StringifyViaNonMember {
        type Value: ?Sized;
        fn stringify_candidate(&self, value: &Self::Value) -> String;
        fn stringify_strategy(&self) -> NonMemberFunction {
            NonMemberFunction
        }
    }

    impl<T, Cx> StringifyViaNonMember for &&Probe<T, T, Cx>
    where
        T: ?Sized + Debug,
    {
        type Value = T;

        #[inline(always)]
        fn stringify_candidate(&self, value: &T) -> String {
            format!("{:?}", value)
        }
    }

    pub trait StringifyIllFormed {
        type Value: ?Sized;
        type Context;
        fn stringify_candidate(&self, value: &Self::Value) -> String
        where
            Self::Value: StringifyUnresolved<Self::Context>;
        fn stringify_strategy(&self) -> IllFormed {
            IllFormed
        }
    }

    impl<T, Cx> StringifyIllFormed for Probe<T, T, Cx>
    where
        T: ?Sized,
    {
        type Value = T;
        type Context = Cx;

        #[inline(always)]
        fn stringify_candidate(&self, value: &T) -> String
        where
            T: StringifyUnresolved<Cx>,
        {
            <T as StringifyUnresolved<Cx>>::unresolved(value)
        }
    }
}
