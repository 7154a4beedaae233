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

//! # Customization-Point Dispatch
//!
//! Each dispatch point (`AreEqual`, `AreEquivalent`, `Compare`, `Stringify`,
//! `Swap`) can be satisfied by several implementation strategies. For a given
//! operation, operand pair, and context, exactly one strategy is bound: the
//! highest-ranked one that type-checks for the pair.
//!
//! ## Strategies
//!
//! | Rank | Strategy            | `AreEqual`        | `AreEquivalent`        | `Compare`                 | `Stringify`          | `Swap`          |
//! |------|---------------------|-------------------|------------------------|---------------------------|----------------------|-----------------|
//! | 4    | `Extension`         | `EqualExtension`  | `EquivalentExtension`  | `CompareExtension`        | `StringifyExtension` | `SwapExtension` |
//! | 3    | `MemberFunction`    | `T: IsEqual<U>`   | `T: IsEquivalent<U>`   | `T: CompareTo<U>`         | `T: Describe`        | `T: SwapWith`   |
//! | 2    | `MemberOperator`    |                   |                        | `T: PartialOrd<U>`        |                      |                 |
//! | 1    | `NonMemberFunction` | `U: IsEqual<T>`   | `U: IsEquivalent<T>`   | `U: CompareTo<T>`, flipped| `T: Debug`           |                 |
//! | 0    | `Fallback`          | `T: PartialEq<U>` | `T: AreEqual<U, Cx>`   | `U: PartialOrd<T>`, flipped|                     | three-move      |
//!
//! Extensions are implemented on the context type `Cx`, which defaults to
//! [`Intrinsic`]. A crate that wants to adapt foreign types declares its own
//! context and names it when resolving.
//!
//! ## Resolution
//!
//! Rust has no specialization on stable, so resolution is performed by the
//! `resolve!` macro. For each requested binding it emits the dispatch-point
//! impl, whose body probes the strategies through a ladder of
//! reference-depth ranked traits (autoref specialization): the compiler
//! tries the deepest reference first and settles on the first strategy whose
//! bounds hold. The decision is made once, per binding, at build time.
//!
//! ```rust
//! use ordo_core::dispatch::member::CompareTo;
//! use ordo_core::ordering::Ordering;
//!
//! #[derive(PartialEq, PartialOrd)]
//! struct Version(u32, u32);
//!
//! // Overrides the derived `PartialOrd`: only the major number matters.
//! impl CompareTo for Version {
//!     fn compare_to(&self, other: &Self) -> Ordering {
//!         self.0.cmp(&other.0).into()
//!     }
//! }
//!
//! ordo_core::resolve! {
//!     Compare(Version);
//!     AreEqual(Version);
//! }
//!
//! assert_eq!(ordo_core::ops::compare(&Version(1, 2), &Version(1, 9)), Ordering::Equivalent);
//! assert!(!ordo_core::ops::are_equal(&Version(1, 2), &Version(1, 9)));
//! ```
//!
//! When no strategy applies the `IllFormed` floor is selected, and its bound
//! fails with a diagnostic naming the operation and the operand types:
//!
//! ```rust,compile_fail
//! struct Opaque;
//! struct Unrelated;
//!
//! ordo_core::resolve! { Compare(Opaque, Unrelated) }
//! ```
//!
//! Calling a dispatch point for a pair that was never resolved fails as well:
//!
//! ```rust,compile_fail
//! struct Opaque;
//!
//! let _ = ordo_core::ops::are_equal(&Opaque, &Opaque);
//! ```
//!
//! Bindings are made for concrete types. Generic containers implement the
//! dispatch points directly, bounded on the dispatch points of their elements.

pub mod extension;
pub mod member;

use std::marker::PhantomData;

/// The default resolution context.
///
/// Bindings made without an explicit context use `Intrinsic`. Extensions for
/// types owned by the registering crate may be implemented on it directly.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Intrinsic;

/// The value probed by the strategy ladder. Not part of the public API.
#[doc(hidden)]
pub struct Probe<T: ?Sized, U: ?Sized, Cx>(PhantomData<(fn(&T), fn(&U), fn() -> Cx)>);

impl<T: ?Sized, U: ?Sized, Cx> Probe<T, U, Cx> {
    #[doc(hidden)]
    #[inline(always)]
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

/// Binds dispatch points for concrete operand types.
///
/// Each entry names an operation and its operand types, optionally followed
/// by `in Context`. Binary operations accept one type (compared with itself)
/// or two.
///
/// ```rust
/// #[derive(Debug, Clone, PartialEq, PartialOrd)]
/// struct Meters(f64);
///
/// ordo_core::resolve! {
///     AreEqual(Meters);
///     AreEquivalent(Meters);
///     Compare(Meters);
///     Stringify(Meters);
///     Swap(Meters);
/// }
///
/// assert!(ordo_core::ops::compare(&Meters(1.0), &Meters(2.0)).is_lt());
/// assert_eq!(ordo_core::ops::stringify(&Meters(1.5)), "Meters(1.5)");
/// ```
#[macro_export]
macro_rules! resolve {
    ($($op:ident ( $($ty:ty),+ $(,)? ) $(in $cx:ty)?);+ $(;)?) => {
        $(
            $crate::__resolve_one!(@$op [$($ty),+] [$($cx)?]);
        )+
    };
}

/// Evaluates to the zero-sized strategy marker that `resolve!` would bind.
///
/// ```rust
/// use ordo_core::priority::{rank_of, Fallback, MemberOperator, Priority};
///
/// assert_eq!(rank_of(ordo_core::strategy!(Compare(i32))), MemberOperator::RANK);
/// assert_eq!(rank_of(ordo_core::strategy!(AreEqual(i32))), Fallback::RANK);
/// ```
#[macro_export]
macro_rules! strategy {
    ($op:ident ( $($ty:ty),+ $(,)? ) $(in $cx:ty)?) => {
        $crate::__strategy_one!(@$op [$($ty),+] [$($cx)?])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __resolve_one {
    (@AreEqual [$t:ty] [$($cx:ty)?]) => {
        $crate::__resolve_one!(@AreEqual [$t, $t] [$($cx)?]);
    };
    (@AreEqual [$t:ty, $u:ty] []) => {
        $crate::__resolve_one!(@AreEqual [$t, $u] [$crate::dispatch::Intrinsic]);
    };
    (@AreEqual [$t:ty, $u:ty] [$cx:ty]) => {
        impl $crate::ops::AreEqual<$u, $cx> for $t {
            #[inline]
            #[allow(clippy::needless_borrow)]
            fn are_equal(&self, other: &$u) -> bool {
                #[allow(unused_imports)]
                use $crate::ops::equal::candidates::*;
                (&&&&&&$crate::dispatch::Probe::<$t, $u, $cx>::new()).are_equal_candidate(self, other)
            }
        }
    };

    (@AreEquivalent [$t:ty] [$($cx:ty)?]) => {
        $crate::__resolve_one!(@AreEquivalent [$t, $t] [$($cx)?]);
    };
    (@AreEquivalent [$t:ty, $u:ty] []) => {
        $crate::__resolve_one!(@AreEquivalent [$t, $u] [$crate::dispatch::Intrinsic]);
    };
    (@AreEquivalent [$t:ty, $u:ty] [$cx:ty]) => {
        impl $crate::ops::AreEquivalent<$u, $cx> for $t {
            #[inline]
            #[allow(clippy::needless_borrow)]
            fn are_equivalent(&self, other: &$u) -> bool {
                #[allow(unused_imports)]
                use $crate::ops::equivalent::candidates::*;
                (&&&&&&$crate::dispatch::Probe::<$t, $u, $cx>::new()).are_equivalent_candidate(self, other)
            }
        }
    };

    (@Compare [$t:ty] [$($cx:ty)?]) => {
        $crate::__resolve_one!(@Compare [$t, $t] [$($cx)?]);
    };
    (@Compare [$t:ty, $u:ty] []) => {
        $crate::__resolve_one!(@Compare [$t, $u] [$crate::dispatch::Intrinsic]);
    };
    (@Compare [$t:ty, $u:ty] [$cx:ty]) => {
        impl $crate::ops::Compare<$u, $cx> for $t {
            #[inline]
            #[allow(clippy::needless_borrow)]
            fn compare(&self, other: &$u) -> $crate::ordering::Ordering {
                #[allow(unused_imports)]
                use $crate::ops::compare::candidates::*;
                (&&&&&&$crate::dispatch::Probe::<$t, $u, $cx>::new()).compare_candidate(self, other)
            }
        }
    };

    (@Stringify [$t:ty] []) => {
        $crate::__resolve_one!(@Stringify [$t] [$crate::dispatch::Intrinsic]);
    };
    (@Stringify [$t:ty] [$cx:ty]) => {
        impl $crate::ops::Stringify<$cx> for $t {
            #[inline]
            #[allow(clippy::needless_borrow)]
            fn stringify(&self) -> ::std::string::String {
                #[allow(unused_imports)]
                use $crate::ops::stringify::candidates::*;
                (&&&&&&$crate::dispatch::Probe::<$t, $t, $cx>::new()).stringify_candidate(self)
            }
        }
    };

    (@Swap [$t:ty] []) => {
        $crate::__resolve_one!(@Swap [$t] [$crate::dispatch::Intrinsic]);
    };
    (@Swap [$t:ty] [$cx:ty]) => {
        impl $crate::ops::Swap<$cx> for $t {
            #[inline]
            #[allow(clippy::needless_borrow)]
            fn swap(&mut self, other: &mut Self) {
                #[allow(unused_imports)]
                use $crate::ops::swap::candidates::*;
                (&&&&&&$crate::dispatch::Probe::<$t, $t, $cx>::new()).swap_candidate(self, other)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __strategy_one {
    (@$op:ident [$t:ty] []) => {
        $crate::__strategy_one!(@$op [$t] [$crate::dispatch::Intrinsic])
    };
    (@$op:ident [$t:ty, $u:ty] []) => {
        $crate::__strategy_one!(@$op [$t, $u] [$crate::dispatch::Intrinsic])
    };
    (@AreEqual [$t:ty] [$cx:ty]) => {
        $crate::__strategy_one!(@AreEqual [$t, $t] [$cx])
    };
    (@AreEqual [$t:ty, $u:ty] [$cx:ty]) => {{
        #[allow(unused_imports)]
        use $crate::ops::equal::candidates::*;
        (&&&&&&$crate::dispatch::Probe::<$t, $u, $cx>::new()).equal_strategy()
    }};
    (@AreEquivalent [$t:ty] [$cx:ty]) => {
        $crate::__strategy_one!(@AreEquivalent [$t, $t] [$cx])
    };
    (@AreEquivalent [$t:ty, $u:ty] [$cx:ty]) => {{
        #[allow(unused_imports)]
        use $crate::ops::equivalent::candidates::*;
        (&&&&&&$crate::dispatch::Probe::<$t, $u, $cx>::new()).equivalent_strategy()
    }};
    (@Compare [$t:ty] [$cx:ty]) => {
        $crate::__strategy_one!(@Compare [$t, $t] [$cx])
    };
    (@Compare [$t:ty, $u:ty] [$cx:ty]) => {{
        #[allow(unused_imports)]
        use $crate::ops::compare::candidates::*;
        (&&&&&&$crate::dispatch::Probe::<$t, $u, $cx>::new()).compare_strategy()
    }};
    (@Stringify [$t:ty] [$cx:ty]) => {{
        #[allow(unused_imports)]
        use $crate::ops::stringify::candidates::*;
        (&&&&&&$crate::dispatch::Probe::<$t, $t, $cx>::new()).stringify_strategy()
    }};
    (@Swap [$t:ty] [$cx:ty]) => {{
        #[allow(unused_imports)]
        use $crate::ops::swap::candidates::*;
        (&&&&&&$crate::dispatch::Probe::<$t, $t, $cx>::new()).swap_strategy()
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::extension::CompareExtension;
    use crate::dispatch::member::CompareTo;
    use crate::ops::{compare, compare_in};
    use crate::ordering::Ordering;
    use crate::priority::{
        rank_of, Extension, Fallback, MemberFunction, MemberOperator, NonMemberFunction, Priority,
    };

    /// Reports a different ordering from every strategy it offers.
    #[derive(PartialEq, PartialOrd)]
    struct Layered(i32);

    impl CompareExtension<Layered> for Intrinsic {
        fn compare(_: &Layered, _: &Layered) -> Ordering {
            Ordering::Greater
        }
    }

    impl CompareTo for Layered {
        fn compare_to(&self, _: &Self) -> Ordering {
            Ordering::Less
        }
    }

    /// A context that registers nothing for `Layered`.
    struct Bare;

    crate::resolve! {
        Compare(Layered);
        Compare(Layered) in Bare;
    }

    #[test]
    fn test_extension_outranks_member() {
        assert_eq!(compare(&Layered(1), &Layered(1)), Ordering::Greater);
        assert_eq!(
            rank_of(crate::strategy!(Compare(Layered))),
            Extension::RANK
        );
    }

    #[test]
    fn test_member_wins_without_extension() {
        assert_eq!(compare_in::<Bare, _, _>(&Layered(1), &Layered(1)), Ordering::Less);
        assert_eq!(
            rank_of(crate::strategy!(Compare(Layered) in Bare)),
            MemberFunction::RANK
        );
    }

    #[derive(PartialEq, PartialOrd)]
    struct Plain(i32);

    struct Left(i32);
    struct Right(i32);

    impl CompareTo<Left> for Right {
        fn compare_to(&self, other: &Left) -> Ordering {
            self.0.cmp(&other.0).into()
        }
    }

    crate::resolve! {
        Compare(Plain);
        Compare(Left, Right);
    }

    #[test]
    fn test_operator_strategy() {
        assert_eq!(compare(&Plain(1), &Plain(2)), Ordering::Less);
        assert_eq!(
            rank_of(crate::strategy!(Compare(Plain))),
            MemberOperator::RANK
        );
    }

    #[test]
    fn test_reflected_strategy_flips() {
        assert_eq!(compare(&Left(1), &Right(2)), Ordering::Less);
        assert_eq!(compare(&Left(3), &Right(2)), Ordering::Greater);
        assert_eq!(
            rank_of(crate::strategy!(Compare(Left, Right))),
            NonMemberFunction::RANK
        );
    }

    #[test]
    fn test_swap_falls_back_to_three_move() {
        assert_eq!(rank_of(crate::strategy!(Swap(Plain))), Fallback::RANK);
    }

    #[test]
    fn test_probe_is_zero_sized() {
        assert_eq!(std::mem::size_of::<Probe<str, [u8], Intrinsic>>(), 0);
    }
}
