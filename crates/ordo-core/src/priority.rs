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

//! # Priority Ranks
//!
//! Zero-sized markers that rank the implementation strategies a dispatch
//! point can bind to, from most to least specific:
//!
//! | Marker              | Rank | Strategy                                      |
//! |---------------------|------|-----------------------------------------------|
//! | `Extension`         | 4    | out-of-line registration on a context type    |
//! | `MemberFunction`    | 3    | member trait implemented by the left operand  |
//! | `MemberOperator`    | 2    | operator trait (`PartialOrd`) on the left     |
//! | `NonMemberFunction` | 1    | implementation living with the other operand  |
//! | `Fallback`          | 0    | generic default in terms of a simpler op      |
//! | `IllFormed`         | -1   | nothing applies; never survives compilation   |
//!
//! The markers carry no data. Ranks are associated constants, so comparing
//! two strategies costs nothing at run time.
//!
//! ```rust
//! use ordo_core::priority::{outranks, Extension, Fallback, Priority};
//!
//! assert!(outranks::<Extension, Fallback>());
//! assert_eq!(Extension::RANK, 4);
//! assert_eq!(format!("{}", Fallback), "Fallback");
//! ```

mod sealed {
    pub trait Sealed {}
}

/// A compile-time rank attached to an implementation strategy.
///
/// The set of ranks is closed; this trait cannot be implemented outside the crate.
pub trait Priority: sealed::Sealed + Copy + Default + Send + Sync + 'static {
    /// Position in the resolution order. Higher ranks are tried first.
    const RANK: i8;
    /// Human-readable marker name.
    const NAME: &'static str;
}

macro_rules! priority_marker {
    ($(#[$meta:meta])* $name:ident, $rank:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl Priority for $name {
            const RANK: i8 = $rank;
            const NAME: &'static str = stringify!($name);
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", Self::NAME)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", Self::NAME)
            }
        }
    };
}

priority_marker!(
    /// An out-of-line registration on a context type. Works for foreign types.
    Extension,
    4
);
priority_marker!(
    /// A member trait implemented by the left operand (`IsEqual`, `CompareTo`, ...).
    MemberFunction,
    3
);
priority_marker!(
    /// The left operand's comparison operator trait (`PartialOrd`).
    MemberOperator,
    2
);
priority_marker!(
    /// An implementation that lives with the right operand, applied reflected.
    NonMemberFunction,
    1
);
priority_marker!(
    /// The generic default, expressed through a more primitive operation.
    Fallback,
    0
);
priority_marker!(
    /// No strategy applies. Selecting it is a build error.
    IllFormed,
    -1
);

/// Returns the rank of a strategy marker.
///
/// Mostly used together with the `strategy!` macro:
///
/// ```rust
/// use ordo_core::priority::{rank_of, MemberOperator, Priority};
///
/// assert_eq!(rank_of(ordo_core::strategy!(Compare(f64))), MemberOperator::RANK);
/// ```
#[inline(always)]
pub fn rank_of<P>(_marker: P) -> i8
where
    P: Priority,
{
    P::RANK
}

/// Returns the name of a strategy marker.
#[inline(always)]
pub fn name_of<P>(_marker: P) -> &'static str
where
    P: Priority,
{
    P::NAME
}

/// Returns `true` if strategy `A` is tried before strategy `B`.
#[inline(always)]
pub const fn outranks<A, B>() -> bool
where
    A: Priority,
    B: Priority,
{
    A::RANK > B::RANK
}
