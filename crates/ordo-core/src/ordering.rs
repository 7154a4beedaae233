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

//! # Four-State Ordering
//!
//! `Ordering` is the result type of every comparison in this crate. Unlike
//! `core::cmp::Ordering` it has an explicit `Incomparable` state, so partial
//! orders (floating point with NaN, user-defined lattices) report "unrelated"
//! as a first-class value instead of folding it into `Option`.
//!
//! ## Highlights
//!
//! - `flip` answers "what would the comparison report with the operands
//!   swapped". It is an involution.
//! - Predicates (`is_eq`, `is_ne`, `is_lt`, `is_le`, `is_gt`, `is_ge`) all
//!   answer `false` for `Incomparable`, including `is_ne`.
//! - `Null` is the zero sentinel: `ord < Null`, `ord == Null`, `ord >= Null`
//!   read like comparisons of a classic three-way result against `0`.
//! - Lossless conversion from `core::cmp::Ordering` (never `Incomparable`)
//!   and from `Option<core::cmp::Ordering>` (`None` becomes `Incomparable`).
//!
//! ## Usage
//!
//! ```rust
//! use ordo_core::ordering::{Null, Ordering};
//!
//! let ord = Ordering::from(1.0f64.partial_cmp(&f64::NAN));
//! assert_eq!(ord, Ordering::Incomparable);
//! assert!(!(ord < Null) && !(ord == Null) && !(ord > Null));
//! assert!(!ord.is_ne());
//!
//! let ord = Ordering::from(1.cmp(&2));
//! assert!(ord < Null);
//! assert_eq!(ord.flip(), Ordering::Greater);
//! ```

use num_traits::{PrimInt, Signed};
use std::{cmp, fmt, str::FromStr};

/// The result of comparing two values under a total or partial order.
///
/// Exactly one state is active. `Incomparable` only arises from partial
/// orders; converting a three-state `core::cmp::Ordering` never produces it.
///
/// # Examples
///
/// ```rust
/// # use ordo_core::ordering::Ordering;
/// assert!(Ordering::Less.is_lt());
/// assert!(Ordering::Equivalent.is_le());
/// assert!(!Ordering::Incomparable.is_le());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Ordering {
    /// The left operand orders before the right operand.
    Less,
    /// Neither operand orders before the other.
    Equivalent,
    /// The left operand orders after the right operand.
    Greater,
    /// The operands are unrelated under the order.
    Incomparable,
}

impl Ordering {
    /// All four states, in declaration order.
    pub const ALL: [Ordering; 4] = [
        Ordering::Less,
        Ordering::Equivalent,
        Ordering::Greater,
        Ordering::Incomparable,
    ];

    /// Returns the ordering the comparison would report with its operands swapped.
    ///
    /// `Less` and `Greater` exchange; `Equivalent` and `Incomparable` are fixed points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordo_core::ordering::Ordering;
    /// assert_eq!(Ordering::Less.flip(), Ordering::Greater);
    /// assert_eq!(Ordering::Incomparable.flip(), Ordering::Incomparable);
    /// for ord in Ordering::ALL {
    ///     assert_eq!(ord.flip().flip(), ord);
    /// }
    /// ```
    #[inline(always)]
    pub const fn flip(self) -> Self {
        match self {
            Ordering::Less => Ordering::Greater,
            Ordering::Greater => Ordering::Less,
            Ordering::Equivalent => Ordering::Equivalent,
            Ordering::Incomparable => Ordering::Incomparable,
        }
    }

    /// Returns `true` if the ordering is `Equivalent`.
    #[inline(always)]
    pub const fn is_eq(self) -> bool {
        matches!(self, Ordering::Equivalent)
    }

    /// Returns `true` if the operands are definitely ordered apart.
    ///
    /// This is not the negation of [`Ordering::is_eq`]: an `Incomparable`
    /// result is neither equal nor "not equal".
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordo_core::ordering::Ordering;
    /// assert!(Ordering::Less.is_ne());
    /// assert!(!Ordering::Equivalent.is_ne());
    /// assert!(!Ordering::Incomparable.is_ne());
    /// ```
    #[inline(always)]
    pub const fn is_ne(self) -> bool {
        matches!(self, Ordering::Less | Ordering::Greater)
    }

    /// Returns `true` if the ordering is `Less`.
    #[inline(always)]
    pub const fn is_lt(self) -> bool {
        matches!(self, Ordering::Less)
    }

    /// Returns `true` if the ordering is `Less` or `Equivalent`.
    #[inline(always)]
    pub const fn is_le(self) -> bool {
        matches!(self, Ordering::Less | Ordering::Equivalent)
    }

    /// Returns `true` if the ordering is `Greater`.
    #[inline(always)]
    pub const fn is_gt(self) -> bool {
        matches!(self, Ordering::Greater)
    }

    /// Returns `true` if the ordering is `Greater` or `Equivalent`.
    #[inline(always)]
    pub const fn is_ge(self) -> bool {
        matches!(self, Ordering::Greater | Ordering::Equivalent)
    }

    /// Returns `true` if the ordering is `Incomparable`.
    #[inline(always)]
    pub const fn is_incomparable(self) -> bool {
        matches!(self, Ordering::Incomparable)
    }

    /// Chains two orderings: returns `self` unless it is `Equivalent`, in which
    /// case `other` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordo_core::ordering::Ordering;
    /// assert_eq!(Ordering::Equivalent.then(Ordering::Less), Ordering::Less);
    /// assert_eq!(Ordering::Incomparable.then(Ordering::Less), Ordering::Incomparable);
    /// ```
    #[inline(always)]
    pub const fn then(self, other: Ordering) -> Self {
        match self {
            Ordering::Equivalent => other,
            _ => self,
        }
    }

    /// Chains two orderings lazily: `f` is only evaluated when `self` is `Equivalent`.
    #[inline]
    pub fn then_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Ordering,
    {
        match self {
            Ordering::Equivalent => f(),
            _ => self,
        }
    }

    /// Converts to the partial-order representation used by `PartialOrd`.
    ///
    /// `Incomparable` maps to `None`.
    #[inline(always)]
    pub const fn to_partial(self) -> Option<cmp::Ordering> {
        match self {
            Ordering::Less => Some(cmp::Ordering::Less),
            Ordering::Equivalent => Some(cmp::Ordering::Equal),
            Ordering::Greater => Some(cmp::Ordering::Greater),
            Ordering::Incomparable => None,
        }
    }

    /// Interprets the sign of a C-style comparator result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordo_core::ordering::Ordering;
    /// assert_eq!(Ordering::from_sign(-7i32), Ordering::Less);
    /// assert_eq!(Ordering::from_sign(0i64), Ordering::Equivalent);
    /// assert_eq!(Ordering::from_sign(3i8), Ordering::Greater);
    /// ```
    #[inline]
    pub fn from_sign<I>(value: I) -> Self
    where
        I: PrimInt + Signed,
    {
        if value.is_negative() {
            Ordering::Less
        } else if value.is_positive() {
            Ordering::Greater
        } else {
            Ordering::Equivalent
        }
    }

    /// Returns the fixed human-readable token for this state.
    #[inline(always)]
    pub const fn as_str(self) -> &'static str {
        match self {
            Ordering::Less => "less",
            Ordering::Equivalent => "equivalent",
            Ordering::Greater => "greater",
            Ordering::Incomparable => "incomparable",
        }
    }
}

impl From<cmp::Ordering> for Ordering {
    #[inline(always)]
    fn from(ord: cmp::Ordering) -> Self {
        match ord {
            cmp::Ordering::Less => Ordering::Less,
            cmp::Ordering::Equal => Ordering::Equivalent,
            cmp::Ordering::Greater => Ordering::Greater,
        }
    }
}

impl From<Option<cmp::Ordering>> for Ordering {
    #[inline(always)]
    fn from(ord: Option<cmp::Ordering>) -> Self {
        match ord {
            Some(ord) => Ordering::from(ord),
            None => Ordering::Incomparable,
        }
    }
}

impl From<Ordering> for Option<cmp::Ordering> {
    #[inline(always)]
    fn from(ord: Ordering) -> Self {
        ord.to_partial()
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when parsing an `Ordering` from an unknown token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized ordering token `{token}` (expected less, equivalent, greater or incomparable)")]
pub struct ParseOrderingError {
    token: String,
}

impl ParseOrderingError {
    /// Returns the token that failed to parse.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromStr for Ordering {
    type Err = ParseOrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ordering::ALL
            .into_iter()
            .find(|ord| ord.as_str() == s)
            .ok_or_else(|| ParseOrderingError {
                token: s.to_owned(),
            })
    }
}

/// The zero sentinel an `Ordering` is compared against.
///
/// `ord == Null` holds iff `ord` is `Equivalent`, `ord < Null` iff `Less`,
/// `ord > Null` iff `Greater`. `Incomparable` is neither less than, greater
/// than, nor equal to the sentinel.
///
/// `!=` keeps the std contract and is the plain negation of `==`; use
/// [`Ordering::is_ne`] for the partial-order "definitely different".
///
/// # Examples
///
/// ```rust
/// # use ordo_core::ordering::{Null, Ordering};
/// assert!(Ordering::Less < Null);
/// assert!(Ordering::Less <= Null);
/// assert!(Ordering::Equivalent == Null);
/// assert!(Null < Ordering::Greater);
/// assert!(!(Ordering::Incomparable >= Null));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct Null;

impl PartialEq<Null> for Ordering {
    #[inline(always)]
    fn eq(&self, _: &Null) -> bool {
        self.is_eq()
    }
}

impl PartialOrd<Null> for Ordering {
    #[inline(always)]
    fn partial_cmp(&self, _: &Null) -> Option<cmp::Ordering> {
        self.to_partial()
    }
}

impl PartialEq<Ordering> for Null {
    #[inline(always)]
    fn eq(&self, other: &Ordering) -> bool {
        other.is_eq()
    }
}

impl PartialOrd<Ordering> for Null {
    #[inline(always)]
    fn partial_cmp(&self, other: &Ordering) -> Option<cmp::Ordering> {
        other.flip().to_partial()
    }
}
