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

//! # Extensions
//!
//! Extensions are the highest-ranked strategy. They associate behavior with a
//! pair of operand types without touching either type: the implementation
//! lives on a *context* type, and the context is named when the pair is
//! resolved. Because the context is local to the registering crate, this is
//! the strategy that works for foreign types such as `f64` or
//! `std::time::Duration`.
//!
//! ```rust
//! use ordo_core::dispatch::extension::CompareExtension;
//! use ordo_core::ordering::Ordering;
//!
//! /// Orders floats by IEEE 754 `totalOrder`.
//! pub struct TotalFloat;
//!
//! impl CompareExtension<f64> for TotalFloat {
//!     fn compare(lhs: &f64, rhs: &f64) -> Ordering {
//!         lhs.total_cmp(rhs).into()
//!     }
//! }
//!
//! ordo_core::resolve! { Compare(f64) in TotalFloat }
//!
//! let ord = ordo_core::ops::compare_in::<TotalFloat, _, _>(&f64::NAN, &1.0_f64);
//! assert_eq!(ord, Ordering::Greater);
//! ```

use crate::ordering::Ordering;

/// Registers an equality between `T` and `U` on the implementing context.
pub trait EqualExtension<T: ?Sized, U: ?Sized = T> {
    /// Returns `true` if `lhs` equals `rhs`.
    fn are_equal(lhs: &T, rhs: &U) -> bool;
}

/// Registers an equivalence between `T` and `U` on the implementing context.
pub trait EquivalentExtension<T: ?Sized, U: ?Sized = T> {
    /// Returns `true` if `lhs` is equivalent to `rhs`.
    fn are_equivalent(lhs: &T, rhs: &U) -> bool;
}

/// Registers a comparison between `T` and `U` on the implementing context.
pub trait CompareExtension<T: ?Sized, U: ?Sized = T> {
    /// Compares `lhs` with `rhs`.
    fn compare(lhs: &T, rhs: &U) -> Ordering;
}

/// Registers a diagnostic rendering of `T` on the implementing context.
pub trait StringifyExtension<T: ?Sized> {
    /// Renders `value` for diagnostics.
    fn stringify(value: &T) -> String;
}

/// Registers an in-place exchange of two `T` values on the implementing context.
pub trait SwapExtension<T: ?Sized> {
    /// Exchanges the values behind `lhs` and `rhs`.
    fn swap(lhs: &mut T, rhs: &mut T);
}
