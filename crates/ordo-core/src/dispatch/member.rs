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

//! # Member Strategies
//!
//! Traits an operand type implements on itself to opt into a dispatch point.
//! They rank below extensions and above operators: a type that implements
//! both `CompareTo` and `PartialOrd` is compared through `CompareTo`.
//!
//! The same traits also provide the non-member strategy. When the left
//! operand has nothing to offer, the right operand's implementation is used
//! with the operands reflected (and, for comparisons, the result flipped).

use crate::ordering::Ordering;

/// Equality as a method of the left operand.
///
/// # Examples
///
/// ```rust
/// use ordo_core::dispatch::member::IsEqual;
///
/// struct Celsius(f64);
/// struct Kelvin(f64);
///
/// impl IsEqual<Kelvin> for Celsius {
///     fn is_equal(&self, other: &Kelvin) -> bool {
///         self.0 + 273.15 == other.0
///     }
/// }
///
/// ordo_core::resolve! { AreEqual(Celsius, Kelvin) }
///
/// assert!(ordo_core::ops::are_equal(&Celsius(0.0), &Kelvin(273.15)));
/// ```
pub trait IsEqual<Rhs: ?Sized = Self> {
    /// Returns `true` if `self` equals `other`.
    fn is_equal(&self, other: &Rhs) -> bool;
}

/// Equivalence as a method of the left operand.
pub trait IsEquivalent<Rhs: ?Sized = Self> {
    /// Returns `true` if `self` is equivalent to `other`.
    fn is_equivalent(&self, other: &Rhs) -> bool;
}

/// Four-state comparison as a method of the left operand.
pub trait CompareTo<Rhs: ?Sized = Self> {
    /// Compares `self` with `other`.
    fn compare_to(&self, other: &Rhs) -> Ordering;
}

/// Diagnostic rendering as a method of the value.
pub trait Describe {
    /// Renders `self` for diagnostics.
    fn describe(&self) -> String;
}

/// In-place exchange as a method of the value.
pub trait SwapWith {
    /// Exchanges `self` and `other`.
    fn swap_with(&mut self, other: &mut Self);
}
