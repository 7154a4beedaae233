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

//! # Dispatch Points
//!
//! The five customization points: [`AreEqual`], [`AreEquivalent`],
//! [`Compare`], [`Stringify`] and [`Swap`]. Each is a trait carrying a
//! context parameter (default [`Intrinsic`](crate::dispatch::Intrinsic)) and
//! a pair of free functions, one using the default context and one taking the
//! context explicitly.
//!
//! Implementations come from `resolve!` for concrete types and from the
//! crate's generic impls for references, slices, arrays, vectors and options.
//!
//! ```rust
//! use ordo_core::ops::{are_equal, are_equivalent, compare, stringify, swap};
//! use ordo_core::ordering::Ordering;
//!
//! assert!(are_equal(&1_i32, &1_i64));
//! assert!(are_equivalent(&2.0_f64, &2_u8));
//! assert_eq!(compare(&f64::NAN, &0.0_f64), Ordering::Incomparable);
//! assert_eq!(stringify(&'x'), "'x'");
//!
//! let (mut a, mut b) = (1_u16, 2_u16);
//! swap(&mut a, &mut b);
//! assert_eq!((a, b), (2, 1));
//! ```

pub mod compare;
pub mod equal;
pub mod equivalent;
pub mod stringify;
pub mod swap;

pub use compare::{compare, compare_in, Compare};
pub use equal::{are_equal, are_equal_in, AreEqual};
pub use equivalent::{are_equivalent, are_equivalent_in, AreEquivalent};
pub use stringify::{stringify, stringify_in, Stringify};
pub use swap::{swap, swap_in, Swap};
