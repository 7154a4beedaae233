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

//! # Ordo Core
//!
//! Comparison building blocks for generic code: a four-state ordering that
//! models partial orders explicitly, and a ranked customization-point
//! mechanism that lets any type opt into equality, equivalence, three-way
//! comparison, diagnostic rendering, and in-place exchange through whichever
//! implementation style suits it.
//!
//! ## Modules
//!
//! - `ordering`: The [`Ordering`] value (`Less`, `Equivalent`, `Greater`,
//!   `Incomparable`) with flip, chaining, null-sentinel comparison, and
//!   conversions from `core::cmp::Ordering`.
//! - `priority`: Zero-sized rank markers (`Extension` down to `IllFormed`)
//!   that order the implementation strategies.
//! - `dispatch`: The `resolve!` and `strategy!` macros, the default context
//!   `Intrinsic`, and the extension and member traits types implement.
//! - `ops`: The five dispatch points (`AreEqual`, `AreEquivalent`, `Compare`,
//!   `Stringify`, `Swap`) and their free functions.
//! - `num`: Bindings for all primitive numeric types, with exact mixed-type
//!   comparison.
//! - `builtin`: Bindings for `bool`, `char`, `()`, `str`, `String` and
//!   `Ordering`.
//! - `seq`: Lexicographic helpers over iterables, and the dispatch impls for
//!   slices, arrays, `Vec` and `Option`.
//! - `diagnostic`: `Result`-returning checks and assertion macros that render
//!   mismatches for reporting code.
//!
//! ## Usage
//!
//! ```rust
//! use ordo_core::dispatch::member::CompareTo;
//! use ordo_core::ordering::Ordering;
//! use ordo_core::ops::{compare, stringify};
//!
//! #[derive(Debug)]
//! struct Draft(f64);
//!
//! impl CompareTo for Draft {
//!     fn compare_to(&self, other: &Self) -> Ordering {
//!         self.0.partial_cmp(&other.0).into()
//!     }
//! }
//!
//! ordo_core::resolve! {
//!     Compare(Draft);
//!     Stringify(Draft);
//! }
//!
//! assert_eq!(compare(&Draft(9.5), &Draft(11.0)), Ordering::Less);
//! assert_eq!(compare(&Draft(f64::NAN), &Draft(11.0)), Ordering::Incomparable);
//! assert_eq!(stringify(&Draft(9.5)), "Draft(9.5)");
//! ```
//!
//! Resolution happens at build time, once per operation, type pair and
//! context. Nothing is looked up at run time.

mod builtin;
pub mod diagnostic;
pub mod dispatch;
pub mod num;
pub mod ops;
pub mod ordering;
pub mod priority;
pub mod seq;

pub use diagnostic::Mismatch;
pub use dispatch::Intrinsic;
pub use ordering::Ordering;
