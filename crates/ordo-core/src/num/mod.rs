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

//! # Numeric Bindings
//!
//! Dispatch bindings for every primitive integer and float type, both against
//! itself and against every other primitive numeric type.
//!
//! ## Submodules
//!
//! - `exact`: Lossless comparison of integers of any width and signedness,
//!   integers against floats, and floats of different precision, generic over
//!   `num_traits::{PrimInt, Float}`.
//!
//! ## Semantics
//!
//! Same-type comparisons use std's operators. Mixed-type comparisons never
//! round: `compare(&u64::MAX, &(u64::MAX as f64))` is `Less`, because the
//! float is `2^64` exactly.
//!
//! ```rust
//! use ordo_core::ops::{are_equal, compare};
//! use ordo_core::ordering::Ordering;
//!
//! assert_eq!(compare(&u64::MAX, &(u64::MAX as f64)), Ordering::Less);
//! assert!(are_equal(&-4_i16, &-4.0_f32));
//! assert_eq!(compare(&-0.0_f64, &0_u32), Ordering::Equivalent);
//! ```

pub mod exact;
mod mixed;
mod primitive;
