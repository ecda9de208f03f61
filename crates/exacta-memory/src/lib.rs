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

//! # Exacta Memory
//!
//! **Exact memory volumes with human-readable formatting.**
//!
//! A [`MemoryVolume`](volume::MemoryVolume) is a whole, non-negative number of
//! bytes. It formats itself on a fixed unit ladder (`B`, `KB`, `MB`, `GB`,
//! `TB`, each 1024 times the previous), parses the same notation back
//! strictly, and supports a small arithmetic algebra that can never produce a
//! negative or fractional byte count.
//!
//! ## Architecture
//!
//! * **`volume`**: The `MemoryVolume` value type, its derived constants
//!   (`BYTE`, `KILOBYTE`, ...), ordering, display, and checked/saturating
//!   arithmetic.
//! * **`unit`**: The `MemoryUnit` vocabulary and the ladder constants
//!   (`LADDER_FACTOR`, `DISPLAY_THRESHOLD`).
//! * **`parse`**: Strict parsing from `NonEmptyStr` or `&str` with a typed
//!   `ParseVolumeError`.
//! * **`scalar`**: The `Scalar` trait that defines how integers, floats and
//!   `Decimal`s scale and divide a byte count, plus `ArithmeticError`.
//! * **`ops`**: `*`, `/`, `+`, `-` and `Sum` on top of the checked methods.
//!
//! ## Example
//!
//! ```rust
//! use exacta_memory::volume::MemoryVolume;
//!
//! let cache: MemoryVolume = "512 MB".parse().unwrap();
//! let per_shard = cache / 3u32;
//! assert_eq!(per_shard.to_string(), "170MB");
//! assert_eq!(cache / MemoryVolume::GIGABYTE, 0.5);
//! ```

pub mod ops;
pub mod parse;
pub mod scalar;
pub mod unit;
pub mod volume;

pub use rust_decimal::Decimal;
