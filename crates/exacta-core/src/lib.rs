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

//! # Exacta Core
//!
//! Small, immutable value primitives shared across the Exacta crates. Every
//! type here validates its invariant at the single point of construction and
//! offers no mutators afterwards.
//!
//! ## Modules
//!
//! - `math`: Closed `[left, right]` interval over any totally ordered type,
//!   with panicking (`new`), fallible (`try_new`, `from_pair`) and unchecked
//!   constructors, `RangeBounds` support, and `"[left, right]"` display.
//! - `text`: `NonEmptyStr`, a borrowed string slice guaranteed to contain at
//!   least one non-whitespace character. Used as the input contract of
//!   textual parsers such as the memory-volume parser.
//!
//! All types are plain data with no interior mutability and are therefore
//! `Send + Sync` whenever their element types are.

pub mod math;
pub mod text;
