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

//! Borrowed text that is guaranteed to carry at least one non-whitespace character.

use std::ops::Deref;
use thiserror::Error;

/// The error returned when text is empty or consists only of whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("text must not be empty or whitespace-only")]
pub struct EmptyStrError;

/// A string slice that is never empty and never whitespace-only.
///
/// The check happens once in [`NonEmptyStr::new`]; consumers can rely on it
/// without re-validating.
///
/// # Examples
///
/// ```rust
/// # use exacta_core::text::NonEmptyStr;
///
/// let text = NonEmptyStr::new("12KB").unwrap();
/// assert_eq!(text.as_str(), "12KB");
/// assert_eq!(text.len(), 4);
///
/// assert!(NonEmptyStr::new("").is_err());
/// assert!(NonEmptyStr::new(" \t").is_err());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyStr<'a>(&'a str);

impl<'a> NonEmptyStr<'a> {
    /// Wraps `text`, rejecting empty and whitespace-only input.
    #[inline]
    pub fn new(text: &'a str) -> Result<Self, EmptyStrError> {
        if text.trim().is_empty() {
            Err(EmptyStrError)
        } else {
            Ok(Self(text))
        }
    }

    /// Returns the wrapped slice, unmodified.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }
}

impl Deref for NonEmptyStr<'_> {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.0
    }
}

impl AsRef<str> for NonEmptyStr<'_> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl<'a> TryFrom<&'a str> for NonEmptyStr<'a> {
    type Error = EmptyStrError;

    #[inline]
    fn try_from(text: &'a str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl std::fmt::Debug for NonEmptyStr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NonEmptyStr({:?})", self.0)
    }
}

impl std::fmt::Display for NonEmptyStr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
