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

//! Strict parsing of memory volumes from text.
//!
//! The accepted grammar is the whole input matching
//!
//! ```raw
//! [0-9]+ <whitespace>* (B | KB | MB | GB | TB)
//! ```
//!
//! Unit tokens are case-sensitive. Signs, fractions, leading or trailing
//! whitespace, and any other unit spelling are rejected. The numeric prefix
//! is multiplied by the byte factor of the unit, and the product must fit in
//! a `u64`.
//!
//! Two entry points exist on [`MemoryVolume`]: [`MemoryVolume::try_parse`]
//! returns a `Result`, and [`MemoryVolume::parse`] panics with the offending
//! input on failure. `FromStr` is also implemented for plain `&str`.

use crate::{unit::MemoryUnit, volume::MemoryVolume};
use exacta_core::text::NonEmptyStr;
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

lazy_static! {
    static ref VOLUME_PATTERN: Regex =
        Regex::new(r"^([0-9]+)\s*(B|KB|MB|GB|TB)$").expect("memory volume pattern is valid");
}

/// The error type for parsing a memory volume.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseVolumeError {
    /// The input was the empty string.
    #[error("cannot parse a memory volume from an empty string")]
    Empty,
    /// The input does not match the volume grammar.
    #[error(
        "invalid memory volume '{input}': expected digits followed by one of B, KB, MB, GB, TB"
    )]
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
    },
    /// The input is well-formed but its byte count exceeds `u64::MAX`.
    #[error("memory volume '{input}' exceeds the representable range")]
    Overflow {
        /// The rejected input, verbatim.
        input: String,
    },
}

impl ParseVolumeError {
    /// Returns the offending input, if there was any.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::InvalidFormat { input } | Self::Overflow { input } => Some(input),
        }
    }
}

fn parse_volume(input: &str) -> Result<MemoryVolume, ParseVolumeError> {
    let Some(captures) = VOLUME_PATTERN.captures(input) else {
        tracing::trace!(input, "rejected malformed memory volume");
        return Err(ParseVolumeError::InvalidFormat {
            input: input.to_owned(),
        });
    };

    // The pattern only admits the five ladder suffixes.
    let unit = MemoryUnit::from_suffix(&captures[2]).ok_or_else(|| {
        ParseVolumeError::InvalidFormat {
            input: input.to_owned(),
        }
    })?;

    let overflow = || {
        tracing::trace!(input, "rejected out-of-range memory volume");
        ParseVolumeError::Overflow {
            input: input.to_owned(),
        }
    };

    // Only digits reach this point, so a parse failure can only mean overflow.
    let count: u64 = captures[1].parse().map_err(|_| overflow())?;
    count
        .checked_mul(unit.factor())
        .map(MemoryVolume::from_bytes)
        .ok_or_else(overflow)
}

impl MemoryVolume {
    /// Parses a volume such as `"512MB"` or `"10 KB"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_core::text::NonEmptyStr;
    /// # use exacta_memory::volume::MemoryVolume;
    ///
    /// let text = NonEmptyStr::new("1024B").unwrap();
    /// assert_eq!(MemoryVolume::try_parse(text), Ok(MemoryVolume::KILOBYTE));
    ///
    /// let text = NonEmptyStr::new("1kb").unwrap();
    /// assert!(MemoryVolume::try_parse(text).is_err());
    /// ```
    #[inline]
    pub fn try_parse(text: NonEmptyStr<'_>) -> Result<Self, ParseVolumeError> {
        parse_volume(text.as_str())
    }

    /// Parses a volume, panicking on malformed input.
    ///
    /// # Panics
    ///
    /// Panics if `text` does not match the volume grammar or overflows. The
    /// panic message contains the offending input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_core::text::NonEmptyStr;
    /// # use exacta_memory::volume::MemoryVolume;
    ///
    /// let v = MemoryVolume::parse(NonEmptyStr::new("2 GB").unwrap());
    /// assert_eq!(v.bytes(), 2 * 1024 * 1024 * 1024);
    /// ```
    pub fn parse(text: NonEmptyStr<'_>) -> Self {
        match parse_volume(text.as_str()) {
            Ok(volume) => volume,
            Err(e) => panic!("called `MemoryVolume::parse` on invalid input: {e}"),
        }
    }
}

impl FromStr for MemoryVolume {
    type Err = ParseVolumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseVolumeError::Empty);
        }
        parse_volume(s)
    }
}

impl TryFrom<NonEmptyStr<'_>> for MemoryVolume {
    type Error = ParseVolumeError;

    #[inline]
    fn try_from(text: NonEmptyStr<'_>) -> Result<Self, Self::Error> {
        Self::try_parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<MemoryVolume, ParseVolumeError> {
        s.parse()
    }

    #[test]
    fn test_parses_each_unit() {
        assert_eq!(parse("7B"), Ok(MemoryVolume::from_bytes(7)));
        assert_eq!(parse("7KB"), Ok(MemoryVolume::from_bytes(7 * 1024)));
        assert_eq!(parse("7MB"), Ok(MemoryVolume::from_bytes(7 << 20)));
        assert_eq!(parse("7GB"), Ok(MemoryVolume::from_bytes(7 << 30)));
        assert_eq!(parse("7TB"), Ok(MemoryVolume::from_bytes(7 << 40)));
    }

    #[test]
    fn test_1024_bytes_is_a_kilobyte() {
        assert_eq!(parse("1024B"), Ok(MemoryVolume::KILOBYTE));
    }

    #[test]
    fn test_whitespace_between_number_and_unit() {
        assert_eq!(parse("3 MB"), Ok(MemoryVolume::from_bytes(3 << 20)));
        assert_eq!(parse("3\t\tMB"), Ok(MemoryVolume::from_bytes(3 << 20)));
        assert_eq!(parse("0 B"), Ok(MemoryVolume::ZERO));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(parse("0001KB"), Ok(MemoryVolume::KILOBYTE));
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in [
            "1kb", "1Kb", "1KiB", "1PB", "1", "KB", "-1KB", "+1KB", "1.5KB", "1,024B", " 1KB",
            "1KB ", "1K B", "1 2KB", "1KB\n", "0x10B", "   ",
        ] {
            assert_eq!(
                parse(input),
                Err(ParseVolumeError::InvalidFormat {
                    input: input.to_owned()
                }),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(parse(""), Err(ParseVolumeError::Empty));
        assert_eq!(ParseVolumeError::Empty.input(), None);
    }

    #[test]
    fn test_overflow() {
        // u64::MAX bytes parse, one more does not.
        assert_eq!(parse("18446744073709551615B"), Ok(MemoryVolume::MAX));
        assert_eq!(
            parse("18446744073709551616B"),
            Err(ParseVolumeError::Overflow {
                input: "18446744073709551616B".to_owned()
            })
        );
        // 2^24 TB = 2^64 bytes.
        assert!(matches!(
            parse("16777216TB"),
            Err(ParseVolumeError::Overflow { .. })
        ));
        assert_eq!(
            parse("16777215TB"),
            Ok(MemoryVolume::from_bytes(16_777_215 << 40))
        );
    }

    #[test]
    fn test_error_names_the_input() {
        let err = parse("12 parsecs").unwrap_err();
        assert_eq!(err.input(), Some("12 parsecs"));
        assert!(err.to_string().contains("'12 parsecs'"));
    }

    #[test]
    fn test_try_parse_with_non_empty_text() {
        let text = NonEmptyStr::new("64 KB").unwrap();
        assert_eq!(
            MemoryVolume::try_parse(text),
            Ok(MemoryVolume::from_bytes(64 * 1024))
        );
        assert_eq!(MemoryVolume::try_from(text), MemoryVolume::try_parse(text));
    }

    #[test]
    #[should_panic(expected = "invalid memory volume '1kb'")]
    fn test_parse_panics_with_input() {
        MemoryVolume::parse(NonEmptyStr::new("1kb").unwrap());
    }

    #[test]
    fn test_exact_multiples_round_trip() {
        let samples = [
            MemoryVolume::ZERO,
            MemoryVolume::from_bytes(5000),
            MemoryVolume::from_bytes(19 * 1024),
            MemoryVolume::from_bytes(300 << 20),
            MemoryVolume::from_bytes(42 << 30),
            MemoryVolume::from_bytes(12 << 40),
        ];
        for volume in samples {
            assert_eq!(parse(&volume.to_string()), Ok(volume));
        }
    }

    #[test]
    fn test_round_trip_truncates_inexact_volumes() {
        let volume = MemoryVolume::from_bytes(20000);
        let back = parse(&volume.to_string()).unwrap();
        assert_eq!(back, MemoryVolume::from_bytes(19 * 1024));
        assert!(back < volume);
    }
}
