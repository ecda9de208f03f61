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

use crate::volume::MemoryVolume;

/// The ratio between two neighbouring units on the ladder.
///
/// Every named volume constant is derived from this single value.
pub const LADDER_FACTOR: u64 = 1024;

/// How many units of the *next* rung a volume may reach before the
/// formatter switches to that rung.
///
/// With a value of 10, `10 239` bytes still print as bytes while
/// `10 240` bytes print as `10KB`.
pub const DISPLAY_THRESHOLD: u64 = 10;

/// The closed set of units on the memory ladder, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemoryUnit {
    /// `B`, one byte.
    Bytes,
    /// `KB`, 1024 bytes.
    Kilobytes,
    /// `MB`, 1024 kilobytes.
    Megabytes,
    /// `GB`, 1024 megabytes.
    Gigabytes,
    /// `TB`, 1024 gigabytes.
    Terabytes,
}

impl MemoryUnit {
    /// All units in ladder order.
    pub const ALL: [MemoryUnit; 5] = [
        MemoryUnit::Bytes,
        MemoryUnit::Kilobytes,
        MemoryUnit::Megabytes,
        MemoryUnit::Gigabytes,
        MemoryUnit::Terabytes,
    ];

    /// Returns the textual suffix used when formatting and parsing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_memory::unit::MemoryUnit;
    ///
    /// assert_eq!(MemoryUnit::Bytes.suffix(), "B");
    /// assert_eq!(MemoryUnit::Gigabytes.suffix(), "GB");
    /// ```
    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            MemoryUnit::Bytes => "B",
            MemoryUnit::Kilobytes => "KB",
            MemoryUnit::Megabytes => "MB",
            MemoryUnit::Gigabytes => "GB",
            MemoryUnit::Terabytes => "TB",
        }
    }

    /// Returns the volume of exactly one of this unit.
    #[inline]
    pub const fn volume(self) -> MemoryVolume {
        match self {
            MemoryUnit::Bytes => MemoryVolume::BYTE,
            MemoryUnit::Kilobytes => MemoryVolume::KILOBYTE,
            MemoryUnit::Megabytes => MemoryVolume::MEGABYTE,
            MemoryUnit::Gigabytes => MemoryVolume::GIGABYTE,
            MemoryUnit::Terabytes => MemoryVolume::TERABYTE,
        }
    }

    /// Returns the number of bytes in one of this unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_memory::unit::MemoryUnit;
    ///
    /// assert_eq!(MemoryUnit::Kilobytes.factor(), 1024);
    /// assert_eq!(MemoryUnit::Megabytes.factor(), 1024 * 1024);
    /// ```
    #[inline]
    pub const fn factor(self) -> u64 {
        self.volume().bytes()
    }

    /// Looks up a unit by its exact, case-sensitive suffix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_memory::unit::MemoryUnit;
    ///
    /// assert_eq!(MemoryUnit::from_suffix("TB"), Some(MemoryUnit::Terabytes));
    /// assert_eq!(MemoryUnit::from_suffix("tb"), None);
    /// assert_eq!(MemoryUnit::from_suffix("KiB"), None);
    /// ```
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.suffix() == suffix)
    }

    /// Returns the unit the formatter picks for `volume`.
    ///
    /// A unit is chosen while the byte count stays below
    /// `DISPLAY_THRESHOLD` units of the next rung; terabytes catch the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_memory::{unit::MemoryUnit, volume::MemoryVolume};
    ///
    /// assert_eq!(MemoryUnit::for_volume(MemoryVolume::from_bytes(5000)), MemoryUnit::Bytes);
    /// assert_eq!(MemoryUnit::for_volume(MemoryVolume::from_bytes(20000)), MemoryUnit::Kilobytes);
    /// ```
    pub fn for_volume(volume: MemoryVolume) -> Self {
        let bytes = volume.bytes();
        Self::ALL
            .windows(2)
            .find(|pair| bytes < DISPLAY_THRESHOLD * pair[1].factor())
            .map_or(MemoryUnit::Terabytes, |pair| pair[0])
    }
}

impl std::fmt::Display for MemoryUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}
