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

use crate::{
    scalar::{ArithmeticError, Scalar},
    unit::{LADDER_FACTOR, MemoryUnit},
};

/// An exact, non-negative amount of memory, stored as a whole number of bytes.
///
/// The unit is a presentation concern only: a `MemoryVolume` never remembers
/// how it was written. Formatting picks a unit from the ladder
/// (`B`, `KB`, `MB`, `GB`, `TB`) and truncates toward zero, so
/// `20 000` bytes display as `19KB`.
///
/// Equality, ordering and hashing all compare the byte count.
///
/// # Examples
///
/// ```rust
/// # use exacta_memory::volume::MemoryVolume;
///
/// let v = MemoryVolume::from_bytes(5000);
/// assert_eq!(v.to_string(), "5000B");
/// assert_eq!(MemoryVolume::from_bytes(20000).to_string(), "19KB");
/// assert!(MemoryVolume::GIGABYTE < MemoryVolume::TERABYTE);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemoryVolume(u64);

impl MemoryVolume {
    /// No memory at all.
    pub const ZERO: Self = Self(0);
    /// A single byte.
    pub const BYTE: Self = Self(1);
    /// 1024 bytes.
    pub const KILOBYTE: Self = Self(Self::BYTE.0 * LADDER_FACTOR);
    /// 1024 kilobytes.
    pub const MEGABYTE: Self = Self(Self::KILOBYTE.0 * LADDER_FACTOR);
    /// 1024 megabytes.
    pub const GIGABYTE: Self = Self(Self::MEGABYTE.0 * LADDER_FACTOR);
    /// 1024 gigabytes.
    pub const TERABYTE: Self = Self(Self::GIGABYTE.0 * LADDER_FACTOR);
    /// The largest representable volume.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a volume from a raw byte count.
    #[inline]
    pub const fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Returns the raw byte count.
    #[inline]
    pub const fn bytes(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the volume holds no bytes.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the unit `Display` uses for this volume.
    #[inline]
    pub fn display_unit(&self) -> MemoryUnit {
        MemoryUnit::for_volume(*self)
    }

    /// Returns how many whole `unit`s fit in this volume, truncating the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_memory::{unit::MemoryUnit, volume::MemoryVolume};
    ///
    /// let v = MemoryVolume::from_bytes(3 * 1024 * 1024 + 5);
    /// assert_eq!(v.whole_units(MemoryUnit::Megabytes), 3);
    /// assert_eq!(v.whole_units(MemoryUnit::Kilobytes), 3072);
    /// ```
    #[inline]
    pub const fn whole_units(&self, unit: MemoryUnit) -> u64 {
        self.0 / unit.factor()
    }

    /// Adds two volumes, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(bytes) => Some(Self(bytes)),
            None => None,
        }
    }

    /// Subtracts `rhs`, returning `None` if the result would be negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_memory::volume::MemoryVolume;
    ///
    /// let kb = MemoryVolume::KILOBYTE;
    /// assert_eq!(kb.checked_sub(MemoryVolume::BYTE), Some(MemoryVolume::from_bytes(1023)));
    /// assert_eq!(MemoryVolume::BYTE.checked_sub(kb), None);
    /// ```
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(bytes) => Some(Self(bytes)),
            None => None,
        }
    }

    /// Adds two volumes, clamping at [`MemoryVolume::MAX`].
    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtracts `rhs`, clamping at [`MemoryVolume::ZERO`].
    #[inline]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Scales the volume by `scalar`, truncating fractional bytes toward zero.
    ///
    /// Fails with [`ArithmeticError::Overflow`] when the product exceeds
    /// `u64::MAX` bytes, [`ArithmeticError::NegativeResult`] when a negative
    /// scalar yields a product below zero after truncation, and
    /// [`ArithmeticError::NotFinite`] for NaN scalars or products.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_memory::{scalar::ArithmeticError, volume::MemoryVolume};
    /// # use rust_decimal::Decimal;
    ///
    /// let kb = MemoryVolume::KILOBYTE;
    /// assert_eq!(kb.checked_mul(3u32), Ok(MemoryVolume::from_bytes(3072)));
    /// assert_eq!(kb.checked_mul(0.5f64), Ok(MemoryVolume::from_bytes(512)));
    /// assert_eq!(kb.checked_mul(Decimal::new(15, 1)), Ok(MemoryVolume::from_bytes(1536)));
    /// assert_eq!(kb.checked_mul(-1i32), Err(ArithmeticError::NegativeResult));
    /// assert_eq!(MemoryVolume::MAX.checked_mul(2u8), Err(ArithmeticError::Overflow));
    /// ```
    #[inline]
    pub fn checked_mul<S>(self, scalar: S) -> Result<Self, ArithmeticError>
    where
        S: Scalar,
    {
        scalar.scale(self.0).map(Self)
    }

    /// Divides the volume by `scalar`, truncating toward zero.
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] for a zero divisor and
    /// otherwise under the same conditions as [`MemoryVolume::checked_mul`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_memory::{scalar::ArithmeticError, volume::MemoryVolume};
    ///
    /// let v = MemoryVolume::from_bytes(10);
    /// assert_eq!(v.checked_div(3u64), Ok(MemoryVolume::from_bytes(3)));
    /// assert_eq!(v.checked_div(0.25f32), Ok(MemoryVolume::from_bytes(40)));
    /// assert_eq!(v.checked_div(0i64), Err(ArithmeticError::DivisionByZero));
    /// ```
    #[inline]
    pub fn checked_div<S>(self, scalar: S) -> Result<Self, ArithmeticError>
    where
        S: Scalar,
    {
        scalar.divide(self.0).map(Self)
    }

    /// Scales the volume by `scalar`, clamping instead of failing.
    ///
    /// Overflow clamps to [`MemoryVolume::MAX`]; negative and NaN results
    /// clamp to [`MemoryVolume::ZERO`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_memory::volume::MemoryVolume;
    ///
    /// assert_eq!(MemoryVolume::TERABYTE.saturating_mul(u64::MAX), MemoryVolume::MAX);
    /// assert_eq!(MemoryVolume::TERABYTE.saturating_mul(-2i8), MemoryVolume::ZERO);
    /// assert_eq!(MemoryVolume::BYTE.saturating_mul(f64::NAN), MemoryVolume::ZERO);
    /// ```
    pub fn saturating_mul<S>(self, scalar: S) -> Self
    where
        S: Scalar,
    {
        match self.checked_mul(scalar) {
            Ok(volume) => volume,
            Err(ArithmeticError::Overflow) => Self::MAX,
            Err(_) => Self::ZERO,
        }
    }

    /// Returns the floating-point ratio `self / other`.
    ///
    /// Follows IEEE semantics for a zero divisor: a non-zero volume divided by
    /// zero is `+inf`, and zero divided by zero is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_memory::volume::MemoryVolume;
    ///
    /// assert_eq!(MemoryVolume::MEGABYTE.ratio(MemoryVolume::KILOBYTE), 1024.0);
    /// assert!(MemoryVolume::BYTE.ratio(MemoryVolume::ZERO).is_infinite());
    /// assert!(MemoryVolume::ZERO.ratio(MemoryVolume::ZERO).is_nan());
    /// ```
    #[inline]
    pub fn ratio(self, other: Self) -> f64 {
        self.0 as f64 / other.0 as f64
    }
}

impl From<u64> for MemoryVolume {
    #[inline]
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl From<MemoryVolume> for u64 {
    #[inline]
    fn from(volume: MemoryVolume) -> Self {
        volume.0
    }
}

impl From<MemoryUnit> for MemoryVolume {
    #[inline]
    fn from(unit: MemoryUnit) -> Self {
        unit.volume()
    }
}

impl std::fmt::Debug for MemoryVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MemoryVolume({} bytes)", self.0)
    }
}

impl std::fmt::Display for MemoryVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = self.display_unit();
        write!(f, "{}{}", self.whole_units(unit), unit.suffix())
    }
}
