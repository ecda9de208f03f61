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

//! Operator sugar over the checked arithmetic of [`MemoryVolume`].
//!
//! Operators panic where the checked methods return an error, in every build
//! profile. Use `checked_*` or `saturating_*` when the inputs are untrusted.

use crate::{scalar::Scalar, volume::MemoryVolume};
use rust_decimal::Decimal;
use std::{
    iter::Sum,
    ops::{Add, Div, Mul, Sub},
};

impl<S> Mul<S> for MemoryVolume
where
    S: Scalar,
{
    type Output = MemoryVolume;

    #[inline]
    fn mul(self, rhs: S) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(volume) => volume,
            Err(e) => panic!("attempt to multiply {:?}: {}", self, e),
        }
    }
}

impl<S> Div<S> for MemoryVolume
where
    S: Scalar,
{
    type Output = MemoryVolume;

    #[inline]
    fn div(self, rhs: S) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(volume) => volume,
            Err(e) => panic!("attempt to divide {:?}: {}", self, e),
        }
    }
}

/// Dividing two volumes yields their ratio, not a volume.
impl Div for MemoryVolume {
    type Output = f64;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.ratio(rhs)
    }
}

macro_rules! commutative_mul_impl {
    ($t:ty) => {
        impl Mul<MemoryVolume> for $t {
            type Output = MemoryVolume;

            #[inline(always)]
            fn mul(self, rhs: MemoryVolume) -> Self::Output {
                rhs * self
            }
        }
    };
}

commutative_mul_impl!(u8);
commutative_mul_impl!(u16);
commutative_mul_impl!(u32);
commutative_mul_impl!(u64);
commutative_mul_impl!(usize);

commutative_mul_impl!(i8);
commutative_mul_impl!(i16);
commutative_mul_impl!(i32);
commutative_mul_impl!(i64);
commutative_mul_impl!(isize);

commutative_mul_impl!(f32);
commutative_mul_impl!(f64);
commutative_mul_impl!(Decimal);

impl Add for MemoryVolume {
    type Output = MemoryVolume;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
            .unwrap_or_else(|| panic!("attempt to add {:?} to {:?} with overflow", rhs, self))
    }
}

impl Sub for MemoryVolume {
    type Output = MemoryVolume;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|| {
            panic!("attempt to subtract {:?} from {:?} with negative result", rhs, self)
        })
    }
}

impl Sum for MemoryVolume {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MemoryVolume::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a MemoryVolume> for MemoryVolume {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_times_1024_cubed_is_a_gigabyte() {
        let v = MemoryVolume::BYTE * 1024u32 * 1024u32 * 1024u32;
        assert_eq!(v, MemoryVolume::GIGABYTE);
    }

    #[test]
    fn test_scaling_is_commutative() {
        let v = MemoryVolume::from_bytes(1234);
        assert_eq!(3u8 * v, v * 3u8);
        assert_eq!(3i64 * v, v * 3i64);
        assert_eq!(2.5f64 * v, v * 2.5f64);
        assert_eq!(Decimal::new(75, 2) * v, v * Decimal::new(75, 2));
        assert_eq!(0.5f32 * v, MemoryVolume::from_bytes(617));
    }

    #[test]
    fn test_divide_by_scalar() {
        let v = MemoryVolume::MEGABYTE;
        assert_eq!(v / 1024u64, MemoryVolume::KILOBYTE);
        assert_eq!(v / 2.0f64, MemoryVolume::from_bytes(512 * 1024));
        assert_eq!(v / Decimal::new(4, 0), MemoryVolume::from_bytes(256 * 1024));
    }

    #[test]
    fn test_volume_ratio() {
        let ratio: f64 = MemoryVolume::GIGABYTE / MemoryVolume::MEGABYTE;
        assert_eq!(ratio, 1024.0);
        assert!((MemoryVolume::BYTE / MemoryVolume::ZERO).is_infinite());
    }

    #[test]
    fn test_ratio_times_divisor_recovers_dividend() {
        let pairs = [
            (MemoryVolume::from_bytes(20000), MemoryVolume::KILOBYTE),
            (MemoryVolume::from_bytes(7), MemoryVolume::from_bytes(3)),
            (MemoryVolume::TERABYTE, MemoryVolume::from_bytes(999)),
            (MemoryVolume::ZERO, MemoryVolume::BYTE),
        ];
        for (a, b) in pairs {
            let back = (a / b) * b;
            let diff = a.bytes().abs_diff(back.bytes());
            assert!(diff <= 1, "{a:?} / {b:?} came back as {back:?}");
        }
    }

    #[test]
    fn test_add_sub_sum() {
        let kb = MemoryVolume::KILOBYTE;
        assert_eq!(kb + kb, MemoryVolume::from_bytes(2048));
        assert_eq!(kb - MemoryVolume::BYTE, MemoryVolume::from_bytes(1023));

        let parts = [kb, kb, MemoryVolume::from_bytes(2048)];
        assert_eq!(parts.iter().sum::<MemoryVolume>(), MemoryVolume::from_bytes(4096));
        assert_eq!(
            parts.into_iter().sum::<MemoryVolume>(),
            MemoryVolume::from_bytes(4096)
        );
        assert_eq!(
            std::iter::empty::<MemoryVolume>().sum::<MemoryVolume>(),
            MemoryVolume::ZERO
        );
    }

    #[test]
    #[should_panic(expected = "division of a memory volume by zero")]
    fn test_div_by_zero_panics() {
        let _ = MemoryVolume::KILOBYTE / 0u32;
    }

    #[test]
    #[should_panic(expected = "arithmetic overflow")]
    fn test_mul_overflow_panics() {
        let _ = MemoryVolume::MAX * 2u8;
    }

    #[test]
    #[should_panic(expected = "negative result")]
    fn test_mul_negative_panics() {
        let _ = -1i32 * MemoryVolume::BYTE;
    }

    #[test]
    #[should_panic(expected = "with negative result")]
    fn test_sub_underflow_panics() {
        let _ = MemoryVolume::BYTE - MemoryVolume::KILOBYTE;
    }
}
