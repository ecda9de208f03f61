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

//! Numeric kinds a memory volume can be scaled or divided by.
//!
//! Every kind maps a byte count to a new byte count under one policy:
//! the exact result is truncated toward zero, and only then checked for
//! sign and range. A negative product that truncates to zero is therefore
//! a valid (empty) volume, while anything below zero or above `u64::MAX`
//! is reported as an [`ArithmeticError`].
//!
//! - Integers (`u8`..`u64`, `usize`, `i8`..`i64`, `isize`) are widened to
//!   `i128` before the product is taken.
//! - Floats (`f32`, `f64`) are converted to `Decimal` with their binary
//!   value retained and then follow the `Decimal` rules, so byte counts above
//!   2^53 are not rounded. NaN, infinities and magnitudes beyond `Decimal`'s
//!   range are evaluated in `f64`, where the outcome is already decided.
//! - `Decimal` is evaluated in `rust_decimal`'s 96-bit fixed-point
//!   representation.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// The ways scaling or dividing a memory volume can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// The result exceeds `u64::MAX` bytes.
    #[error("arithmetic overflow: result exceeds {} bytes", u64::MAX)]
    Overflow,
    /// The result is below zero after truncation.
    #[error("negative result: a memory volume cannot be negative")]
    NegativeResult,
    /// The divisor is zero.
    #[error("division of a memory volume by zero")]
    DivisionByZero,
    /// The scalar or the result is NaN.
    #[error("scalar or result is not a number")]
    NotFinite,
}

/// A numeric kind that can scale or divide a byte count.
///
/// Implemented for the primitive integers up to 64 bits, both float widths,
/// and [`rust_decimal::Decimal`].
pub trait Scalar: Copy {
    /// Returns `bytes * self`, truncated toward zero.
    fn scale(self, bytes: u64) -> Result<u64, ArithmeticError>;

    /// Returns `bytes / self`, truncated toward zero.
    fn divide(self, bytes: u64) -> Result<u64, ArithmeticError>;
}

#[inline]
fn narrow_wide(value: i128) -> Result<u64, ArithmeticError> {
    if value < 0 {
        return Err(ArithmeticError::NegativeResult);
    }
    u64::try_from(value).map_err(|_| ArithmeticError::Overflow)
}

#[inline]
fn narrow_float(value: f64) -> Result<u64, ArithmeticError> {
    if value.is_nan() {
        return Err(ArithmeticError::NotFinite);
    }
    let truncated = value.trunc();
    if truncated < 0.0 {
        return Err(ArithmeticError::NegativeResult);
    }
    if truncated == 0.0 {
        return Ok(0);
    }
    truncated.to_u64().ok_or(ArithmeticError::Overflow)
}

#[inline]
fn narrow_decimal(value: Decimal) -> Result<u64, ArithmeticError> {
    let truncated = value.trunc();
    if truncated.is_zero() {
        return Ok(0);
    }
    if truncated.is_sign_negative() {
        return Err(ArithmeticError::NegativeResult);
    }
    truncated.to_u64().ok_or(ArithmeticError::Overflow)
}

macro_rules! scalar_impl_int {
    ($t:ty) => {
        impl Scalar for $t {
            #[inline(always)]
            fn scale(self, bytes: u64) -> Result<u64, ArithmeticError> {
                (bytes as i128)
                    .checked_mul(self as i128)
                    .ok_or(ArithmeticError::Overflow)
                    .and_then(narrow_wide)
            }

            #[inline(always)]
            fn divide(self, bytes: u64) -> Result<u64, ArithmeticError> {
                if self == 0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                narrow_wide(bytes as i128 / self as i128)
            }
        }
    };
}

scalar_impl_int!(u8);
scalar_impl_int!(u16);
scalar_impl_int!(u32);
scalar_impl_int!(u64);
scalar_impl_int!(usize);

scalar_impl_int!(i8);
scalar_impl_int!(i16);
scalar_impl_int!(i32);
scalar_impl_int!(i64);
scalar_impl_int!(isize);

macro_rules! scalar_impl_float {
    ($t:ty) => {
        impl Scalar for $t {
            #[inline(always)]
            fn scale(self, bytes: u64) -> Result<u64, ArithmeticError> {
                let factor = f64::from(self);
                if !factor.is_finite() {
                    return narrow_float(bytes as f64 * factor);
                }
                match Decimal::from_f64_retain(factor) {
                    Some(factor) => factor.scale(bytes),
                    None => narrow_float(bytes as f64 * factor),
                }
            }

            #[inline(always)]
            fn divide(self, bytes: u64) -> Result<u64, ArithmeticError> {
                let divisor = f64::from(self);
                if divisor.is_nan() {
                    return Err(ArithmeticError::NotFinite);
                }
                if divisor == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                // A divisor that underflows to a zero `Decimal` is still non-zero.
                match Decimal::from_f64_retain(divisor) {
                    Some(divisor) if !divisor.is_zero() => divisor.divide(bytes),
                    _ => narrow_float(bytes as f64 / divisor),
                }
            }
        }
    };
}

scalar_impl_float!(f32);
scalar_impl_float!(f64);

impl Scalar for Decimal {
    #[inline]
    fn scale(self, bytes: u64) -> Result<u64, ArithmeticError> {
        Decimal::from(bytes)
            .checked_mul(self)
            .ok_or(ArithmeticError::Overflow)
            .and_then(narrow_decimal)
    }

    #[inline]
    fn divide(self, bytes: u64) -> Result<u64, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Decimal::from(bytes)
            .checked_div(self)
            .ok_or(ArithmeticError::Overflow)
            .and_then(narrow_decimal)
    }
}
