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

use std::{
    fmt::{Debug, Display},
    ops::{Bound, RangeBounds, RangeInclusive},
};
use thiserror::Error;

/// The error returned when an interval is constructed with `left > right`.
///
/// Both offending bounds are kept so callers can report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("Invalid interval: left bound {left} is greater than right bound {right}")]
pub struct InvalidBoundsError<T> {
    /// The rejected left bound.
    pub left: T,
    /// The rejected right bound.
    pub right: T,
}

/// A closed interval `[left, right]` over any totally ordered type.
///
/// The interval is immutable. Its only construction paths validate the bounds,
/// so a value of this type always satisfies its invariant.
///
/// # Invariants
/// `left` must always be less than or equal to `right`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedInterval<T>
where
    T: Ord,
{
    left: T,
    right: T,
}

impl<T> BoundedInterval<T>
where
    T: Ord,
{
    /// Creates a new `BoundedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `left > right`. The panic message names both bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_core::math::interval::BoundedInterval;
    ///
    /// let iv = BoundedInterval::new(3, 7);
    /// assert_eq!(iv.left(), &3);
    /// assert_eq!(iv.right(), &7);
    /// ```
    #[inline]
    pub fn new(left: T, right: T) -> Self
    where
        T: Debug,
    {
        assert!(
            left <= right,
            "Invalid interval: left bound {:?} is greater than right bound {:?}",
            left,
            right
        );
        Self { left, right }
    }

    /// Creates a new `BoundedInterval` if the bounds are ordered.
    ///
    /// Equal bounds are accepted and produce a single-point interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_core::math::interval::BoundedInterval;
    ///
    /// assert!(BoundedInterval::try_new(3, 3).is_ok());
    ///
    /// let err = BoundedInterval::try_new(5, 3).unwrap_err();
    /// assert_eq!(err.left, 5);
    /// assert_eq!(err.right, 3);
    /// ```
    pub fn try_new(left: T, right: T) -> Result<Self, InvalidBoundsError<T>> {
        if left <= right {
            Ok(Self { left, right })
        } else {
            tracing::debug!("rejected interval with inverted bounds");
            Err(InvalidBoundsError { left, right })
        }
    }

    /// Creates a new `BoundedInterval` from a `(left, right)` pair.
    ///
    /// Applies the same validation as [`BoundedInterval::try_new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_core::math::interval::BoundedInterval;
    ///
    /// let iv = BoundedInterval::from_pair((1, 2)).unwrap();
    /// assert_eq!(iv.to_string(), "[1, 2]");
    /// ```
    #[inline]
    pub fn from_pair(pair: (T, T)) -> Result<Self, InvalidBoundsError<T>> {
        Self::try_new(pair.0, pair.1)
    }

    /// Creates a new `BoundedInterval` without checking the invariant in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `left <= right`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(left: T, right: T) -> Self {
        debug_assert!(
            left <= right,
            "Invalid interval: left bound must be less than or equal to right bound"
        );
        Self { left, right }
    }

    /// Returns the left (lower) bound.
    #[inline]
    pub const fn left(&self) -> &T {
        &self.left
    }

    /// Returns the right (upper) bound.
    #[inline]
    pub const fn right(&self) -> &T {
        &self.right
    }

    /// Consumes the interval and returns `(left, right)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_core::math::interval::BoundedInterval;
    ///
    /// let iv = BoundedInterval::new("a", "c");
    /// assert_eq!(iv.into_bounds(), ("a", "c"));
    /// ```
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.left, self.right)
    }

    /// Returns `true` if both bounds are equal.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.left == self.right
    }

    /// Returns `true` if `left <= value <= right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use exacta_core::math::interval::BoundedInterval;
    ///
    /// let iv = BoundedInterval::new(0, 10);
    /// assert!(iv.contains(&0));
    /// assert!(iv.contains(&10));
    /// assert!(!iv.contains(&11));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        &self.left <= value && value <= &self.right
    }
}

impl<T> Debug for BoundedInterval<T>
where
    T: Ord + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedInterval")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Display for BoundedInterval<T>
where
    T: Ord + Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

impl<T> RangeBounds<T> for BoundedInterval<T>
where
    T: Ord,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.left)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.right)
    }
}

impl<T> TryFrom<(T, T)> for BoundedInterval<T>
where
    T: Ord,
{
    type Error = InvalidBoundsError<T>;

    #[inline]
    fn try_from(pair: (T, T)) -> Result<Self, Self::Error> {
        Self::from_pair(pair)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for BoundedInterval<T>
where
    T: Ord,
{
    type Error = InvalidBoundsError<T>;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (left, right) = range.into_inner();
        Self::try_new(left, right)
    }
}

impl<T> From<BoundedInterval<T>> for RangeInclusive<T>
where
    T: Ord,
{
    #[inline]
    fn from(iv: BoundedInterval<T>) -> Self {
        iv.left..=iv.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = BoundedInterval::new(10, 20);
        assert_eq!(iv.left(), &10);
        assert_eq!(iv.right(), &20);
        assert!(!iv.is_degenerate());
    }

    #[test]
    fn test_construction_degenerate() {
        let iv = BoundedInterval::try_new(3, 3).expect("equal bounds are valid");
        assert!(iv.is_degenerate());
        assert_eq!(iv.to_string(), "[3, 3]");
    }

    #[test]
    fn test_try_new_rejects_inverted_bounds() {
        let err = BoundedInterval::try_new(5, 3).unwrap_err();
        assert_eq!(err, InvalidBoundsError { left: 5, right: 3 });
        assert_eq!(
            err.to_string(),
            "Invalid interval: left bound 5 is greater than right bound 3"
        );
    }

    #[test]
    #[should_panic(expected = "left bound 5 is greater than right bound 3")]
    fn test_new_panic() {
        BoundedInterval::new(5, 3);
    }

    #[test]
    fn test_from_pair_and_try_from() {
        assert_eq!(
            BoundedInterval::from_pair((1, 4)),
            Ok(BoundedInterval::new(1, 4))
        );
        let iv: Result<BoundedInterval<i32>, _> = (4, 1).try_into();
        assert!(iv.is_err());
    }

    #[test]
    fn test_non_copy_bounds() {
        let iv = BoundedInterval::try_new("alpha".to_string(), "beta".to_string()).unwrap();
        assert_eq!(iv.to_string(), "[alpha, beta]");
        assert!(iv.contains(&"alpine".to_string()));

        let err = BoundedInterval::try_new("z".to_string(), "a".to_string()).unwrap_err();
        assert_eq!(err.left, "z");
        assert_eq!(err.right, "a");
    }

    #[test]
    fn test_contains() {
        let iv = BoundedInterval::new(-5, 5);
        assert!(iv.contains(&-5)); // Inclusive left
        assert!(iv.contains(&0));
        assert!(iv.contains(&5)); // Inclusive right
        assert!(!iv.contains(&6));
        assert!(!iv.contains(&-6));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = BoundedInterval::new(0, 5);
        let b = BoundedInterval::new(0, 7);
        let c = BoundedInterval::new(1, 2);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_traits_display_debug() {
        let iv = BoundedInterval::new(10, 20);
        assert_eq!(format!("{}", iv), "[10, 20]");
        assert_eq!(
            format!("{:?}", iv),
            "BoundedInterval { left: 10, right: 20 }"
        );
    }

    #[test]
    fn test_range_bounds() {
        let iv = BoundedInterval::new(5, 10);

        match iv.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 5),
            _ => panic!("Wrong start bound"),
        }

        match iv.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 10),
            _ => panic!("Wrong end bound"),
        }
    }

    #[test]
    fn test_range_inclusive_conversions() {
        let iv = BoundedInterval::try_from(2..=8).unwrap();
        assert_eq!(iv.into_bounds(), (2, 8));

        let range: RangeInclusive<i32> = BoundedInterval::new(1, 3).into();
        assert_eq!(range.collect::<Vec<_>>(), vec![1, 2, 3]);

        assert!(BoundedInterval::try_from(8..=2).is_err());
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct Ticket(u32);

    #[test]
    fn test_validation_needs_only_ord() {
        let err = BoundedInterval::try_new(Ticket(5), Ticket(3)).unwrap_err();
        assert_eq!((err.left, err.right), (Ticket(5), Ticket(3)));

        let iv = BoundedInterval::from_pair((Ticket(1), Ticket(2))).unwrap();
        assert!(iv.contains(&Ticket(2)));
        assert!(BoundedInterval::try_from((Ticket(2), Ticket(1))).is_err());
        assert!(BoundedInterval::try_from(Ticket(0)..=Ticket(9)).is_ok());
    }
}
