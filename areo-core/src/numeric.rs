//! Numeric representations for sol counts.
//!
//! Conversions are written once against [`DayValue`] and run on either of two
//! representations:
//!
//! | Type | Exact? | Notes |
//! |------|--------|-------|
//! | `f64` | No | Fast; results near a day boundary can round to the wrong side |
//! | [`Rational64`](num_rational::Rational64) | Yes | Panics on i64 overflow inside `num-rational` |
//! | [`BigRational`](num_rational::BigRational) | Yes | Unbounded |
//!
//! Every conversion returns the same type it was given, so an exact input can
//! never come back as a float.
//!
//! # Example
//!
//! ```
//! use areo_core::DayValue;
//! use num_rational::Rational64;
//!
//! let half = Rational64::from_ratio(1, 2);
//! assert_eq!(half.floor_day(), Rational64::from_ratio(0, 1));
//! assert!(!half.is_whole());
//!
//! let x = -2.25_f64;
//! assert_eq!(x.floor_day(), -3.0);
//! ```

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Signed, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Add, Sub};

/// A real number usable as a sol count, day number, day fraction or zone offset.
///
/// Implementors must give a true mathematical floor (toward negative infinity),
/// never truncation toward zero.
pub trait DayValue:
    Clone + Debug + Display + PartialOrd + Zero + One + Add<Output = Self> + Sub<Output = Self>
{
    /// `true` when arithmetic on this type is exact.
    const EXACT: bool;

    /// Builds `numer / denom` in this representation.
    ///
    /// Exact for rational types; for floats this is a single division.
    fn from_ratio(numer: i64, denom: i64) -> Self;

    /// Greatest integer not above `self`, in this representation.
    fn floor_day(&self) -> Self;

    /// `true` if `self` has no fractional part. NaN and infinities are not whole.
    fn is_whole(&self) -> bool;
}

impl DayValue for f64 {
    const EXACT: bool = false;

    #[inline]
    fn from_ratio(numer: i64, denom: i64) -> Self {
        numer as f64 / denom as f64
    }

    #[inline]
    fn floor_day(&self) -> Self {
        self.floor()
    }

    #[inline]
    fn is_whole(&self) -> bool {
        self.is_finite() && self.fract() == 0.0
    }
}

impl<I> DayValue for Ratio<I>
where
    I: Clone + Debug + Display + Integer + Signed + From<i64>,
{
    const EXACT: bool = true;

    #[inline]
    fn from_ratio(numer: i64, denom: i64) -> Self {
        Ratio::new(I::from(numer), I::from(denom))
    }

    #[inline]
    fn floor_day(&self) -> Self {
        self.floor()
    }

    #[inline]
    fn is_whole(&self) -> bool {
        self.is_integer()
    }
}
