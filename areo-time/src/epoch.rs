//! Exact epoch offsets between sol counts.
//!
//! Offsets are kept as reduced `i64` ratios so the same flavour table serves
//! both `f64` and rational conversions. A delta built from two offsets is
//! computed in `const` context, once per ordered flavour pair.

use areo_core::DayValue;
use std::fmt;

/// A rational number of sols, `numer / denom`, with `denom > 0` and the
/// fraction in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EpochOffset {
    numer: i64,
    denom: i64,
}

const fn gcd(mut a: i64, mut b: i64) -> i64 {
    if a < 0 {
        a = -a;
    }
    if b < 0 {
        b = -b;
    }
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl EpochOffset {
    pub const ZERO: Self = Self::whole(0);

    /// An offset of a whole number of sols.
    pub const fn whole(sols: i64) -> Self {
        Self {
            numer: sols,
            denom: 1,
        }
    }

    /// An offset of `numer / denom` sols.
    ///
    /// Panics if `denom` is zero; in a `const` this is a compile error.
    pub const fn new(numer: i64, denom: i64) -> Self {
        assert!(denom != 0, "epoch offset denominator must be non-zero");
        let (mut numer, mut denom) = if denom < 0 {
            (-numer, -denom)
        } else {
            (numer, denom)
        };
        let g = gcd(numer, denom);
        if g > 1 {
            numer /= g;
            denom /= g;
        }
        Self { numer, denom }
    }

    pub const fn numer(&self) -> i64 {
        self.numer
    }

    pub const fn denom(&self) -> i64 {
        self.denom
    }

    /// `self - other`, exactly.
    pub const fn minus(self, other: Self) -> Self {
        Self::new(
            self.numer * other.denom - other.numer * self.denom,
            self.denom * other.denom,
        )
    }

    /// `true` if the offset is a whole number of sols, i.e. day boundaries of
    /// the two counts line up.
    pub const fn is_whole(&self) -> bool {
        self.denom == 1
    }

    /// The offset in the caller's numeric representation.
    #[inline]
    pub fn to_day_value<T: DayValue>(&self) -> T {
        T::from_ratio(self.numer, self.denom)
    }
}

impl fmt::Display for EpochOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
