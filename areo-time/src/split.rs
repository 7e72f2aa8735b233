//! Integral sol counts: a whole day number plus the time of day.

use areo_core::{split_day, validate_dn, DayValue, SolResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// A sol count split at its flavour's day boundary.
///
/// `number` is a whole sol count and `fraction` lies in `[0, 1)`. Both are
/// carried in the caller's numeric type, so a rational split stays exact at
/// any magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SolSplit<T> {
    number: T,
    fraction: T,
}

impl<T: DayValue> SolSplit<T> {
    /// Builds a split from already-separated parts, rejecting a non-integral
    /// number or a fraction outside `[0, 1)`.
    pub fn new(number: T, fraction: T) -> SolResult<Self> {
        validate_dn(&number, &fraction)?;
        Ok(Self { number, fraction })
    }

    /// Splits a fractional sol count at its floor.
    pub fn from_count(count: &T) -> Self {
        let (number, fraction) = split_day(count);
        Self { number, fraction }
    }

    pub fn number(&self) -> &T {
        &self.number
    }

    pub fn fraction(&self) -> &T {
        &self.fraction
    }

    /// Recombines into a fractional sol count.
    pub fn value(&self) -> T {
        self.number.clone() + self.fraction.clone()
    }

    pub fn into_parts(self) -> (T, T) {
        (self.number, self.fraction)
    }

    pub fn into_number(self) -> T {
        self.number
    }
}

impl<T: fmt::Display> fmt::Display for SolSplit<T> {
    /// Formats as "{number}+{fraction}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.number, self.fraction)
    }
}

/// Deserialized splits go through [`SolSplit::new`], so the number must be
/// whole and the fraction in `[0, 1)`.
#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for SolSplit<T>
where
    T: DayValue + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawSolSplit<T> {
            number: T,
            fraction: T,
        }

        let raw = RawSolSplit::<T>::deserialize(d)?;
        Self::new(raw.number, raw.fraction).map_err(serde::de::Error::custom)
    }
}

impl<T> From<SolSplit<T>> for (T, T) {
    fn from(split: SolSplit<T>) -> Self {
        (split.number, split.fraction)
    }
}
