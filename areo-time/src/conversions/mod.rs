//! Conversions between sol counts.
//!
//! Every conversion is the same linear map, instantiated per ordered pair of
//! flavours:
//!
//! ```text
//! to = from + epoch_delta              (zone-relativeness unchanged)
//! to = from + epoch_delta + zone       (MSD/JS -> CMSD)
//! to = from + epoch_delta - zone       (CMSD -> MSD/JS)
//!
//! epoch_delta = epoch_offset_msd(from) - epoch_offset_msd(to)
//! ```
//!
//! A [`Conversion`] is the plan for one pair, built in `const` context from the
//! [flavour table](crate::flavour::FLAVOURS). The named entry points in
//! [`named`] are thin wrappers over it; callers choosing flavours at runtime
//! use the plan directly.
//!
//! # Day Fractions in Integral→Integral Conversions
//!
//! When the epoch delta is a whole number of sols and no zone offset is
//! involved, day boundaries of the two counts coincide and a day number alone
//! maps to a day number, so the fraction may be omitted. For any other pair
//! the destination day depends on the time of day, and omitting the fraction
//! is a [`MissingDayFraction`](areo_core::SolError::MissingDayFraction) error.
//!
//! # Usage
//!
//! ```
//! use areo_time::{Conversion, Flavour};
//!
//! let plan = Conversion::new(Flavour::Msd, Flavour::Cmsd);
//! let cmsd = plan.convert(46236.625, Some(0.03125)).unwrap();
//! assert_eq!(cmsd, 546236.65625);
//!
//! // Zone offsets are ignored when zone-relativeness is unchanged.
//! let js = Conversion::new(Flavour::Msd, Flavour::Js)
//!     .convert(46236.625, Some(0.5))
//!     .unwrap();
//! assert_eq!(js, 140365.625);
//! ```
//!
//! # Precision
//!
//! With `Rational64` or `BigRational` inputs every conversion and split is
//! exact. With `f64` the sum is rounded once per addition; a count that lands
//! within an ULP of a day boundary can split onto either side of it.

pub mod named;

use crate::epoch::EpochOffset;
use crate::flavour::Flavour;
use crate::split::SolSplit;
use areo_core::{validate_dn, DayValue, SolError, SolResult};

/// How the zone offset enters a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneShift {
    /// Both counts share zone-relativeness; no offset is used.
    None,
    /// Into a zone-relative count: the offset is added.
    Add,
    /// Out of a zone-relative count: the offset is subtracted.
    Subtract,
}

/// The conversion plan for one ordered pair of flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Conversion {
    from: Flavour,
    to: Flavour,
    epoch_delta: EpochOffset,
    zone_shift: ZoneShift,
}

impl Conversion {
    pub const fn new(from: Flavour, to: Flavour) -> Self {
        let zone_shift = match (from.is_zone_relative(), to.is_zone_relative()) {
            (false, true) => ZoneShift::Add,
            (true, false) => ZoneShift::Subtract,
            _ => ZoneShift::None,
        };
        Self {
            from,
            to,
            epoch_delta: from.epoch_offset_msd().minus(to.epoch_offset_msd()),
            zone_shift,
        }
    }

    pub const fn source(&self) -> Flavour {
        self.from
    }

    pub const fn target(&self) -> Flavour {
        self.to
    }

    /// Sols added to a `from` count to express it in `to`, before any zone offset.
    pub const fn epoch_delta(&self) -> EpochOffset {
        self.epoch_delta
    }

    pub const fn zone_shift(&self) -> ZoneShift {
        self.zone_shift
    }

    /// `true` if this pair consumes a zone offset.
    pub const fn needs_zone(&self) -> bool {
        !matches!(self.zone_shift, ZoneShift::None)
    }

    /// `true` if day boundaries of both counts coincide, so integral→integral
    /// conversion may omit the day fraction.
    pub const fn is_boundary_aligned(&self) -> bool {
        self.epoch_delta.is_whole() && !self.needs_zone()
    }

    /// Converts a fractional count.
    ///
    /// `zone` is required if [`needs_zone`](Self::needs_zone), and ignored otherwise.
    pub fn convert<T: DayValue>(&self, count: T, zone: Option<T>) -> SolResult<T> {
        let zone = self.require_zone(zone)?;
        Ok(self.shift(count, zone))
    }

    /// Converts a fractional count and splits it at the destination's day boundary.
    pub fn convert_n<T: DayValue>(&self, count: T, zone: Option<T>) -> SolResult<SolSplit<T>> {
        let zone = self.require_zone(zone)?;
        Ok(self.shift_split(count, zone))
    }

    /// Converts an integral (number, fraction) pair to a fractional count.
    pub fn convert_from_n<T: DayValue>(
        &self,
        number: T,
        fraction: T,
        zone: Option<T>,
    ) -> SolResult<T> {
        let zone = self.require_zone(zone)?;
        self.shift_from_n(number, fraction, zone)
    }

    /// Converts an integral pair to an integral pair.
    ///
    /// `fraction` may be `None` only for [boundary-aligned](Self::is_boundary_aligned)
    /// pairs, where it defaults to zero.
    pub fn convert_nn<T: DayValue>(
        &self,
        number: T,
        fraction: Option<T>,
        zone: Option<T>,
    ) -> SolResult<SolSplit<T>> {
        let zone = self.require_zone(zone)?;
        self.shift_nn(number, fraction, zone)
    }

    fn require_zone<T: DayValue>(&self, zone: Option<T>) -> SolResult<Option<T>> {
        tracing::trace!(from = %self.from, to = %self.to, "sol count conversion");
        match (self.needs_zone(), zone) {
            (true, None) => {
                tracing::debug!(from = %self.from, to = %self.to, "zone offset missing");
                Err(SolError::missing_zone_offset(self.from, self.to))
            }
            (true, zone) => Ok(zone),
            (false, _) => Ok(None),
        }
    }

    /// The conversion arithmetic. `zone` must already match [`needs_zone`](Self::needs_zone).
    pub(crate) fn shift<T: DayValue>(&self, count: T, zone: Option<T>) -> T {
        debug_assert_eq!(zone.is_some(), self.needs_zone());
        let shifted = count + self.epoch_delta.to_day_value::<T>();
        match (self.zone_shift, zone) {
            (ZoneShift::Add, Some(zone)) => shifted + zone,
            (ZoneShift::Subtract, Some(zone)) => shifted - zone,
            _ => shifted,
        }
    }

    pub(crate) fn shift_split<T: DayValue>(&self, count: T, zone: Option<T>) -> SolSplit<T> {
        SolSplit::from_count(&self.shift(count, zone))
    }

    pub(crate) fn shift_from_n<T: DayValue>(
        &self,
        number: T,
        fraction: T,
        zone: Option<T>,
    ) -> SolResult<T> {
        validate_dn(&number, &fraction)?;
        Ok(self.shift(number + fraction, zone))
    }

    pub(crate) fn shift_nn<T: DayValue>(
        &self,
        number: T,
        fraction: Option<T>,
        zone: Option<T>,
    ) -> SolResult<SolSplit<T>> {
        let fraction = match fraction {
            Some(fraction) => fraction,
            None if self.is_boundary_aligned() => T::zero(),
            None => {
                tracing::debug!(from = %self.from, to = %self.to, "day fraction missing");
                return Err(SolError::missing_day_fraction(self.from, self.to));
            }
        };
        let count = self.shift_from_n(number, fraction, zone)?;
        Ok(SolSplit::from_count(&count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Rational64;

    #[test]
    fn test_epoch_deltas() {
        let delta = |from, to| Conversion::new(from, to).epoch_delta();
        assert_eq!(delta(Flavour::Msd, Flavour::Js), EpochOffset::whole(94_129));
        assert_eq!(delta(Flavour::Js, Flavour::Msd), EpochOffset::whole(-94_129));
        assert_eq!(delta(Flavour::Msd, Flavour::Cmsd), EpochOffset::whole(500_000));
        assert_eq!(delta(Flavour::Js, Flavour::Cmsd), EpochOffset::whole(405_871));
        for flavour in Flavour::ALL {
            assert_eq!(delta(flavour, flavour), EpochOffset::ZERO);
        }
    }

    #[test]
    fn test_plan_records_pair() {
        let plan = Conversion::new(Flavour::Cmsd, Flavour::Js);
        assert_eq!(plan.source(), Flavour::Cmsd);
        assert_eq!(plan.target(), Flavour::Js);
        assert!(plan.needs_zone());
        assert!(!plan.is_boundary_aligned());
    }

    #[test]
    fn test_zone_shift_directions() {
        assert_eq!(
            Conversion::new(Flavour::Js, Flavour::Cmsd).zone_shift(),
            ZoneShift::Add
        );
        assert_eq!(
            Conversion::new(Flavour::Cmsd, Flavour::Msd).zone_shift(),
            ZoneShift::Subtract
        );
        assert_eq!(
            Conversion::new(Flavour::Cmsd, Flavour::Cmsd).zone_shift(),
            ZoneShift::None
        );
        assert_eq!(
            Conversion::new(Flavour::Msd, Flavour::Js).zone_shift(),
            ZoneShift::None
        );
    }

    #[test]
    fn test_boundary_alignment() {
        for from in Flavour::ALL {
            for to in Flavour::ALL {
                let plan = Conversion::new(from, to);
                assert_eq!(
                    plan.is_boundary_aligned(),
                    from.is_zone_relative() == to.is_zone_relative(),
                    "{} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_convert_requires_zone_when_crossing() {
        let plan = Conversion::new(Flavour::Msd, Flavour::Cmsd);
        assert_eq!(
            plan.convert(46236.625, None),
            Err(SolError::missing_zone_offset("MSD", "CMSD"))
        );
    }

    #[test]
    fn test_convert_ignores_zone_for_identity() {
        let plan = Conversion::new(Flavour::Cmsd, Flavour::Cmsd);
        assert_eq!(plan.convert(199999.875, Some(0.125)), Ok(199999.875));
        assert_eq!(plan.convert(199999.875, None), Ok(199999.875));
    }

    #[test]
    fn test_convert_nn_default_fraction() {
        let plan = Conversion::new(Flavour::Msd, Flavour::Msd);
        let split = plan.convert_nn(-300000.0, None, None).unwrap();
        assert_eq!(split.into_parts(), (-300000.0, 0.0));

        let plan = Conversion::new(Flavour::Cmsd, Flavour::Msd);
        assert_eq!(
            plan.convert_nn(200000.0, None, Some(0.125)),
            Err(SolError::missing_day_fraction("CMSD", "MSD"))
        );
    }

    #[test]
    fn test_convert_nn_checks_zone_before_fraction() {
        let plan = Conversion::new(Flavour::Cmsd, Flavour::Js);
        assert!(matches!(
            plan.convert_nn(200000.0, None, None),
            Err(SolError::MissingZoneOffset { .. })
        ));
    }

    #[test]
    fn test_convert_from_n_validates() {
        let plan = Conversion::new(Flavour::Js, Flavour::Msd);
        assert!(matches!(
            plan.convert_from_n(5.5, 0.2, None),
            Err(SolError::NotAnInteger { .. })
        ));
        assert!(matches!(
            plan.convert_from_n(5.0, 1.0, None),
            Err(SolError::FractionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rational_conversion_is_exact() {
        let plan = Conversion::new(Flavour::Cmsd, Flavour::Js);
        let cmsd = Rational64::new(1_599_999, 8);
        let zone = Rational64::new(1, 8);
        let js = plan.convert(cmsd, Some(zone)).unwrap();
        assert_eq!(js, Rational64::new(-1_646_970, 8));
    }
}
