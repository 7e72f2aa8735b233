use crate::numeric::DayValue;
use crate::{SolError, SolResult};

/// Validates an integral (day number, day fraction) input pair.
///
/// The day number is checked first:
///
/// - [`SolError::NotAnInteger`] if `day_number` has a fractional part
/// - [`SolError::FractionOutOfRange`] unless `0 <= day_fraction < 1`
///
/// NaN fails both checks. Nothing is clamped.
pub fn validate_dn<T: DayValue>(day_number: &T, day_fraction: &T) -> SolResult<()> {
    if !day_number.is_whole() {
        tracing::debug!(%day_number, "rejected non-integral day number");
        return Err(SolError::not_an_integer(day_number));
    }

    if !(*day_fraction >= T::zero() && *day_fraction < T::one()) {
        tracing::debug!(%day_fraction, "rejected day fraction outside [0, 1)");
        return Err(SolError::fraction_out_of_range(day_fraction));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Rational64;

    #[test]
    fn test_validate_dn_valid() {
        assert!(validate_dn(&5.0, &0.2).is_ok());
        assert!(validate_dn(&-300000.0, &0.0).is_ok());
        assert!(validate_dn(&0.0, &0.999_999_999).is_ok());
    }

    #[test]
    fn test_validate_dn_not_an_integer() {
        let result = validate_dn(&5.5, &0.2);
        if let Err(SolError::NotAnInteger { value }) = result {
            assert_eq!(value, "5.5");
        } else {
            panic!("Expected NotAnInteger, got {:?}", result);
        }
    }

    #[test]
    fn test_validate_dn_fraction_out_of_range() {
        assert!(matches!(
            validate_dn(&5.0, &1.0),
            Err(SolError::FractionOutOfRange { .. })
        ));
        assert!(matches!(
            validate_dn(&5.0, &-0.25),
            Err(SolError::FractionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_dn_checks_number_first() {
        assert!(matches!(
            validate_dn(&5.5, &1.5),
            Err(SolError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn test_validate_dn_not_finite() {
        assert!(matches!(
            validate_dn(&f64::NAN, &0.0),
            Err(SolError::NotAnInteger { .. })
        ));
        assert!(matches!(
            validate_dn(&f64::INFINITY, &0.0),
            Err(SolError::NotAnInteger { .. })
        ));
        assert!(matches!(
            validate_dn(&1.0, &f64::NAN),
            Err(SolError::FractionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_dn_rational() {
        let n = Rational64::from_integer(200_000);
        assert!(validate_dn(&n, &Rational64::new(1, 8)).is_ok());
        assert!(matches!(
            validate_dn(&Rational64::new(11, 2), &Rational64::new(1, 5)),
            Err(SolError::NotAnInteger { value }) if value == "11/2"
        ));
        assert!(matches!(
            validate_dn(&n, &Rational64::from_integer(1)),
            Err(SolError::FractionOutOfRange { .. })
        ));
    }
}
