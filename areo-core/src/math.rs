use crate::numeric::DayValue;

/// Splits a sol count into its floor and the fraction of a sol past it.
///
/// The floor is toward negative infinity, so `-0.25` splits to `(-1, 0.75)`.
/// Rational inputs split exactly. For `f64`, `x - floor(x)` can round up to
/// exactly `1.0` for tiny negative `x`; that case is carried into the next
/// day so the fraction always stays in `[0, 1)`.
///
/// ```
/// use areo_core::math::split_day;
///
/// assert_eq!(split_day(&-300000.25_f64), (-300001.0, 0.75));
/// assert_eq!(split_day(&-1e-20_f64), (0.0, 0.0));
/// ```
#[inline]
pub fn split_day<T: DayValue>(x: &T) -> (T, T) {
    let number = x.floor_day();
    let fraction = x.clone() - number.clone();
    if fraction >= T::one() {
        return (number + T::one(), T::zero());
    }
    (number, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Rational64;

    #[test]
    fn test_split_positive() {
        assert_eq!(split_day(&46236.625_f64), (46236.0, 0.625));
        assert_eq!(split_day(&7.0_f64), (7.0, 0.0));
    }

    #[test]
    fn test_split_negative_uses_floor() {
        assert_eq!(split_day(&-0.5_f64), (-1.0, 0.5));
        assert_eq!(split_day(&-905871.25_f64), (-905872.0, 0.75));
        assert_eq!(split_day(&-3.0_f64), (-3.0, 0.0));
    }

    #[test]
    fn test_split_carries_rounded_fraction() {
        let (n, f) = split_day(&-1e-20_f64);
        assert_eq!(n, 0.0);
        assert_eq!(f, 0.0);
    }

    #[test]
    fn test_split_rational_exact() {
        let x = Rational64::new(-2_000_001, 8);
        let (n, f) = split_day(&x);
        assert_eq!(n, Rational64::from_integer(-250_001));
        assert_eq!(f, Rational64::new(7, 8));
        assert_eq!(n + f, x);
    }
}
