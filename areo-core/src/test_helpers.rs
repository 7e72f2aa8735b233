use crate::math::split_day;
use crate::numeric::DayValue;

/// Position of `x` on a line where adjacent f64 values are one apart.
#[inline]
fn ordinal(x: f64) -> u64 {
    let bits = x.to_bits();
    if x.is_sign_negative() {
        !bits
    } else {
        bits | (1 << 63)
    }
}

/// Number of representable f64 values between `a` and `b`.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    ordinal(a).abs_diff(ordinal(b))
}

/// Spacing between `|x|` and the next f64 away from zero.
#[inline]
pub fn ulp_of(x: f64) -> f64 {
    let a = x.abs();
    f64::from_bits(a.to_bits() + 1) - a
}

/// ULP budget for comparing `a` with `b` after `roundings` roundings at
/// magnitudes up to `scale`.
///
/// A sol count that passed through an epoch offset of half a million sols
/// carries rounding error at that magnitude, however small the count is.
/// Each rounding moves the value by at most half an ULP of `scale`; the budget
/// counts that distance in ULPs of the smaller of `a` and `b`, where the f64
/// grid is finest. Values on opposite sides of zero get an unbounded budget.
pub fn ulp_budget(a: f64, b: f64, scale: f64, roundings: u64) -> u64 {
    if a.is_sign_negative() != b.is_sign_negative() {
        return u64::MAX;
    }
    let finest = ulp_of(a.abs().min(b.abs()));
    let per_rounding = (ulp_of(scale) / finest).ceil().max(1.0);
    roundings.saturating_mul(per_rounding as u64)
}

/// Asserts two sol counts agree to within `max_ulp` representable values.
///
/// Signed zeros compare equal.
#[track_caller]
pub fn assert_sols_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite sol count in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: {} and {} are {} ULP apart, budget {}",
        ctx,
        a,
        b,
        d,
        max_ulp
    );
}

/// Asserts `split_day(x)` recombines to `x` with a fraction in `[0, 1)`.
#[track_caller]
pub fn assert_split_consistent<T: DayValue>(x: &T) {
    let (n, f) = split_day(x);
    assert!(n.is_whole(), "floor of {} is not whole: {}", x, n);
    assert!(
        f >= T::zero() && f < T::one(),
        "fraction of {} out of range: {}",
        x,
        f
    );
    if T::EXACT {
        assert!(n.clone() + f.clone() == *x, "{} + {} != {}", n, f, x);
    }
}

#[macro_export]
macro_rules! assert_sols_ulp {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_sols_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "{} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_sols_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}
