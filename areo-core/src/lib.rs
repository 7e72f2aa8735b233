//! Numeric foundations for Mars sol-count arithmetic.
//!
//! `areo-core` holds everything the conversion engine in `areo-time` needs
//! that is not specific to a particular count: the numeric abstraction, the
//! floor/fraction split, input validation and the shared error type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`numeric`] | [`DayValue`] trait over `f64` and `num_rational::Ratio` |
//! | [`math`] | [`split_day`](math::split_day): floor plus fraction in `[0, 1)` |
//! | [`validate`] | [`validate_dn`](validate::validate_dn) for integral inputs |
//! | [`constants`] | Epochs of MSD, JS and CMSD expressed as MSD |
//! | [`errors`] | [`SolError`] and [`SolResult`] |
//!
//! # Exact and Approximate Counts
//!
//! ```
//! use areo_core::math::split_day;
//! use num_rational::Rational64;
//!
//! // Floating point: fast, subject to representation error.
//! assert_eq!(split_day(&-300000.25_f64), (-300001.0, 0.75));
//!
//! // Rational: exact to the ratio.
//! let x = Rational64::new(-1_200_001, 4);
//! assert_eq!(
//!     split_day(&x),
//!     (Rational64::from_integer(-300_001), Rational64::new(3, 4))
//! );
//! ```

pub mod constants;
pub mod errors;
pub mod math;
pub mod numeric;
pub mod validate;

pub use errors::{SolError, SolResult};
pub use math::split_day;
pub use numeric::DayValue;
pub use validate::validate_dn;

pub mod test_helpers;
