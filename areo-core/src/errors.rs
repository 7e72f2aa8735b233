//! Error types for sol-count conversions.
//!
//! Every failure in this workspace is an input error detected before any
//! arithmetic runs. None of them are transient, so there is no retry story:
//! the caller has to fix the arguments.
//!
//! # Error Categories
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`NotAnInteger`](SolError::NotAnInteger) | integral input with a fractional part |
//! | [`FractionOutOfRange`](SolError::FractionOutOfRange) | day fraction outside `[0, 1)` |
//! | [`MissingDayFraction`](SolError::MissingDayFraction) | integral→integral conversion across a day boundary shift |
//! | [`MissingZoneOffset`](SolError::MissingZoneOffset) | runtime conversion into or out of a zone-relative count |
//! | [`UnknownFlavour`](SolError::UnknownFlavour) | parsing a flavour label |
//!
//! # Usage
//!
//! ```
//! use areo_core::{SolError, SolResult};
//!
//! fn whole_sols(n: f64) -> SolResult<f64> {
//!     if n.fract() != 0.0 {
//!         return Err(SolError::not_an_integer(n));
//!     }
//!     Ok(n)
//! }
//!
//! assert!(whole_sols(3.0).is_ok());
//! assert!(matches!(whole_sols(3.5), Err(SolError::NotAnInteger { .. })));
//! ```
//!
//! Floating-point overflow and precision loss are not reported here. They are a
//! property of the numeric type the caller picked, not of the conversion.

use std::fmt::Display;
use thiserror::Error;

/// Unified error type for sol-count validation and conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolError {
    /// An integral day number has a non-zero fractional part.
    #[error("Day number {value} is not an integer")]
    NotAnInteger { value: String },

    /// A day fraction lies outside the half-open range `[0, 1)`.
    #[error("Day fraction {value} is outside [0, 1)")]
    FractionOutOfRange { value: String },

    /// An integral→integral conversion needs a time of day to pick the
    /// destination day, and none was given.
    #[error("Converting {from} day numbers to {to} requires a day fraction")]
    MissingDayFraction { from: String, to: String },

    /// A conversion crossing zone-relativeness was called without a zone offset.
    #[error("Converting {from} to {to} requires a zone offset")]
    MissingZoneOffset { from: String, to: String },

    #[error("Unknown sol-count flavour '{name}'")]
    UnknownFlavour { name: String },
}

/// Convenience alias for `Result<T, SolError>`.
pub type SolResult<T> = Result<T, SolError>;

impl SolError {
    /// Creates a [`NotAnInteger`](Self::NotAnInteger) error.
    pub fn not_an_integer(value: impl Display) -> Self {
        Self::NotAnInteger {
            value: value.to_string(),
        }
    }

    /// Creates a [`FractionOutOfRange`](Self::FractionOutOfRange) error.
    pub fn fraction_out_of_range(value: impl Display) -> Self {
        Self::FractionOutOfRange {
            value: value.to_string(),
        }
    }

    pub fn missing_day_fraction(from: impl Display, to: impl Display) -> Self {
        Self::MissingDayFraction {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn missing_zone_offset(from: impl Display, to: impl Display) -> Self {
        Self::MissingZoneOffset {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn unknown_flavour(name: &str) -> Self {
        Self::UnknownFlavour {
            name: name.to_string(),
        }
    }

    /// Returns `true` for errors raised by [`validate_dn`](crate::validate::validate_dn).
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::NotAnInteger { .. } | Self::FractionOutOfRange { .. }
        )
    }
}
