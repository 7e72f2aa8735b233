//! Conversions between the linear Mars sol counts.
//!
//! Three day counts are used for Martian date arithmetic:
//!
//! | Count | Full Name | Relationship |
//! |-------|-----------|--------------|
//! | MSD | Mars Sol Date | Reference |
//! | JS | Julian Sol | MSD + 94 129 |
//! | CMSD | Chronological Mars Solar Date | MSD + 500 000 + zone offset |
//!
//! Each is available as a fractional count and as a whole day number plus a
//! fraction of a sol in `[0, 1)`. Splitting always happens at the day boundary
//! of the destination count; for CMSD that boundary is local midnight in the
//! caller's zone.
//!
//! # Usage
//!
//! Named functions cover every pair and form:
//!
//! ```
//! use areo_time::{msd_to_js, msd_to_cmsdnn, cmsdn_to_msdnn};
//!
//! assert_eq!(msd_to_js(46236.625), 140365.625);
//!
//! let local = msd_to_cmsdnn(-300000.25, 0.125);
//! assert_eq!(local.into_parts(), (199999.0, 0.875));
//!
//! // Moving out of a zone-relative count needs the time of day.
//! assert!(cmsdn_to_msdnn(200000.0, None, 0.125).is_err());
//! ```
//!
//! When the flavours are only known at runtime, build a [`Conversion`]:
//!
//! ```
//! use areo_time::{Conversion, Flavour};
//!
//! let from: Flavour = "cmsd".parse().unwrap();
//! let plan = Conversion::new(from, Flavour::Js);
//! assert_eq!(plan.convert(199999.875, Some(0.125)).unwrap(), -205871.25);
//! ```
//!
//! # Exact Arithmetic
//!
//! All functions are generic over [`DayValue`]. Rational input gives rational
//! output, exact to the ratio:
//!
//! ```
//! use areo_time::msd_to_cmsd;
//! use num_rational::Rational64;
//!
//! let cmsd = msd_to_cmsd(Rational64::new(-1_200_001, 4), Rational64::new(1, 8));
//! assert_eq!(cmsd, Rational64::new(1_599_999, 8));
//! ```
//!
//! With `f64`, overflow and rounding are the caller's to manage: counts a
//! fraction of an ULP from midnight may split onto the neighbouring day.
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for [`Flavour`] and [`SolSplit`].

pub mod conversions;
pub mod epoch;
pub mod flavour;
pub mod split;

pub use areo_core::{split_day, validate_dn, DayValue, SolError, SolResult};
pub use conversions::named::*;
pub use conversions::{Conversion, ZoneShift};
pub use epoch::EpochOffset;
pub use flavour::{Flavour, FlavourDescriptor, FLAVOURS};
pub use num_rational::{BigRational, Rational64};
pub use split::SolSplit;
