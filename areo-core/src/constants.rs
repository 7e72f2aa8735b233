//! Epoch constants for the linear sol counts.
//!
//! Each count's epoch is given as a Mars Sol Date, in whole sols. All three
//! counts tick once per mean solar day on Mars.
//!
//! ```text
//! MSD  = days since 1873-12-29 12:00 AMT       (epoch at MSD 0)
//! JS   = MSD + 94 129                          (epoch at MSD -94 129)
//! CMSD = MSD + 500 000 + zone offset           (epoch at MSD -500 000)
//! ```

pub const MSD_EPOCH_MSD: i64 = 0;

pub const JS_EPOCH_MSD: i64 = -94_129;

/// CMSD counts from midnight on the Airy meridian, so the zone offset is
/// applied on top of this.
pub const CMSD_EPOCH_MSD: i64 = -500_000;
