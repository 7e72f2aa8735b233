//! Named conversion functions, one per (from, to, form).
//!
//! Each ordered flavour pair gets six functions:
//!
//! | Name | Input | Output |
//! |------|-------|--------|
//! | `msd_to_js` | count | count |
//! | `msd_to_jsn` | count | day number |
//! | `msd_to_jsnn` | count | [`SolSplit`] |
//! | `msdn_to_js` | number, fraction | count |
//! | `msdn_to_jsn` | number, optional fraction | day number |
//! | `msdn_to_jsnn` | number, optional fraction | [`SolSplit`] |
//!
//! Pairs that move into or out of CMSD take a trailing `zone` argument in
//! fractional sols. Pairs that don't have no zone parameter at all.
//!
//! ```
//! use areo_time::conversions::named::*;
//!
//! assert_eq!(msd_to_js(46236.625), 140365.625);
//! assert_eq!(msd_to_cmsd(-300000.25, 0.125), 199999.875);
//! assert_eq!(cmsd_to_msdn(199999.875, 0.125), -300001.0);
//!
//! let split = js_to_msdnn(-905871.25);
//! assert_eq!(split.into_parts(), (-1000001.0, 0.75));
//!
//! assert!(cmsdn_to_msdnn(200000.0, None, 0.125).is_err());
//! assert!(cmsdn_to_msdnn(200000.0, Some(0.125), 0.125).is_ok());
//! ```

use super::Conversion;
use crate::flavour::Flavour;
use crate::split::SolSplit;
use areo_core::{DayValue, SolResult};

macro_rules! sol_conversions {
    (@zone) => { None };
    (@zone $zone:ident) => { Some($zone) };
    (@needs_zone) => { false };
    (@needs_zone $zone:ident) => { true };

    ($(
        $from:ident => $to:ident $(with $zone:ident)? {
            $to_count:ident,
            $to_number:ident,
            $to_split:ident,
            $n_to_count:ident,
            $n_to_number:ident,
            $n_to_split:ident $(,)?
        }
    )*) => {$(
        const _: () = assert!(
            Conversion::new(Flavour::$from, Flavour::$to).needs_zone()
                == sol_conversions!(@needs_zone $($zone)?),
            "zone argument does not match the flavour table"
        );

        #[doc = concat!("Converts a fractional ", stringify!($from), " count to ", stringify!($to), ".")]
        pub fn $to_count<T: DayValue>(count: T $(, $zone: T)?) -> T {
            const PLAN: Conversion = Conversion::new(Flavour::$from, Flavour::$to);
            PLAN.shift(count, sol_conversions!(@zone $($zone)?))
        }

        #[doc = concat!("Converts a fractional ", stringify!($from), " count to a whole ", stringify!($to), " day number.")]
        pub fn $to_number<T: DayValue>(count: T $(, $zone: T)?) -> T {
            const PLAN: Conversion = Conversion::new(Flavour::$from, Flavour::$to);
            PLAN.shift_split(count, sol_conversions!(@zone $($zone)?)).into_number()
        }

        #[doc = concat!("Converts a fractional ", stringify!($from), " count to a ", stringify!($to), " day number and fraction.")]
        pub fn $to_split<T: DayValue>(count: T $(, $zone: T)?) -> SolSplit<T> {
            const PLAN: Conversion = Conversion::new(Flavour::$from, Flavour::$to);
            PLAN.shift_split(count, sol_conversions!(@zone $($zone)?))
        }

        #[doc = concat!("Converts a ", stringify!($from), " day number and fraction to a fractional ", stringify!($to), " count.")]
        pub fn $n_to_count<T: DayValue>(number: T, fraction: T $(, $zone: T)?) -> SolResult<T> {
            const PLAN: Conversion = Conversion::new(Flavour::$from, Flavour::$to);
            PLAN.shift_from_n(number, fraction, sol_conversions!(@zone $($zone)?))
        }

        #[doc = concat!("Converts a ", stringify!($from), " day number to a ", stringify!($to), " day number.")]
        #[doc = ""]
        #[doc = "The fraction may be omitted only when the day boundaries of both counts coincide."]
        pub fn $n_to_number<T: DayValue>(number: T, fraction: Option<T> $(, $zone: T)?) -> SolResult<T> {
            const PLAN: Conversion = Conversion::new(Flavour::$from, Flavour::$to);
            PLAN.shift_nn(number, fraction, sol_conversions!(@zone $($zone)?))
                .map(SolSplit::into_number)
        }

        #[doc = concat!("Converts a ", stringify!($from), " day number to a ", stringify!($to), " day number and fraction.")]
        #[doc = ""]
        #[doc = "The fraction may be omitted only when the day boundaries of both counts coincide."]
        pub fn $n_to_split<T: DayValue>(number: T, fraction: Option<T> $(, $zone: T)?) -> SolResult<SolSplit<T>> {
            const PLAN: Conversion = Conversion::new(Flavour::$from, Flavour::$to);
            PLAN.shift_nn(number, fraction, sol_conversions!(@zone $($zone)?))
        }
    )*};
}

sol_conversions! {
    Msd => Msd {
        msd_to_msd, msd_to_msdn, msd_to_msdnn,
        msdn_to_msd, msdn_to_msdn, msdn_to_msdnn,
    }
    Msd => Js {
        msd_to_js, msd_to_jsn, msd_to_jsnn,
        msdn_to_js, msdn_to_jsn, msdn_to_jsnn,
    }
    Msd => Cmsd with zone {
        msd_to_cmsd, msd_to_cmsdn, msd_to_cmsdnn,
        msdn_to_cmsd, msdn_to_cmsdn, msdn_to_cmsdnn,
    }
    Js => Msd {
        js_to_msd, js_to_msdn, js_to_msdnn,
        jsn_to_msd, jsn_to_msdn, jsn_to_msdnn,
    }
    Js => Js {
        js_to_js, js_to_jsn, js_to_jsnn,
        jsn_to_js, jsn_to_jsn, jsn_to_jsnn,
    }
    Js => Cmsd with zone {
        js_to_cmsd, js_to_cmsdn, js_to_cmsdnn,
        jsn_to_cmsd, jsn_to_cmsdn, jsn_to_cmsdnn,
    }
    Cmsd => Msd with zone {
        cmsd_to_msd, cmsd_to_msdn, cmsd_to_msdnn,
        cmsdn_to_msd, cmsdn_to_msdn, cmsdn_to_msdnn,
    }
    Cmsd => Js with zone {
        cmsd_to_js, cmsd_to_jsn, cmsd_to_jsnn,
        cmsdn_to_js, cmsdn_to_jsn, cmsdn_to_jsnn,
    }
    Cmsd => Cmsd {
        cmsd_to_cmsd, cmsd_to_cmsdn, cmsd_to_cmsdnn,
        cmsdn_to_cmsd, cmsdn_to_cmsdn, cmsdn_to_cmsdnn,
    }
}
