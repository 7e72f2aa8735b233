//! The sol-count flavours and their descriptor table.
//!
//! | Flavour | Name | Epoch (MSD) | Zone-relative |
//! |---------|------|-------------|---------------|
//! | [`Msd`](Flavour::Msd) | Mars Sol Date | 0 | no |
//! | [`Js`](Flavour::Js) | Julian Sol | -94 129 | no |
//! | [`Cmsd`](Flavour::Cmsd) | Chronological Mars Solar Date | -500 000 | yes |
//!
//! MSD and JS count sols on the Airy Mean Time axis. CMSD counts local sols,
//! so moving into or out of it takes a zone offset in fractional sols.
//!
//! ```
//! use areo_time::Flavour;
//!
//! let js: Flavour = "js".parse().unwrap();
//! assert_eq!(js, Flavour::Js);
//! assert_eq!(js.to_string(), "JS");
//! assert!(Flavour::Cmsd.is_zone_relative());
//! ```

use crate::epoch::EpochOffset;
use areo_core::constants::{CMSD_EPOCH_MSD, JS_EPOCH_MSD, MSD_EPOCH_MSD};
use areo_core::SolError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A linear sol count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Flavour {
    Msd,
    Js,
    Cmsd,
}

/// Static attributes of a flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlavourDescriptor {
    pub flavour: Flavour,
    pub label: &'static str,
    pub name: &'static str,
    /// The flavour's epoch expressed as a Mars Sol Date.
    pub epoch_offset_msd: EpochOffset,
    /// Counts local time and so depends on a zone offset.
    pub zone_relative: bool,
}

/// Descriptor table, indexed by `Flavour as usize`.
pub const FLAVOURS: [FlavourDescriptor; 3] = [
    FlavourDescriptor {
        flavour: Flavour::Msd,
        label: "MSD",
        name: "Mars Sol Date",
        epoch_offset_msd: EpochOffset::whole(MSD_EPOCH_MSD),
        zone_relative: false,
    },
    FlavourDescriptor {
        flavour: Flavour::Js,
        label: "JS",
        name: "Julian Sol",
        epoch_offset_msd: EpochOffset::whole(JS_EPOCH_MSD),
        zone_relative: false,
    },
    FlavourDescriptor {
        flavour: Flavour::Cmsd,
        label: "CMSD",
        name: "Chronological Mars Solar Date",
        epoch_offset_msd: EpochOffset::whole(CMSD_EPOCH_MSD),
        zone_relative: true,
    },
];

impl Flavour {
    pub const ALL: [Flavour; 3] = [Flavour::Msd, Flavour::Js, Flavour::Cmsd];

    pub const fn descriptor(self) -> FlavourDescriptor {
        FLAVOURS[self as usize]
    }

    pub const fn epoch_offset_msd(self) -> EpochOffset {
        self.descriptor().epoch_offset_msd
    }

    pub const fn is_zone_relative(self) -> bool {
        self.descriptor().zone_relative
    }

    /// Short label, e.g. `"CMSD"`.
    pub const fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Flavour {
    type Err = SolError;

    /// Parses a flavour label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FLAVOURS
            .iter()
            .find(|d| d.label.eq_ignore_ascii_case(s))
            .map(|d| d.flavour)
            .ok_or_else(|| SolError::unknown_flavour(s))
    }
}
