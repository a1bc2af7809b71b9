//! # Home position telecommands

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::eqpt::gps::Location;

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// An operator command acting on the home position.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HomeCmd {
    /// Move home to the given location. Rejected while home is locked.
    Set {
        lat_deg: f64,
        lng_deg: f64,
        alt_m: f64,
    },

    /// Move home to the given location and lock it there.
    SetAndLock {
        lat_deg: f64,
        lng_deg: f64,
        alt_m: f64,
    },

    /// Move home to the vehicle's current location, optionally locking it.
    UseCurrent {
        #[serde(default)]
        lock: bool,
    },

    /// Lock home where it currently is.
    Lock,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl HomeCmd {
    /// The explicit location carried by the command, if any.
    pub fn location(&self) -> Option<Location> {
        match *self {
            HomeCmd::Set {
                lat_deg,
                lng_deg,
                alt_m,
            }
            | HomeCmd::SetAndLock {
                lat_deg,
                lng_deg,
                alt_m,
            } => Some(Location::from_degrees(lat_deg, lng_deg, alt_m)),
            HomeCmd::UseCurrent { .. } | HomeCmd::Lock => None,
        }
    }
}
