//! # Home manager module
//!
//! Owns the home position and its state machine:
//!
//! - `Unset` - no home yet, the stored location is the zero location.
//! - `SetUnlocked` - home has been set, automatically from the first fix or by the operator.
//! - `SetAndLocked` - home has been locked, only a set-and-lock may move it.
//!
//! The first transition out of `Unset` also seeds the navigation constants derived from home
//! (declination, longitude scale) and logs the stored home mission command. This happens once
//! per process, later moves of home never re-seed them.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use comms_if::tm::{HomeRecord, HomeState};
pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Reasons a home operation can be refused.
///
/// None of these are fatal, the operation may simply be retried on a later cycle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HomeError {
    #[error("The zero location is not a valid home")]
    InvalidLocation,

    #[error("No position fix is available")]
    NoFixAvailable,

    #[error("Precondition not met: {0}")]
    PreconditionNotMet(&'static str),

    #[error("Home is locked, it can only be moved with set-and-lock")]
    HomeLocked,

    #[error("Home would be {dist_m:.0} m from the navigation origin, the limit is {max_m:.0} m")]
    FarFromOrigin { dist_m: f64, max_m: f64 },

    #[error("The navigation origin is not available")]
    OriginUnavailable,
}
