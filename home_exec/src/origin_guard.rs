//! # Navigation origin guard
//!
//! Home and the navigation origin are expected to be close together. A home far from the origin
//! is either an operator error or a sign the estimator has a bad frame, so privileged re-home
//! requests are checked against the origin before they are applied.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::eqpt::gps::Location;
use log::warn;
use serde::Deserialize;

use crate::{geo, home_mgr::HomeError};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Default maximum distance between home and the navigation origin.
///
/// Units: meters
pub const DEFAULT_ORIGIN_MAX_DIST_M: f64 = 50_000.0;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OriginGuardParams {
    /// Maximum distance between a new home and the navigation origin.
    ///
    /// Units: meters
    pub max_dist_m: f64,

    /// What to do if the origin isn't available to check against.
    pub on_origin_unavailable: OriginUnavailableAction,

    /// What to do if the new home is too far from the origin.
    pub on_far_from_origin: FarFromOriginAction,
}

#[derive(Debug, Clone, Default)]
pub struct OriginGuard {
    params: OriginGuardParams,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub enum OriginUnavailableAction {
    /// Refuse the new home
    Reject,

    /// Accept the new home without checking it
    Skip,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub enum FarFromOriginAction {
    /// Refuse the new home
    Reject,

    /// Accept the new home but log a warning
    Warn,
}

// ------------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Returns true if `loc` is further than `threshold_m` meters from `origin`.
pub fn is_far_from_origin(loc: &Location, origin: &Location, threshold_m: f64) -> bool {
    geo::get_distance_m(origin, loc) > threshold_m
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for OriginGuardParams {
    fn default() -> Self {
        Self {
            max_dist_m: DEFAULT_ORIGIN_MAX_DIST_M,
            on_origin_unavailable: OriginUnavailableAction::Reject,
            on_far_from_origin: FarFromOriginAction::Reject,
        }
    }
}

impl OriginGuard {
    pub fn new(params: OriginGuardParams) -> Self {
        Self { params }
    }

    /// Check a proposed home against the navigation origin.
    ///
    /// Returns `Ok(())` if home may be set to `loc` under the configured policy.
    pub fn check(&self, loc: &Location, origin: Option<Location>) -> Result<(), HomeError> {
        let origin = match origin {
            Some(o) => o,
            None => {
                return match self.params.on_origin_unavailable {
                    OriginUnavailableAction::Reject => Err(HomeError::OriginUnavailable),
                    OriginUnavailableAction::Skip => {
                        warn!("Navigation origin unavailable, home {} not checked", loc);
                        Ok(())
                    }
                }
            }
        };

        if !is_far_from_origin(loc, &origin, self.params.max_dist_m) {
            return Ok(());
        }

        let dist_m = geo::get_distance_m(&origin, loc);

        match self.params.on_far_from_origin {
            FarFromOriginAction::Reject => Err(HomeError::FarFromOrigin {
                dist_m,
                max_m: self.params.max_dist_m,
            }),
            FarFromOriginAction::Warn => {
                warn!(
                    "Home {} is {:.0} m from the navigation origin {}",
                    loc, dist_m, origin
                );
                Ok(())
            }
        }
    }
}
