//! # Geodesy helpers
//!
//! Flat-earth approximations which are accurate enough over the distances the navigation origin
//! and home are expected to be apart.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::eqpt::gps::{Location, DEG_TO_E7, LOCATION_SCALING_FACTOR_M};
use nalgebra::Vector2;
use util::maths::{clamp, wrap_180};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Smallest longitude scale, reached near the poles.
const MIN_LONG_SCALE: f64 = 0.01;

// ------------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Scale by which longitude differences shrink at the latitude of the given location.
pub fn longitude_scale(loc: &Location) -> f64 {
    let scale = loc.lat_deg().to_radians().cos();
    clamp(&scale, &MIN_LONG_SCALE, &1.0)
}

/// North/east offset from `from` to `to`.
///
/// Units: meters
pub fn get_offset_ne_m(from: &Location, to: &Location) -> Vector2<f64> {
    let dlat = to.lat as f64 - from.lat as f64;
    let dlng = wrap_180(to.lng_deg() - from.lng_deg()) * DEG_TO_E7 * longitude_scale(to);

    Vector2::new(dlat, dlng) * LOCATION_SCALING_FACTOR_M
}

/// Horizontal distance between two locations.
///
/// Units: meters
pub fn get_distance_m(from: &Location, to: &Location) -> f64 {
    get_offset_ne_m(from, to).norm()
}
