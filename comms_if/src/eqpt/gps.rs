//! # GPS Equipment Interface

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::fmt;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Scale between the fixed point (1e-7 degree) latitude/longitude and degrees.
pub const DEG_TO_E7: f64 = 1.0e7;

/// Number of meters covered by 1e-7 degrees of latitude.
///
/// Units: meters
pub const LOCATION_SCALING_FACTOR_M: f64 = 0.011_131_884_502_145_034;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A geodetic location.
///
/// Latitude and longitude are stored in fixed point 1e-7 degrees, altitude in centimeters. The
/// point `(0, 0)` is reserved to mean "no location".
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude
    ///
    /// Units: 1e-7 degrees
    pub lat: i32,

    /// Longitude
    ///
    /// Units: 1e-7 degrees
    pub lng: i32,

    /// Altitude above mean sea level
    ///
    /// Units: centimeters
    pub alt_cm: i32,
}

/// A single report from the GPS receiver and the estimator sitting behind it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpsReport {
    /// Quality of the current fix
    pub fix: GpsFixQuality,

    /// Best estimate of the vehicle location, or `None` if there is no fix
    #[serde(default)]
    pub location: Option<Location>,

    /// Origin of the navigation frame, or `None` if the estimator has not set one yet
    #[serde(default)]
    pub origin: Option<Location>,

    /// Time of the fix since the unix epoch, zero if unknown.
    ///
    /// Units: microseconds
    #[serde(default)]
    pub epoch_us: u64,

    /// True if the receiver is able to survey an RTK base position
    #[serde(default)]
    pub can_calc_base_pos: bool,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Quality of a GPS fix, ordered from worst to best.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GpsFixQuality {
    NoGps,
    NoFix,
    Fix2D,
    Fix3D,
    Dgps,
    RtkFloat,
    RtkFixed,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Location {
    /// Create a location from its fixed point components.
    pub const fn new(lat: i32, lng: i32, alt_cm: i32) -> Self {
        Self { lat, lng, alt_cm }
    }

    /// Create a location from a latitude and longitude in degrees and an altitude in meters.
    pub fn from_degrees(lat_deg: f64, lng_deg: f64, alt_m: f64) -> Self {
        Self {
            lat: (lat_deg * DEG_TO_E7).round() as i32,
            lng: (lng_deg * DEG_TO_E7).round() as i32,
            alt_cm: (alt_m * 100.0).round() as i32,
        }
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat as f64 / DEG_TO_E7
    }

    pub fn lng_deg(&self) -> f64 {
        self.lng as f64 / DEG_TO_E7
    }

    pub fn alt_m(&self) -> f64 {
        self.alt_cm as f64 * 0.01
    }

    /// Returns true if this is the reserved "no location" point.
    pub fn is_zero(&self) -> bool {
        self.lat == 0 && self.lng == 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.7}, {:.7}, {:.2} m)",
            self.lat_deg(),
            self.lng_deg(),
            self.alt_m()
        )
    }
}

impl Default for GpsFixQuality {
    fn default() -> Self {
        GpsFixQuality::NoGps
    }
}

impl GpsFixQuality {
    /// True if the fix is at least a 3D fix.
    pub fn is_3d(&self) -> bool {
        *self >= GpsFixQuality::Fix3D
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_location_degrees() {
        let loc = Location::from_degrees(12.34, 56.78, 10.5);

        assert_eq!(loc.lat, 123_400_000);
        assert_eq!(loc.lng, 567_800_000);
        assert_eq!(loc.alt_cm, 1050);
        assert!((loc.lat_deg() - 12.34).abs() < 1e-7);
        assert!(!loc.is_zero());

        // Altitude alone does not make a location valid
        assert!(Location::new(0, 0, 5000).is_zero());
    }

    #[test]
    fn test_fix_ordering() {
        assert!(GpsFixQuality::RtkFixed.is_3d());
        assert!(GpsFixQuality::Fix3D.is_3d());
        assert!(!GpsFixQuality::Fix2D.is_3d());
        assert!(!GpsFixQuality::NoGps.is_3d());
    }

    #[test]
    fn test_report_defaults() {
        let report: GpsReport = serde_json::from_str(r#"{"fix": "Fix2D"}"#).unwrap();

        assert_eq!(report.fix, GpsFixQuality::Fix2D);
        assert_eq!(report.location, None);
        assert_eq!(report.epoch_us, 0);
        assert!(!report.can_calc_base_pos);
    }
}
