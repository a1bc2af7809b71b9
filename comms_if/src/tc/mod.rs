//! # Telecommand module
//!
//! This module provides telecommand functionality to the communications
//! interface.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod home;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use serde_json::{self, Value};
use thiserror::Error;

// Internal
use crate::eqpt::gps::GpsReport;
use home::HomeCmd;

// ---------------------------------------------------------------------------
// STATICS
// ---------------------------------------------------------------------------

static TYPE_HAS_NO_PAYLOAD: [TcType; 2] = [TcType::Arm, TcType::Disarm];

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A telecommand, i.e. an instruction sent to the vehicle by the operator or
/// by a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tc {
    /// Arm the vehicle
    Arm,

    /// Disarm the vehicle
    Disarm,

    /// Inject a report into the simulated GPS receiver
    SimGps(GpsReport),

    /// Home position command
    Home(HomeCmd),
}

/// Telecommand types.
///
/// The type is used to identify the purpose of the telecommand, and decides
/// how the payload is deserialised.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
pub enum TcType {
    Arm,
    Disarm,
    SimGps,
    Home,
}

/// Possible parsing errors.
#[derive(Debug, Error)]
pub enum TcParseError {
    #[error("TC contains invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("TC has an invalid type ({0})")]
    InvalidType(String),

    #[error("TC of type {0:?} is expected to have a payload but it doesn't")]
    MissingPayload(TcType),

    #[error("TC of type {0:?} has an invalid payload: {1}")]
    InvalidPayload(TcType, serde_json::Error),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Tc {
    /// Parse a new TC from a JSON packet
    ///
    /// The packet is an object with a `"type"` string and, for those types
    /// which need one, a `"payload"`.
    pub fn from_json(json_str: &str) -> Result<Self, TcParseError> {
        // Parse the JSON string into a value
        let val: Value = match serde_json::from_str(json_str) {
            Ok(v) => v,
            Err(e) => return Err(TcParseError::InvalidJson(e)),
        };

        // Get the type of the TC
        let type_str = match val["type"].as_str() {
            Some(s) => s,
            None => {
                return Err(TcParseError::InvalidType(String::from(
                    "Expected \"type\" to be a string",
                )))
            }
        };
        let tc_type = match TcType::from_str(type_str) {
            Some(t) => t,
            None => {
                return Err(TcParseError::InvalidType(format!(
                    "{} is not a recognised TC type",
                    type_str
                )))
            }
        };

        // Get the payload. If it's null and the type does not have a payload
        // then an error is returned
        let payload = &val["payload"];
        if payload.is_null() && !TYPE_HAS_NO_PAYLOAD.contains(&tc_type) {
            return Err(TcParseError::MissingPayload(tc_type));
        }

        match tc_type {
            TcType::Arm => Ok(Tc::Arm),
            TcType::Disarm => Ok(Tc::Disarm),
            TcType::SimGps => serde_json::from_value(payload.clone())
                .map(Tc::SimGps)
                .map_err(|e| TcParseError::InvalidPayload(TcType::SimGps, e)),
            TcType::Home => serde_json::from_value(payload.clone())
                .map(Tc::Home)
                .map_err(|e| TcParseError::InvalidPayload(TcType::Home, e)),
        }
    }
}

impl TcType {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "ARM" => Some(TcType::Arm),
            "DISARM" => Some(TcType::Disarm),
            "SIM_GPS" => Some(TcType::SimGps),
            "HOME" => Some(TcType::Home),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::eqpt::gps::{GpsFixQuality, Location};

    #[test]
    fn test_parse_no_payload() {
        assert_eq!(Tc::from_json(r#"{"type": "ARM"}"#).unwrap(), Tc::Arm);
        assert_eq!(Tc::from_json(r#"{"type": "DISARM"}"#).unwrap(), Tc::Disarm);
    }

    #[test]
    fn test_parse_home() {
        let tc = Tc::from_json(
            r#"{"type": "HOME", "payload": {"cmd": "SET", "lat_deg": 12.34, "lng_deg": 56.78, "alt_m": 0.0}}"#,
        )
        .unwrap();

        assert_eq!(
            tc,
            Tc::Home(HomeCmd::Set {
                lat_deg: 12.34,
                lng_deg: 56.78,
                alt_m: 0.0
            })
        );

        let tc = Tc::from_json(r#"{"type": "HOME", "payload": {"cmd": "LOCK"}}"#).unwrap();
        assert_eq!(tc, Tc::Home(HomeCmd::Lock));
    }

    #[test]
    fn test_parse_sim_gps() {
        let tc = Tc::from_json(
            r#"{"type": "SIM_GPS", "payload": {
                "fix": "Fix3D",
                "location": {"lat": 123400000, "lng": 567800000, "alt_cm": 0},
                "epoch_us": 1600000000000000
            }}"#,
        )
        .unwrap();

        match tc {
            Tc::SimGps(r) => {
                assert_eq!(r.fix, GpsFixQuality::Fix3D);
                assert_eq!(r.location, Some(Location::new(123_400_000, 567_800_000, 0)));
                assert_eq!(r.origin, None);
            }
            t => panic!("Expected SimGps, got {:?}", t),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Tc::from_json("not json"),
            Err(TcParseError::InvalidJson(_))
        ));
        assert!(matches!(
            Tc::from_json(r#"{"type": "WARP"}"#),
            Err(TcParseError::InvalidType(_))
        ));
        assert!(matches!(
            Tc::from_json(r#"{"type": "HOME"}"#),
            Err(TcParseError::MissingPayload(TcType::Home))
        ));
        assert!(matches!(
            Tc::from_json(r#"{"type": "HOME", "payload": {"cmd": "JUMP"}}"#),
            Err(TcParseError::InvalidPayload(TcType::Home, _))
        ));
    }
}
