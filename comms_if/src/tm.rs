//! # Telemetry module
//!
//! Defines the home record snapshot and the events the navigation core reports to its event sink.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::eqpt::{gps::Location, mission::MissionCmd};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Snapshot of the home position and its state.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRecord {
    pub location: Location,
    pub state: HomeState,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// State of the home position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HomeState {
    /// No home has been set yet, the stored location is the zero location.
    Unset,

    /// Home has been set and may be moved by the operator.
    SetUnlocked,

    /// Home has been set and locked, only a privileged re-home-and-lock may move it.
    SetAndLocked,
}

/// Events emitted by the navigation core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NavEvent {
    /// Home was set or moved.
    HomeSet { home: Location, state: HomeState },

    /// The stored mission command describing home, logged once when home is first set.
    HomeMissionCmd { cmd: MissionCmd },

    /// The system clock was set from the GPS time.
    SystemTimeSet { epoch_us: u64 },

    /// The RTK base position latch fired. `calculated` is false if the receiver could not survey
    /// a base position on that cycle.
    RtkBasePosLatched { calculated: bool },
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for HomeState {
    fn default() -> Self {
        HomeState::Unset
    }
}

impl HomeState {
    pub fn is_set(&self) -> bool {
        *self != HomeState::Unset
    }

    pub fn is_locked(&self) -> bool {
        *self == HomeState::SetAndLocked
    }
}

impl NavEvent {
    /// Short name of the event, used as the archive key.
    pub fn kind(&self) -> &'static str {
        match self {
            NavEvent::HomeSet { .. } => "HOME_SET",
            NavEvent::HomeMissionCmd { .. } => "HOME_MISSION_CMD",
            NavEvent::SystemTimeSet { .. } => "SYSTEM_TIME_SET",
            NavEvent::RtkBasePosLatched { .. } => "RTK_BASE_POS_LATCHED",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_event_serialisation() {
        let event = NavEvent::SystemTimeSet {
            epoch_us: 1_600_000_000_000_000,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "SystemTimeSet");
        assert_eq!(json["epoch_us"], 1_600_000_000_000_000u64);
        assert_eq!(event.kind(), "SYSTEM_TIME_SET");
    }

    #[test]
    fn test_default_record_is_unset() {
        let rec = HomeRecord::default();

        assert_eq!(rec.state, HomeState::Unset);
        assert!(rec.location.is_zero());
        assert!(!rec.state.is_set());
    }
}
