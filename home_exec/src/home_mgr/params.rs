//! Parameters structure for HomeMgr

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the home manager.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HomeMgrParams {
    /// When home is adopted while armed, take the altitude from the navigation origin rather than
    /// the current estimate, since the vehicle is not on the ground.
    pub inflight_alt_from_origin: bool,

    /// Log the stored home mission command when home is first set.
    pub log_home_cmd: bool,

    /// Index of the home command in mission storage.
    pub home_cmd_index: u16,
}

impl Default for HomeMgrParams {
    fn default() -> Self {
        Self {
            inflight_alt_from_origin: true,
            log_home_cmd: true,
            home_cmd_index: 0,
        }
    }
}
