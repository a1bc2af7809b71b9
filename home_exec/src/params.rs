//! # Home Executable Parameters
//!
//! This module provide parameters for the home executable.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeExecParams {
    /// Target period of one cycle.
    ///
    /// Units: seconds
    pub cycle_period_s: f64,

    /// Whether the vehicle starts out armed
    #[serde(default)]
    pub start_armed: bool,

    /// Parameter file holding the stored mission
    #[serde(default = "default_mission_file")]
    pub mission_file: String,
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn default_mission_file() -> String {
    "mission.toml".into()
}
