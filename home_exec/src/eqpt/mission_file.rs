//! # Mission file
//!
//! Mission store backed by a parameter file.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::eqpt::mission::MissionCmd;
use serde::Deserialize;

use super::MissionStore;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Deserialize)]
pub struct MissionFile {
    #[serde(default)]
    cmds: Vec<MissionCmd>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl MissionFile {
    /// Load the mission from the given parameter file.
    pub fn load(param_file_path: &str) -> Result<Self, util::params::LoadError> {
        util::params::load(param_file_path)
    }

    pub fn num_cmds(&self) -> usize {
        self.cmds.len()
    }
}

impl MissionStore for MissionFile {
    fn read_cmd_at(&self, index: u16) -> Option<MissionCmd> {
        self.cmds.iter().find(|c| c.index == index).copied()
    }
}
