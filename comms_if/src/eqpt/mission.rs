//! # Mission storage interface

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use super::gps::Location;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A single command read from mission storage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionCmd {
    /// Index of the command within the stored mission. Index 0 holds home.
    pub index: u16,

    /// Command identifier, for example 16 for a waypoint.
    pub id: u16,

    /// Location the command refers to
    pub location: Location,
}
