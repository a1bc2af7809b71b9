//! Parameters structure for NavHome

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

use crate::{home_mgr::HomeMgrParams, origin_guard::OriginGuardParams};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for NavHome.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavHomeParams {
    pub home_mgr: HomeMgrParams,

    pub origin_guard: OriginGuardParams,
}
