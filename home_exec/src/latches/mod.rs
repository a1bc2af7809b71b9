//! # System fact latches
//!
//! Facts about the system that can only be established once a trustworthy fix is available, and
//! that must then never change for the life of the process:
//!
//! - the absolute system time, taken from the first 3D fix with a valid GPS time,
//! - the RTK base position, surveyed once home is known and the vehicle is disarmed.
//!
//! Each latch is polled once per cycle. A poll either fires the latch or leaves it pending for the
//! next cycle, there is no other retry.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod rtk_base;
mod system_time;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A one-way flag which goes from pending to fired exactly once.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LatchFlag {
    fired: bool,
}

/// The system time and RTK base position latches.
#[derive(Debug, Clone, Default)]
pub struct SysFactLatches {
    system_time_set: LatchFlag,
    rtk_base_pos_set: LatchFlag,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum LatchState {
    Pending,
    Fired,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LatchFlag {
    pub fn is_fired(&self) -> bool {
        self.fired
    }

    pub fn state(&self) -> LatchState {
        match self.fired {
            true => LatchState::Fired,
            false => LatchState::Pending,
        }
    }

    /// Fire the latch. There is no way back.
    pub(crate) fn fire(&mut self) {
        self.fired = true;
    }
}

impl SysFactLatches {
    pub fn system_time_set(&self) -> LatchFlag {
        self.system_time_set
    }

    pub fn rtk_base_pos_set(&self) -> LatchFlag {
        self.rtk_base_pos_set
    }
}
