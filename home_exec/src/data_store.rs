//! # Data Store

use comms_if::tm::HomeRecord;

use crate::{
    eqpt::{EventArchive, MissionFile, NavContext, NavFrame, SessionClock, SimArming, SimGps},
    nav_home,
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
#[derive(Default)]
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u128,

    /// True if this cycle falls on a 1Hz boundary
    pub is_1_hz_cycle: bool,

    // NavHome
    pub nav_home: nav_home::NavHome,
    pub nav_home_output: HomeRecord,
    pub nav_home_status_rpt: nav_home::StatusReport,

    // Equipment
    pub eqpt: Eqpt,

    // Monitoring Counters
    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,
}

/// The equipment NavHome is driven through.
#[derive(Default)]
pub struct Eqpt {
    pub gps: SimGps,
    pub arming: SimArming,
    pub nav_frame: NavFrame,
    pub clock: SessionClock,
    pub mission: MissionFile,
    pub events: EventArchive,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl DataStore {
    /// Perform actions required at the start of a cycle.
    ///
    /// Clears those items that need clearing at the start of a cycle, and sets the 1Hz cycle flag.
    pub fn cycle_start(&mut self, cycle_frequency_hz: f64) {
        let cycles_per_s = (cycle_frequency_hz as u128).max(1);
        self.is_1_hz_cycle = self.num_cycles % cycles_per_s == 0;

        self.nav_home_status_rpt = nav_home::StatusReport::default();
    }
}

impl Eqpt {
    /// Lend all equipment out for one call into NavHome.
    pub fn context(&mut self) -> NavContext<'_> {
        NavContext {
            gps: &mut self.gps,
            arming: &self.arming,
            nav_init: &mut self.nav_frame,
            clock: &mut self.clock,
            mission: &self.mission,
            events: &mut self.events,
        }
    }
}
