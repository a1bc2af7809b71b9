//! Fake equipment for unit tests.

use comms_if::{
    eqpt::{
        gps::{GpsFixQuality, Location},
        mission::MissionCmd,
    },
    tm::NavEvent,
};

use crate::eqpt::{
    ArmingState, EventSink, EventSinkError, MissionStore, NavContext, NavInit, PositionSource,
    SystemClock,
};

#[derive(Debug)]
pub(crate) struct FakeGps {
    pub location: Option<Location>,
    pub origin: Option<Location>,
    pub fix: GpsFixQuality,
    pub epoch_us: u64,
    pub can_calc_base_pos: bool,
    pub num_base_pos_calcs: u32,
}

#[derive(Debug, Default)]
pub(crate) struct FakeArming {
    pub armed: bool,
}

#[derive(Debug, Default)]
pub(crate) struct FakeNavInit {
    pub declination_seeds: Vec<Location>,
    pub long_scales: Vec<f64>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeClock {
    pub sets: Vec<u64>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeMission {
    pub cmds: Vec<MissionCmd>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeEvents {
    pub events: Vec<NavEvent>,
    pub fail: bool,
}

/// All fake collaborators, lent out as a [`NavContext`] one call at a time.
#[derive(Debug, Default)]
pub(crate) struct FakeEqpt {
    pub gps: FakeGps,
    pub arming: FakeArming,
    pub nav_init: FakeNavInit,
    pub clock: FakeClock,
    pub mission: FakeMission,
    pub events: FakeEvents,
}

impl Default for FakeGps {
    fn default() -> Self {
        Self {
            location: None,
            origin: None,
            fix: GpsFixQuality::NoFix,
            epoch_us: 0,
            can_calc_base_pos: false,
            num_base_pos_calcs: 0,
        }
    }
}

impl FakeEqpt {
    pub fn ctx(&mut self) -> NavContext<'_> {
        NavContext {
            gps: &mut self.gps,
            arming: &self.arming,
            nav_init: &mut self.nav_init,
            clock: &mut self.clock,
            mission: &self.mission,
            events: &mut self.events,
        }
    }

    /// Give the GPS a 3D fix at the given location, with the origin at the same place.
    pub fn fix_at(&mut self, loc: Location) {
        self.gps.location = Some(loc);
        self.gps.origin = Some(loc);
        self.gps.fix = GpsFixQuality::Fix3D;
    }

    pub fn num_events_of(&self, kind: &str) -> usize {
        self.events.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl PositionSource for FakeGps {
    fn location(&self) -> Option<Location> {
        self.location
    }

    fn origin(&self) -> Option<Location> {
        self.origin
    }

    fn fix_quality(&self) -> GpsFixQuality {
        self.fix
    }

    fn epoch_time_us(&self) -> u64 {
        self.epoch_us
    }

    fn can_calculate_base_pos(&self) -> bool {
        self.can_calc_base_pos
    }

    fn calculate_base_pos(&mut self) {
        self.num_base_pos_calcs += 1;
    }
}

impl ArmingState for FakeArming {
    fn is_armed(&self) -> bool {
        self.armed
    }
}

impl NavInit for FakeNavInit {
    fn seed_declination(&mut self, loc: &Location) {
        self.declination_seeds.push(*loc);
    }

    fn set_long_scale(&mut self, long_scale: f64) {
        self.long_scales.push(long_scale);
    }
}

impl SystemClock for FakeClock {
    fn set_utc_epoch_us(&mut self, epoch_us: u64) {
        self.sets.push(epoch_us);
    }
}

impl MissionStore for FakeMission {
    fn read_cmd_at(&self, index: u16) -> Option<MissionCmd> {
        self.cmds.iter().find(|c| c.index == index).copied()
    }
}

impl EventSink for FakeEvents {
    fn log_event(&mut self, event: &NavEvent) -> Result<(), EventSinkError> {
        if self.fail {
            return Err(EventSinkError::Unavailable);
        }
        self.events.push(event.clone());
        Ok(())
    }
}
