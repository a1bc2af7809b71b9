//! # Simulated equipment
//!
//! Equipment used by the executable when no hardware is attached. The GPS and arming state are
//! driven by telecommands, the clock forwards to the session's UTC reference.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::eqpt::gps::{GpsFixQuality, GpsReport, Location};
use log::{debug, info, warn};

use super::{ArmingState, NavInit, PositionSource, SystemClock};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A GPS receiver which reports whatever it was last told to.
#[derive(Debug, Default)]
pub struct SimGps {
    report: GpsReport,

    /// Number of times a base position survey has been requested
    num_base_pos_calcs: u32,

    /// Location at which the base position was surveyed
    base_pos: Option<Location>,
}

/// Arming state set by telecommand.
#[derive(Debug, Default)]
pub struct SimArming {
    armed: bool,
}

/// Holder of the navigation constants derived from the first home.
#[derive(Debug)]
pub struct NavFrame {
    /// Location the declination model was seeded from
    pub declination_seed: Option<Location>,

    /// Longitude distance scale
    pub long_scale: f64,
}

/// System clock backed by the session's UTC reference.
#[derive(Debug, Default)]
pub struct SessionClock;

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SimGps {
    /// Replace the current report.
    pub fn set_report(&mut self, report: GpsReport) {
        debug!("SimGps report: {:?}", report);
        self.report = report;
    }

    pub fn num_base_pos_calcs(&self) -> u32 {
        self.num_base_pos_calcs
    }

    pub fn base_pos(&self) -> Option<Location> {
        self.base_pos
    }
}

impl PositionSource for SimGps {
    fn location(&self) -> Option<Location> {
        match self.report.fix {
            GpsFixQuality::NoGps | GpsFixQuality::NoFix => None,
            _ => self.report.location,
        }
    }

    fn origin(&self) -> Option<Location> {
        self.report.origin
    }

    fn fix_quality(&self) -> GpsFixQuality {
        self.report.fix
    }

    fn epoch_time_us(&self) -> u64 {
        self.report.epoch_us
    }

    fn can_calculate_base_pos(&self) -> bool {
        self.report.can_calc_base_pos && self.location().is_some()
    }

    fn calculate_base_pos(&mut self) {
        self.num_base_pos_calcs += 1;
        self.base_pos = self.location();

        match self.base_pos {
            Some(p) => info!("SimGps surveyed RTK base position at {}", p),
            None => warn!("SimGps asked to survey a base position without a fix"),
        }
    }
}

impl SimArming {
    pub fn new(armed: bool) -> Self {
        Self { armed }
    }

    pub fn arm(&mut self) {
        if !self.armed {
            info!("Vehicle armed");
        }
        self.armed = true;
    }

    pub fn disarm(&mut self) {
        if self.armed {
            info!("Vehicle disarmed");
        }
        self.armed = false;
    }
}

impl ArmingState for SimArming {
    fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Default for NavFrame {
    fn default() -> Self {
        Self {
            declination_seed: None,
            long_scale: 1.0,
        }
    }
}

impl NavInit for NavFrame {
    fn seed_declination(&mut self, loc: &Location) {
        info!("Declination model seeded at {}", loc);
        self.declination_seed = Some(*loc);
    }

    fn set_long_scale(&mut self, long_scale: f64) {
        debug!("Longitude scale set to {:.6}", long_scale);
        self.long_scale = long_scale;
    }
}

impl SystemClock for SessionClock {
    fn set_utc_epoch_us(&mut self, epoch_us: u64) {
        if let Err(e) = util::session::set_utc_epoch_us(epoch_us) {
            warn!("Could not set the system clock: {}", e);
        }
    }
}
