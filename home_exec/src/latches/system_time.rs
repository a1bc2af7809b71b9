//! System time latch

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use comms_if::tm::NavEvent;
use log::{info, trace, warn};
use util::time::epoch_us_to_datetime;

use super::SysFactLatches;
use crate::eqpt::NavContext;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SysFactLatches {
    /// Set the system clock from GPS time, the first time a 3D fix with a valid time is seen.
    ///
    /// Returns true if the latch fired on this poll.
    pub fn poll_system_time_latch(&mut self, ctx: &mut NavContext) -> bool {
        if self.system_time_set.is_fired() {
            return false;
        }

        if !ctx.gps.fix_quality().is_3d() {
            return false;
        }

        let epoch_us = ctx.gps.epoch_time_us();
        if epoch_us == 0 {
            trace!("3D fix without GPS time, system time not set");
            return false;
        }

        if epoch_us_to_datetime(epoch_us).is_none() {
            warn!("GPS time {} us is not a valid date, system time not set", epoch_us);
            return false;
        }

        ctx.clock.set_utc_epoch_us(epoch_us);
        self.system_time_set.fire();

        info!("System time set from GPS ({} us since epoch)", epoch_us);
        ctx.log_event(NavEvent::SystemTimeSet { epoch_us });

        true
    }
}
