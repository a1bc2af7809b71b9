//! RTK base position latch

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use comms_if::tm::{HomeState, NavEvent};
use log::{info, warn};

use super::SysFactLatches;
use crate::eqpt::NavContext;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SysFactLatches {
    /// Survey the RTK base position once home is set and the vehicle is disarmed.
    ///
    /// The survey assumes the vehicle is stationary, so nothing happens while armed. Once the
    /// disarmed and home-set gate passes the latch fires whether or not the receiver was able to
    /// survey on that cycle, the survey is only ever attempted once.
    ///
    /// Returns true if the latch fired on this poll.
    pub fn poll_rtk_base_latch(&mut self, home_state: HomeState, ctx: &mut NavContext) -> bool {
        if self.rtk_base_pos_set.is_fired() {
            return false;
        }

        if ctx.arming.is_armed() || !home_state.is_set() {
            return false;
        }

        let calculated = ctx.gps.can_calculate_base_pos();
        if calculated {
            ctx.gps.calculate_base_pos();
            info!("RTK base position survey requested");
        } else {
            warn!("GPS cannot survey an RTK base position, base position will not be set");
        }

        self.rtk_base_pos_set.fire();
        ctx.log_event(NavEvent::RtkBasePosLatched { calculated });

        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_eqpt::FakeEqpt;

    #[test]
    fn test_pending_until_home_set() {
        let mut eqpt = FakeEqpt::default();
        eqpt.gps.can_calc_base_pos = true;
        let mut latches = SysFactLatches::default();

        assert!(!latches.poll_rtk_base_latch(HomeState::Unset, &mut eqpt.ctx()));
        assert!(!latches.rtk_base_pos_set().is_fired());

        assert!(latches.poll_rtk_base_latch(HomeState::SetUnlocked, &mut eqpt.ctx()));
        assert!(latches.rtk_base_pos_set().is_fired());
        assert_eq!(eqpt.gps.num_base_pos_calcs, 1);
    }

    #[test]
    fn test_never_calculates_while_armed() {
        let mut eqpt = FakeEqpt::default();
        eqpt.gps.can_calc_base_pos = true;
        eqpt.arming.armed = true;
        let mut latches = SysFactLatches::default();

        let states = [
            HomeState::Unset,
            HomeState::SetUnlocked,
            HomeState::SetAndLocked,
        ];

        for i in 0..300 {
            eqpt.gps.can_calc_base_pos = i % 2 == 0;
            assert!(!latches.poll_rtk_base_latch(states[i % 3], &mut eqpt.ctx()));
        }

        assert_eq!(eqpt.gps.num_base_pos_calcs, 0);
        assert!(!latches.rtk_base_pos_set().is_fired());

        // Disarming lets it through
        eqpt.arming.armed = false;
        eqpt.gps.can_calc_base_pos = true;
        assert!(latches.poll_rtk_base_latch(HomeState::SetAndLocked, &mut eqpt.ctx()));
        assert_eq!(eqpt.gps.num_base_pos_calcs, 1);

        // And arming afterwards never triggers another survey
        eqpt.arming.armed = true;
        for _ in 0..100 {
            assert!(!latches.poll_rtk_base_latch(HomeState::SetAndLocked, &mut eqpt.ctx()));
        }
        assert_eq!(eqpt.gps.num_base_pos_calcs, 1);
    }

    #[test]
    fn test_fires_without_survey_capability() {
        let mut eqpt = FakeEqpt::default();
        eqpt.gps.can_calc_base_pos = false;
        let mut latches = SysFactLatches::default();

        // Gate passes, survey impossible: latch still fires and never tries again
        assert!(latches.poll_rtk_base_latch(HomeState::SetUnlocked, &mut eqpt.ctx()));
        assert!(latches.rtk_base_pos_set().is_fired());
        assert_eq!(eqpt.gps.num_base_pos_calcs, 0);
        assert_eq!(
            eqpt.events.events,
            vec![NavEvent::RtkBasePosLatched { calculated: false }]
        );

        eqpt.gps.can_calc_base_pos = true;
        for _ in 0..10_000 {
            assert!(!latches.poll_rtk_base_latch(HomeState::SetUnlocked, &mut eqpt.ctx()));
            assert!(latches.rtk_base_pos_set().is_fired());
        }
        assert_eq!(eqpt.gps.num_base_pos_calcs, 0);
    }

    #[test]
    fn test_survey_at_most_once() {
        let mut eqpt = FakeEqpt::default();
        eqpt.gps.can_calc_base_pos = true;
        let mut latches = SysFactLatches::default();

        let num_fired = (0..10_000)
            .filter(|_| latches.poll_rtk_base_latch(HomeState::SetUnlocked, &mut eqpt.ctx()))
            .count();

        assert_eq!(num_fired, 1);
        assert_eq!(eqpt.gps.num_base_pos_calcs, 1);
        assert_eq!(eqpt.num_events_of("RTK_BASE_POS_LATCHED"), 1);
    }
}
