//! Implementations for the HomeMgr state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use comms_if::{eqpt::gps::Location, tm::NavEvent};
use log::{debug, info, warn};

// Internal
use super::{HomeError, HomeMgrParams, HomeRecord, HomeState};
use crate::{eqpt::NavContext, geo};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Home manager state
#[derive(Debug, Clone)]
pub struct HomeMgr {
    params: HomeMgrParams,

    record: HomeRecord,

    /// Longitude scale of the first home, 1 until home is set.
    long_scale: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for HomeMgr {
    fn default() -> Self {
        Self::new(HomeMgrParams::default())
    }
}

impl HomeMgr {
    /// Create a new manager with home unset.
    pub fn new(params: HomeMgrParams) -> Self {
        Self {
            params,
            record: HomeRecord::default(),
            long_scale: 1.0,
        }
    }

    pub fn state(&self) -> HomeState {
        self.record.state
    }

    pub fn home(&self) -> Location {
        self.record.location
    }

    /// Snapshot of the home location and state.
    pub fn record(&self) -> HomeRecord {
        self.record
    }

    /// Longitude distance scale derived from the first home.
    pub fn long_scale(&self) -> f64 {
        self.long_scale
    }

    /// Adopt the current position estimate as home if no home has been set yet.
    ///
    /// Once home exists this does nothing and returns `PreconditionNotMet`.
    pub fn adopt_current_if_unset(&mut self, ctx: &mut NavContext) -> Result<(), HomeError> {
        if self.record.state.is_set() {
            return Err(HomeError::PreconditionNotMet("home is already set"));
        }

        let loc = self.current_location(ctx)?;

        self.set_home(loc, ctx)
    }

    /// Store the given location as home.
    ///
    /// The state is only changed when leaving `Unset`, so this will overwrite a locked home. Use
    /// [`HomeMgr::update_home`] for operator requests which must respect the lock.
    pub fn set_home(&mut self, loc: Location, ctx: &mut NavContext) -> Result<(), HomeError> {
        self.store_home(loc, false, ctx)
    }

    /// Store the given location as home and lock it.
    pub fn set_home_and_lock(
        &mut self,
        loc: Location,
        ctx: &mut NavContext,
    ) -> Result<(), HomeError> {
        self.store_home(loc, true, ctx)
    }

    /// Lock home at its current location.
    pub fn lock_current_home(&mut self, ctx: &mut NavContext) -> Result<(), HomeError> {
        if !self.record.state.is_set() {
            return Err(HomeError::PreconditionNotMet("cannot lock home before it is set"));
        }

        self.set_home_and_lock(self.record.location, ctx)
    }

    /// Move home on behalf of an unprivileged request, refused while home is locked.
    pub fn update_home(&mut self, loc: Location, ctx: &mut NavContext) -> Result<(), HomeError> {
        if self.record.state.is_locked() {
            return Err(HomeError::HomeLocked);
        }

        self.set_home(loc, ctx)
    }

    /// Get the location home would be set to if set from the current estimate.
    ///
    /// While armed the altitude is taken from the navigation origin (if enabled in the params), as
    /// the vehicle is not sitting at ground level. Without an origin the estimate's own altitude is
    /// kept.
    pub fn current_location(&self, ctx: &NavContext) -> Result<Location, HomeError> {
        let mut loc = ctx.gps.location().ok_or(HomeError::NoFixAvailable)?;

        if self.params.inflight_alt_from_origin && ctx.arming.is_armed() {
            match ctx.gps.origin() {
                Some(origin) => {
                    debug!(
                        "Armed, using origin altitude {:.2} m for home instead of {:.2} m",
                        origin.alt_m(),
                        loc.alt_m()
                    );
                    loc.alt_cm = origin.alt_cm;
                }
                None => warn!(
                    "Armed without a navigation origin, home altitude {:.2} m taken from the \
                    current estimate",
                    loc.alt_m()
                ),
            }
        }

        Ok(loc)
    }

    fn store_home(
        &mut self,
        loc: Location,
        lock: bool,
        ctx: &mut NavContext,
    ) -> Result<(), HomeError> {
        if loc.is_zero() {
            return Err(HomeError::InvalidLocation);
        }

        let prev_state = self.record.state;

        self.record.location = loc;

        if prev_state == HomeState::Unset {
            self.record.state = HomeState::SetUnlocked;
            self.first_home_init(&loc, ctx);
        }

        if lock {
            self.record.state = HomeState::SetAndLocked;
        }

        info!("Home set to {} ({:?})", loc, self.record.state);

        ctx.log_event(NavEvent::HomeSet {
            home: loc,
            state: self.record.state,
        });

        Ok(())
    }

    /// Seed everything derived from the first home.
    fn first_home_init(&mut self, loc: &Location, ctx: &mut NavContext) {
        ctx.nav_init.seed_declination(loc);

        self.long_scale = geo::longitude_scale(loc);
        ctx.nav_init.set_long_scale(self.long_scale);

        if self.params.log_home_cmd {
            match ctx.mission.read_cmd_at(self.params.home_cmd_index) {
                Some(cmd) => ctx.log_event(NavEvent::HomeMissionCmd { cmd }),
                None => debug!("No home command in mission storage to log"),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_eqpt::FakeEqpt;
    use comms_if::eqpt::mission::MissionCmd;

    fn loc_a() -> Location {
        Location::from_degrees(12.34, 56.78, 10.0)
    }

    fn loc_b() -> Location {
        Location::from_degrees(12.35, 56.79, 12.0)
    }

    #[test]
    fn test_sentinel_rejected() {
        let mut eqpt = FakeEqpt::default();
        let mut mgr = HomeMgr::default();

        for loc in [Location::new(0, 0, 0), Location::new(0, 0, 12_000)] {
            assert_eq!(mgr.set_home(loc, &mut eqpt.ctx()), Err(HomeError::InvalidLocation));
            assert_eq!(
                mgr.set_home_and_lock(loc, &mut eqpt.ctx()),
                Err(HomeError::InvalidLocation)
            );
            assert_eq!(mgr.state(), HomeState::Unset);
            assert!(mgr.home().is_zero());
        }

        // Also rejected once home exists, without touching it
        mgr.set_home(loc_a(), &mut eqpt.ctx()).unwrap();
        assert_eq!(
            mgr.set_home(Location::new(0, 0, 0), &mut eqpt.ctx()),
            Err(HomeError::InvalidLocation)
        );
        assert_eq!(mgr.home(), loc_a());
        assert_eq!(mgr.state(), HomeState::SetUnlocked);
        assert!(eqpt.events.events.len() == 1);
    }

    #[test]
    fn test_first_set_side_effects_fire_once() {
        let mut eqpt = FakeEqpt::default();
        eqpt.mission.cmds.push(MissionCmd {
            index: 0,
            id: 16,
            location: loc_a(),
        });
        let mut mgr = HomeMgr::default();

        mgr.set_home(loc_a(), &mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.state(), HomeState::SetUnlocked);
        assert_eq!(eqpt.nav_init.declination_seeds, vec![loc_a()]);
        assert_eq!(eqpt.nav_init.long_scales.len(), 1);
        assert_eq!(eqpt.num_events_of("HOME_MISSION_CMD"), 1);

        mgr.set_home(loc_b(), &mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.home(), loc_b());
        assert_eq!(mgr.state(), HomeState::SetUnlocked);
        assert_eq!(eqpt.nav_init.declination_seeds.len(), 1);
        assert_eq!(eqpt.nav_init.long_scales.len(), 1);
        assert_eq!(eqpt.num_events_of("HOME_MISSION_CMD"), 1);
        assert_eq!(eqpt.num_events_of("HOME_SET"), 2);

        // The scale stays that of the first home
        assert_eq!(mgr.long_scale(), geo::longitude_scale(&loc_a()));
    }

    #[test]
    fn test_missing_home_cmd_tolerated() {
        let mut eqpt = FakeEqpt::default();
        let mut mgr = HomeMgr::default();

        mgr.set_home(loc_a(), &mut eqpt.ctx()).unwrap();
        assert_eq!(eqpt.num_events_of("HOME_MISSION_CMD"), 0);
        assert_eq!(eqpt.num_events_of("HOME_SET"), 1);
    }

    #[test]
    fn test_event_sink_failure_does_not_fail_set() {
        let mut eqpt = FakeEqpt::default();
        eqpt.events.fail = true;
        let mut mgr = HomeMgr::default();

        assert!(mgr.set_home_and_lock(loc_a(), &mut eqpt.ctx()).is_ok());
        assert_eq!(mgr.state(), HomeState::SetAndLocked);
    }

    #[test]
    fn test_set_and_lock_from_unset() {
        let mut eqpt = FakeEqpt::default();
        let mut mgr = HomeMgr::default();

        mgr.set_home_and_lock(loc_a(), &mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.state(), HomeState::SetAndLocked);
        assert_eq!(mgr.home(), loc_a());

        // First-home initialisation still happens on the lock path
        assert_eq!(eqpt.nav_init.declination_seeds.len(), 1);
        assert_eq!(
            eqpt.events.events.last(),
            Some(&NavEvent::HomeSet {
                home: loc_a(),
                state: HomeState::SetAndLocked
            })
        );
    }

    #[test]
    fn test_locked_home_protected_from_update() {
        let mut eqpt = FakeEqpt::default();
        let mut mgr = HomeMgr::default();

        mgr.set_home_and_lock(loc_a(), &mut eqpt.ctx()).unwrap();

        assert_eq!(
            mgr.update_home(loc_b(), &mut eqpt.ctx()),
            Err(HomeError::HomeLocked)
        );
        assert_eq!(mgr.home(), loc_a());
        assert_eq!(mgr.state(), HomeState::SetAndLocked);

        // Privileged re-home-and-lock still moves it
        mgr.set_home_and_lock(loc_b(), &mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.home(), loc_b());
        assert_eq!(mgr.state(), HomeState::SetAndLocked);
    }

    #[test]
    fn test_update_home_while_unlocked() {
        let mut eqpt = FakeEqpt::default();
        let mut mgr = HomeMgr::default();

        mgr.update_home(loc_a(), &mut eqpt.ctx()).unwrap();
        mgr.update_home(loc_b(), &mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.home(), loc_b());
        assert_eq!(mgr.state(), HomeState::SetUnlocked);
    }

    #[test]
    fn test_lock_requires_home() {
        let mut eqpt = FakeEqpt::default();
        let mut mgr = HomeMgr::default();

        assert!(matches!(
            mgr.lock_current_home(&mut eqpt.ctx()),
            Err(HomeError::PreconditionNotMet(_))
        ));
        assert_eq!(mgr.state(), HomeState::Unset);
        assert!(eqpt.events.events.is_empty());

        mgr.set_home(loc_a(), &mut eqpt.ctx()).unwrap();
        mgr.lock_current_home(&mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.state(), HomeState::SetAndLocked);
        assert_eq!(mgr.home(), loc_a());

        // Locking again is harmless
        mgr.lock_current_home(&mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.state(), HomeState::SetAndLocked);
    }

    #[test]
    fn test_adopt_without_fix() {
        let mut eqpt = FakeEqpt::default();
        let mut mgr = HomeMgr::default();

        assert_eq!(
            mgr.adopt_current_if_unset(&mut eqpt.ctx()),
            Err(HomeError::NoFixAvailable)
        );
        assert_eq!(mgr.state(), HomeState::Unset);
        assert!(eqpt.nav_init.declination_seeds.is_empty());
    }

    #[test]
    fn test_adopt_is_idempotent_once_set() {
        let mut eqpt = FakeEqpt::default();
        eqpt.fix_at(loc_a());
        let mut mgr = HomeMgr::default();

        mgr.adopt_current_if_unset(&mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.home(), loc_a());
        let num_events = eqpt.events.events.len();

        eqpt.fix_at(loc_b());
        for _ in 0..100 {
            assert!(matches!(
                mgr.adopt_current_if_unset(&mut eqpt.ctx()),
                Err(HomeError::PreconditionNotMet(_))
            ));
        }
        assert_eq!(mgr.home(), loc_a());
        assert_eq!(mgr.state(), HomeState::SetUnlocked);
        assert_eq!(eqpt.events.events.len(), num_events);

        mgr.lock_current_home(&mut eqpt.ctx()).unwrap();
        assert!(mgr.adopt_current_if_unset(&mut eqpt.ctx()).is_err());
        assert_eq!(mgr.home(), loc_a());
    }

    #[test]
    fn test_adopt_zero_fix_rejected() {
        let mut eqpt = FakeEqpt::default();
        eqpt.fix_at(Location::new(0, 0, 100));
        let mut mgr = HomeMgr::default();

        assert_eq!(
            mgr.adopt_current_if_unset(&mut eqpt.ctx()),
            Err(HomeError::InvalidLocation)
        );
        assert_eq!(mgr.state(), HomeState::Unset);
    }

    #[test]
    fn test_adopt_while_armed_uses_origin_altitude() {
        let mut eqpt = FakeEqpt::default();
        eqpt.fix_at(loc_a());
        eqpt.gps.origin = Some(Location::from_degrees(12.30, 56.70, 3.5));
        eqpt.arming.armed = true;
        let mut mgr = HomeMgr::default();

        mgr.adopt_current_if_unset(&mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.home().lat, loc_a().lat);
        assert_eq!(mgr.home().lng, loc_a().lng);
        assert_eq!(mgr.home().alt_cm, 350);
    }

    #[test]
    fn test_adopt_while_armed_without_origin() {
        let mut eqpt = FakeEqpt::default();
        eqpt.fix_at(loc_a());
        eqpt.gps.origin = None;
        eqpt.arming.armed = true;
        let mut mgr = HomeMgr::default();

        // Missing origin never blocks adoption, the estimate is used as is
        mgr.adopt_current_if_unset(&mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.home(), loc_a());
        assert_eq!(mgr.state(), HomeState::SetUnlocked);

        // Same with the in-flight altitude rule disabled and the origin present
        let mut eqpt = FakeEqpt::default();
        eqpt.fix_at(loc_a());
        eqpt.gps.origin = Some(Location::from_degrees(12.30, 56.70, 3.5));
        eqpt.arming.armed = true;
        let mut mgr = HomeMgr::new(HomeMgrParams {
            inflight_alt_from_origin: false,
            ..Default::default()
        });
        mgr.adopt_current_if_unset(&mut eqpt.ctx()).unwrap();
        assert_eq!(mgr.home(), loc_a());
    }

    #[test]
    fn test_raw_set_overwrites_locked_home() {
        let mut eqpt = FakeEqpt::default();
        let mut mgr = HomeMgr::default();

        mgr.set_home_and_lock(loc_a(), &mut eqpt.ctx()).unwrap();
        mgr.set_home(loc_b(), &mut eqpt.ctx()).unwrap();

        assert_eq!(mgr.home(), loc_b());
        assert_eq!(mgr.state(), HomeState::SetAndLocked);
    }
}
