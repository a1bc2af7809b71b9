//! Implementations for the NavHome state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use comms_if::{
    eqpt::gps::Location,
    tc::home::HomeCmd,
    tm::{HomeRecord, HomeState},
};
use log::{info, trace};
use serde::Serialize;
use std::{
    convert::Infallible,
    sync::{Arc, Mutex},
};

// Internal
use super::{NavHomeInitError, NavHomeParams};
use crate::{
    eqpt::NavContext,
    home_mgr::{HomeError, HomeMgr},
    latches::SysFactLatches,
    origin_guard::OriginGuard,
};
use util::{
    archive::{ArchiveError, Archived, Archiver},
    module::State,
    params,
    session::{self, Session},
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Navigation home module state
#[derive(Default)]
pub struct NavHome {
    home_mgr: HomeMgr,

    origin_guard: OriginGuard,

    latches: SysFactLatches,

    report: StatusReport,
    arch_record: Archiver,
}

/// A NavHome which may be shared between threads.
pub type SharedNavHome = Arc<Mutex<NavHome>>;

/// Status report for NavHome processing.
///
/// Each flag is true only on the cycle the corresponding transition happened.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub home_adopted: bool,
    pub system_time_set: bool,
    pub rtk_base_pos_latched: bool,
}

/// One row of the home archive.
#[derive(Serialize)]
struct HomeArchRow {
    time_s: f64,
    lat: i32,
    lng: i32,
    alt_cm: i32,
    state: HomeState,
    system_time_set: bool,
    rtk_base_pos_set: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State for NavHome {
    type InitData = &'static str;
    type InitError = NavHomeInitError;

    type InputData<'a> = NavContext<'a>;
    type OutputData = HomeRecord;
    type StatusReport = StatusReport;
    type ProcError = Infallible;

    /// Initialise the NavHome module.
    ///
    /// Expected init data is the path to the parameter file
    fn init(&mut self, init_data: Self::InitData, session: &Session) -> Result<(), Self::InitError> {
        let params: NavHomeParams =
            params::load(init_data).map_err(NavHomeInitError::ParamLoadError)?;

        *self = NavHome::new(params);

        self.arch_record = Archiver::from_path(session, "nav_home/home_record.csv")
            .map_err(NavHomeInitError::ArchiveError)?;

        Ok(())
    }

    /// Perform cyclic processing of NavHome.
    fn proc(
        &mut self,
        mut ctx: Self::InputData<'_>,
    ) -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError> {
        // Clear the status report
        self.report = StatusReport::default();

        // Adoption must be resolved before the latches which read the home state
        if !self.home_mgr.state().is_set() {
            match self.home_mgr.adopt_current_if_unset(&mut ctx) {
                Ok(()) => {
                    info!("Home adopted from the current position");
                    self.report.home_adopted = true;
                }
                Err(e) => trace!("Home not adopted this cycle: {}", e),
            }
        }

        self.report.system_time_set = self.latches.poll_system_time_latch(&mut ctx);

        self.report.rtk_base_pos_latched = self
            .latches
            .poll_rtk_base_latch(self.home_mgr.state(), &mut ctx);

        Ok((self.home_mgr.record(), self.report))
    }
}

impl Archived for NavHome {
    fn write(&mut self) -> Result<(), ArchiveError> {
        let record = self.home_mgr.record();

        self.arch_record.serialise(HomeArchRow {
            time_s: session::get_elapsed_seconds(),
            lat: record.location.lat,
            lng: record.location.lng,
            alt_cm: record.location.alt_cm,
            state: record.state,
            system_time_set: self.latches.system_time_set().is_fired(),
            rtk_base_pos_set: self.latches.rtk_base_pos_set().is_fired(),
        })
    }
}

impl NavHome {
    /// Create a new NavHome with home unset and both latches pending.
    pub fn new(params: NavHomeParams) -> Self {
        Self {
            home_mgr: HomeMgr::new(params.home_mgr),
            origin_guard: OriginGuard::new(params.origin_guard),
            ..Default::default()
        }
    }

    /// Wrap this NavHome so it can be shared between threads.
    pub fn into_shared(self) -> SharedNavHome {
        Arc::new(Mutex::new(self))
    }

    pub fn latches(&self) -> &SysFactLatches {
        &self.latches
    }

    pub fn state(&self) -> HomeState {
        self.home_mgr.state()
    }

    pub fn home(&self) -> Location {
        self.home_mgr.home()
    }

    pub fn adopt_current_if_unset(&mut self, ctx: &mut NavContext) -> Result<(), HomeError> {
        self.home_mgr.adopt_current_if_unset(ctx)
    }

    pub fn set_home(&mut self, loc: Location, ctx: &mut NavContext) -> Result<(), HomeError> {
        self.home_mgr.set_home(loc, ctx)
    }

    pub fn set_home_and_lock(
        &mut self,
        loc: Location,
        ctx: &mut NavContext,
    ) -> Result<(), HomeError> {
        self.home_mgr.set_home_and_lock(loc, ctx)
    }

    pub fn lock_current_home(&mut self, ctx: &mut NavContext) -> Result<(), HomeError> {
        self.home_mgr.lock_current_home(ctx)
    }

    pub fn poll_system_time_latch(&mut self, ctx: &mut NavContext) -> bool {
        self.latches.poll_system_time_latch(ctx)
    }

    pub fn poll_rtk_base_latch(&mut self, ctx: &mut NavContext) -> bool {
        self.latches
            .poll_rtk_base_latch(self.home_mgr.state(), ctx)
    }

    /// Execute an operator home command.
    ///
    /// Commands which move home are checked against the navigation origin first, and a plain set
    /// is refused while home is locked.
    pub fn exec_home_cmd(&mut self, cmd: &HomeCmd, ctx: &mut NavContext) -> Result<(), HomeError> {
        match *cmd {
            HomeCmd::Set { .. } => {
                let loc = cmd.location().ok_or(HomeError::InvalidLocation)?;
                self.check_new_home(&loc, ctx)?;
                self.home_mgr.update_home(loc, ctx)
            }
            HomeCmd::SetAndLock { .. } => {
                let loc = cmd.location().ok_or(HomeError::InvalidLocation)?;
                self.check_new_home(&loc, ctx)?;
                self.home_mgr.set_home_and_lock(loc, ctx)
            }
            HomeCmd::UseCurrent { lock } => {
                let loc = self.home_mgr.current_location(ctx)?;
                self.check_new_home(&loc, ctx)?;
                match lock {
                    true => self.home_mgr.set_home_and_lock(loc, ctx),
                    false => self.home_mgr.update_home(loc, ctx),
                }
            }
            HomeCmd::Lock => self.home_mgr.lock_current_home(ctx),
        }
    }

    /// The zero location is refused before the origin is consulted.
    fn check_new_home(&self, loc: &Location, ctx: &NavContext) -> Result<(), HomeError> {
        if loc.is_zero() {
            return Err(HomeError::InvalidLocation);
        }

        self.origin_guard.check(loc, ctx.gps.origin())
    }
}
