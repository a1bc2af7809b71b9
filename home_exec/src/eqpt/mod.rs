//! # Equipment interfaces
//!
//! The navigation core never reaches for the GPS driver, the arming state or the logging system
//! directly. Each collaborator is described by a trait here, and one cycle's worth of borrowed
//! collaborators is handed to the core in a [`NavContext`].

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod event_archive;
mod mission_file;
mod sim;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::{
    eqpt::{
        gps::{GpsFixQuality, Location},
        mission::MissionCmd,
    },
    tm::NavEvent,
};
use log::warn;

pub use event_archive::EventArchive;
pub use mission_file::MissionFile;
pub use sim::{NavFrame, SessionClock, SimArming, SimGps};

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Source of vehicle position estimates and the navigation origin.
///
/// All queries are non-blocking, they return the best current estimate or report that nothing is
/// available.
pub trait PositionSource {
    /// Best estimate of the vehicle location, or `None` if there is no fix.
    fn location(&self) -> Option<Location>;

    /// Origin of the navigation estimator, or `None` if it has not been set.
    fn origin(&self) -> Option<Location>;

    /// Quality of the current GPS fix.
    fn fix_quality(&self) -> GpsFixQuality;

    /// Time of the current fix in microseconds since the unix epoch, zero if unknown.
    fn epoch_time_us(&self) -> u64;

    /// True if the receiver is able to survey an RTK base position.
    fn can_calculate_base_pos(&self) -> bool;

    /// Instruct the receiver to survey its RTK base position.
    fn calculate_base_pos(&mut self);
}

/// Arming state of the vehicle's motors.
pub trait ArmingState {
    fn is_armed(&self) -> bool;
}

/// Navigation constants derived from the first home position.
pub trait NavInit {
    /// Seed the magnetic declination model from the given location.
    fn seed_declination(&mut self, loc: &Location);

    /// Set the longitude distance scale used by navigation distance maths.
    fn set_long_scale(&mut self, long_scale: f64);
}

/// The process wide clock used to timestamp events.
pub trait SystemClock {
    /// Set the absolute time of the clock in microseconds since the unix epoch.
    fn set_utc_epoch_us(&mut self, epoch_us: u64);
}

/// Read access to the stored mission.
pub trait MissionStore {
    fn read_cmd_at(&self, index: u16) -> Option<MissionCmd>;
}

/// Consumer of the navigation core's events.
pub trait EventSink {
    fn log_event(&mut self, event: &NavEvent) -> Result<(), EventSinkError>;
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// The collaborators of the navigation core, borrowed for one cycle.
pub struct NavContext<'a> {
    pub gps: &'a mut dyn PositionSource,
    pub arming: &'a dyn ArmingState,
    pub nav_init: &'a mut dyn NavInit,
    pub clock: &'a mut dyn SystemClock,
    pub mission: &'a dyn MissionStore,
    pub events: &'a mut dyn EventSink,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum EventSinkError {
    #[error("Event sink is not available")]
    Unavailable,

    #[error("Could not serialise the event: {0}")]
    SerialiseError(serde_json::Error),

    #[error("Could not archive the event: {0}")]
    ArchiveError(util::archive::ArchiveError),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<'a> NavContext<'a> {
    /// Pass an event to the event sink.
    ///
    /// Sink failures are only warned about, they never fail the operation raising the event.
    pub fn log_event(&mut self, event: NavEvent) {
        if let Err(e) = self.events.log_event(&event) {
            warn!("Could not log {} event: {}", event.kind(), e);
        }
    }
}
