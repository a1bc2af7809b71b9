//! # Event archive
//!
//! Event sink writing every navigation event as a row of a session CSV archive.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::tm::NavEvent;
use serde::Serialize;
use util::{
    archive::{ArchiveError, Archiver},
    session::{self, Session},
};

use super::{EventSink, EventSinkError};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Session archive relative path of the event log
const EVENT_ARCH_PATH: &str = "nav_home/events.csv";

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Default)]
pub struct EventArchive {
    arch: Archiver,

    num_events: u64,
}

#[derive(Serialize)]
struct EventRow<'a> {
    time_s: f64,
    kind: &'a str,
    payload: String,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl EventArchive {
    pub fn new(session: &Session) -> Result<Self, ArchiveError> {
        Ok(Self {
            arch: Archiver::from_path(session, EVENT_ARCH_PATH)?,
            num_events: 0,
        })
    }

    /// Number of events written so far
    pub fn num_events(&self) -> u64 {
        self.num_events
    }
}

impl EventSink for EventArchive {
    fn log_event(&mut self, event: &NavEvent) -> Result<(), EventSinkError> {
        if !self.arch.is_init() {
            return Err(EventSinkError::Unavailable);
        }

        let payload = serde_json::to_string(event).map_err(EventSinkError::SerialiseError)?;

        self.arch
            .serialise(EventRow {
                time_s: session::get_elapsed_seconds(),
                kind: event.kind(),
                payload,
            })
            .map_err(EventSinkError::ArchiveError)?;

        self.num_events += 1;

        Ok(())
    }
}
