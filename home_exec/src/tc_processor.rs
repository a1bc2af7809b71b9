//! # Telecommand processor module
//!
//! The telecommand processor handles various TCs coming from any source.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, warn};

// Internal
use crate::data_store::DataStore;
use comms_if::tc::Tc;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Execute a telecommand.
///
/// Mutates the datastore to send commands to different modules. Home commands are executed
/// immediately rather than waiting for the next NavHome cycle.
pub fn exec(ds: &mut DataStore, tc: &Tc) {
    // Handle different Tcs
    match tc {
        Tc::Arm => {
            debug!("Recieved Arm command");
            ds.eqpt.arming.arm();
        }
        Tc::Disarm => {
            debug!("Recieved Disarm command");
            ds.eqpt.arming.disarm();
        }
        Tc::SimGps(report) => ds.eqpt.gps.set_report(*report),
        Tc::Home(cmd) => match ds.nav_home.exec_home_cmd(cmd, &mut ds.eqpt.context()) {
            Ok(()) => info!(
                "Home command {:?} executed, home is {} ({:?})",
                cmd,
                ds.nav_home.home(),
                ds.nav_home.state()
            ),
            Err(e) => warn!("Home command {:?} rejected: {}", cmd, e),
        },
    }
}
