//! Main navigation home executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise the equipment and NavHome
//!     - Main loop:
//!         - Telecommand processing and handling (arming, simulated GPS, home commands)
//!         - NavHome processing:
//!             - Home adoption
//!             - System time latch
//!             - RTK base position latch
//!         - Archive writing
//!
//! The executable is driven by a telecommand script given as the only argument, and stops once
//! the end of the script is reached.

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

use home_lib::{
    data_store::DataStore,
    eqpt::{EventArchive, MissionFile, SimArming},
    params::HomeExecParams,
    tc_processor,
};

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::{debug, info, warn};
use std::env;
use std::thread;
use std::time::{Duration, Instant};

// Internal
use util::{
    archive::Archived,
    logger::{logger_init, LevelFilter},
    module::State,
    script_interpreter::{PendingTcs, ScriptInterpreter},
    session::Session,
};

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("home_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Debug, &session).wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Navigation Home Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let exec_params: HomeExecParams =
        util::params::load("home_exec.toml").wrap_err("Could not load exec params")?;

    if exec_params.cycle_period_s <= 0.0 {
        return Err(eyre!(
            "Cycle period must be positive, found {} s",
            exec_params.cycle_period_s
        ));
    }
    let cycle_frequency_hz = 1.0 / exec_params.cycle_period_s;

    info!("Exec parameters loaded");

    // ---- INITIALISE TC SOURCE ----

    // Collect all arguments
    let args: Vec<String> = env::args().collect();

    debug!("CLI arguments: {:?}", args);

    let script_path = script_path_arg(&args)?;

    info!("Loading script from \"{}\"", script_path);

    let mut si = ScriptInterpreter::new(script_path).wrap_err("Failed to load script")?;

    info!(
        "Loaded script lasts {:.02} s and contains {} TCs\n",
        si.get_duration(),
        si.get_num_tcs()
    );

    // ---- INITIALISE DATASTORE ----

    info!("Initialising equipment...");

    let mut ds = DataStore::default();

    ds.eqpt.arming = SimArming::new(exec_params.start_armed);

    ds.eqpt.mission = match MissionFile::load(&exec_params.mission_file) {
        Ok(m) => {
            info!("Mission loaded with {} commands", m.num_cmds());
            m
        }
        Err(e) => {
            warn!("No mission loaded, mission storage will be empty: {}", e);
            MissionFile::default()
        }
    };

    ds.eqpt.events =
        EventArchive::new(&session).wrap_err("Failed to initialise the event archive")?;

    info!("Equipment initialisation complete");

    // ---- INITIALISE MODULES ----

    info!("Initialising modules...");

    ds.nav_home
        .init("nav_home.toml", &session)
        .wrap_err("Failed to initialise NavHome")?;
    info!("NavHome init complete");

    info!("Module initialisation complete\n");

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    let cycle_period = Duration::from_secs_f64(exec_params.cycle_period_s);

    loop {
        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // Clear items that need wiping at the start of the cycle
        ds.cycle_start(cycle_frequency_hz);

        // ---- TELECOMMAND PROCESSING ----

        match si.get_pending_tcs() {
            PendingTcs::None => (),
            PendingTcs::Some(tc_vec) => {
                for tc in tc_vec.iter() {
                    tc_processor::exec(&mut ds, tc);
                }
            }
            // Exit if end of script reached
            PendingTcs::EndOfScript => {
                info!("End of TC script reached, stopping");
                break;
            }
        }

        // ---- NAVHOME PROCESSING ----

        match ds.nav_home.proc(ds.eqpt.context()) {
            Ok((o, r)) => {
                ds.nav_home_output = o;
                ds.nav_home_status_rpt = r;
            }
            Err(e) => match e {},
        }

        let rpt = ds.nav_home_status_rpt;
        if rpt.home_adopted || rpt.system_time_set || rpt.rtk_base_pos_latched {
            info!("NavHome status: {:?}", rpt);
        }

        if ds.is_1_hz_cycle {
            debug!(
                "Home: {} ({:?}), events logged: {}",
                ds.nav_home_output.location,
                ds.nav_home_output.state,
                ds.eqpt.events.num_events()
            );
        }

        // ---- WRITE ARCHIVES ----

        if let Err(e) = ds.nav_home.write() {
            warn!("Could not write the NavHome archive: {}", e);
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match cycle_period.checked_sub(cycle_dur) {
            Some(d) => {
                ds.num_consec_cycle_overruns = 0;
                thread::sleep(d);
            }
            None => {
                ds.num_consec_cycle_overruns += 1;
                warn!(
                    "Cycle overran by {:.06} s ({} consecutive)",
                    cycle_dur.as_secs_f64() - cycle_period.as_secs_f64(),
                    ds.num_consec_cycle_overruns
                );
            }
        }

        // Increment cycle counter
        ds.num_cycles += 1;
    }

    // ---- SHUTDOWN ----

    info!(
        "End of execution, home is {} ({:?})",
        ds.nav_home.home(),
        ds.nav_home.state()
    );

    Ok(())
}

/// Get the script path from the command line arguments, which must be exactly one.
fn script_path_arg(args: &[String]) -> Result<&str, Report> {
    match args {
        [_, path] => Ok(path.as_str()),
        _ => Err(eyre!(
            "Expected a single script path argument, found {} arguments",
            args.len().saturating_sub(1)
        )),
    }
}
