//! # Navigation home library.
//!
//! This library holds the home position state machine, the navigation origin guard and the
//! one-shot system fact latches, along with the equipment interfaces they are driven through.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Data store for the executable - all module state and equipment for one cycle
pub mod data_store;

/// Equipment interfaces - the collaborators the core is driven through, and their simulated
/// implementations
pub mod eqpt;

/// Geodesy helpers - distances between locations
pub mod geo;

/// Home manager module - the home position state machine
pub mod home_mgr;

/// System fact latches - one-shot system time and RTK base position capture
pub mod latches;

/// Navigation home module - owns home and the latches and steps them once per cycle
pub mod nav_home;

/// Executable parameters
pub mod params;

/// Navigation origin guard - rejects homes implausibly far from the navigation origin
pub mod origin_guard;

/// Telecommand processor - executes telecommands against the data store
pub mod tc_processor;

#[cfg(test)]
pub(crate) mod test_eqpt;
