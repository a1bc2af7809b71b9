//! # Communications interface crate.
//!
//! Provides all common interface types shared between the navigation home core, its equipment
//! and the executable.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

pub mod tc;

/// Telemetry definitions (home record and navigation events)
pub mod tm;

/// Data definitions for equipment (like the GPS receiver)
pub mod eqpt;
