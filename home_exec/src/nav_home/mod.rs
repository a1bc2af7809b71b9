//! # Navigation home module
//!
//! [`NavHome`] is the single owner of the home manager, the origin guard and the system fact
//! latches. Every mutation of home or of a latch goes through it, so when it is shared between
//! threads one lock around it ([`SharedNavHome`]) makes each operation atomic to readers.
//!
//! Each cycle runs, in order:
//!
//! 1. adoption of the current fix as home, if home is unset,
//! 2. the system time latch,
//! 3. the RTK base position latch, which depends on the home state resolved in step 1.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors which can occur while initialising NavHome.
#[derive(Debug, thiserror::Error)]
pub enum NavHomeInitError {
    #[error("Failed to load NavHome parameters: {0}")]
    ParamLoadError(util::params::LoadError),

    #[error("Failed to create the NavHome archive: {0}")]
    ArchiveError(util::archive::ArchiveError),
}
