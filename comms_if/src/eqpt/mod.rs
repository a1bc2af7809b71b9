//! # Equipment Interface
//!
//! This module defines the interface structures exchanged with the equipment that feeds the
//! navigation core.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

pub mod gps;
pub mod mission;
