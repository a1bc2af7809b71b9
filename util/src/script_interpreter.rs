//! # Telecommand script interpreter module
//!
//! This module provides an interpreter for telecommand scripts, allowing
//! telecommands to be executed at given session times.
//!
//! A script is a list of `time_s: {json tc};` entries, for example:
//!
//! ```text
//! 0.5: {"type": "DISARM"};
//! 2.0: {"type": "HOME", "payload": {"cmd": "LOCK"}};
//! ```

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use regex::RegexBuilder;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Internal
use crate::session::get_elapsed_seconds;
use comms_if::tc::{Tc, TcParseError};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Matches one `time: tc;` entry of a script.
const ENTRY_PATTERN: &str = r"^\s*(\d+(\.\d+)?)\s*:\s*([^;]*);";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A command which is scripted to occur at a specific time.
pub struct Command {
    /// The time the command is supposed to execute at
    exec_time_s: f64,

    /// The Telecommand to run
    tc: Tc,
}

/// A script interpreter.
///
/// After initialising with the path to the script to run use `.get_pending_tcs` to
/// acquire a list of telecommands that need executing.
pub struct ScriptInterpreter {
    _script_path: PathBuf,
    cmds: VecDeque<Command>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Could not find the script at {0:?}")]
    ScriptNotFound(PathBuf),

    #[error("Could not load the script: {0}")]
    ScriptLoadError(std::io::Error),

    #[error("The script is empty (or is so bad it can't be read)")]
    ScriptEmpty,

    #[error(
        "Script contains an invalid timestamp: {0}. \
        Should be a float (like 1.0)"
    )]
    InvalidTimestamp(String),

    #[error("Script contains an invalid TC at {0} s: {1}")]
    InvalidTc(f64, TcParseError),

    #[error("Script pattern failed to build: {0}")]
    PatternError(regex::Error),
}

pub enum PendingTcs {
    None,
    Some(Vec<Tc>),
    EndOfScript,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ScriptInterpreter {
    /// Create a new interpreter from the given script path.
    pub fn new<P: AsRef<Path>>(script_path: P) -> Result<Self, ScriptError> {
        // Get the path in a buffer
        let path = PathBuf::from(script_path.as_ref());

        // Check that the script file exists.
        if !path.exists() {
            return Err(ScriptError::ScriptNotFound(path));
        }

        // Load the script into a string
        let script = fs::read_to_string(&path).map_err(ScriptError::ScriptLoadError)?;

        Ok(ScriptInterpreter {
            _script_path: path,
            cmds: Self::parse(&script)?,
        })
    }

    /// Parse the contents of a script into a queue of commands.
    pub fn parse(script: &str) -> Result<VecDeque<Command>, ScriptError> {
        // Empty queue of commands
        let mut tc_queue: VecDeque<Command> = VecDeque::new();

        let re = RegexBuilder::new(ENTRY_PATTERN)
            .multi_line(true)
            .build()
            .map_err(ScriptError::PatternError)?;

        for cap in re.captures_iter(script) {
            let (time_str, tc_str) = match (cap.get(1), cap.get(3)) {
                (Some(t), Some(c)) => (t.as_str(), c.as_str()),
                _ => continue,
            };

            // Parse the exec time
            let exec_time_s: f64 = time_str
                .parse()
                .map_err(|e| ScriptError::InvalidTimestamp(format!("{}", e)))?;

            // Parse the TC from the payload. The scripts contain JSON only.
            let tc = Tc::from_json(tc_str).map_err(|e| ScriptError::InvalidTc(exec_time_s, e))?;

            tc_queue.push_back(Command { exec_time_s, tc });
        }

        if tc_queue.is_empty() {
            return Err(ScriptError::ScriptEmpty);
        }

        Ok(tc_queue)
    }

    /// Return the TCs which are due at the current session time.
    pub fn get_pending_tcs(&mut self) -> PendingTcs {
        self.get_pending_tcs_at(get_elapsed_seconds())
    }

    /// Return the TCs which are due at the given session time.
    pub fn get_pending_tcs_at(&mut self, current_time_s: f64) -> PendingTcs {
        // If the queue is empty the script is over and we return the end of
        // script variant
        if self.cmds.is_empty() {
            return PendingTcs::EndOfScript;
        }

        let mut tc_vec: Vec<Tc> = vec![];

        // Pop items from the queue while the head's exec time has passed.
        while let Some(cmd) = self.cmds.front() {
            if cmd.exec_time_s >= current_time_s {
                break;
            }
            if let Some(cmd) = self.cmds.pop_front() {
                tc_vec.push(cmd.tc);
            }
        }

        if tc_vec.is_empty() {
            PendingTcs::None
        } else {
            PendingTcs::Some(tc_vec)
        }
    }

    /// Get the number of TCs in the script
    pub fn get_num_tcs(&self) -> usize {
        self.cmds.len()
    }

    /// Get the length of the script in seconds
    pub fn get_duration(&self) -> f64 {
        match self.cmds.back() {
            Some(c) => c.exec_time_s,
            None => 0f64,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SCRIPT: &str = r#"
        0.5: {"type": "DISARM"};
        1.0: {"type": "HOME", "payload": {"cmd": "USE_CURRENT"}};
        1.0: {"type": "HOME", "payload": {"cmd": "LOCK"}};
        4.25: {"type": "ARM"};
    "#;

    fn interpreter(script: &str) -> ScriptInterpreter {
        ScriptInterpreter {
            _script_path: PathBuf::new(),
            cmds: ScriptInterpreter::parse(script).unwrap(),
        }
    }

    #[test]
    fn test_parse_script() {
        let si = interpreter(SCRIPT);

        assert_eq!(si.get_num_tcs(), 4);
        assert_eq!(si.get_duration(), 4.25);
    }

    #[test]
    fn test_pending_tcs() {
        let mut si = interpreter(SCRIPT);

        assert!(matches!(si.get_pending_tcs_at(0.1), PendingTcs::None));

        match si.get_pending_tcs_at(1.5) {
            PendingTcs::Some(tcs) => {
                assert_eq!(tcs.len(), 3);
                assert_eq!(tcs[0], Tc::Disarm);
            }
            _ => panic!("Expected pending TCs"),
        }

        assert!(matches!(si.get_pending_tcs_at(2.0), PendingTcs::None));
        assert!(matches!(si.get_pending_tcs_at(5.0), PendingTcs::Some(_)));
        assert!(matches!(si.get_pending_tcs_at(6.0), PendingTcs::EndOfScript));
    }

    #[test]
    fn test_bad_scripts() {
        assert!(matches!(
            ScriptInterpreter::parse("nothing to see here"),
            Err(ScriptError::ScriptEmpty)
        ));
        assert!(matches!(
            ScriptInterpreter::parse(r#"1.0: {"type": "LAUNCH"};"#),
            Err(ScriptError::InvalidTc(_, _))
        ));
        assert!(matches!(
            ScriptInterpreter::new("/definitely/not/a/script.prs"),
            Err(ScriptError::ScriptNotFound(_))
        ));
    }
}
