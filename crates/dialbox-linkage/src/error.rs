//! Error types for topology queries.

use dialbox_core::DialId;
use std::fmt;

/// Errors arising from topology lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// [`counterpart_of`](crate::counterpart_of) was called on an edge
    /// or center dial; only corner dials have a cross-face counterpart.
    ///
    /// This is a caller contract violation, not a recoverable runtime
    /// state: correct call sequences only ever pass corner dials.
    NotACorner {
        /// The offending dial.
        dial: DialId,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotACorner { dial } => {
                write!(f, "dial {dial} is not a corner and has no counterpart")
            }
        }
    }
}

impl std::error::Error for TopologyError {}
