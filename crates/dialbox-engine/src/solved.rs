//! The solved-state predicate.

use crate::state::PuzzleState;
use dialbox_core::{DialId, DialValue};

/// Whether every one of the 18 dials reads [`DialValue::SOLVED`].
///
/// Pure read-only query with no side effects; callable at any time,
/// including mid-scramble.
pub fn is_solved(state: &PuzzleState) -> bool {
    DialId::ALL
        .iter()
        .all(|&dial| state.read_dial(dial) == DialValue::SOLVED)
}
