//! Activation resolution: which dials a button press moves.
//!
//! Resolution runs in two explicit passes. [`raw_neighbours`] selects
//! the acting face from the pressed corner's front pin, then collects
//! the neighbour lists of every raised pin on that face — a multiset,
//! since adjacent pins share edge dials and the center.
//! [`expand_counterparts`] deduplicates and drags in the cross-face
//! twin of every corner dial in the set. The passes are pure reads;
//! nothing mutates until the move engine applies the result.

use crate::state::PuzzleState;
use dialbox_core::{Corner, DialId, Face, PinId};
use dialbox_linkage::{counterpart_of, neighbours_of_pin, pins_of_face};
use indexmap::IndexSet;
use smallvec::SmallVec;

/// The raw neighbour multiset for a press at `corner`.
///
/// The acting face is front iff the corner's *front* pin is raised,
/// otherwise back — the corner's own pin selects which face's entire
/// rigid pin bank participates. Every raised pin of that bank then
/// contributes its four governed dials. Duplicates are expected and
/// collapse in [`expand_counterparts`].
pub fn raw_neighbours(state: &PuzzleState, corner: Corner) -> SmallVec<[DialId; 16]> {
    let acting = if state.is_pin_raised(PinId::new(Face::Front, corner)) {
        Face::Front
    } else {
        Face::Back
    };

    let mut raw = SmallVec::new();
    for pin in pins_of_face(acting) {
        if state.is_pin_raised(pin) {
            raw.extend_from_slice(&neighbours_of_pin(pin));
        }
    }
    raw
}

/// Deduplicate a raw neighbour multiset and add the cross-face twin of
/// every corner dial in it.
///
/// A moving corner always drags its counterpart, independent of
/// whether the counterpart's own pin is raised: the two are one shared
/// assembly. Edges and the center have no twin and pass through
/// unchanged.
pub fn expand_counterparts(raw: &[DialId]) -> IndexSet<DialId> {
    let mut affected: IndexSet<DialId> = raw.iter().copied().collect();
    for &dial in raw {
        // counterpart_of succeeds exactly on corner dials.
        if let Ok(twin) = counterpart_of(dial) {
            affected.insert(twin);
        }
    }
    affected
}

/// The full activation set for a press at `corner`: deduplicated,
/// application order irrelevant (single-step increments commute).
///
/// # Examples
///
/// ```
/// use dialbox_core::Corner;
/// use dialbox_engine::{resolve_activation, PuzzleState};
///
/// // Power-on state: all four front pins raised, so every front dial
/// // moves, plus the four back corner twins.
/// let state = PuzzleState::new();
/// assert_eq!(resolve_activation(&state, Corner::Ul).len(), 13);
/// ```
pub fn resolve_activation(state: &PuzzleState, corner: Corner) -> IndexSet<DialId> {
    expand_counterparts(&raw_neighbours(state, corner))
}
