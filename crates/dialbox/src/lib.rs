//! Dialbox: a simulation core for a Rubik's-Clock-style mechanical
//! dial puzzle.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Dialbox sub-crates. For most users, adding `dialbox` as a
//! single dependency is sufficient.
//!
//! The device: two faces, each with four corner dials, four edge dials
//! and one center dial; one two-position spring pin per corner; and
//! plus/minus buttons at every corner. Pressing a button turns the set
//! of dials selected by the raised pins, with front/back corner dials
//! rigidly coupled across the faces.
//!
//! # Quick start
//!
//! ```rust
//! use dialbox::prelude::*;
//!
//! let mut puzzle = Puzzle::new();
//! assert!(puzzle.is_solved());
//!
//! // Isolate the UL pin and press its clockwise button: the UL
//! // corner, its two edges, the center, and the back UL twin move.
//! puzzle.set_all_pins([Face::Front, Face::Back, Face::Back, Face::Back]);
//! puzzle.press(Corner::Ul, Direction::Clockwise);
//!
//! let ul = DialId::new(Face::Front, DialSlot::CornerUl);
//! let back_ul = DialId::new(Face::Back, DialSlot::CornerUl);
//! assert_eq!(puzzle.read_dial(ul).to_string(), "01");
//! assert_eq!(puzzle.read_dial(back_ul).to_string(), "11");
//!
//! // Pressing the other way undoes it.
//! assert!(puzzle.press(Corner::Ul, Direction::Counterclockwise));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dialbox-core` | Identifier enums, dial values, directions, buttons |
//! | [`linkage`] | `dialbox-linkage` | Static pin/dial topology and the counterpart relation |
//! | [`engine`] | `dialbox-engine` | `PuzzleState`, activation resolution, the `Puzzle` session |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core identifier and value types (`dialbox-core`).
///
/// Corners, faces, dial and pin identifiers, the cyclic
/// [`types::DialValue`], rotation [`types::Direction`] and the
/// [`types::Button`] trigger record.
pub use dialbox_core as types;

/// Static topology (`dialbox-linkage`).
///
/// The fixed wiring between pins and dials:
/// [`linkage::neighbours_of_pin`], [`linkage::pins_of_face`] and the
/// corner [`linkage::counterpart_of`] relation.
pub use dialbox_linkage as linkage;

/// Puzzle state and move engine (`dialbox-engine`).
///
/// [`engine::PuzzleState`], the activation resolver and the owning
/// [`engine::Puzzle`] session facade.
pub use dialbox_engine as engine;

/// Common imports for typical Dialbox usage.
///
/// ```rust
/// use dialbox::prelude::*;
/// ```
pub mod prelude {
    // Identifiers and values
    pub use dialbox_core::{Button, Corner, DialId, DialSlot, DialValue, Direction, Face, PinId};

    // Topology
    pub use dialbox_linkage::{counterpart_of, neighbours_of_pin, pins_of_face, TopologyError};

    // Engine
    pub use dialbox_engine::{resolve_activation, Puzzle, PuzzleState};
}
