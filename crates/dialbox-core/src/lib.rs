//! Core types for the Dialbox puzzle simulation.
//!
//! This is the leaf crate with zero dependencies. It defines the closed
//! identifier universe of the puzzle — corners, faces, dial and pin
//! positions — along with the cyclic dial value type, rotation
//! directions, and the button trigger record.
//!
//! The puzzle is a two-faced mechanical dial device: 9 dials per face
//! (4 corners, 4 edges, 1 center), one two-position spring pin per
//! corner, and 8 logical buttons (4 corners × 2 directions). All of
//! those universes are fixed at compile time, so every identifier here
//! is an enum rather than a string or integer key: an unknown dial or
//! pin is unrepresentable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod button;
pub mod dial;
pub mod id;

pub use button::Button;
pub use dial::{DialValue, Direction};
pub use id::{Corner, DialId, DialSlot, Face, PinId};
