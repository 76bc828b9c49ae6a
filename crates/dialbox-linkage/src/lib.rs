//! Static topology of the Dialbox puzzle mechanism.
//!
//! The linkage between pins and dials is fixed by the device's
//! construction and never changes at runtime: each pin governs its own
//! corner dial, the two flanking edge dials and the center dial of its
//! face, and each corner dial is rigidly coupled to the same corner on
//! the opposite face. This crate exposes that wiring as pure lookup
//! functions with no mutable state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod topology;

pub use error::TopologyError;
pub use topology::{counterpart_of, is_corner_dial, neighbours_of_pin, pins_of_face};
