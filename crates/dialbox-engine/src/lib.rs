//! Mutable puzzle state and the move engine for the Dialbox puzzle.
//!
//! The engine is fully synchronous and single-threaded: a [`Puzzle`]
//! owns one [`PuzzleState`] for the lifetime of a session, every
//! mutating operation takes `&mut self`, and the borrow checker is the
//! only mutual-exclusion boundary needed. A button press resolves its
//! activation set first and only then mutates, so no operation ever
//! partially applies.
//!
//! # Quick start
//!
//! ```
//! use dialbox_core::{Corner, Direction};
//! use dialbox_engine::Puzzle;
//!
//! let mut puzzle = Puzzle::new();
//! assert!(puzzle.is_solved());
//!
//! // All four front pins start raised: one press moves 13 dials.
//! let solved = puzzle.press(Corner::Ul, Direction::Clockwise);
//! assert!(!solved);
//!
//! // Undo it.
//! assert!(puzzle.press(Corner::Ul, Direction::Counterclockwise));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod puzzle;
pub mod resolve;
pub mod solved;
pub mod state;

pub use puzzle::Puzzle;
pub use resolve::{expand_counterparts, raw_neighbours, resolve_activation};
pub use solved::is_solved;
pub use state::PuzzleState;
