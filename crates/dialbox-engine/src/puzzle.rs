//! The owning session facade: button presses, pin toggles, scramble.

use crate::resolve::resolve_activation;
use crate::solved::is_solved;
use crate::state::PuzzleState;
use dialbox_core::{Button, Corner, DialId, DialValue, Direction, Face, PinId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One puzzle session.
///
/// `Puzzle` owns its [`PuzzleState`] exclusively; all mutating methods
/// take `&mut self`, so a session needs no locking — the borrow
/// checker is the mutual-exclusion boundary. Create one per puzzle,
/// never a process-wide singleton.
///
/// # Examples
///
/// ```
/// use dialbox_core::{Corner, Direction, Face};
/// use dialbox_engine::Puzzle;
///
/// let mut puzzle = Puzzle::new();
///
/// // Isolate the UL pin, then press it: five dials move.
/// for corner in Corner::ALL {
///     puzzle.set_pin_raised(corner, Face::Back);
/// }
/// puzzle.set_pin_raised(Corner::Ul, Face::Front);
/// puzzle.press(Corner::Ul, Direction::Clockwise);
/// assert!(!puzzle.is_solved());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Puzzle {
    state: PuzzleState,
}

impl Puzzle {
    /// Create a solved puzzle in the power-on position (all front pins
    /// raised).
    pub fn new() -> Puzzle {
        Puzzle {
            state: PuzzleState::new(),
        }
    }

    /// Press the button at `corner` in `direction` and report whether
    /// the puzzle is solved afterwards.
    ///
    /// The activation set is resolved in full before any dial moves.
    /// Each affected dial turns by its *effective* direction: front
    /// dials by `direction`, back dials by `direction.reversed()`. The
    /// inversion is keyed on the dial's own face, never on which face's
    /// pin bank was acting — the mechanism mirrors the two faces, and
    /// the acting face only chose which pins participate.
    pub fn press(&mut self, corner: Corner, direction: Direction) -> bool {
        let affected = resolve_activation(&self.state, corner);
        for dial in affected {
            let effective = match dial.face() {
                Face::Front => direction,
                Face::Back => direction.reversed(),
            };
            self.state.rotate_dial(dial, effective);
        }
        is_solved(&self.state)
    }

    /// Press via a [`Button`] record. Equivalent to
    /// [`press`](Puzzle::press).
    pub fn press_button(&mut self, button: Button) -> bool {
        self.press(button.corner, button.direction)
    }

    /// Press a back-face button.
    ///
    /// Back buttons are not independent actuators: this performs the
    /// identical front press for the same corner and direction.
    pub fn press_back(&mut self, corner: Corner, direction: Direction) -> bool {
        self.press(corner, direction)
    }

    /// Raise the named face's pin at `corner` (and lower its twin).
    pub fn set_pin_raised(&mut self, corner: Corner, face: Face) {
        self.state.set_pin(corner, face);
    }

    /// Apply a whole pin preset in [`Corner::ALL`] order.
    pub fn set_all_pins(&mut self, raised: [Face; 4]) {
        self.state.set_all_pins(raised);
    }

    /// Whether the given pin is currently raised.
    pub fn is_pin_raised(&self, pin: PinId) -> bool {
        self.state.is_pin_raised(pin)
    }

    /// Read one dial, for rendering.
    pub fn read_dial(&self, dial: DialId) -> DialValue {
        self.state.read_dial(dial)
    }

    /// Overwrite every dial with the solved value. Administrative
    /// bypass, not a legal move; pins are untouched.
    pub fn reset_to_solved(&mut self) {
        self.state.reset_all(DialValue::SOLVED);
    }

    /// Overwrite every dial with an independent uniform draw from the
    /// caller's randomness source. Administrative bypass, not a legal
    /// move.
    pub fn scramble<R: Rng>(&mut self, rng: &mut R) {
        self.state.randomize_all(rng);
    }

    /// Deterministic scramble: equal seeds produce equal states.
    pub fn scramble_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.state.randomize_all(&mut rng);
    }

    /// Whether all 18 dials read the solved value.
    pub fn is_solved(&self) -> bool {
        is_solved(&self.state)
    }

    /// Read-only access to the underlying state.
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }
}
