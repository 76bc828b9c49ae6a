//! The mutable puzzle aggregate: 18 dial values and 4 pin toggles.

use dialbox_core::{Corner, DialId, DialValue, Direction, Face, PinId};
use rand::{Rng, RngExt};

/// All mutable state of one puzzle: every dial value and every pin
/// position, owned exclusively.
///
/// Dials live in a dense array keyed by [`DialId::index`]. Pins are
/// stored as one [`Face`] per corner — the face whose pin is currently
/// raised — so the "exactly one raised per corner" invariant holds by
/// construction and every pin write is atomic for its corner pair.
///
/// The initial state is the device's power-on position: every dial at
/// [`DialValue::SOLVED`] and all four front pins raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleState {
    dials: [DialValue; 18],
    raised: [Face; 4],
}

impl PuzzleState {
    /// Create a solved puzzle with all front pins raised.
    pub fn new() -> PuzzleState {
        PuzzleState {
            dials: [DialValue::SOLVED; 18],
            raised: [Face::Front; 4],
        }
    }

    /// Raise the named face's pin at `corner`, lowering the opposite
    /// one in the same assignment.
    pub fn set_pin(&mut self, corner: Corner, face: Face) {
        self.raised[corner.index()] = face;
    }

    /// Apply a whole pin preset, one raised face per corner in
    /// [`Corner::ALL`] order (UL, UR, DR, DL).
    pub fn set_all_pins(&mut self, raised: [Face; 4]) {
        self.raised = raised;
    }

    /// Whether the given pin is currently raised.
    pub fn is_pin_raised(&self, pin: PinId) -> bool {
        self.raised[pin.corner().index()] == pin.face()
    }

    /// The face whose pin is raised at `corner`.
    pub fn raised_face(&self, corner: Corner) -> Face {
        self.raised[corner.index()]
    }

    /// Turn one dial by one step, wrapping within `1..=12`. Total —
    /// there is no failure mode.
    pub fn rotate_dial(&mut self, dial: DialId, direction: Direction) {
        let i = dial.index();
        self.dials[i] = self.dials[i].stepped(direction);
    }

    /// Read one dial.
    pub fn read_dial(&self, dial: DialId) -> DialValue {
        self.dials[dial.index()]
    }

    /// Overwrite every dial with `value`.
    ///
    /// Administrative bypass used by the "solve" shortcut, not a legal
    /// move.
    pub fn reset_all(&mut self, value: DialValue) {
        self.dials = [value; 18];
    }

    /// Overwrite every dial with an independent uniform draw from
    /// `1..=12`.
    ///
    /// Administrative bypass used by the scramble shortcut, not a
    /// legal move. Pins are left untouched.
    pub fn randomize_all<R: Rng>(&mut self, rng: &mut R) {
        for slot in self.dials.iter_mut() {
            *slot = DialValue::ALL[rng.random_range(0..12)];
        }
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        PuzzleState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialbox_core::DialSlot;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // ── Initial state ───────────────────────────────────────────

    #[test]
    fn starts_solved_with_front_pins_up() {
        let state = PuzzleState::new();
        for dial in DialId::ALL {
            assert_eq!(state.read_dial(dial), DialValue::SOLVED);
        }
        for corner in Corner::ALL {
            assert_eq!(state.raised_face(corner), Face::Front);
        }
    }

    // ── Pin complementarity ─────────────────────────────────────

    #[test]
    fn exactly_one_pin_raised_per_corner() {
        let mut state = PuzzleState::new();
        state.set_pin(Corner::Ur, Face::Back);
        for corner in Corner::ALL {
            let front = state.is_pin_raised(PinId::new(Face::Front, corner));
            let back = state.is_pin_raised(PinId::new(Face::Back, corner));
            assert_ne!(front, back, "corner {corner} pin pair out of sync");
        }
        assert!(state.is_pin_raised(PinId::new(Face::Back, Corner::Ur)));
        assert!(!state.is_pin_raised(PinId::new(Face::Front, Corner::Ur)));
    }

    #[test]
    fn set_all_pins_applies_preset_in_corner_order() {
        let mut state = PuzzleState::new();
        state.set_all_pins([Face::Back, Face::Front, Face::Back, Face::Front]);
        assert_eq!(state.raised_face(Corner::Ul), Face::Back);
        assert_eq!(state.raised_face(Corner::Ur), Face::Front);
        assert_eq!(state.raised_face(Corner::Dr), Face::Back);
        assert_eq!(state.raised_face(Corner::Dl), Face::Front);
    }

    // ── Rotation ────────────────────────────────────────────────

    #[test]
    fn rotate_touches_only_the_named_dial() {
        let mut state = PuzzleState::new();
        let target = DialId::new(Face::Back, DialSlot::EdgeDown);
        state.rotate_dial(target, Direction::Clockwise);
        for dial in DialId::ALL {
            let expected = if dial == target { 1 } else { 12 };
            assert_eq!(state.read_dial(dial).get(), expected);
        }
    }

    #[test]
    fn rotate_wraps_both_ways() {
        let mut state = PuzzleState::new();
        let dial = DialId::new(Face::Front, DialSlot::Center);
        state.rotate_dial(dial, Direction::Clockwise);
        assert_eq!(state.read_dial(dial).get(), 1);
        state.rotate_dial(dial, Direction::Counterclockwise);
        state.rotate_dial(dial, Direction::Counterclockwise);
        assert_eq!(state.read_dial(dial).get(), 11);
    }

    // ── Administrative overwrites ───────────────────────────────

    #[test]
    fn reset_all_sets_every_dial() {
        let mut state = PuzzleState::new();
        let seven = DialValue::new(7).unwrap();
        state.reset_all(seven);
        for dial in DialId::ALL {
            assert_eq!(state.read_dial(dial), seven);
        }
    }

    #[test]
    fn randomize_all_is_seed_deterministic() {
        let mut a = PuzzleState::new();
        let mut b = PuzzleState::new();
        a.randomize_all(&mut ChaCha8Rng::seed_from_u64(99));
        b.randomize_all(&mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn randomize_all_leaves_pins_untouched() {
        let mut state = PuzzleState::new();
        state.set_pin(Corner::Dl, Face::Back);
        state.randomize_all(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(state.raised_face(Corner::Dl), Face::Back);
        assert_eq!(state.raised_face(Corner::Ul), Face::Front);
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn pin_pairs_stay_complementary(flips in proptest::collection::vec((0usize..4, 0usize..2), 0..32)) {
            let mut state = PuzzleState::new();
            for (c, f) in flips {
                state.set_pin(Corner::ALL[c], Face::ALL[f]);
                for corner in Corner::ALL {
                    let front = state.is_pin_raised(PinId::new(Face::Front, corner));
                    let back = state.is_pin_raised(PinId::new(Face::Back, corner));
                    prop_assert!(front ^ back);
                }
            }
        }

        #[test]
        fn randomized_dials_stay_in_range(seed in any::<u64>()) {
            let mut state = PuzzleState::new();
            state.randomize_all(&mut ChaCha8Rng::seed_from_u64(seed));
            for dial in DialId::ALL {
                prop_assert!((1..=12).contains(&state.read_dial(dial).get()));
            }
        }
    }
}
