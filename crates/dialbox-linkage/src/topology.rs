//! Pure lookup functions over the fixed pin/dial wiring.

use crate::error::TopologyError;
use dialbox_core::{Corner, DialId, DialSlot, Face, PinId};

/// The four pins of a face, in [`Corner::ALL`] order.
///
/// All four same-face pins sit on one rigid rod: a press always
/// consults the whole bank of the acting face, not just the pressed
/// corner's pin.
pub fn pins_of_face(face: Face) -> [PinId; 4] {
    Corner::ALL.map(|corner| PinId::new(face, corner))
}

/// The four dials governed by a pin, in a fixed order: its corner
/// dial, the two flanking edge dials and the center dial, all on the
/// pin's own face.
///
/// # Examples
///
/// ```
/// use dialbox_core::{Corner, DialSlot, Face, PinId};
/// use dialbox_linkage::neighbours_of_pin;
///
/// let pin = PinId::new(Face::Front, Corner::Ul);
/// let slots: Vec<_> = neighbours_of_pin(pin).iter().map(|d| d.slot()).collect();
/// assert_eq!(
///     slots,
///     [DialSlot::CornerUl, DialSlot::EdgeUp, DialSlot::Center, DialSlot::EdgeLeft]
/// );
/// ```
pub fn neighbours_of_pin(pin: PinId) -> [DialId; 4] {
    let slots = match pin.corner() {
        Corner::Ul => [
            DialSlot::CornerUl,
            DialSlot::EdgeUp,
            DialSlot::Center,
            DialSlot::EdgeLeft,
        ],
        Corner::Ur => [
            DialSlot::EdgeUp,
            DialSlot::CornerUr,
            DialSlot::EdgeRight,
            DialSlot::Center,
        ],
        Corner::Dr => [
            DialSlot::Center,
            DialSlot::EdgeRight,
            DialSlot::CornerDr,
            DialSlot::EdgeDown,
        ],
        Corner::Dl => [
            DialSlot::EdgeLeft,
            DialSlot::Center,
            DialSlot::EdgeDown,
            DialSlot::CornerDl,
        ],
    };
    slots.map(|slot| DialId::new(pin.face(), slot))
}

/// Whether `dial` is one of the 8 corner dials.
pub fn is_corner_dial(dial: DialId) -> bool {
    dial.slot().is_corner()
}

/// The cross-face twin of a corner dial.
///
/// A corner dial and its counterpart on the opposite face are one
/// shared mechanical assembly visible from both sides; whenever one
/// turns, the other turns with it. Edges and the center have no twin.
///
/// # Errors
///
/// Returns [`TopologyError::NotACorner`] for edge and center dials.
///
/// # Examples
///
/// ```
/// use dialbox_core::{DialId, DialSlot, Face};
/// use dialbox_linkage::counterpart_of;
///
/// let front = DialId::new(Face::Front, DialSlot::CornerDr);
/// let back = counterpart_of(front).unwrap();
/// assert_eq!(back, DialId::new(Face::Back, DialSlot::CornerDr));
/// assert_eq!(counterpart_of(back).unwrap(), front);
///
/// let center = DialId::new(Face::Front, DialSlot::Center);
/// assert!(counterpart_of(center).is_err());
/// ```
pub fn counterpart_of(dial: DialId) -> Result<DialId, TopologyError> {
    if dial.slot().is_corner() {
        Ok(DialId::new(dial.face().opposite(), dial.slot()))
    } else {
        Err(TopologyError::NotACorner { dial })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    // ── Pin banks ───────────────────────────────────────────────

    #[test]
    fn pin_banks_cover_all_pins_once() {
        let mut seen = BTreeSet::new();
        for face in Face::ALL {
            for pin in pins_of_face(face) {
                assert_eq!(pin.face(), face);
                assert!(seen.insert(pin), "duplicate pin {pin}");
            }
        }
        assert_eq!(seen.len(), PinId::ALL.len());
    }

    // ── Neighbour tables ────────────────────────────────────────

    #[test]
    fn neighbours_stay_on_the_pin_face() {
        for pin in PinId::ALL {
            for dial in neighbours_of_pin(pin) {
                assert_eq!(dial.face(), pin.face());
            }
        }
    }

    #[test]
    fn neighbours_are_corner_two_edges_and_center() {
        for pin in PinId::ALL {
            let dials = neighbours_of_pin(pin);
            let corners = dials.iter().filter(|d| d.slot().is_corner()).count();
            let centers = dials
                .iter()
                .filter(|d| d.slot() == DialSlot::Center)
                .count();
            assert_eq!(corners, 1);
            assert_eq!(centers, 1);
            // The remaining two are edges.
            assert_eq!(dials.len(), 4);
        }
    }

    #[test]
    fn neighbours_include_own_corner_dial() {
        for pin in PinId::ALL {
            let own = DialId::new(pin.face(), DialSlot::of_corner(pin.corner()));
            assert!(neighbours_of_pin(pin).contains(&own));
        }
    }

    #[test]
    fn face_pin_bank_reaches_every_face_dial() {
        // With all four pins of a face raised, the union of their
        // neighbour lists is the whole face.
        for face in Face::ALL {
            let mut reached = BTreeSet::new();
            for pin in pins_of_face(face) {
                reached.extend(neighbours_of_pin(pin));
            }
            assert_eq!(reached.len(), 9);
        }
    }

    #[test]
    fn ul_neighbour_order_matches_mechanism() {
        let pin = PinId::new(Face::Back, Corner::Ul);
        let slots: Vec<_> = neighbours_of_pin(pin).iter().map(|d| d.slot()).collect();
        assert_eq!(
            slots,
            [
                DialSlot::CornerUl,
                DialSlot::EdgeUp,
                DialSlot::Center,
                DialSlot::EdgeLeft
            ]
        );
    }

    // ── Counterpart relation ────────────────────────────────────

    #[test]
    fn counterpart_flips_face_only() {
        for dial in DialId::ALL.into_iter().filter(|d| d.slot().is_corner()) {
            let twin = counterpart_of(dial).unwrap();
            assert_eq!(twin.slot(), dial.slot());
            assert_eq!(twin.face(), dial.face().opposite());
        }
    }

    #[test]
    fn counterpart_rejects_edges_and_center() {
        for dial in DialId::ALL.into_iter().filter(|d| !d.slot().is_corner()) {
            assert_eq!(
                counterpart_of(dial),
                Err(TopologyError::NotACorner { dial })
            );
        }
    }

    #[test]
    fn not_a_corner_display_names_the_dial() {
        let dial = DialId::new(Face::Front, DialSlot::EdgeLeft);
        let err = counterpart_of(dial).unwrap_err();
        assert!(err.to_string().contains("front:edge-left"));
    }

    // ── Properties ──────────────────────────────────────────────

    fn arb_dial() -> impl Strategy<Value = DialId> {
        (0usize..18).prop_map(|i| DialId::ALL[i])
    }

    proptest! {
        #[test]
        fn counterpart_is_an_involution(dial in arb_dial()) {
            if let Ok(twin) = counterpart_of(dial) {
                prop_assert_eq!(counterpart_of(twin), Ok(dial));
            } else {
                prop_assert!(!is_corner_dial(dial));
            }
        }

        #[test]
        fn counterpart_defined_exactly_on_corners(dial in arb_dial()) {
            prop_assert_eq!(counterpart_of(dial).is_ok(), is_corner_dial(dial));
        }
    }
}
