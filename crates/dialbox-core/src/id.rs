//! Strongly-typed identifiers for the fixed puzzle universe.
//!
//! The device has exactly 4 corners, 2 faces, 18 dials and 8 pins.
//! Each identifier is a closed enum (or a pair of them), so match
//! statements over the universe are exhaustiveness-checked and lookup
//! tables can be dense arrays keyed by [`DialId::index`] /
//! [`PinId::index`].

use std::fmt;

/// One of the four corners of a face, named from the front face's
/// point of view: up-left, up-right, down-right, down-left.
///
/// Corner names are shared between the faces — the back face's pin and
/// corner dial at `Ul` belong to the same physical corner assembly as
/// the front ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    /// Up-left.
    Ul,
    /// Up-right.
    Ur,
    /// Down-right.
    Dr,
    /// Down-left.
    Dl,
}

impl Corner {
    /// All four corners, in the canonical order UL, UR, DR, DL.
    pub const ALL: [Corner; 4] = [Corner::Ul, Corner::Ur, Corner::Dr, Corner::Dl];

    /// Dense index in `0..4`, following [`Corner::ALL`] order.
    pub fn index(self) -> usize {
        match self {
            Corner::Ul => 0,
            Corner::Ur => 1,
            Corner::Dr => 2,
            Corner::Dl => 3,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Corner::Ul => "UL",
            Corner::Ur => "UR",
            Corner::Dr => "DR",
            Corner::Dl => "DL",
        };
        write!(f, "{s}")
    }
}

/// One of the two faces of the device.
///
/// Clockwise rotation is always expressed relative to the front face;
/// the back face is mechanically mirrored, so a back dial turned by a
/// front-clockwise press advances counterclockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// The front face.
    Front,
    /// The back face.
    Back,
}

impl Face {
    /// Both faces, front first.
    pub const ALL: [Face; 2] = [Face::Front, Face::Back];

    /// The other face.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialbox_core::Face;
    ///
    /// assert_eq!(Face::Front.opposite(), Face::Back);
    /// assert_eq!(Face::Back.opposite(), Face::Front);
    /// ```
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Face::Front => "front",
            Face::Back => "back",
        };
        write!(f, "{s}")
    }
}

/// One of the nine dial positions on a face.
///
/// Four corner slots (paired across faces by the counterpart relation),
/// four edge slots and the center. Edges and the center have no
/// cross-face counterpart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DialSlot {
    /// Up-left corner dial.
    CornerUl,
    /// Up-right corner dial.
    CornerUr,
    /// Down-right corner dial.
    CornerDr,
    /// Down-left corner dial.
    CornerDl,
    /// Top edge dial.
    EdgeUp,
    /// Right edge dial.
    EdgeRight,
    /// Bottom edge dial.
    EdgeDown,
    /// Left edge dial.
    EdgeLeft,
    /// Center dial.
    Center,
}

impl DialSlot {
    /// All nine slots: the four corners in [`Corner::ALL`] order, then
    /// the four edges clockwise from the top, then the center.
    pub const ALL: [DialSlot; 9] = [
        DialSlot::CornerUl,
        DialSlot::CornerUr,
        DialSlot::CornerDr,
        DialSlot::CornerDl,
        DialSlot::EdgeUp,
        DialSlot::EdgeRight,
        DialSlot::EdgeDown,
        DialSlot::EdgeLeft,
        DialSlot::Center,
    ];

    /// Dense index in `0..9`, following [`DialSlot::ALL`] order.
    pub fn index(self) -> usize {
        match self {
            DialSlot::CornerUl => 0,
            DialSlot::CornerUr => 1,
            DialSlot::CornerDr => 2,
            DialSlot::CornerDl => 3,
            DialSlot::EdgeUp => 4,
            DialSlot::EdgeRight => 5,
            DialSlot::EdgeDown => 6,
            DialSlot::EdgeLeft => 7,
            DialSlot::Center => 8,
        }
    }

    /// Whether this slot is one of the four corner positions.
    pub fn is_corner(self) -> bool {
        self.corner().is_some()
    }

    /// The corner this slot sits on, or `None` for edges and the center.
    pub fn corner(self) -> Option<Corner> {
        match self {
            DialSlot::CornerUl => Some(Corner::Ul),
            DialSlot::CornerUr => Some(Corner::Ur),
            DialSlot::CornerDr => Some(Corner::Dr),
            DialSlot::CornerDl => Some(Corner::Dl),
            _ => None,
        }
    }

    /// The corner slot at the given corner.
    pub fn of_corner(corner: Corner) -> DialSlot {
        match corner {
            Corner::Ul => DialSlot::CornerUl,
            Corner::Ur => DialSlot::CornerUr,
            Corner::Dr => DialSlot::CornerDr,
            Corner::Dl => DialSlot::CornerDl,
        }
    }
}

impl fmt::Display for DialSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DialSlot::CornerUl => "corner-ul",
            DialSlot::CornerUr => "corner-ur",
            DialSlot::CornerDr => "corner-dr",
            DialSlot::CornerDl => "corner-dl",
            DialSlot::EdgeUp => "edge-up",
            DialSlot::EdgeRight => "edge-right",
            DialSlot::EdgeDown => "edge-down",
            DialSlot::EdgeLeft => "edge-left",
            DialSlot::Center => "center",
        };
        write!(f, "{s}")
    }
}

/// Identifies one of the 18 dials: a face and a slot on that face.
///
/// # Examples
///
/// ```
/// use dialbox_core::{DialId, DialSlot, Face};
///
/// let dial = DialId::new(Face::Back, DialSlot::CornerUl);
/// assert_eq!(dial.to_string(), "back:corner-ul");
/// assert!(DialId::ALL.contains(&dial));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialId {
    face: Face,
    slot: DialSlot,
}

impl DialId {
    /// All 18 dials: the 9 front slots in [`DialSlot::ALL`] order,
    /// then the 9 back slots.
    pub const ALL: [DialId; 18] = {
        let mut all = [DialId {
            face: Face::Front,
            slot: DialSlot::Center,
        }; 18];
        let mut f = 0;
        while f < 2 {
            let face = if f == 0 { Face::Front } else { Face::Back };
            let mut s = 0;
            while s < 9 {
                all[f * 9 + s] = DialId {
                    face,
                    slot: DialSlot::ALL[s],
                };
                s += 1;
            }
            f += 1;
        }
        all
    };

    /// Create a dial identifier from a face and slot.
    pub fn new(face: Face, slot: DialSlot) -> DialId {
        DialId { face, slot }
    }

    /// The face this dial sits on.
    pub fn face(self) -> Face {
        self.face
    }

    /// The position of this dial on its face.
    pub fn slot(self) -> DialSlot {
        self.slot
    }

    /// Dense index in `0..18`, following [`DialId::ALL`] order.
    pub fn index(self) -> usize {
        let face = match self.face {
            Face::Front => 0,
            Face::Back => 9,
        };
        face + self.slot.index()
    }
}

impl fmt::Display for DialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.face, self.slot)
    }
}

/// Identifies one of the 8 spring pins: a face and a corner.
///
/// The two pins of a corner are a single physical two-position toggle:
/// exactly one of them is raised at any time. State that invariant is
/// enforced by storing one raised [`Face`] per corner, never two
/// independent booleans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId {
    face: Face,
    corner: Corner,
}

impl PinId {
    /// All 8 pins: the 4 front pins in [`Corner::ALL`] order, then the
    /// 4 back pins.
    pub const ALL: [PinId; 8] = [
        PinId {
            face: Face::Front,
            corner: Corner::Ul,
        },
        PinId {
            face: Face::Front,
            corner: Corner::Ur,
        },
        PinId {
            face: Face::Front,
            corner: Corner::Dr,
        },
        PinId {
            face: Face::Front,
            corner: Corner::Dl,
        },
        PinId {
            face: Face::Back,
            corner: Corner::Ul,
        },
        PinId {
            face: Face::Back,
            corner: Corner::Ur,
        },
        PinId {
            face: Face::Back,
            corner: Corner::Dr,
        },
        PinId {
            face: Face::Back,
            corner: Corner::Dl,
        },
    ];

    /// Create a pin identifier from a face and corner.
    pub fn new(face: Face, corner: Corner) -> PinId {
        PinId { face, corner }
    }

    /// The face this pin protrudes from.
    pub fn face(self) -> Face {
        self.face
    }

    /// The corner this pin sits at.
    pub fn corner(self) -> Corner {
        self.corner
    }

    /// Dense index in `0..8`, following [`PinId::ALL`] order.
    pub fn index(self) -> usize {
        let face = match self.face {
            Face::Front => 0,
            Face::Back => 4,
        };
        face + self.corner.index()
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.face, self.corner)
    }
}
