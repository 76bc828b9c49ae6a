//! The cyclic dial value and rotation direction types.

use std::fmt;

/// Direction of a dial rotation, relative to the front face.
///
/// The device's buttons come in plus/minus pairs; `Clockwise` is the
/// plus button (+1), `Counterclockwise` the minus button (−1). Back
/// dials are mechanically mirrored and turn by the reversed direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Advance by one step (+1).
    Clockwise,
    /// Retreat by one step (−1).
    Counterclockwise,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::Counterclockwise,
            Direction::Counterclockwise => Direction::Clockwise,
        }
    }

    /// The signed step: `+1` for clockwise, `-1` for counterclockwise.
    pub fn signum(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::Counterclockwise => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Clockwise => "clockwise",
            Direction::Counterclockwise => "counterclockwise",
        };
        write!(f, "{s}")
    }
}

/// A dial reading: an hour in `1..=12`, forming a cyclic group of
/// order 12 under [`stepped`](DialValue::stepped).
///
/// Values outside `1..=12` are unrepresentable; stepping wraps
/// (12 → 1 clockwise, 1 → 12 counterclockwise), so rotation is total.
///
/// # Examples
///
/// ```
/// use dialbox_core::{DialValue, Direction};
///
/// let v = DialValue::SOLVED;
/// assert_eq!(v.get(), 12);
/// assert_eq!(v.stepped(Direction::Clockwise).get(), 1);
/// assert_eq!(v.stepped(Direction::Counterclockwise).get(), 11);
///
/// // Clock-style zero-padded display.
/// assert_eq!(DialValue::ALL[6].to_string(), "07");
/// assert_eq!(v.to_string(), "12");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialValue(u8);

impl DialValue {
    /// The canonical solved reading. The puzzle is solved when every
    /// dial shows this value.
    pub const SOLVED: DialValue = DialValue(12);

    /// The twelve readings in ascending order, `1..=12`.
    pub const ALL: [DialValue; 12] = {
        let mut all = [DialValue(1); 12];
        let mut i = 0u8;
        while i < 12 {
            all[i as usize] = DialValue(i + 1);
            i += 1;
        }
        all
    };

    /// Construct from an hour in `1..=12`; `None` outside that range.
    pub fn new(hour: u8) -> Option<DialValue> {
        if (1..=12).contains(&hour) {
            Some(DialValue(hour))
        } else {
            None
        }
    }

    /// The hour as a plain integer in `1..=12`.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The reading after one step in `direction`, wrapping at the ends.
    pub fn stepped(self, direction: Direction) -> DialValue {
        match direction {
            Direction::Clockwise => DialValue(self.0 % 12 + 1),
            Direction::Counterclockwise => {
                if self.0 == 1 {
                    DialValue(12)
                } else {
                    DialValue(self.0 - 1)
                }
            }
        }
    }
}

impl Default for DialValue {
    fn default() -> Self {
        DialValue::SOLVED
    }
}

impl fmt::Display for DialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Two digits, like the device's printed dials.
        write!(f, "{:02}", self.0)
    }
}
