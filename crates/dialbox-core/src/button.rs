//! The button trigger record.

use crate::dial::Direction;
use crate::id::Corner;

/// A button press request: which corner, which way.
///
/// Buttons hold no state; a press is a pure trigger handed to the move
/// engine. The device carries plus/minus button pairs on both faces,
/// but back buttons are not independent — pressing one is defined as
/// pressing the front button with the same corner and direction, so a
/// `Button` never carries a face.
///
/// # Examples
///
/// ```
/// use dialbox_core::{Button, Corner, Direction};
///
/// let press = Button {
///     corner: Corner::Ul,
///     direction: Direction::Clockwise,
/// };
/// assert_eq!(press.corner, Corner::Ul);
/// assert_eq!(press.direction.signum(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Button {
    /// The corner the button sits at.
    pub corner: Corner,
    /// The rotation direction the button requests.
    pub direction: Direction,
}
