//! Input handler - reversal transform and the no-backtracking rule
//!
//! Hosts hand the session a *requested* direction; this translator decides
//! what actually takes effect. Two rules, applied in order:
//!
//! 1. While controls are reversed (RottenEgg, until a DewDrop clears it),
//!    the request is flipped to its opposite before anything else.
//! 2. A request that would reverse the current heading 180 degrees is
//!    dropped - the snake cannot fold back through its own neck. The check
//!    runs on the flipped request, so under reversal the *blocked* key is
//!    the one that looks safe to the player.

use crate::types::Direction;

/// Translate a requested direction into the effective one, or `None` when
/// the request must be ignored.
pub fn translate(requested: Direction, reversed: bool, current: Direction) -> Option<Direction> {
    let effective = if reversed {
        requested.opposite()
    } else {
        requested
    };
    if effective == current.opposite() {
        None
    } else {
        Some(effective)
    }
}
