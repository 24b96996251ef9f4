//! Error taxonomy for the simulation core.
//!
//! Only conditions that are fatal to the session are errors; recoverable
//! events (out-of-bounds steps, self-collisions) are tick outcomes routed
//! through the health tracker instead.

use thiserror::Error;

/// Fatal simulation failures. Both variants mean the board is effectively
/// full and the session must end; the session surfaces them to the host as a
/// `GameOver` outcome rather than a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The placement constraint set became unsatisfiable before the retry
    /// ceiling was reached.
    #[error("no valid placement after {attempts} attempts; board is effectively full")]
    PlacementExhausted { attempts: u32 },

    /// Every board cell is accounted for by the snake, the egg, or walls.
    #[error("board is full ({occupied}/{capacity} cells occupied)")]
    BoardFull { occupied: u32, capacity: u32 },
}
