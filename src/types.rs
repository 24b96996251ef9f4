//! Shared types module - data structures and constants used across the engine
//!
//! All types here are pure data with no dependencies on the rest of the crate,
//! making them usable in any context (simulation core, input translation,
//! host-side presentation).
//!
//! # Board Dimensions
//!
//! The playfield is a square grid:
//!
//! - **Cells per side**: 30 (columns and rows indexed 0-29)
//! - **Cell size**: 30 pixels
//! - **Snake spawn**: three segments headed by (14, 16), moving up
//!
//! Note that the *legal* playfield for the snake head is not the full grid:
//! the pixel-space bounds check uses asymmetric vertical margins (see
//! [`crate::core::board::Board`]), admitting row -1 and rejecting rows 27-29.
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_CELLS` | 30 | Board side length in cells |
//! | `CELL_PX` | 30 | Cell side length in pixels |
//! | `SNAKE_SPAWN_LEN` | 3 | Initial body length |
//! | `HEALTH_CAPACITY` | 6 | Life segments at session start |
//! | `COMBO_START_TALLY` | 7 | Egg tally that arms a combo |
//! | `PLACEMENT_RETRY_LIMIT` | 90000 | Rejection-sampling deadlock guard |

/// Board side length in cells (30x30 grid).
pub const BOARD_CELLS: i32 = 30;

/// Cell side length in pixels.
pub const CELL_PX: i32 = 30;

/// Initial snake body length at spawn.
pub const SNAKE_SPAWN_LEN: usize = 3;

/// Number of life segments granted at session start.
pub const HEALTH_CAPACITY: usize = 6;

/// Egg tally at which a combo arms (lower tallies are clamped up to this).
pub const COMBO_START_TALLY: i32 = 7;

/// Maximum rejection-sampling attempts before placement is declared
/// exhausted. Exceeding it means the constraint set is unsatisfiable
/// (board effectively full).
pub const PLACEMENT_RETRY_LIMIT: u32 = 90_000;

/// A position on the board grid, in cell units.
///
/// Equality and hashing are by value; (0, 0) is the top-left cell and
/// y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a cell offset.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev (chessboard) distance to another cell.
    pub fn chebyshev(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// The four cardinal neighbors, in N/E/S/W order.
    pub fn cardinal_neighbors(self) -> [Self; 4] {
        [
            self.offset(0, -1),
            self.offset(1, 0),
            self.offset(0, 1),
            self.offset(-1, 0),
        ]
    }
}

/// The four cardinal movement directions
///
/// The direction cycle is 4-connected; there is no diagonal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in cell units (y grows downward).
    pub const fn unit(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180-degree opposite direction.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use snake_sim::types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Rectangular footprint of an item, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub width: i32,
    pub height: i32,
}

impl Footprint {
    /// A single grid cell.
    pub const fn single() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }

    /// A 2x2 block of cells.
    pub const fn square2() -> Self {
        Self {
            width: 2,
            height: 2,
        }
    }
}

/// The closed set of item kinds that can occupy the board
///
/// Grouped by role:
/// - **Obstacles**: Wall, LargeWall (2x2 footprint)
/// - **Good eggs**: FreshEgg, RipeEgg, ShinyEgg, AlienEgg, DiscoEgg
/// - **Bad eggs**: RottenEgg, LavaEgg, IceEgg
/// - **Complex scorers**: Mushroom, DewDrop, Frog, Pill
/// - **Chaos**: Skull
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Wall,
    LargeWall,
    FreshEgg,
    RipeEgg,
    ShinyEgg,
    AlienEgg,
    DiscoEgg,
    RottenEgg,
    LavaEgg,
    IceEgg,
    Mushroom,
    DewDrop,
    Frog,
    Pill,
    Skull,
}

impl ItemKind {
    /// Cells occupied by one live instance, anchored at its origin.
    pub const fn footprint(self) -> Footprint {
        match self {
            ItemKind::LargeWall => Footprint::square2(),
            _ => Footprint::single(),
        }
    }

    /// Obstacles deduct health instead of scoring.
    pub const fn is_obstacle(self) -> bool {
        matches!(self, ItemKind::Wall | ItemKind::LargeWall)
    }
}

/// Result of one simulation tick, from the session's point of view.
///
/// Ordered by severity (`Continue < Damaged < GameOver`) so a tick with
/// several incidents can report the worst of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TickOutcome {
    /// Nothing terminal happened this tick.
    Continue,
    /// A health deduction fired but lives remain.
    Damaged,
    /// Terminal state; the session accepts no further meaningful ticks.
    GameOver,
}

/// Host-facing notification cues raised by item effects.
///
/// Hosts typically map these to audio or HUD feedback; the engine only
/// records that they fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectNotice {
    /// A good ("special") egg was eaten; carries the combo state at the time.
    SpecialEgg { in_combo: bool },
    /// A bad egg was eaten.
    BadFood,
    /// A complex scorer (Mushroom/Frog/Pill) fired.
    HighChime,
}
