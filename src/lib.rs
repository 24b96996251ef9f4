//! Deterministic snake-game simulation engine.
//!
//! The crate simulates a grid-based snake game one tick at a time: a snake
//! that grows by eating, a schedule of items with scoring effects, a combo
//! multiplier system, and a segmented health bar. There is no rendering and
//! no real-time loop; hosts drive [`core::GameSession::tick`] and render
//! from the returned [`core::TickReport`].
//!
//! All randomness flows from one seeded generator, so identical seeds and
//! input sequences replay identical sessions.
//!
//! ```
//! use snake_sim::core::{GameSession, SessionConfig};
//! use snake_sim::types::{Direction, TickOutcome};
//!
//! let mut session = GameSession::new(SessionConfig::default()).unwrap();
//! let report = session.tick(Some(Direction::Left));
//! assert_eq!(report.outcome, TickOutcome::Continue);
//! ```

pub mod core;
pub mod input;
pub mod types;

pub use crate::core::{GameSession, SessionConfig, TickReport};
pub use crate::types::{Direction, GridPosition, ItemKind, TickOutcome};
