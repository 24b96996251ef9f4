//! Core module - pure simulation logic with no external I/O
//!
//! Everything in here is deterministic given a seed: board geometry,
//! placement, the snake, items and their effects, scoring, health, and the
//! session that orchestrates one tick at a time.

pub mod board;
pub mod effects;
pub mod error;
pub mod health;
pub mod items;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snake;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use error::GameError;
pub use health::{HealthEvent, HealthTracker};
pub use items::ItemField;
pub use rng::SimpleRng;
pub use scoring::ComboScore;
pub use session::{GameSession, SessionConfig};
pub use snake::SnakeState;
pub use snapshot::{ComboSnapshot, TickReport};
