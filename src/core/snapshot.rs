//! Snapshot module - the per-tick report handed to the host
//!
//! A [`TickReport`] is a complete, owned snapshot of observable state after
//! one tick, plus the tick's outcome and any notices its effects raised. The
//! host renders from the report alone and never reaches into live state.

use crate::types::{EffectNotice, GridPosition, ItemKind, TickOutcome};

/// Combo state as visible to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboSnapshot {
    pub in_combo: bool,
    pub points_x: f64,
    pub points_y: f64,
    pub tally: i32,
}

/// Owned snapshot of one tick's result.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub head: GridPosition,
    pub body: Vec<GridPosition>,
    pub egg: GridPosition,
    pub items: Vec<(ItemKind, GridPosition)>,
    pub walls: Vec<GridPosition>,
    pub large_walls: Vec<GridPosition>,
    pub score: f64,
    pub combo: ComboSnapshot,
    pub lives: u32,
    pub controls_reversed: bool,
    pub notices: Vec<EffectNotice>,
}

impl TickReport {
    pub fn is_game_over(&self) -> bool {
        self.outcome == TickOutcome::GameOver
    }
}
