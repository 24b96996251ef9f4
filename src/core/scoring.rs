//! Scoring module - score accumulation and the combo state machine
//!
//! The score is an `f64` so multiplicative item effects can act on it, but
//! every mutation re-rounds it half-away-from-zero, so observers only ever
//! see whole numbers.
//!
//! Combo lifecycle:
//!
//! | Transition  | Effect                                                   |
//! |-------------|----------------------------------------------------------|
//! | start_combo | x = max(1, tally) with tally clamped to 7, y = 1         |
//! | end_combo   | pays x*y when positive, else min(x, y); zeroes all state |
//! | cancel      | zeroes all state, pays nothing                           |
//!
//! `end_combo` on an inactive combo is a no-op, so damage handlers can call
//! it unconditionally.

/// Score and combo state.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboScore {
    score: f64,
    combo_points_x: f64,
    combo_points_y: f64,
    combo_tally: i32,
    in_combo: bool,
}

impl ComboScore {
    pub fn new() -> Self {
        Self {
            score: 0.0,
            combo_points_x: 0.0,
            combo_points_y: 0.0,
            combo_tally: 0,
            in_combo: false,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn combo_points_x(&self) -> f64 {
        self.combo_points_x
    }

    pub fn combo_points_y(&self) -> f64 {
        self.combo_points_y
    }

    pub fn combo_tally(&self) -> i32 {
        self.combo_tally
    }

    pub fn in_combo(&self) -> bool {
        self.in_combo
    }

    /// Add to the score and re-round.
    pub fn add_score(&mut self, delta: f64) {
        self.score = (self.score + delta).round();
    }

    /// Replace the score and re-round.
    pub fn set_score(&mut self, value: f64) {
        self.score = value.round();
    }

    /// Count an eaten egg toward the next combo threshold. Only meaningful
    /// while idle; the session stops counting once a combo is active.
    pub fn increment_combo_tally(&mut self) {
        self.combo_tally += 1;
    }

    /// Open a combo. The tally seeds the x multiplier, clamped *up* to the
    /// start threshold first, so an item-triggered combo on a low tally
    /// starts from the same floor as an egg-triggered one.
    pub fn start_combo(&mut self) {
        if self.in_combo {
            return;
        }
        self.combo_tally = self.combo_tally.max(crate::types::COMBO_START_TALLY);
        self.in_combo = true;
        self.combo_points_x = f64::from(self.combo_tally).max(1.0);
        self.combo_points_y = 1.0;
    }

    /// Close an active combo and pay it out: x*y when the product is
    /// positive, otherwise min(x, y). All combo state is zeroed, including
    /// the tally. No-op when no combo is active.
    pub fn end_combo(&mut self) {
        if !self.in_combo {
            return;
        }
        let product = self.combo_points_x * self.combo_points_y;
        let payout = if product > 0.0 {
            product
        } else {
            self.combo_points_x.min(self.combo_points_y)
        };
        self.score = (self.score + payout).round();
        self.clear_combo();
    }

    /// Discard an active combo without any payout.
    pub fn cancel_combo(&mut self) {
        self.clear_combo();
    }

    /// Add to the x multiplier. Multipliers stay unrounded; only the score
    /// itself is rounded, when a payout lands on it.
    pub fn add_combo_points_x(&mut self, delta: f64) {
        self.combo_points_x += delta;
    }

    /// Replace the x multiplier.
    pub fn set_combo_points_x(&mut self, value: f64) {
        self.combo_points_x = value;
    }

    /// Add to the y multiplier.
    pub fn add_combo_points_y(&mut self, delta: f64) {
        self.combo_points_y += delta;
    }

    /// Replace the y multiplier.
    pub fn set_combo_points_y(&mut self, value: f64) {
        self.combo_points_y = value;
    }

    /// Zero everything, score included.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn clear_combo(&mut self) {
        self.in_combo = false;
        self.combo_points_x = 0.0;
        self.combo_points_y = 0.0;
        self.combo_tally = 0;
    }
}

impl Default for ComboScore {
    fn default() -> Self {
        Self::new()
    }
}
