//! Session module - the tick orchestrator
//!
//! [`GameSession`] owns every subsystem and drives one tick at a time. The
//! tick pipeline is strictly ordered:
//!
//! 1. translate and apply directional input
//! 2. step the snake
//! 3. bounds check (a failed step is undone and costs a health segment)
//! 4. self-collision check (truncates the body and costs a segment)
//! 5. egg consumption (tally, growth, scoring, scheduled spawns, full-board
//!    check)
//! 6. item and wall hits at the head cell
//! 7. large-wall footprint hits
//!
//! Only the bounds check and a fatal deduction cut the tick short; a
//! truncating self-collision falls through to the remaining checks, so a
//! wall sitting on the collision cell is still resolved (and costs a second
//! segment) on the same tick. The report carries the worst outcome of the
//! tick.
//!
//! Damage and game-over both close an active combo with its payout first, so
//! the final score always includes whatever the combo had banked. Placement
//! exhaustion and a full board are not faults: they surface as a `GameOver`
//! outcome.

use crate::core::board::Board;
use crate::core::effects::{self, ComboChange, ComboTransition, EffectOutcome, ScoreChange};
use crate::core::error::GameError;
use crate::core::health::{HealthEvent, HealthTracker};
use crate::core::items::ItemField;
use crate::core::placement::{self, Occupancy};
use crate::core::rng::SimpleRng;
use crate::core::scoring::ComboScore;
use crate::core::snake::SnakeState;
use crate::core::snapshot::{ComboSnapshot, TickReport};
use crate::input;
use crate::types::{Direction, EffectNotice, GridPosition, TickOutcome, COMBO_START_TALLY};

/// Session parameters. `Default` is the standard board with seed 1.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub seed: u32,
    pub board: Board,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            board: Board::default(),
        }
    }
}

/// One running game.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    snake: SnakeState,
    field: ItemField,
    score: ComboScore,
    health: HealthTracker,
    rng: SimpleRng,
    game_over: bool,
}

impl GameSession {
    /// Start a session: spawn the snake and place the first egg.
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        let board = config.board;
        let snake = SnakeState::default();
        let mut rng = SimpleRng::new(config.seed);

        let occupancy = Occupancy {
            snake: snake.body(),
            egg: None,
            items: &[],
            walls: &[],
            large_walls: &[],
        };
        let egg = placement::place_egg(&mut rng, &board, &occupancy)?;

        Ok(Self {
            board,
            snake,
            field: ItemField::new(egg),
            score: ComboScore::new(),
            health: HealthTracker::new(),
            rng,
            game_over: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &SnakeState {
        &self.snake
    }

    pub fn field(&self) -> &ItemField {
        &self.field
    }

    pub fn score(&self) -> &ComboScore {
        &self.score
    }

    pub fn lives(&self) -> u32 {
        self.health.lives()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Move the egg to an explicit cell. Scenario hook for scripted play.
    pub fn set_egg_position(&mut self, pos: GridPosition) {
        self.field.set_egg(pos);
    }

    /// Snapshot the current state without advancing the simulation.
    pub fn snapshot(&self) -> TickReport {
        let outcome = if self.game_over {
            TickOutcome::GameOver
        } else {
            TickOutcome::Continue
        };
        self.report(outcome, Vec::new())
    }

    /// Advance the simulation by one tick.
    ///
    /// `direction` is the host's requested heading for this tick, if any;
    /// it passes through the input translator (reversal, no 180-degree
    /// turns) before taking effect. After game over, ticks are inert and
    /// keep reporting the terminal state.
    pub fn tick(&mut self, direction: Option<Direction>) -> TickReport {
        if self.game_over {
            return self.report(TickOutcome::GameOver, Vec::new());
        }
        let mut notices = Vec::new();

        if let Some(requested) = direction {
            if let Some(effective) = input::translate(
                requested,
                self.snake.controls_reversed(),
                self.snake.direction(),
            ) {
                self.snake.set_direction(effective);
            }
        }

        self.snake.step();
        let head = self.snake.head();

        if self.board.is_out_of_bounds(head) {
            self.snake.undo_step();
            let outcome = self.take_damage();
            return self.report(outcome, notices);
        }

        let mut outcome = TickOutcome::Continue;
        if let Some(index) = self.snake.check_self_collision() {
            self.snake.truncate_from(index);
            outcome = self.take_damage();
            if outcome == TickOutcome::GameOver {
                return self.report(outcome, notices);
            }
        }

        if head == self.field.egg() {
            return self.eat_egg(outcome, notices);
        }

        if let Some(kind) = self.field.take_at(head) {
            let effect = effects::apply(
                kind,
                self.score.in_combo(),
                self.score.score(),
                self.score.combo_points_x(),
                self.score.combo_points_y(),
                &mut self.rng,
            );
            let hit_outcome = self.apply_effect(&effect, &mut notices);
            return self.report(outcome.max(hit_outcome), notices);
        }

        if let Some(index) = self.field.large_wall_at(head) {
            self.field.remove_large_wall(index);
            let hit_outcome = self.take_damage();
            return self.report(outcome.max(hit_outcome), notices);
        }

        self.report(outcome, notices)
    }

    fn eat_egg(&mut self, outcome: TickOutcome, notices: Vec<EffectNotice>) -> TickReport {
        match self.resolve_egg() {
            Ok(()) => self.report(outcome, notices),
            // Both errors mean the board can no longer sustain play.
            Err(_) => self.end_session(notices),
        }
    }

    fn resolve_egg(&mut self) -> Result<(), GameError> {
        let old_tail = self.snake.old_tail();

        self.field
            .on_egg_eaten(&mut self.rng, &self.board, self.snake.body())?;
        self.snake.grow(old_tail);

        if self.score.in_combo() {
            // Plain eggs inside a combo feed the x multiplier instead of
            // scoring or counting toward the tally.
            self.score.add_combo_points_x(2.0);
        } else {
            self.score.increment_combo_tally();
            self.score.add_score(1.0);
            if self.score.combo_tally() >= COMBO_START_TALLY {
                self.score.start_combo();
            }
        }

        let occupied = self.field.occupied_count(self.snake.len());
        if occupied >= self.board.capacity() {
            return Err(GameError::BoardFull {
                occupied,
                capacity: self.board.capacity(),
            });
        }
        Ok(())
    }

    /// Apply one effect outcome in the fixed order: score, multipliers,
    /// combo transition, growth, control reversal, health.
    fn apply_effect(
        &mut self,
        outcome: &EffectOutcome,
        notices: &mut Vec<EffectNotice>,
    ) -> TickOutcome {
        match outcome.score {
            ScoreChange::None => {}
            ScoreChange::Add(delta) => self.score.add_score(delta),
            ScoreChange::Set(value) => self.score.set_score(value),
        }
        match outcome.combo_x {
            ComboChange::None => {}
            ComboChange::Add(delta) => self.score.add_combo_points_x(delta),
            ComboChange::Set(value) => self.score.set_combo_points_x(value),
        }
        match outcome.combo_y {
            ComboChange::None => {}
            ComboChange::Add(delta) => self.score.add_combo_points_y(delta),
            ComboChange::Set(value) => self.score.set_combo_points_y(value),
        }
        match outcome.transition {
            ComboTransition::None => {}
            ComboTransition::Start => self.score.start_combo(),
            ComboTransition::End => self.score.end_combo(),
            ComboTransition::Cancel => self.score.cancel_combo(),
        }

        if outcome.grows_snake {
            let old_tail = self.snake.old_tail();
            self.snake.grow(old_tail);
        }
        if let Some(reversed) = outcome.reverses_controls {
            self.snake.set_controls_reversed(reversed);
        }
        if let Some(notice) = outcome.notice {
            notices.push(notice);
        }

        if outcome.deducts_health {
            self.take_damage()
        } else {
            TickOutcome::Continue
        }
    }

    /// Deduct one segment. Damage closes any active combo with its payout;
    /// a fatal hit also latches the terminal state.
    fn take_damage(&mut self) -> TickOutcome {
        self.score.end_combo();
        match self.health.deduct() {
            HealthEvent::Damaged => TickOutcome::Damaged,
            HealthEvent::GameOver => {
                self.game_over = true;
                TickOutcome::GameOver
            }
        }
    }

    fn end_session(&mut self, notices: Vec<EffectNotice>) -> TickReport {
        self.score.end_combo();
        self.game_over = true;
        self.report(TickOutcome::GameOver, notices)
    }

    fn report(&self, outcome: TickOutcome, notices: Vec<EffectNotice>) -> TickReport {
        TickReport {
            outcome,
            head: self.snake.head(),
            body: self.snake.body().to_vec(),
            egg: self.field.egg(),
            items: self.field.items().to_vec(),
            walls: self.field.walls().to_vec(),
            large_walls: self.field.large_walls().to_vec(),
            score: self.score.score(),
            combo: ComboSnapshot {
                in_combo: self.score.in_combo(),
                points_x: self.score.combo_points_x(),
                points_y: self.score.combo_points_y(),
                tally: self.score.combo_tally(),
            },
            lives: self.health.lives(),
            controls_reversed: self.snake.controls_reversed(),
            notices,
        }
    }
}
