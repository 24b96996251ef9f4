//! Snake module - ordered body, movement, growth, and self-collision policy
//!
//! The body is an ordered sequence of cells, index 0 = head, last = tail
//! tip. Each segment carries a move tag (the direction it last moved, if
//! any); tags shift down the body exactly like positions and exist only so
//! the host can resolve tail-bending visuals and the pass-through rule -
//! they play no part in growth or scoring.
//!
//! Self-collision has a forgiving-tail exception: once the body is longer
//! than 5 segments, the head may graze its own loosely-curled tail tip (the
//! last couple of segments) without a collision being reported.

use crate::types::{Direction, GridPosition, SNAKE_SPAWN_LEN};

/// Default head spawn cell; the body extends downward from it.
pub const SPAWN_HEAD: GridPosition = GridPosition::new(14, 16);

/// The snake's body, previous-tick shadow, and control state.
#[derive(Debug, Clone)]
pub struct SnakeState {
    body: Vec<GridPosition>,
    move_tags: Vec<Option<Direction>>,
    old_body: Vec<GridPosition>,
    old_move_tags: Vec<Option<Direction>>,
    direction: Direction,
    controls_reversed: bool,
}

impl SnakeState {
    /// Spawn a fresh snake: three segments headed at `head`, moving up.
    pub fn new(head: GridPosition) -> Self {
        let body: Vec<GridPosition> = (0..SNAKE_SPAWN_LEN as i32)
            .map(|i| head.offset(0, i))
            .collect();
        let move_tags = vec![None; body.len()];
        Self {
            old_body: body.clone(),
            old_move_tags: move_tags.clone(),
            body,
            move_tags,
            direction: Direction::Up,
            controls_reversed: false,
        }
    }

    pub fn head(&self) -> GridPosition {
        self.body[0]
    }

    pub fn body(&self) -> &[GridPosition] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn move_tags(&self) -> &[Option<Direction>] {
        &self.move_tags
    }

    /// Whether directional input is currently inverted (RottenEgg effect,
    /// cleared by DewDrop).
    pub fn controls_reversed(&self) -> bool {
        self.controls_reversed
    }

    pub fn set_controls_reversed(&mut self, reversed: bool) {
        self.controls_reversed = reversed;
    }

    /// Point the head in a new direction and tag it with that move.
    ///
    /// 180-degree reversals are rejected by the input translator, not here.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.move_tags[0] = Some(direction);
    }

    /// Advance one tick: the head moves by the current direction's unit
    /// vector and every following segment shifts into the cell its
    /// predecessor vacated. Move tags shift the same way.
    pub fn step(&mut self) {
        self.old_body.clone_from(&self.body);
        self.old_move_tags.clone_from(&self.move_tags);

        let (dx, dy) = self.direction.unit();
        self.body[0] = self.body[0].offset(dx, dy);
        for i in 1..self.body.len() {
            self.body[i] = self.old_body[i - 1];
            self.move_tags[i] = self.old_move_tags[i - 1];
        }
    }

    /// Restore the pre-step body (used when a step left the board and the
    /// move is rejected rather than fatal).
    pub fn undo_step(&mut self) {
        self.body.clone_from(&self.old_body);
        self.move_tags.clone_from(&self.old_move_tags);
    }

    /// The cell the tail vacated on the previous step - where growth goes.
    pub fn old_tail(&self) -> GridPosition {
        self.old_body[self.old_body.len() - 1]
    }

    /// Append one segment at `position`. Callers pass [`Self::old_tail`].
    pub fn grow(&mut self, position: GridPosition) {
        self.body.push(position);
        self.move_tags.push(None);
    }

    /// Scan the body for a head overlap.
    ///
    /// Returns the colliding index, or `None` when there is no overlap or
    /// the overlap falls under the forgiving-tail exception (body longer
    /// than 5 and the hit within the last couple of segments). The first
    /// matching index decides.
    pub fn check_self_collision(&self) -> Option<usize> {
        let len = self.body.len();
        for i in 1..len {
            if self.body[0] != self.body[i] {
                continue;
            }
            if len > 5 && i > len - 3 {
                return None;
            }
            return Some(i);
        }
        None
    }

    /// Remove every segment past `index`; the colliding segment itself is
    /// retained.
    pub fn truncate_from(&mut self, index: usize) {
        let keep = index + 1;
        self.body.truncate(keep);
        self.move_tags.truncate(keep);
        if self.old_body.len() > keep {
            self.old_body.truncate(keep);
            self.old_move_tags.truncate(keep);
        }
    }
}

impl Default for SnakeState {
    fn default() -> Self {
        Self::new(SPAWN_HEAD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_of_len(n: usize) -> SnakeState {
        let mut snake = SnakeState::default();
        while snake.len() < n {
            let tail = snake.body()[snake.len() - 1];
            snake.grow(tail.offset(0, 1));
        }
        snake
    }

    #[test]
    fn spawn_shape_and_direction() {
        let snake = SnakeState::default();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), GridPosition::new(14, 16));
        assert_eq!(snake.body()[2], GridPosition::new(14, 18));
        assert_eq!(snake.direction(), Direction::Up);
        assert!(!snake.controls_reversed());
    }

    #[test]
    fn step_shifts_segments_into_vacated_cells() {
        let mut snake = SnakeState::default();
        let before: Vec<_> = snake.body().to_vec();
        snake.step();

        assert_eq!(snake.head(), before[0].offset(0, -1));
        for i in 1..snake.len() {
            assert_eq!(snake.body()[i], before[i - 1]);
        }
    }

    #[test]
    fn move_tags_shift_with_the_body() {
        let mut snake = SnakeState::default();
        snake.set_direction(Direction::Left);
        snake.step();
        snake.set_direction(Direction::Up);
        snake.step();

        assert_eq!(snake.move_tags()[0], Some(Direction::Up));
        assert_eq!(snake.move_tags()[1], Some(Direction::Left));
    }

    #[test]
    fn grow_appends_at_old_tail() {
        let mut snake = SnakeState::default();
        snake.step();
        let vacated = snake.old_tail();
        let len = snake.len();

        snake.grow(vacated);
        assert_eq!(snake.len(), len + 1);
        assert_eq!(snake.body()[snake.len() - 1], vacated);
    }

    #[test]
    fn undo_step_restores_previous_body() {
        let mut snake = SnakeState::default();
        let before: Vec<_> = snake.body().to_vec();
        snake.step();
        snake.undo_step();
        assert_eq!(snake.body(), before.as_slice());
    }

    #[test]
    fn tail_graze_is_forgiven_on_long_bodies() {
        let mut snake = snake_of_len(8);
        // Force the head onto the index-6 segment (one of the last two).
        snake.body[0] = snake.body[6];
        assert_eq!(snake.check_self_collision(), None);
    }

    #[test]
    fn body_hit_reports_collision_and_truncates() {
        let mut snake = snake_of_len(8);
        snake.body[0] = snake.body[2];
        assert_eq!(snake.check_self_collision(), Some(2));

        snake.truncate_from(2);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn short_bodies_get_no_forgiveness() {
        let mut snake = snake_of_len(5);
        snake.body[0] = snake.body[4];
        assert_eq!(snake.check_self_collision(), Some(4));
    }
}
