//! Item field module - the egg, spawned items, and the spawn schedule
//!
//! One plain egg is always live; eating it bumps the egg tally, relocates
//! the egg, and spawns every item kind whose Fibonacci period divides the
//! new tally. Spawned kinds are bucketed by role: obstacles go to the wall
//! lists (large walls keep their own list because of the 2x2 footprint),
//! everything else to the item list.
//!
//! | Period | Kinds            |
//! |--------|------------------|
//! | 1      | Wall, FreshEgg   |
//! | 2      | RipeEgg          |
//! | 3      | RottenEgg        |
//! | 5      | Mushroom         |
//! | 8      | ShinyEgg         |
//! | 13     | Skull, LargeWall |
//! | 21     | DewDrop          |
//! | 34     | LavaEgg          |
//! | 55     | Frog             |
//! | 89     | AlienEgg         |
//! | 144    | IceEgg           |
//! | 233    | Pill             |
//! | 377    | DiscoEgg         |
//!
//! Occupancy is recomputed before every single spawn, so items spawned
//! earlier in the same tick already block later ones.

use crate::core::board::Board;
use crate::core::error::GameError;
use crate::core::placement::{self, Occupancy};
use crate::core::rng::SimpleRng;
use crate::types::{GridPosition, ItemKind};

/// Spawn periods, ordered by period. A kind spawns whenever the egg tally is
/// a multiple of its period.
const SPAWN_RULES: &[(u32, &[ItemKind])] = &[
    (1, &[ItemKind::Wall, ItemKind::FreshEgg]),
    (2, &[ItemKind::RipeEgg]),
    (3, &[ItemKind::RottenEgg]),
    (5, &[ItemKind::Mushroom]),
    (8, &[ItemKind::ShinyEgg]),
    (13, &[ItemKind::Skull, ItemKind::LargeWall]),
    (21, &[ItemKind::DewDrop]),
    (34, &[ItemKind::LavaEgg]),
    (55, &[ItemKind::Frog]),
    (89, &[ItemKind::AlienEgg]),
    (144, &[ItemKind::IceEgg]),
    (233, &[ItemKind::Pill]),
    (377, &[ItemKind::DiscoEgg]),
];

/// Every kind due to spawn at the given egg tally, in table order.
pub fn due_spawns(tally: u32) -> Vec<ItemKind> {
    let mut due = Vec::new();
    if tally == 0 {
        return due;
    }
    for &(period, kinds) in SPAWN_RULES {
        if tally % period == 0 {
            due.extend_from_slice(kinds);
        }
    }
    due
}

/// Live board contents besides the snake.
#[derive(Debug, Clone)]
pub struct ItemField {
    egg_tally: u32,
    egg: GridPosition,
    items: Vec<(ItemKind, GridPosition)>,
    walls: Vec<GridPosition>,
    large_walls: Vec<GridPosition>,
}

impl ItemField {
    /// An empty field with the egg at the given cell.
    pub fn new(egg: GridPosition) -> Self {
        Self {
            egg_tally: 0,
            egg,
            items: Vec::new(),
            walls: Vec::new(),
            large_walls: Vec::new(),
        }
    }

    pub fn egg(&self) -> GridPosition {
        self.egg
    }

    pub fn egg_tally(&self) -> u32 {
        self.egg_tally
    }

    pub fn items(&self) -> &[(ItemKind, GridPosition)] {
        &self.items
    }

    pub fn walls(&self) -> &[GridPosition] {
        &self.walls
    }

    pub fn large_walls(&self) -> &[GridPosition] {
        &self.large_walls
    }

    /// Move the egg to an explicit cell. Scenario hook for scripted tests.
    pub fn set_egg(&mut self, pos: GridPosition) {
        self.egg = pos;
    }

    /// Plant a wall at an explicit cell, bypassing the placement solver.
    #[cfg(test)]
    pub(crate) fn insert_wall(&mut self, pos: GridPosition) {
        self.walls.push(pos);
    }

    /// Cells committed for the full-board check: the egg, the snake, and
    /// the obstacles. Edible items are excluded - they can be cleared by
    /// eating, so they never make the board terminally full.
    pub fn occupied_count(&self, snake_len: usize) -> u32 {
        1 + snake_len as u32 + self.walls.len() as u32 + 4 * self.large_walls.len() as u32
    }

    fn item_positions(&self) -> Vec<GridPosition> {
        self.items.iter().map(|&(_, pos)| pos).collect()
    }

    fn occupancy<'a>(
        &'a self,
        snake: &'a [GridPosition],
        item_positions: &'a [GridPosition],
    ) -> Occupancy<'a> {
        Occupancy {
            snake,
            egg: Some(self.egg),
            items: item_positions,
            walls: &self.walls,
            large_walls: &self.large_walls,
        }
    }

    /// Register an eaten egg: bump the tally, relocate the egg, then spawn
    /// everything due at the new tally.
    ///
    /// Fails with [`GameError::PlacementExhausted`] when the board can no
    /// longer fit a required placement.
    pub fn on_egg_eaten(
        &mut self,
        rng: &mut SimpleRng,
        board: &Board,
        snake: &[GridPosition],
    ) -> Result<(), GameError> {
        self.egg_tally += 1;

        let item_positions = self.item_positions();
        let occupancy = self.occupancy(snake, &item_positions);
        let egg = placement::place_egg(rng, board, &occupancy)?;
        self.egg = egg;

        for kind in due_spawns(self.egg_tally) {
            self.spawn(rng, board, snake, kind)?;
        }
        Ok(())
    }

    fn spawn(
        &mut self,
        rng: &mut SimpleRng,
        board: &Board,
        snake: &[GridPosition],
        kind: ItemKind,
    ) -> Result<(), GameError> {
        let item_positions = self.item_positions();
        let occupancy = self.occupancy(snake, &item_positions);
        let available =
            placement::find_available_spots(board, &occupancy.to_set(), kind.footprint());
        let pos =
            placement::choose_placement(rng, &available, snake, &self.large_walls, kind.footprint())?;

        match kind {
            ItemKind::Wall => self.walls.push(pos),
            ItemKind::LargeWall => self.large_walls.push(pos),
            _ => self.items.push((kind, pos)),
        }
        Ok(())
    }

    /// Remove and return the edible item or wall occupying `pos`, if any.
    /// Large walls are not matched here; their footprint needs
    /// [`Self::large_wall_at`].
    pub fn take_at(&mut self, pos: GridPosition) -> Option<ItemKind> {
        if let Some(i) = self.items.iter().position(|&(_, p)| p == pos) {
            return Some(self.items.swap_remove(i).0);
        }
        if let Some(i) = self.walls.iter().position(|&p| p == pos) {
            self.walls.swap_remove(i);
            return Some(ItemKind::Wall);
        }
        None
    }

    /// Index of the large wall whose 2x2 footprint covers `pos`, if any.
    pub fn large_wall_at(&self, pos: GridPosition) -> Option<usize> {
        self.large_walls.iter().position(|&origin| {
            placement::on_large_wall_footprint(pos, std::slice::from_ref(&origin))
        })
    }

    /// Remove a large wall by index (from [`Self::large_wall_at`]).
    pub fn remove_large_wall(&mut self, index: usize) {
        self.large_walls.swap_remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_snake() -> Vec<GridPosition> {
        vec![
            GridPosition::new(14, 16),
            GridPosition::new(14, 17),
            GridPosition::new(14, 18),
        ]
    }

    #[test]
    fn spawn_schedule_matches_fibonacci_periods() {
        assert_eq!(due_spawns(0), vec![]);
        assert_eq!(due_spawns(1), vec![ItemKind::Wall, ItemKind::FreshEgg]);
        assert_eq!(
            due_spawns(2),
            vec![ItemKind::Wall, ItemKind::FreshEgg, ItemKind::RipeEgg]
        );
        assert_eq!(
            due_spawns(6),
            vec![
                ItemKind::Wall,
                ItemKind::FreshEgg,
                ItemKind::RipeEgg,
                ItemKind::RottenEgg
            ]
        );
        assert!(due_spawns(13).contains(&ItemKind::Skull));
        assert!(due_spawns(13).contains(&ItemKind::LargeWall));
        assert!(due_spawns(377).contains(&ItemKind::DiscoEgg));
    }

    #[test]
    fn first_egg_spawns_one_wall_and_one_fresh_egg() {
        let board = Board::default();
        let mut rng = SimpleRng::new(42);
        let snake = spawn_snake();
        let mut field = ItemField::new(GridPosition::new(14, 15));

        field.on_egg_eaten(&mut rng, &board, &snake).unwrap();

        assert_eq!(field.egg_tally(), 1);
        assert_ne!(field.egg(), GridPosition::new(14, 15));
        assert_eq!(field.walls().len(), 1);
        assert_eq!(field.items().len(), 1);
        assert_eq!(field.items()[0].0, ItemKind::FreshEgg);
        assert!(field.large_walls().is_empty());
    }

    #[test]
    fn spawns_never_overlap_within_a_tick() {
        let board = Board::default();
        let mut rng = SimpleRng::new(7);
        let snake = spawn_snake();
        let mut field = ItemField::new(GridPosition::new(14, 15));

        for _ in 0..13 {
            field.set_egg(GridPosition::new(14, 15));
            field.on_egg_eaten(&mut rng, &board, &snake).unwrap();
        }

        let mut seen = std::collections::HashSet::new();
        seen.insert(field.egg());
        for &(_, pos) in field.items() {
            assert!(seen.insert(pos), "duplicate cell {pos:?}");
        }
        for &pos in field.walls() {
            assert!(seen.insert(pos), "duplicate cell {pos:?}");
        }
        for &origin in field.large_walls() {
            for cell in [
                origin,
                origin.offset(1, 0),
                origin.offset(0, 1),
                origin.offset(1, 1),
            ] {
                assert!(seen.insert(cell), "duplicate cell {cell:?}");
            }
        }
        assert_eq!(field.large_walls().len(), 1);
    }

    #[test]
    fn take_at_removes_items_and_walls() {
        let mut field = ItemField::new(GridPosition::new(0, 0));
        field.items.push((ItemKind::Skull, GridPosition::new(5, 5)));
        field.walls.push(GridPosition::new(6, 6));

        assert_eq!(field.take_at(GridPosition::new(5, 5)), Some(ItemKind::Skull));
        assert_eq!(field.take_at(GridPosition::new(5, 5)), None);
        assert_eq!(field.take_at(GridPosition::new(6, 6)), Some(ItemKind::Wall));
        assert!(field.walls().is_empty());
    }

    #[test]
    fn large_wall_footprint_matches_all_four_cells() {
        let mut field = ItemField::new(GridPosition::new(0, 0));
        field.large_walls.push(GridPosition::new(10, 10));

        for cell in [
            GridPosition::new(10, 10),
            GridPosition::new(11, 10),
            GridPosition::new(10, 11),
            GridPosition::new(11, 11),
        ] {
            assert_eq!(field.large_wall_at(cell), Some(0));
        }
        assert_eq!(field.large_wall_at(GridPosition::new(12, 10)), None);

        field.remove_large_wall(0);
        assert!(field.large_walls().is_empty());
    }

    #[test]
    fn occupied_count_skips_edible_items() {
        let mut field = ItemField::new(GridPosition::new(0, 0));
        field.items.push((ItemKind::FreshEgg, GridPosition::new(1, 1)));
        field.walls.push(GridPosition::new(2, 2));
        field.large_walls.push(GridPosition::new(3, 3));

        // egg (1) + snake (3) + wall (1) + large wall (4)
        assert_eq!(field.occupied_count(3), 9);
    }
}
