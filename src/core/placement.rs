//! Placement module - constrained randomized placement of items and the egg
//!
//! Placement runs in two phases. Occupancy is pre-filtered by enumerating
//! every origin cell whose footprint block is free ([`find_available_spots`]);
//! the radius constraints, which depend on the snake's live shape and are not
//! cheaply pre-filterable, are then resolved by rejection sampling over that
//! list ([`choose_placement`]). The retry ceiling is a deadlock guard: when
//! it trips, the constraint set has become unsatisfiable and the caller gets
//! [`GameError::PlacementExhausted`] instead of an infinite loop.
//!
//! Distance constraints use Chebyshev radii:
//! - no cell of the drawn block on an existing large-wall footprint,
//! - no draw within radius 3 of the snake's head,
//! - no draw within radius 1 of any body segment,
//! - every draw within radius 20 of the tail tip (placement is deliberately
//!   biased toward the tail).
//!
//! Egg placement reuses the same loop and additionally re-draws while the
//! chosen cell is a wall trap (all four cardinal neighbors are walls).

use std::collections::HashSet;

use crate::core::board::Board;
use crate::core::error::GameError;
use crate::core::rng::SimpleRng;
use crate::types::{Footprint, GridPosition, PLACEMENT_RETRY_LIMIT};

/// Borrowed snapshot of everything that occupies board cells.
///
/// Large walls contribute their origin cell here; their full 2x2 footprint
/// is covered by the footprint constraint during sampling.
#[derive(Debug, Clone, Copy)]
pub struct Occupancy<'a> {
    pub snake: &'a [GridPosition],
    pub egg: Option<GridPosition>,
    pub items: &'a [GridPosition],
    pub walls: &'a [GridPosition],
    pub large_walls: &'a [GridPosition],
}

impl Occupancy<'_> {
    /// Collect all occupied origin cells into a set.
    pub fn to_set(&self) -> HashSet<GridPosition> {
        let mut occupied: HashSet<GridPosition> = self.snake.iter().copied().collect();
        occupied.extend(self.egg);
        occupied.extend(self.items.iter().copied());
        occupied.extend(self.walls.iter().copied());
        occupied.extend(self.large_walls.iter().copied());
        occupied
    }
}

/// Whether a cell lies within a Chebyshev radius of a center cell.
fn within_radius(pos: GridPosition, center: GridPosition, radius: i32) -> bool {
    pos.chebyshev(center) <= radius
}

/// Whether a cell lies on any large wall's 2x2 footprint.
pub fn on_large_wall_footprint(pos: GridPosition, large_walls: &[GridPosition]) -> bool {
    large_walls.iter().any(|&origin| {
        pos == origin
            || pos == origin.offset(0, 1)
            || pos == origin.offset(1, 0)
            || pos == origin.offset(1, 1)
    })
}

/// Whether any cell of a footprint block anchored at `origin` lies on an
/// existing large wall's footprint. A multi-cell draw can clip an existing
/// footprint even when its origin cell does not.
fn footprint_overlaps_large_wall(
    origin: GridPosition,
    footprint: Footprint,
    large_walls: &[GridPosition],
) -> bool {
    (0..footprint.width).any(|dx| {
        (0..footprint.height)
            .any(|dy| on_large_wall_footprint(origin.offset(dx, dy), large_walls))
    })
}

/// Enumerate every origin whose `footprint` block fits on the placement grid
/// without touching an occupied cell.
pub fn find_available_spots(
    board: &Board,
    occupied: &HashSet<GridPosition>,
    footprint: Footprint,
) -> Vec<GridPosition> {
    let side = board.cells_per_side();
    let mut available = Vec::new();

    for x in 0..=(side - footprint.width) {
        'origin: for y in 0..=(side - footprint.height) {
            for dx in 0..footprint.width {
                for dy in 0..footprint.height {
                    if occupied.contains(&GridPosition::new(x + dx, y + dy)) {
                        continue 'origin;
                    }
                }
            }
            available.push(GridPosition::new(x, y));
        }
    }

    available
}

/// Draw uniformly from `available`, re-drawing while any radius or footprint
/// constraint is violated. `footprint` is the block being placed; the whole
/// block is tested against existing large-wall footprints, not just the
/// origin.
///
/// Fails with [`GameError::PlacementExhausted`] when the retry ceiling trips
/// or `available` is empty (immediately exhausted).
pub fn choose_placement(
    rng: &mut SimpleRng,
    available: &[GridPosition],
    snake: &[GridPosition],
    large_walls: &[GridPosition],
    footprint: Footprint,
) -> Result<GridPosition, GameError> {
    if available.is_empty() {
        return Err(GameError::PlacementExhausted { attempts: 0 });
    }
    let head = snake[0];
    let tail = snake[snake.len() - 1];

    let mut attempts = 0u32;
    loop {
        attempts += 1;
        if attempts > PLACEMENT_RETRY_LIMIT {
            return Err(GameError::PlacementExhausted { attempts });
        }

        let pos = available[rng.next_range(available.len() as u32) as usize];

        if footprint_overlaps_large_wall(pos, footprint, large_walls) {
            continue;
        }
        if within_radius(pos, head, 3) {
            continue;
        }
        if snake.iter().any(|&seg| within_radius(pos, seg, 1)) {
            continue;
        }
        if !within_radius(pos, tail, 20) {
            continue;
        }
        return Ok(pos);
    }
}

/// Whether all four cardinal neighbors of a cell are walls.
///
/// An egg in such a cell would be unreachable without taking damage.
pub fn is_wall_trap(pos: GridPosition, walls: &[GridPosition]) -> bool {
    pos.cardinal_neighbors()
        .iter()
        .all(|n| walls.contains(n))
}

/// Choose a cell for the egg: the standard placement loop, re-entered while
/// the result is a wall trap.
pub fn place_egg(
    rng: &mut SimpleRng,
    board: &Board,
    occupancy: &Occupancy<'_>,
) -> Result<GridPosition, GameError> {
    let available = find_available_spots(board, &occupancy.to_set(), Footprint::single());
    loop {
        let pos = choose_placement(
            rng,
            &available,
            occupancy.snake,
            occupancy.large_walls,
            Footprint::single(),
        )?;
        if !is_wall_trap(pos, occupancy.walls) {
            return Ok(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_occupancy(snake: &[GridPosition]) -> HashSet<GridPosition> {
        snake.iter().copied().collect()
    }

    #[test]
    fn available_spots_exclude_occupied_cells() {
        let board = Board::default();
        let mut occupied = HashSet::new();
        occupied.insert(GridPosition::new(4, 4));

        let available = find_available_spots(&board, &occupied, Footprint::single());
        assert_eq!(available.len(), 900 - 1);
        assert!(!available.contains(&GridPosition::new(4, 4)));
    }

    #[test]
    fn two_by_two_footprint_never_overlaps_occupied() {
        let board = Board::default();
        let mut occupied = HashSet::new();
        occupied.insert(GridPosition::new(10, 10));

        let available = find_available_spots(&board, &occupied, Footprint::square2());
        // No origin whose block would cover (10, 10).
        for origin in [
            GridPosition::new(10, 10),
            GridPosition::new(9, 10),
            GridPosition::new(10, 9),
            GridPosition::new(9, 9),
        ] {
            assert!(!available.contains(&origin), "overlapping origin {origin:?}");
        }
        // Origins are clamped so the block stays on the grid.
        assert!(available.contains(&GridPosition::new(28, 28)));
        assert!(!available.iter().any(|p| p.x > 28 || p.y > 28));
    }

    #[test]
    fn empty_available_list_is_immediately_exhausted() {
        let mut rng = SimpleRng::new(1);
        let snake = [GridPosition::new(5, 5)];
        let err =
            choose_placement(&mut rng, &[], &snake, &[], Footprint::single()).unwrap_err();
        assert!(matches!(err, GameError::PlacementExhausted { .. }));
    }

    #[test]
    fn ceiling_trips_when_all_candidates_violate_radii() {
        let mut rng = SimpleRng::new(1);
        let snake = [GridPosition::new(5, 5)];
        // Single candidate inside the head's radius-3 exclusion zone.
        let available = [GridPosition::new(6, 6)];
        let err = choose_placement(&mut rng, &available, &snake, &[], Footprint::single())
            .unwrap_err();
        assert!(matches!(
            err,
            GameError::PlacementExhausted {
                attempts: a
            } if a > PLACEMENT_RETRY_LIMIT
        ));
    }

    #[test]
    fn two_by_two_draw_cannot_clip_an_existing_large_wall() {
        let mut rng = SimpleRng::new(1);
        let snake = [GridPosition::new(25, 25)];
        let large_walls = [GridPosition::new(10, 10)];

        // (11, 9) is not itself on the 2x2 footprint at (10, 10), but a
        // block anchored there would cover (11, 10), which is.
        let clipping = GridPosition::new(11, 9);
        let err = choose_placement(&mut rng, &[clipping], &snake, &large_walls, Footprint::square2())
            .unwrap_err();
        assert!(matches!(err, GameError::PlacementExhausted { .. }));

        // The same origin is fine for a single-cell draw.
        let pos = choose_placement(&mut rng, &[clipping], &snake, &large_walls, Footprint::single())
            .unwrap();
        assert_eq!(pos, clipping);
    }

    #[test]
    fn placement_respects_all_radius_constraints() {
        let board = Board::default();
        let snake = [
            GridPosition::new(14, 16),
            GridPosition::new(14, 17),
            GridPosition::new(14, 18),
        ];
        let large_walls = [GridPosition::new(2, 2)];
        let occupied = empty_occupancy(&snake);
        let available = find_available_spots(&board, &occupied, Footprint::single());

        let mut rng = SimpleRng::new(99);
        for _ in 0..200 {
            let pos =
                choose_placement(&mut rng, &available, &snake, &large_walls, Footprint::single())
                    .unwrap();
            assert!(!on_large_wall_footprint(pos, &large_walls));
            assert!(pos.chebyshev(snake[0]) > 3);
            for seg in &snake {
                assert!(pos.chebyshev(*seg) > 1);
            }
            assert!(pos.chebyshev(snake[2]) <= 20);
        }
    }

    #[test]
    fn egg_avoids_wall_traps() {
        let board = Board::default();
        let snake = [
            GridPosition::new(25, 25),
            GridPosition::new(25, 26),
            GridPosition::new(25, 27),
        ];
        // One trapped pocket inside the tail-radius zone; the egg must never
        // land in it even though the cell itself is free.
        let pocket = GridPosition::new(10, 10);
        let walls: Vec<GridPosition> = pocket.cardinal_neighbors().to_vec();
        let occupancy = Occupancy {
            snake: &snake,
            egg: None,
            items: &[],
            walls: &walls,
            large_walls: &[],
        };

        let mut rng = SimpleRng::new(3);
        for _ in 0..100 {
            let pos = place_egg(&mut rng, &board, &occupancy).unwrap();
            assert_ne!(pos, pocket);
        }
    }
}
