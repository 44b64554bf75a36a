//! Seeded practice boards
//!
//! Offline stand-in for `create_game`: the same seed always produces the same
//! board, robots and target, so a practice round can be shared as a number.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::PIECE_COUNT;
use crate::error::BoardError;
use crate::sim::{Board, Cell, GameState, PieceSet, Positions, Wall};

/// Smallest board with room outside the central block for robots and a goal
pub const MIN_PRACTICE_SIZE: usize = 6;

/// Wall corners placed by the generator
const CORNERS: [(Wall, Wall); 4] = [
    (Wall::North, Wall::West),
    (Wall::North, Wall::East),
    (Wall::South, Wall::West),
    (Wall::South, Wall::East),
];

/// Wall both sides of an edge so slides stop in either direction
fn add_wall(walls: &mut [u8], layout: &Board, cell: Cell, wall: Wall) {
    walls[cell] |= wall.bit();
    if let Some(other) = layout.neighbour(cell, wall) {
        walls[other] |= wall.opposite().bit();
    }
}

/// Generate a practice round on a `size`×`size` board
pub fn practice_game(seed: u64, size: usize) -> Result<GameState, BoardError> {
    if size < MIN_PRACTICE_SIZE {
        return Err(BoardError::TooSmall {
            size,
            min: MIN_PRACTICE_SIZE,
        });
    }

    let mut rng = Pcg32::seed_from_u64(seed);
    // Layout only; walls are filled in below
    let layout = Board::empty(size)?;
    let mut walls = vec![0u8; layout.cell_count()];

    // Close off the central block
    let lo = size / 2 - 2;
    let hi = size / 2 + 1;
    for i in lo..=hi {
        add_wall(&mut walls, &layout, layout.cell_at(lo, i), Wall::North);
        add_wall(&mut walls, &layout, layout.cell_at(hi, i), Wall::South);
        add_wall(&mut walls, &layout, layout.cell_at(i, lo), Wall::West);
        add_wall(&mut walls, &layout, layout.cell_at(i, hi), Wall::East);
    }

    let mut open: Vec<Cell> = (0..layout.cell_count())
        .filter(|&c| !layout.is_center_square(c))
        .collect();
    open.shuffle(&mut rng);

    // One wall corner per row on average
    let corner_cells: Vec<Cell> = open.iter().copied().take(size).collect();
    for &cell in &corner_cells {
        let (a, b) = CORNERS[rng.random_range(0..CORNERS.len())];
        add_wall(&mut walls, &layout, cell, a);
        add_wall(&mut walls, &layout, cell, b);
    }

    // Robots go on cells after the corners so the goal corner stays free
    let mut robots = open.iter().copied().skip(size);
    let mut positions: Positions = [0; PIECE_COUNT];
    for slot in positions.iter_mut() {
        *slot = robots.next().unwrap_or_default();
    }

    let target_cell = corner_cells[rng.random_range(0..corner_cells.len())];
    let target_piece = rng.random_range(0..PIECE_COUNT);

    log::info!(
        "Practice board {} ({}x{}): robot {} to cell {}",
        seed,
        size,
        size,
        target_piece,
        target_cell
    );

    Ok(GameState::new(
        Board::new(size, walls)?,
        PieceSet {
            positions,
            target_cell,
            target_piece,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_MAP_SIZE;

    #[test]
    fn test_same_seed_same_board() {
        let a = practice_game(42, DEFAULT_MAP_SIZE).unwrap();
        let b = practice_game(42, DEFAULT_MAP_SIZE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = practice_game(1, DEFAULT_MAP_SIZE).unwrap();
        let b = practice_game(2, DEFAULT_MAP_SIZE).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_robots_distinct_and_outside_center() {
        for seed in 0..20 {
            let game = practice_game(seed, DEFAULT_MAP_SIZE).unwrap();
            let positions = game.pieces.positions;
            for (i, &a) in positions.iter().enumerate() {
                assert!(game.board.contains(a));
                assert!(!game.board.is_center_square(a));
                assert_ne!(a, game.pieces.target_cell);
                for &b in &positions[i + 1..] {
                    assert_ne!(a, b, "seed {seed}");
                }
            }
            assert!(game.pieces.target_piece < PIECE_COUNT);
        }
    }

    #[test]
    fn test_walls_are_two_sided() {
        let game = practice_game(7, DEFAULT_MAP_SIZE).unwrap();
        let board = &game.board;
        for cell in 0..board.cell_count() {
            for wall in Wall::ALL {
                if let Some(other) = board.neighbour(cell, wall) {
                    assert_eq!(
                        board.has_wall(cell, wall),
                        board.has_wall(other, wall.opposite())
                    );
                }
            }
        }
    }

    #[test]
    fn test_center_block_is_closed() {
        let game = practice_game(3, DEFAULT_MAP_SIZE).unwrap();
        let board = &game.board;
        assert!(board.has_wall(board.cell_at(6, 6), Wall::North));
        assert!(board.has_wall(board.cell_at(6, 6), Wall::West));
        assert!(board.has_wall(board.cell_at(9, 9), Wall::South));
        assert!(board.has_wall(board.cell_at(9, 9), Wall::East));
        assert!(board.has_wall(board.cell_at(5, 7), Wall::South));
    }

    #[test]
    fn test_small_board_rejected() {
        assert_eq!(
            practice_game(0, 5),
            Err(BoardError::TooSmall { size: 5, min: 6 })
        );
        assert!(practice_game(0, MIN_PRACTICE_SIZE).is_ok());
    }
}
