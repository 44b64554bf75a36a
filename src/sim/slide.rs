//! Single-slide resolution
//!
//! A robot slides cell by cell until the board edge, a wall on the cell it is
//! leaving, or another robot stops it. Walls on the cell being entered are
//! never consulted.

use serde::Serialize;

use super::board::Board;
use super::direction::Direction;
use super::{Cell, Positions};

/// Where a slide ended and every cell it touched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub end: Cell,
    /// Starts with the departure cell, ends with `end`
    pub visited: Vec<Cell>,
}

/// Slide `piece` in `direction` against the current `positions`.
///
/// `positions` must hold the working positions of all robots, including
/// moves already applied earlier in the same route. Panics if `piece` is
/// not below `PIECE_COUNT`; routes built from `Move` never are.
pub fn resolve_slide(
    board: &Board,
    positions: &Positions,
    piece: usize,
    direction: Direction,
) -> Slide {
    let mut current = positions[piece];
    let mut visited = vec![current];
    let wall = direction.blocking_wall();

    loop {
        if board.has_wall(current, wall) {
            break;
        }
        let Some(next) = board.neighbour(current, wall) else {
            break;
        };
        let occupied = positions
            .iter()
            .enumerate()
            .any(|(other, &pos)| other != piece && pos == next);
        if occupied {
            break;
        }
        current = next;
        visited.push(current);
    }

    log::trace!(
        "piece {} slid {} from {} to {}",
        piece,
        direction,
        visited[0],
        current
    );

    Slide {
        end: current,
        visited,
    }
}
