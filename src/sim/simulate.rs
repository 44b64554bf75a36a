//! Route replay
//!
//! Moves are applied strictly in order against a private working copy of the
//! positions, so every slide sees where earlier slides left every robot.

use serde::Serialize;

use super::board::Board;
use super::direction::Direction;
use super::route::Route;
use super::slide::resolve_slide;
use super::{Cell, Positions};
use crate::error::RouteError;

/// One replayed move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub piece: usize,
    pub start: Cell,
    pub end: Cell,
    pub direction: Direction,
    /// Every cell passed through, `start` first and `end` last
    pub visited: Vec<Cell>,
}

impl Trace {
    /// Whether the robot stayed where it was
    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.start == self.end
    }
}

/// Outcome of replaying a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub final_positions: Positions,
    /// One per move, in route order
    pub traces: Vec<Trace>,
}

/// Replay `route` from `initial` positions.
///
/// `initial` is copied; the caller's array is left untouched.
pub fn simulate(board: &Board, initial: &Positions, route: &Route) -> SimulationResult {
    let mut working = *initial;
    let mut traces = Vec::with_capacity(route.len());

    for mv in route {
        let piece = mv.piece();
        let slide = resolve_slide(board, &working, piece, mv.direction());
        traces.push(Trace {
            piece,
            start: working[piece],
            end: slide.end,
            direction: mv.direction(),
            visited: slide.visited,
        });
        working[piece] = slide.end;
    }

    log::debug!("simulated {} moves", traces.len());

    SimulationResult {
        final_positions: working,
        traces,
    }
}

/// Replay a route given in its flat ledger encoding.
///
/// The whole encoding is validated before anything is simulated.
pub fn simulate_encoded(
    board: &Board,
    initial: &Positions,
    encoded: &[u8],
) -> Result<SimulationResult, RouteError> {
    let route = Route::from_bytes(encoded)?;
    Ok(simulate(board, initial, &route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn open_board() -> Board {
        Board::empty(DEFAULT_MAP_SIZE).unwrap()
    }

    #[test]
    fn test_empty_route_is_identity() {
        let board = open_board();
        let initial = [0, 17, 34, 51];
        let result = simulate(&board, &initial, &Route::new());
        assert_eq!(result.final_positions, initial);
        assert!(result.traces.is_empty());
    }

    #[test]
    fn test_moves_thread_positions() {
        let board = open_board();
        let initial = [0, 100, 101, 102];
        let route: Route = "0R 0D".parse().unwrap();
        let result = simulate(&board, &initial, &route);

        assert_eq!(result.traces.len(), 2);
        assert_eq!(result.traces[0].start, 0);
        assert_eq!(result.traces[0].end, 15);
        // Second move starts where the first one ended
        assert_eq!(result.traces[1].start, 15);
        assert_eq!(result.traces[1].end, 255);
        assert_eq!(result.final_positions, [255, 100, 101, 102]);
        // Caller's positions are untouched
        assert_eq!(initial, [0, 100, 101, 102]);
    }

    #[test]
    fn test_later_moves_see_other_robots_moved() {
        let board = open_board();
        // Piece 1 moves up into row 0 first; piece 0 then stops against it
        let initial = [1, 83, 200, 201];
        let route: Route = "1U 0R".parse().unwrap();
        let result = simulate(&board, &initial, &route);
        assert_eq!(result.traces[0].end, 3);
        assert_eq!(result.traces[1].visited, vec![1, 2]);
        assert_eq!(result.final_positions, [2, 3, 200, 201]);
    }

    #[test]
    fn test_repeated_moves_of_same_piece() {
        let board = open_board();
        let route: Route = "0R 0L 0R".parse().unwrap();
        let result = simulate(&board, &[0, 100, 101, 102], &route);
        let ends: Vec<_> = result.traces.iter().map(|t| t.end).collect();
        assert_eq!(ends, vec![15, 0, 15]);
    }

    #[test]
    fn test_stationary_move_is_recorded() {
        let board = open_board();
        let route: Route = "0U".parse().unwrap();
        let result = simulate(&board, &[3, 100, 101, 102], &route);
        assert_eq!(result.traces.len(), 1);
        assert!(result.traces[0].is_stationary());
        assert_eq!(result.traces[0].visited, vec![3]);
    }

    #[test]
    fn test_encoded_route_validated_first() {
        let board = open_board();
        let initial = [0, 100, 101, 102];
        assert_eq!(
            simulate_encoded(&board, &initial, &[0, 6, 0]),
            Err(RouteError::OddLength(3))
        );
        assert_eq!(
            simulate_encoded(&board, &initial, &[0, 6, 9, 2]),
            Err(RouteError::InvalidPiece { offset: 2, value: 9 })
        );
        let ok = simulate_encoded(&board, &initial, &[0, DIR_RIGHT]).unwrap();
        assert_eq!(ok.final_positions[0], 15);
    }
}
