//! Read-only queries over routes and their simulations
//!
//! Nothing here mutates state. Queries that need a game state take an
//! `Option` and return their neutral value when no game is loaded yet.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use super::board::Board;
use super::direction::Direction;
use super::route::{Move, Route};
use super::simulate::{SimulationResult, simulate};
use super::state::GameState;
use super::{Cell, Positions};
use crate::consts::{NO_BEST_MOVE_COUNT, PIECE_COUNT};
use crate::piece_symbol;

/// A route that brings the target robot onto the target cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteSuccess {
    pub moves: usize,
    pub piece: usize,
    pub position: Cell,
}

impl RouteSuccess {
    /// Whether this beats the ledger's recorded best.
    ///
    /// Always false while no best is recorded.
    pub fn improves_on(&self, best_move_count: u8) -> bool {
        has_recorded_best(best_move_count) && self.moves < best_move_count as usize
    }
}

#[inline]
pub fn has_recorded_best(best_move_count: u8) -> bool {
    best_move_count != NO_BEST_MOVE_COUNT
}

/// Check whether `route` wins the loaded game.
///
/// Empty routes never win, even if the target robot already sits on the goal.
pub fn check_success(state: Option<&GameState>, route: &Route) -> Option<RouteSuccess> {
    let state = state?;
    if route.is_empty() {
        return None;
    }
    let pieces = &state.pieces;
    let result = simulate(&state.board, &pieces.positions, route);
    let position = *result.final_positions.get(pieces.target_piece)?;
    (position == pieces.target_cell).then_some(RouteSuccess {
        moves: route.len(),
        piece: pieces.target_piece,
        position,
    })
}

/// Direction of a single slide from `from` toward `to`.
///
/// Only cells sharing a row or column give a direction; diagonal or equal
/// cells give `None`. This never plans more than one move.
pub fn infer_direction(board: &Board, from: Cell, to: Cell) -> Option<Direction> {
    let (from_row, from_col) = (board.row(from), board.col(from));
    let (to_row, to_col) = (board.row(to), board.col(to));

    if to_col == from_col {
        if to_row < from_row {
            return Some(Direction::Up);
        }
        if to_row > from_row {
            return Some(Direction::Down);
        }
    }
    if to_row == from_row {
        if to_col < from_col {
            return Some(Direction::Left);
        }
        if to_col > from_col {
            return Some(Direction::Right);
        }
    }
    None
}

/// Move to append when the player clicks `clicked` with `piece` selected.
///
/// Uses the piece's simulated position after `route`, not its ledger one.
pub fn suggest_move(
    state: Option<&GameState>,
    route: &Route,
    piece: usize,
    clicked: Cell,
) -> Option<Move> {
    let state = state?;
    let result = simulate(&state.board, &state.pieces.positions, route);
    let from = *result.final_positions.get(piece)?;
    let direction = infer_direction(&state.board, from, clicked)?;
    Move::new(piece, direction)
}

/// One rendered move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayStep {
    pub piece_symbol: &'static str,
    pub direction_symbol: &'static str,
}

/// Human-readable form of a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteDisplay {
    NoRoute,
    Moves { steps: Vec<DisplayStep>, count: usize },
}

pub fn route_display(route: &Route) -> RouteDisplay {
    if route.is_empty() {
        return RouteDisplay::NoRoute;
    }
    let steps = route
        .iter()
        .map(|mv| DisplayStep {
            piece_symbol: piece_symbol(mv.piece()),
            direction_symbol: mv.direction().symbol(),
        })
        .collect();
    RouteDisplay::Moves {
        steps,
        count: route.len(),
    }
}

impl Display for RouteDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RouteDisplay::NoRoute => f.write_str("none"),
            RouteDisplay::Moves { steps, count } => {
                for step in steps {
                    write!(f, "{}{} ", step.piece_symbol, step.direction_symbol)?;
                }
                let noun = if *count == 1 { "move" } else { "moves" };
                write!(f, "({count} {noun})")
            }
        }
    }
}

/// A single slide as seen from one robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryStep {
    pub direction: Direction,
    pub end: Cell,
}

/// What one robot does over a whole route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceSummary {
    pub piece: usize,
    pub moves: usize,
    pub start: Cell,
    pub end: Cell,
    pub steps: Vec<SummaryStep>,
}

/// Per-robot breakdown of a simulation, one entry per robot in index order
pub fn piece_summaries(initial: &Positions, result: &SimulationResult) -> Vec<PieceSummary> {
    (0..PIECE_COUNT)
        .map(|piece| {
            let steps: Vec<_> = result
                .traces
                .iter()
                .filter(|t| t.piece == piece)
                .map(|t| SummaryStep {
                    direction: t.direction,
                    end: t.end,
                })
                .collect();
            PieceSummary {
                piece,
                moves: steps.len(),
                start: initial[piece],
                end: result.final_positions[piece],
                steps,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Path marker for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathMark {
    pub piece: usize,
    pub orientation: Orientation,
}

/// Where a moved robot started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ghost {
    pub piece: usize,
    pub cell: Cell,
}

/// Data a renderer needs to draw route trails
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathOverlay {
    /// First trace to visit a cell owns its marker
    pub cells: BTreeMap<Cell, PathMark>,
    pub ghosts: Vec<Ghost>,
}

pub fn path_overlay(initial: &Positions, result: &SimulationResult) -> PathOverlay {
    let mut cells = BTreeMap::new();
    for trace in &result.traces {
        let orientation = if trace.direction.is_horizontal() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        for &cell in &trace.visited {
            cells.entry(cell).or_insert(PathMark {
                piece: trace.piece,
                orientation,
            });
        }
    }

    let ghosts = initial
        .iter()
        .zip(result.final_positions.iter())
        .enumerate()
        .filter(|(_, (start, end))| start != end)
        .map(|(piece, (&cell, _))| Ghost { piece, cell })
        .collect();

    PathOverlay { cells, ghosts }
}
