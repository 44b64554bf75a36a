//! Game state as last read from the ledger
//!
//! Loaded once per refresh and never changed by simulation.

use serde::Serialize;

use super::board::Board;
use super::{Cell, Positions};
use crate::consts::NO_BEST_MOVE_COUNT;

/// Robot positions plus the goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceSet {
    pub positions: Positions,
    pub target_cell: Cell,
    /// Robot that must reach `target_cell`
    pub target_piece: usize,
}

/// Complete game state for one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: Board,
    pub pieces: PieceSet,
    /// Winning player index, once someone has won
    pub winner: Option<u8>,
    /// Fewest moves submitted so far (`NO_BEST_MOVE_COUNT` when none)
    pub best_move_count: u8,
    pub scores: Vec<u64>,
}

impl GameState {
    /// Fresh round with no winner, best or scores
    pub fn new(board: Board, pieces: PieceSet) -> Self {
        Self {
            board,
            pieces,
            winner: None,
            best_move_count: NO_BEST_MOVE_COUNT,
            scores: Vec::new(),
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Best recorded move count, if any
    pub fn best_moves(&self) -> Option<u8> {
        (self.best_move_count != NO_BEST_MOVE_COUNT).then_some(self.best_move_count)
    }
}
