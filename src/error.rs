//! Error types
//!
//! Only malformed input is an error. A blocked slide, a route that goes
//! nowhere, or a missed target are ordinary results.

use thiserror::Error;

/// A route that cannot be simulated or submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route has odd length {0}; expected piece/direction pairs")]
    OddLength(usize),

    #[error("invalid piece index {value} at route offset {offset}")]
    InvalidPiece { offset: usize, value: u8 },

    #[error("invalid direction code {value} at route offset {offset}")]
    InvalidDirection { offset: usize, value: u8 },

    #[error("cannot parse move token {0:?}")]
    InvalidToken(String),
}

/// A board description that violates the grid invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size must be positive")]
    ZeroSize,

    #[error("board size {0} is too large")]
    TooLarge(usize),

    #[error("wall mask {mask} at cell {cell} exceeds 15")]
    InvalidWallMask { cell: usize, mask: u8 },

    #[error("{len} wall entries for a {size}x{size} board")]
    TooManyWalls { len: usize, size: usize },

    #[error("board size {size} is below the minimum of {min}")]
    TooSmall { size: usize, min: usize },
}

/// A ledger game object that cannot be turned into a game state
#[derive(Debug, Error)]
pub enum StateError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("game object has no content fields")]
    MissingFields,

    #[error("invalid integer {0:?}")]
    InvalidInteger(String),

    #[error("expected 4 robot positions, got {0}")]
    RobotCount(usize),

    #[error("target robot {0} out of range")]
    TargetRobot(u64),

    #[error("cell {cell} is off a {size}x{size} board")]
    PositionOffBoard { cell: usize, size: usize },

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}

/// A move call that cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("package id is not configured")]
    NotConfigured,

    #[error("no game id given")]
    MissingGameId,

    #[error("route is empty")]
    EmptyRoute,
}
