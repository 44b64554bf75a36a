//! Deterministic slide simulation
//!
//! All movement logic lives here. This module must stay pure:
//! - No I/O, no clocks, no randomness
//! - Every call is a function of its arguments
//! - Caller-owned positions are never mutated

pub mod analysis;
pub mod board;
pub mod direction;
pub mod route;
pub mod simulate;
pub mod slide;
pub mod state;

pub use analysis::{
    DisplayStep, Ghost, Orientation, PathMark, PathOverlay, PieceSummary, RouteDisplay,
    RouteSuccess, SummaryStep, check_success, has_recorded_best, infer_direction, path_overlay,
    piece_summaries, route_display, suggest_move,
};
pub use board::{Board, Wall};
pub use direction::Direction;
pub use route::{Move, Route};
pub use simulate::{SimulationResult, Trace, simulate, simulate_encoded};
pub use slide::{Slide, resolve_slide};
pub use state::{GameState, PieceSet};

/// A cell index, row-major from the top-left corner
pub type Cell = usize;

/// Cell of each robot, indexed by piece
pub type Positions = [Cell; crate::consts::PIECE_COUNT];
