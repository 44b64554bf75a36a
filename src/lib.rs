//! Ricochet Routes - route planner for an on-chain Ricochet Robots game
//!
//! Core modules:
//! - `sim`: Deterministic slide simulation (board, slides, routes, analysis)
//! - `ledger`: On-chain game object parsing and move-call payloads
//! - `config`: Contract/network configuration
//! - `session`: Route-building state behind the UI
//! - `practice`: Seeded offline boards
//! - `web`: wasm-bindgen surface (wasm32 only)

pub mod config;
pub mod error;
pub mod ledger;
pub mod practice;
pub mod session;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{Config, Network};
pub use error::{BoardError, LedgerError, RouteError, StateError};
pub use session::RouteSession;

/// Game constants shared with the on-chain contract
pub mod consts {
    /// Wall bits in a cell's wall mask
    pub const WALL_NORTH: u8 = 1;
    pub const WALL_SOUTH: u8 = 2;
    pub const WALL_WEST: u8 = 4;
    pub const WALL_EAST: u8 = 8;
    /// Largest valid wall mask (all four edges walled)
    pub const WALL_MASK_MAX: u8 = WALL_NORTH | WALL_SOUTH | WALL_WEST | WALL_EAST;

    /// Direction codes as submitted to the ledger (numpad layout)
    pub const DIR_UP: u8 = 8;
    pub const DIR_DOWN: u8 = 2;
    pub const DIR_LEFT: u8 = 4;
    pub const DIR_RIGHT: u8 = 6;

    /// Number of robots on every board
    pub const PIECE_COUNT: usize = 4;

    /// `best_move_count` value meaning no winning route has been recorded yet
    pub const NO_BEST_MOVE_COUNT: u8 = 255;

    /// Board size used by the contract and the practice generator
    pub const DEFAULT_MAP_SIZE: usize = 16;
}

/// Display symbols for each robot, indexed by piece
pub const PIECE_SYMBOLS: [&str; consts::PIECE_COUNT] = ["🔴", "🟢", "🔵", "🟡"];

/// Display names for each robot, indexed by piece
pub const PIECE_NAMES: [&str; consts::PIECE_COUNT] = ["Red", "Green", "Blue", "Yellow"];

/// Symbol for a piece index (`?` for anything outside 0..4)
#[inline]
pub fn piece_symbol(piece: usize) -> &'static str {
    PIECE_SYMBOLS.get(piece).copied().unwrap_or("?")
}

/// Name for a piece index (`Unknown` for anything outside 0..4)
#[inline]
pub fn piece_name(piece: usize) -> &'static str {
    PIECE_NAMES.get(piece).copied().unwrap_or("Unknown")
}
