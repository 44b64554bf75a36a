//! Route-building session behind the game UI
//!
//! Holds the last loaded game state, the route under construction and the
//! selected robot. Everything derived (simulation, success, display) is
//! recomputed from those on demand; nothing is cached.

use crate::config::Config;
use crate::consts::PIECE_COUNT;
use crate::error::LedgerError;
use crate::ledger::{self, MoveCall};
use crate::sim::{
    Cell, Direction, GameState, Move, PathOverlay, PieceSummary, Route, RouteDisplay,
    RouteSuccess, SimulationResult, check_success, path_overlay, piece_summaries, route_display,
    simulate, suggest_move,
};

/// What a click on the board did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A robot was on the cell and is now selected
    Selected(usize),
    /// A move toward the cell was appended
    Moved(Move),
    /// Nothing to do (no game, or the cell is off-axis)
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct RouteSession {
    state: Option<GameState>,
    route: Route,
    selected: usize,
}

impl RouteSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the game state after a ledger refresh.
    ///
    /// The route is kept so a refresh does not throw away work in progress.
    pub fn load_state(&mut self, state: GameState) {
        log::info!(
            "Game state loaded (winner: {:?}, best: {})",
            state.winner,
            state.best_move_count
        );
        self.state = Some(state);
    }

    /// Forget the game entirely (e.g. switching game ids)
    pub fn unload(&mut self) {
        self.state = None;
        self.route.clear();
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn selected_piece(&self) -> usize {
        self.selected
    }

    /// Select a robot; returns false for an index outside 0..4
    pub fn select_piece(&mut self, piece: usize) -> bool {
        if piece >= PIECE_COUNT {
            log::warn!("Ignoring selection of robot {}", piece);
            return false;
        }
        self.selected = piece;
        true
    }

    /// Append a move of the selected robot
    pub fn push_direction(&mut self, direction: Direction) -> Option<Move> {
        let mv = Move::new(self.selected, direction)?;
        self.route.push(mv);
        log::debug!("Route: {}", self.route);
        Some(mv)
    }

    /// Handle a click on a board cell.
    ///
    /// Clicking a robot (at its simulated position) selects it; clicking a
    /// cell in line with the selected robot appends one move toward it.
    pub fn click_cell(&mut self, cell: Cell) -> ClickOutcome {
        let Some(result) = self.simulation() else {
            return ClickOutcome::Ignored;
        };
        if let Some(piece) = result.final_positions.iter().position(|&pos| pos == cell) {
            self.selected = piece;
            return ClickOutcome::Selected(piece);
        }
        match suggest_move(self.state.as_ref(), &self.route, self.selected, cell) {
            Some(mv) => {
                self.route.push(mv);
                log::debug!("Route: {}", self.route);
                ClickOutcome::Moved(mv)
            }
            None => ClickOutcome::Ignored,
        }
    }

    /// Replace the whole route (e.g. one restored from a share link)
    pub fn set_route(&mut self, route: Route) {
        self.route = route;
    }

    pub fn undo(&mut self) -> Option<Move> {
        self.route.undo()
    }

    pub fn clear_route(&mut self) {
        self.route.clear();
    }

    /// Simulation of the current route, or `None` without a game
    pub fn simulation(&self) -> Option<SimulationResult> {
        let state = self.state.as_ref()?;
        Some(simulate(&state.board, &state.pieces.positions, &self.route))
    }

    pub fn success(&self) -> Option<RouteSuccess> {
        check_success(self.state.as_ref(), &self.route)
    }

    /// Whether the current route wins and beats the recorded best
    pub fn is_new_best(&self) -> bool {
        match (self.success(), self.state.as_ref()) {
            (Some(success), Some(state)) => success.improves_on(state.best_move_count),
            _ => false,
        }
    }

    pub fn display(&self) -> RouteDisplay {
        if self.state.is_none() {
            return RouteDisplay::NoRoute;
        }
        route_display(&self.route)
    }

    pub fn summaries(&self) -> Vec<PieceSummary> {
        let Some(state) = self.state.as_ref() else {
            return Vec::new();
        };
        let result = simulate(&state.board, &state.pieces.positions, &self.route);
        piece_summaries(&state.pieces.positions, &result)
    }

    pub fn overlay(&self) -> PathOverlay {
        let Some(state) = self.state.as_ref() else {
            return PathOverlay::default();
        };
        let result = simulate(&state.board, &state.pieces.positions, &self.route);
        path_overlay(&state.pieces.positions, &result)
    }

    /// Build the submission call for the current route
    pub fn submission(&self, config: &Config, game_id: &str) -> Result<MoveCall, LedgerError> {
        ledger::submit_route_call(config, game_id, &self.route)
    }

    /// The ledger accepted the route: start over
    pub fn submitted(&mut self) {
        log::info!("Route submitted ({} moves)", self.route.len());
        self.route.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Board, PieceSet};

    fn session() -> RouteSession {
        let mut session = RouteSession::new();
        session.load_state(GameState::new(
            Board::empty(16).unwrap(),
            PieceSet {
                positions: [0, 100, 101, 102],
                target_cell: 255,
                target_piece: 0,
            },
        ));
        session
    }

    #[test]
    fn test_no_state_is_neutral() {
        let mut session = RouteSession::new();
        assert_eq!(session.simulation(), None);
        assert_eq!(session.success(), None);
        assert_eq!(session.display(), RouteDisplay::NoRoute);
        assert_eq!(session.click_cell(5), ClickOutcome::Ignored);
        assert!(session.summaries().is_empty());
        assert_eq!(session.overlay(), PathOverlay::default());
    }

    #[test]
    fn test_build_winning_route_with_buttons() {
        let mut session = session();
        session.push_direction(Direction::Right);
        assert_eq!(session.success(), None);
        session.push_direction(Direction::Down);
        let success = session.success().unwrap();
        assert_eq!(success.moves, 2);
        assert_eq!(session.route().to_bytes(), vec![0, 6, 0, 2]);
        assert_eq!(session.display().to_string(), "🔴→ 🔴↓ (2 moves)");
    }

    #[test]
    fn test_click_selects_then_moves() {
        let mut session = session();
        // Robot 1 sits on 100
        assert_eq!(session.click_cell(100), ClickOutcome::Selected(1));
        assert_eq!(session.selected_piece(), 1);
        // Cell 4 is straight above robot 1
        match session.click_cell(4) {
            ClickOutcome::Moved(mv) => {
                assert_eq!(mv.piece(), 1);
                assert_eq!(mv.direction(), Direction::Up);
            }
            other => panic!("unexpected {other:?}"),
        }
        // Robot 1 is now simulated at 4, so clicking there selects it
        assert_eq!(session.click_cell(4), ClickOutcome::Selected(1));
        // Diagonal click does nothing
        assert_eq!(session.click_cell(255), ClickOutcome::Ignored);
        assert_eq!(session.route().len(), 1);
    }

    #[test]
    fn test_undo_clear_and_submit() {
        let mut session = session();
        session.push_direction(Direction::Right);
        session.push_direction(Direction::Down);
        assert_eq!(session.undo().map(|m| m.direction()), Some(Direction::Down));
        session.clear_route();
        assert!(session.route().is_empty());

        session.push_direction(Direction::Right);
        session.submitted();
        assert!(session.route().is_empty());
    }

    #[test]
    fn test_select_piece_bounds() {
        let mut session = session();
        assert!(session.select_piece(3));
        assert!(!session.select_piece(4));
        assert_eq!(session.selected_piece(), 3);
    }

    #[test]
    fn test_new_best() {
        let mut session = session();
        session.push_direction(Direction::Right);
        session.push_direction(Direction::Down);
        assert!(!session.is_new_best());

        let mut state = session.state().unwrap().clone();
        state.best_move_count = 3;
        session.load_state(state);
        assert!(session.is_new_best());
        assert_eq!(session.route().len(), 2);
    }

    #[test]
    fn test_submission_uses_route_bytes() {
        let mut session = session();
        session.push_direction(Direction::Left);
        let config = Config {
            package_id: "0x22b5".to_string(),
            ..Default::default()
        };
        let call = session.submission(&config, "0x9a3e").unwrap();
        assert_eq!(
            call.arguments.last(),
            Some(&ledger::CallArg::VectorU8(vec![0, 4]))
        );
    }
}
