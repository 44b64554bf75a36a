//! JavaScript bindings
//!
//! The page keeps one `WebSession`. Structured results cross the boundary
//! as JSON strings; the route itself crosses as a `Uint8Array` in its ledger
//! encoding.

use wasm_bindgen::prelude::*;

use crate::config::{Config, Network};
use crate::consts::DEFAULT_MAP_SIZE;
use crate::ledger;
use crate::practice::practice_game;
use crate::session::{ClickOutcome, RouteSession};
use crate::sim::{Direction, Route};

/// Logger and panic hook; runs when the module is instantiated
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) keeps the existing logger
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Ricochet Routes starting...");
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(to_js_error)
}

#[wasm_bindgen]
pub struct WebSession {
    session: RouteSession,
    config: Config,
}

#[wasm_bindgen]
impl WebSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSession {
        WebSession {
            session: RouteSession::new(),
            config: Config::load(),
        }
    }

    /// Load a `getObject` response; the current route is kept
    #[wasm_bindgen(js_name = loadGameObject)]
    pub fn load_game_object(&mut self, json: &str) -> Result<(), JsValue> {
        match ledger::parse_game_object(json) {
            Ok(state) => {
                self.session.load_state(state);
                Ok(())
            }
            Err(e) => {
                log::warn!("Could not parse game object: {}", e);
                Err(to_js_error(e))
            }
        }
    }

    /// Load a seeded offline board
    #[wasm_bindgen(js_name = loadPractice)]
    pub fn load_practice(&mut self, seed: Option<u64>) -> Result<u64, JsValue> {
        let seed = seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = practice_game(seed, DEFAULT_MAP_SIZE).map_err(to_js_error)?;
        self.session.unload();
        self.session.load_state(state);
        Ok(seed)
    }

    #[wasm_bindgen(js_name = selectPiece)]
    pub fn select_piece(&mut self, piece: usize) -> bool {
        self.session.select_piece(piece)
    }

    #[wasm_bindgen(js_name = selectedPiece)]
    pub fn selected_piece(&self) -> usize {
        self.session.selected_piece()
    }

    /// Append a move of the selected robot; `code` is 8, 2, 4 or 6
    #[wasm_bindgen(js_name = pushDirection)]
    pub fn push_direction(&mut self, code: u8) -> bool {
        match Direction::from_code(code) {
            Some(direction) => self.session.push_direction(direction).is_some(),
            None => {
                log::warn!("Ignoring direction code {}", code);
                false
            }
        }
    }

    /// Returns "selected", "moved" or "ignored"
    #[wasm_bindgen(js_name = clickCell)]
    pub fn click_cell(&mut self, cell: usize) -> String {
        match self.session.click_cell(cell) {
            ClickOutcome::Selected(_) => "selected",
            ClickOutcome::Moved(_) => "moved",
            ClickOutcome::Ignored => "ignored",
        }
        .to_string()
    }

    pub fn undo(&mut self) {
        self.session.undo();
    }

    #[wasm_bindgen(js_name = clearRoute)]
    pub fn clear_route(&mut self) {
        self.session.clear_route();
    }

    /// Replace the route with an encoded one (e.g. restored from the URL)
    #[wasm_bindgen(js_name = setRoute)]
    pub fn set_route(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let route = Route::from_bytes(bytes).map_err(to_js_error)?;
        self.session.set_route(route);
        Ok(())
    }

    /// Route in ledger encoding
    #[wasm_bindgen(js_name = routeBytes)]
    pub fn route_bytes(&self) -> Vec<u8> {
        self.session.route().to_bytes()
    }

    #[wasm_bindgen(js_name = routeText)]
    pub fn route_text(&self) -> String {
        self.session.display().to_string()
    }

    /// `SimulationResult` as JSON, or `null` without a game
    pub fn simulation(&self) -> Result<String, JsValue> {
        to_json(&self.session.simulation())
    }

    /// `RouteSuccess` as JSON, or `null`
    pub fn success(&self) -> Result<String, JsValue> {
        to_json(&self.session.success())
    }

    /// Whether the loaded round already has a winner
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.session.state().is_some_and(|s| s.is_finished())
    }

    /// Recorded best move count, `undefined` when none
    #[wasm_bindgen(js_name = bestMoves)]
    pub fn best_moves(&self) -> Option<u8> {
        self.session.state().and_then(|s| s.best_moves())
    }

    #[wasm_bindgen(js_name = isNewBest)]
    pub fn is_new_best(&self) -> bool {
        self.session.is_new_best()
    }

    pub fn display(&self) -> Result<String, JsValue> {
        to_json(&self.session.display())
    }

    pub fn summaries(&self) -> Result<String, JsValue> {
        to_json(&self.session.summaries())
    }

    pub fn overlay(&self) -> Result<String, JsValue> {
        to_json(&self.session.overlay())
    }

    /// `create_game` call as JSON for the wallet adapter
    #[wasm_bindgen(js_name = createGameCall)]
    pub fn create_game_call(&self) -> Result<String, JsValue> {
        let call = ledger::create_game_call(&self.config).map_err(to_js_error)?;
        to_json(&call)
    }

    /// `submit_route` call as JSON for the wallet adapter
    #[wasm_bindgen(js_name = submitRouteCall)]
    pub fn submit_route_call(&self, game_id: &str) -> Result<String, JsValue> {
        let call = self
            .session
            .submission(&self.config, game_id)
            .map_err(to_js_error)?;
        to_json(&call)
    }

    /// Id of the game created by a `create_game` transaction result
    #[wasm_bindgen(js_name = createdGameId)]
    pub fn created_game_id(&self, transaction_json: &str) -> Result<Option<String>, JsValue> {
        ledger::created_game_id(transaction_json, &self.config).map_err(to_js_error)
    }

    /// Call once the ledger accepted the submitted route
    pub fn submitted(&mut self) {
        self.session.submitted();
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        to_json(&self.config)
    }

    pub fn network(&self) -> String {
        self.config.network.as_str().to_string()
    }

    /// Switch network by name ("mainnet", "testnet", "devnet")
    #[wasm_bindgen(js_name = setNetwork)]
    pub fn set_network(&mut self, name: &str) -> bool {
        match Network::from_str(name) {
            Some(network) => {
                self.config.network = network;
                self.config.save();
                true
            }
            None => {
                log::warn!("Unknown network {:?}", name);
                false
            }
        }
    }

    /// Replace and persist the config
    #[wasm_bindgen(js_name = setConfigJson)]
    pub fn set_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.config = serde_json::from_str(json).map_err(to_js_error)?;
        self.config.save();
        Ok(())
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}
