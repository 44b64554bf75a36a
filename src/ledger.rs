//! Ledger data contracts
//!
//! Reading: the game object as returned by the ledger RPC (`getObject` with
//! content) is turned into a `GameState`. Writing: move calls for
//! `create_game` and `submit_route` are described as plain data for the
//! wallet adapter to sign. Nothing here talks to the network.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::consts::PIECE_COUNT;
use crate::error::{LedgerError, StateError};
use crate::sim::{Board, GameState, PieceSet, Positions, Route};

/// Shared on-chain randomness object passed to `create_game`
pub const RANDOM_OBJECT_ID: &str = "0x8";

/// Integer field; the RPC renders u64 values as decimal strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Int {
    Num(u64),
    Str(String),
}

impl Int {
    fn get(&self) -> Result<u64, StateError> {
        match self {
            Int::Num(n) => Ok(*n),
            Int::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| StateError::InvalidInteger(s.clone())),
        }
    }

    fn get_u8(&self) -> Result<u8, StateError> {
        let n = self.get()?;
        u8::try_from(n).map_err(|_| StateError::InvalidInteger(n.to_string()))
    }

    fn get_usize(&self) -> Result<usize, StateError> {
        let n = self.get()?;
        usize::try_from(n).map_err(|_| StateError::InvalidInteger(n.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ObjectResponse {
    data: Option<ObjectData>,
}

#[derive(Debug, Deserialize)]
struct ObjectData {
    content: Option<ObjectContent>,
}

#[derive(Debug, Deserialize)]
struct ObjectContent {
    fields: Option<GameFields>,
}

/// `Option<u8>` as rendered by the RPC: `{"fields": {"vec": [x]}}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionField {
    Wrapped { fields: Option<OptionVec> },
    Plain(Int),
}

#[derive(Debug, Deserialize)]
struct OptionVec {
    #[serde(default)]
    vec: Vec<Int>,
}

#[derive(Debug, Deserialize)]
struct GameFields {
    map_size: Int,
    #[serde(default)]
    walls: Vec<Int>,
    robot_positions: Vec<Int>,
    target_position: Int,
    target_robot: Int,
    #[serde(default)]
    winner: Option<OptionField>,
    best_move_count: Int,
    #[serde(default)]
    scores: Vec<Int>,
}

impl GameFields {
    fn into_state(self) -> Result<GameState, StateError> {
        let walls = self
            .walls
            .iter()
            .map(Int::get_u8)
            .collect::<Result<Vec<_>, _>>()?;
        let board = Board::new(self.map_size.get_usize()?, walls)?;

        let cells = self
            .robot_positions
            .iter()
            .map(Int::get_usize)
            .collect::<Result<Vec<_>, _>>()?;
        let positions: Positions = cells
            .as_slice()
            .try_into()
            .map_err(|_| StateError::RobotCount(cells.len()))?;

        let target_cell = self.target_position.get_usize()?;
        if let Some(&cell) = positions
            .iter()
            .chain([&target_cell])
            .find(|&&cell| !board.contains(cell))
        {
            return Err(StateError::PositionOffBoard {
                cell,
                size: board.size(),
            });
        }

        let target_robot = self.target_robot.get()?;
        if target_robot >= PIECE_COUNT as u64 {
            return Err(StateError::TargetRobot(target_robot));
        }

        let winner = match self.winner {
            Some(OptionField::Wrapped { fields: Some(opt) }) => {
                opt.vec.first().map(Int::get_u8).transpose()?
            }
            Some(OptionField::Plain(n)) => Some(n.get_u8()?),
            Some(OptionField::Wrapped { fields: None }) | None => None,
        };

        Ok(GameState {
            board,
            pieces: PieceSet {
                positions,
                target_cell,
                target_piece: target_robot as usize,
            },
            winner,
            best_move_count: self.best_move_count.get_u8()?,
            scores: self
                .scores
                .iter()
                .map(Int::get)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

/// Parse a `getObject` response (with `showContent`) into a game state
pub fn parse_game_object(json: &str) -> Result<GameState, StateError> {
    let response: ObjectResponse = serde_json::from_str(json)?;
    let fields = response
        .data
        .and_then(|d| d.content)
        .and_then(|c| c.fields)
        .ok_or(StateError::MissingFields)?;
    let state = fields.into_state()?;
    log::info!(
        "Parsed game: {}x{} board, target robot {} at {}",
        state.board.size(),
        state.board.size(),
        state.pieces.target_piece,
        state.pieces.target_cell
    );
    Ok(state)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionResult {
    #[serde(default)]
    object_changes: Vec<ObjectChange>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectChange {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    object_type: String,
    #[serde(default)]
    object_id: String,
}

/// Id of the game object created by a `create_game` transaction, if any
pub fn created_game_id(transaction_json: &str, config: &Config) -> Result<Option<String>, StateError> {
    let result: TransactionResult = serde_json::from_str(transaction_json)?;
    let suffix = format!("{}::Game", config.module_name);
    Ok(result
        .object_changes
        .into_iter()
        .find(|c| c.kind == "created" && c.object_type.ends_with(&suffix))
        .map(|c| c.object_id))
}

/// Argument to a move call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CallArg {
    Object(String),
    U8(u8),
    VectorU8(Vec<u8>),
}

/// A contract call, ready for the wallet to build and sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveCall {
    pub target: String,
    pub arguments: Vec<CallArg>,
}

/// Call that starts a new round
pub fn create_game_call(config: &Config) -> Result<MoveCall, LedgerError> {
    if !config.is_configured() {
        return Err(LedgerError::NotConfigured);
    }
    Ok(MoveCall {
        target: config.call_target("create_game"),
        arguments: vec![CallArg::Object(RANDOM_OBJECT_ID.to_string())],
    })
}

/// Call that submits `route` for `game_id`.
///
/// The route goes out in its flat encoding exactly as built, never the
/// simulated result.
pub fn submit_route_call(
    config: &Config,
    game_id: &str,
    route: &Route,
) -> Result<MoveCall, LedgerError> {
    if !config.is_configured() {
        return Err(LedgerError::NotConfigured);
    }
    let game_id = game_id.trim();
    if game_id.is_empty() {
        return Err(LedgerError::MissingGameId);
    }
    if route.is_empty() {
        return Err(LedgerError::EmptyRoute);
    }
    Ok(MoveCall {
        target: config.call_target("submit_route"),
        arguments: vec![
            CallArg::Object(game_id.to_string()),
            CallArg::U8(config.player_index),
            CallArg::VectorU8(route.to_bytes()),
        ],
    })
}
