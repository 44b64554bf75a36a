//! Move commands and routes
//!
//! On the ledger a route is a flat byte string alternating piece index and
//! direction code, e.g. `[0, 6, 0, 2]` for "piece 0 right, piece 0 down".
//! `Route` holds the same data as validated pairs and converts both ways.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::consts::PIECE_COUNT;
use crate::error::RouteError;

/// A single slide command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    piece: usize,
    direction: Direction,
}

impl Move {
    /// Returns `None` when `piece` is not one of the four robots
    pub fn new(piece: usize, direction: Direction) -> Option<Self> {
        (piece < PIECE_COUNT).then_some(Self { piece, direction })
    }

    #[inline]
    pub fn piece(&self) -> usize {
        self.piece
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Ledger encoding: `[piece, direction code]`
    #[inline]
    pub fn encode(&self) -> [u8; 2] {
        [self.piece as u8, self.direction.code()]
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece, self.direction.letter())
    }
}

impl FromStr for Move {
    type Err = RouteError;

    /// Parses `<piece><U|D|L|R>`, e.g. `2L`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RouteError::InvalidToken(s.to_string());
        let mut chars = s.chars();
        let piece = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(invalid)? as usize;
        let direction = chars
            .next()
            .and_then(Direction::from_letter)
            .ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        Move::new(piece, direction).ok_or_else(invalid)
    }
}

/// Ordered list of moves; order is execution order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct Route {
    moves: Vec<Move>,
}

impl Route {
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn from_moves(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// Decode the flat ledger encoding.
    ///
    /// Fails on odd length, piece indices outside 0..4, or unknown direction
    /// codes. Nothing is decoded from an invalid route.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RouteError> {
        if bytes.len() % 2 != 0 {
            return Err(RouteError::OddLength(bytes.len()));
        }
        let moves = bytes
            .chunks_exact(2)
            .enumerate()
            .map(|(i, pair)| {
                let offset = i * 2;
                let direction = Direction::from_code(pair[1]).ok_or(
                    RouteError::InvalidDirection {
                        offset: offset + 1,
                        value: pair[1],
                    },
                )?;
                Move::new(pair[0] as usize, direction).ok_or(RouteError::InvalidPiece {
                    offset,
                    value: pair[0],
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { moves })
    }

    /// Flat ledger encoding, submitted verbatim
    pub fn to_bytes(&self) -> Vec<u8> {
        self.moves.iter().flat_map(Move::encode).collect()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Number of moves (half the encoded length)
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Drop the last move, returning it
    pub fn undo(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl From<Route> for Vec<u8> {
    fn from(route: Route) -> Self {
        route.to_bytes()
    }
}

impl TryFrom<Vec<u8>> for Route {
    type Error = RouteError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Route::from_bytes(&bytes)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    /// Parses whitespace-separated moves, e.g. `0R 0D 2U`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let moves = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { moves })
    }
}
