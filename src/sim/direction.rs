//! Slide directions and their ledger codes

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::board::Wall;
use crate::consts::*;

/// Direction of a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Numeric code used in the ledger route encoding
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Direction::Up => DIR_UP,
            Direction::Down => DIR_DOWN,
            Direction::Left => DIR_LEFT,
            Direction::Right => DIR_RIGHT,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            DIR_UP => Some(Direction::Up),
            DIR_DOWN => Some(Direction::Down),
            DIR_LEFT => Some(Direction::Left),
            DIR_RIGHT => Some(Direction::Right),
            _ => None,
        }
    }

    /// Wall on the departure cell that blocks this direction
    #[inline]
    pub fn blocking_wall(self) -> Wall {
        match self {
            Direction::Up => Wall::North,
            Direction::Down => Wall::South,
            Direction::Left => Wall::West,
            Direction::Right => Wall::East,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Left => "←",
            Direction::Right => "→",
        }
    }

    /// Single-letter form used in route notation
    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_ledger_encoding() {
        assert_eq!(Direction::Up.code(), 8);
        assert_eq!(Direction::Down.code(), 2);
        assert_eq!(Direction::Left.code(), 4);
        assert_eq!(Direction::Right.code(), 6);
        for dir in Direction::ALL {
            assert_eq!(Direction::from_code(dir.code()), Some(dir));
        }
        assert_eq!(Direction::from_code(0), None);
        assert_eq!(Direction::from_code(5), None);
    }

    #[test]
    fn test_blocking_walls() {
        assert_eq!(Direction::Up.blocking_wall(), Wall::North);
        assert_eq!(Direction::Down.blocking_wall(), Wall::South);
        assert_eq!(Direction::Left.blocking_wall(), Wall::West);
        assert_eq!(Direction::Right.blocking_wall(), Wall::East);
    }

    #[test]
    fn test_letters() {
        assert_eq!(Direction::from_letter('r'), Some(Direction::Right));
        assert_eq!(Direction::from_letter('x'), None);
        for dir in Direction::ALL {
            assert_eq!(Direction::from_letter(dir.letter()), Some(dir));
        }
    }
}
