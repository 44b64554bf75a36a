//! Board geometry and walls
//!
//! A board is an N×N grid indexed row-major. Each cell carries a 4-bit wall
//! mask. Masks are taken as authored: a wall on one side of an edge does not
//! imply a wall on the neighbour's side.

use serde::{Deserialize, Serialize};

use super::Cell;
use crate::consts::*;
use crate::error::BoardError;

/// One edge of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wall {
    North,
    South,
    West,
    East,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::North, Wall::South, Wall::West, Wall::East];

    /// Bit for this edge in a wall mask
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Wall::North => WALL_NORTH,
            Wall::South => WALL_SOUTH,
            Wall::West => WALL_WEST,
            Wall::East => WALL_EAST,
        }
    }

    /// The same edge seen from the neighbouring cell
    pub fn opposite(self) -> Wall {
        match self {
            Wall::North => Wall::South,
            Wall::South => Wall::North,
            Wall::West => Wall::East,
            Wall::East => Wall::West,
        }
    }
}

/// Static board description, read-only for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    walls: Vec<u8>,
}

/// Unvalidated wire form of a `Board`
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    #[serde(default)]
    walls: Vec<u8>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::new(raw.size, raw.walls)
    }
}

impl Board {
    /// Build a board from its size and per-cell wall masks.
    ///
    /// `walls` may be shorter than `size * size`; missing cells have no walls.
    pub fn new(size: usize, walls: Vec<u8>) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        let cells = size.checked_mul(size).ok_or(BoardError::TooLarge(size))?;
        if walls.len() > cells {
            return Err(BoardError::TooManyWalls {
                len: walls.len(),
                size,
            });
        }
        if let Some((cell, &mask)) = walls.iter().enumerate().find(|(_, m)| **m > WALL_MASK_MAX) {
            return Err(BoardError::InvalidWallMask { cell, mask });
        }
        Ok(Self { size, walls })
    }

    /// Board of the given size with no walls at all
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        Self::new(size, Vec::new())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell < self.cell_count()
    }

    /// Wall mask of a cell (0 for cells without an entry)
    #[inline]
    pub fn wall_mask(&self, cell: Cell) -> u8 {
        self.walls.get(cell).copied().unwrap_or(0)
    }

    #[inline]
    pub fn has_wall(&self, cell: Cell, wall: Wall) -> bool {
        self.wall_mask(cell) & wall.bit() != 0
    }

    #[inline]
    pub fn row(&self, cell: Cell) -> usize {
        cell / self.size
    }

    #[inline]
    pub fn col(&self, cell: Cell) -> usize {
        cell % self.size
    }

    /// Cell across `wall` from `cell`, or `None` at the board edge
    #[inline]
    pub fn neighbour(&self, cell: Cell, wall: Wall) -> Option<Cell> {
        let (row, col) = (self.row(cell), self.col(cell));
        match wall {
            Wall::North => (row > 0).then(|| cell - self.size),
            Wall::South => (row + 1 < self.size).then(|| cell + self.size),
            Wall::West => (col > 0).then(|| cell - 1),
            Wall::East => (col + 1 < self.size).then(|| cell + 1),
        }
    }

    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        row * self.size + col
    }

    /// Whether a cell lies in the central block (rows/cols 6..=9 on 16×16).
    ///
    /// Boards smaller than 4 have no central block.
    pub fn is_center_square(&self, cell: Cell) -> bool {
        if self.size < 4 {
            return false;
        }
        let lo = self.size / 2 - 2;
        let hi = self.size / 2 + 1;
        let (row, col) = (self.row(cell), self.col(cell));
        (lo..=hi).contains(&row) && (lo..=hi).contains(&col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_decomposition() {
        let board = Board::empty(16).unwrap();
        assert_eq!(board.row(0), 0);
        assert_eq!(board.col(0), 0);
        assert_eq!(board.row(17), 1);
        assert_eq!(board.col(17), 1);
        assert_eq!(board.row(255), 15);
        assert_eq!(board.col(255), 15);
        assert_eq!(board.cell_at(12, 8), 200);
    }

    #[test]
    fn test_has_wall_reads_bits() {
        let mut walls = vec![0; 16];
        walls[5] = WALL_EAST | WALL_NORTH;
        let board = Board::new(4, walls).unwrap();
        assert!(board.has_wall(5, Wall::East));
        assert!(board.has_wall(5, Wall::North));
        assert!(!board.has_wall(5, Wall::South));
        assert!(!board.has_wall(5, Wall::West));
        // One-sided: the neighbour does not get a matching west wall
        assert!(!board.has_wall(6, Wall::West));
    }

    #[test]
    fn test_missing_wall_entries_are_open() {
        let board = Board::new(4, vec![WALL_SOUTH]).unwrap();
        assert!(board.has_wall(0, Wall::South));
        assert_eq!(board.wall_mask(15), 0);
    }

    #[test]
    fn test_rejects_bad_boards() {
        assert_eq!(Board::new(0, vec![]), Err(BoardError::ZeroSize));
        assert_eq!(
            Board::new(2, vec![0, 16]),
            Err(BoardError::InvalidWallMask { cell: 1, mask: 16 })
        );
        assert_eq!(
            Board::new(2, vec![0; 5]),
            Err(BoardError::TooManyWalls { len: 5, size: 2 })
        );
        assert_eq!(
            Board::new(usize::MAX, vec![]),
            Err(BoardError::TooLarge(usize::MAX))
        );
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<Board>(r#"{"size":0,"walls":[]}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"size":2,"walls":[0,16]}"#).is_err());
        let board: Board = serde_json::from_str(r#"{"size":2,"walls":[8]}"#).unwrap();
        assert!(board.has_wall(0, Wall::East));
        assert_eq!(serde_json::to_string(&board).unwrap(), r#"{"size":2,"walls":[8]}"#);
    }

    #[test]
    fn test_neighbour_stops_at_edges() {
        let board = Board::empty(4).unwrap();
        assert_eq!(board.neighbour(5, Wall::North), Some(1));
        assert_eq!(board.neighbour(5, Wall::South), Some(9));
        assert_eq!(board.neighbour(5, Wall::West), Some(4));
        assert_eq!(board.neighbour(5, Wall::East), Some(6));
        assert_eq!(board.neighbour(0, Wall::North), None);
        assert_eq!(board.neighbour(4, Wall::West), None);
        assert_eq!(board.neighbour(7, Wall::East), None);
        assert_eq!(board.neighbour(13, Wall::South), None);
    }

    #[test]
    fn test_center_square() {
        let board = Board::empty(16).unwrap();
        assert!(board.is_center_square(board.cell_at(6, 6)));
        assert!(board.is_center_square(board.cell_at(9, 9)));
        assert!(!board.is_center_square(board.cell_at(5, 6)));
        assert!(!board.is_center_square(board.cell_at(6, 10)));
        assert!(!Board::empty(3).unwrap().is_center_square(4));
    }
}
