//! Common types for Broadside: coordinates, directions, shot results and
//! board errors.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::config::BOARD_SIZE;

/// A cell on the grid, addressed by column letter `A`-`H` and row `1`-`8`.
///
/// Both indices are 0-based internally and always lie in `0..BOARD_SIZE`;
/// a `Coord` cannot be constructed out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Build a coordinate from 0-based column and row indices.
    pub fn new(col: usize, row: usize) -> Option<Self> {
        (col < BOARD_SIZE && row < BOARD_SIZE).then_some(Coord { row, col })
    }

    /// Build a coordinate from a column letter and a row digit, e.g. `('A', '5')`.
    pub fn from_chars(column: char, row: char) -> Result<Self, CoordError> {
        let column = column.to_ascii_uppercase();
        if !column.is_ascii_uppercase() {
            return Err(CoordError::InvalidColumn(column));
        }
        let col = (column as u8 - b'A') as usize;
        if col >= BOARD_SIZE {
            return Err(CoordError::InvalidColumn(column));
        }
        let row = row
            .to_digit(10)
            .filter(|d| (1..=BOARD_SIZE as u32).contains(d))
            .ok_or_else(|| CoordError::InvalidRow(row.to_string()))?;
        Ok(Coord {
            row: row as usize - 1,
            col,
        })
    }

    /// 0-based column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// 0-based row index.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column_letter(&self) -> char {
        (b'A' + self.col as u8) as char
    }

    pub fn row_number(&self) -> usize {
        self.row + 1
    }

    /// Every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }

    /// The cell `steps` cells away in `direction`, if it is still on the grid.
    pub fn step(self, direction: Direction, steps: usize) -> Option<Coord> {
        let (row, col) = match direction {
            Direction::North => (self.row.checked_sub(steps)?, self.col),
            Direction::South => (self.row + steps, self.col),
            Direction::East => (self.row, self.col + steps),
            Direction::West => (self.row, self.col.checked_sub(steps)?),
        };
        Coord::new(col, row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row_number())
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    /// Parse `"A5"`-style input. Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(column), Some(row), None) => Coord::from_chars(column, row),
            _ => Err(CoordError::Malformed(s.to_string())),
        }
    }
}

/// Errors produced when turning user input into a [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("invalid column '{0}' - must be a letter A-H")]
    InvalidColumn(char),
    #[error("invalid row '{0}' - must be a number 1-8")]
    InvalidRow(String),
    #[error("malformed coordinate '{0}' - expected a column and a row, e.g. A5")]
    Malformed(String),
}

/// Compass direction a ship extends in from its starting cell.
///
/// North and South move along rows, East and West along columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Parse a direction token `N`, `S`, `E` or `W` (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    /// Shot struck a ship segment.
    Hit,
    /// Shot struck the last intact segment of a ship, carrying its name.
    Sunk(&'static str),
    /// Shot landed in empty water.
    Miss,
}

impl Shot {
    /// `true` when a ship took damage.
    pub fn is_hit(&self) -> bool {
        !matches!(self, Shot::Miss)
    }
}

/// Errors returned by board and player operations.
///
/// Every variant is recoverable: the rejected action leaves the board
/// untouched and may be retried with different input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Cannot place the ship on: {coord} with direction {direction}")]
    OutOfBounds {
        ship: &'static str,
        coord: Coord,
        direction: Direction,
    },
    #[error("Intersects with another ship!")]
    Overlaps { ship: &'static str, coord: Coord },
    #[error("This square is already hit.")]
    AlreadyFired(Coord),
    #[error("{0} is already placed on the board")]
    ShipAlreadyPlaced(&'static str),
    #[error("fleet has no ship at index {0}")]
    InvalidIndex(usize),
    #[error("unable to find room for the {0}")]
    UnableToPlaceShip(&'static str),
}
