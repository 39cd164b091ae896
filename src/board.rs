//! Game board: an 8×8 grid of [`Square`]s with placement, fire resolution
//! and text rendering.

use core::fmt::Write as _;

use log::{debug, trace};
use rand::Rng;

use crate::common::{BoardError, Coord, Direction, Shot};
use crate::config::BOARD_SIZE;
use crate::ship::{Ship, ShipId, ShipType};
use crate::square::{Square, SquareStatus};

/// Attempts made by [`Board::random_placement`] before giving up.
const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

/// Which squares a rendered board reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Owner's view during setup: ships shown, water blank.
    Placement,
    /// Opponent's view during combat: only hits and misses shown.
    Combat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships, nothing fired).
    pub fn new() -> Self {
        Board {
            squares: [[Square::new(); BOARD_SIZE]; BOARD_SIZE],
        }
    }

    fn square(&self, coord: Coord) -> &Square {
        &self.squares[coord.row()][coord.col()]
    }

    fn square_mut(&mut self, coord: Coord) -> &mut Square {
        &mut self.squares[coord.row()][coord.col()]
    }

    /// Status of the square at `coord`.
    pub fn status(&self, coord: Coord) -> SquareStatus {
        self.square(coord).status()
    }

    /// Fleet index of the ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<ShipId> {
        self.square(coord).ship()
    }

    /// Cells a ship of `size` would occupy starting at `start` and extending
    /// in `direction`. Returns `None` if any of them falls off the grid.
    pub fn span(
        start: Coord,
        direction: Direction,
        size: usize,
    ) -> Option<impl Iterator<Item = Coord>> {
        // the far end being on the grid implies every cell before it is
        start.step(direction, size.checked_sub(1)?)?;
        Some((0..size).filter_map(move |i| start.step(direction, i)))
    }

    /// Place fleet ship `id` of type `ship` at `start`, extending `size - 1`
    /// further cells in `direction`.
    ///
    /// Placement is all-or-nothing: on any error the board is unchanged.
    pub fn place_ship(
        &mut self,
        start: Coord,
        direction: Direction,
        id: ShipId,
        ship: ShipType,
    ) -> Result<(), BoardError> {
        let span: Vec<Coord> = Self::span(start, direction, ship.size())
            .ok_or(BoardError::OutOfBounds {
                ship: ship.name(),
                coord: start,
                direction,
            })?
            .collect();

        // a fired-upon ship cell reads Hit, not Ship, but is still occupied
        if let Some(&coord) = span.iter().find(|&&c| self.ship_at(c).is_some()) {
            debug!("{} at {start} {direction} overlaps at {coord}", ship.name());
            return Err(BoardError::Overlaps {
                ship: ship.name(),
                coord,
            });
        }

        for coord in span {
            self.square_mut(coord).add_ship(id);
        }
        debug!("placed {} at {start} heading {direction}", ship.name());
        Ok(())
    }

    /// Returns a random non-overlapping `(start, direction)` for `ship`.
    ///
    /// Fails only when no legal placement is left on the board.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship: ShipType,
    ) -> Result<(Coord, Direction), BoardError> {
        for attempt in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let Some(start) = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            ) else {
                continue;
            };
            if self.fits(start, direction, ship.size()) {
                trace!("random {} at {start} {direction} after {attempt} misses", ship.name());
                return Ok((start, direction));
            }
        }
        // crowded board: take the first legal spot, if there is one
        Coord::all()
            .flat_map(|start| Direction::ALL.map(|direction| (start, direction)))
            .find(|&(start, direction)| self.fits(start, direction, ship.size()))
            .ok_or(BoardError::UnableToPlaceShip(ship.name()))
    }

    /// `true` if a ship of `size` at `start` heading `direction` stays on the
    /// grid and touches no other ship.
    fn fits(&self, start: Coord, direction: Direction, size: usize) -> bool {
        Self::span(start, direction, size)
            .map(|mut cells| cells.all(|c| self.ship_at(c).is_none()))
            .unwrap_or(false)
    }

    /// Resolve a shot at `coord`, registering damage on the struck ship in
    /// `fleet`.
    ///
    /// Firing on a square that was already hit or missed is rejected without
    /// changing anything.
    pub fn fire_at(&mut self, coord: Coord, fleet: &mut [Ship]) -> Result<Shot, BoardError> {
        let struck = self
            .square_mut(coord)
            .fire()
            .map_err(|_| BoardError::AlreadyFired(coord))?;

        let shot = match struck.and_then(|id| fleet.get_mut(id)) {
            Some(ship) => {
                ship.hit();
                if ship.is_sunk() {
                    Shot::Sunk(ship.name())
                } else {
                    Shot::Hit
                }
            }
            None => Shot::Miss,
        };
        debug!("shot at {coord}: {shot:?}");
        Ok(shot)
    }

    /// Number of squares occupied by ships.
    pub fn ship_cells(&self) -> usize {
        Coord::all().filter(|&c| self.ship_at(c).is_some()).count()
    }

    /// Number of squares that have been fired upon.
    pub fn fired_count(&self) -> usize {
        Coord::all().filter(|&c| self.status(c).is_fired()).count()
    }

    /// Clear every square back to open, unfired water.
    pub fn reset(&mut self) {
        self.squares.iter_mut().flatten().for_each(Square::reset);
    }

    /// Render the board as text for `player_name`, optionally headed by the
    /// turn number.
    pub fn render(&self, mode: RenderMode, player_name: &str, turn: Option<u32>) -> String {
        let rule = "-".repeat(2 + 3 * BOARD_SIZE);
        let mut out = String::new();

        if let Some(turn) = turn {
            let _ = writeln!(out, "\nTurn: {turn}");
        }
        let _ = writeln!(out, "\nDisplaying the current board state of {player_name}!");
        out.push('-');
        for col in 0..BOARD_SIZE {
            let _ = write!(out, "--{}", (b'A' + col as u8) as char);
        }
        out.push('\n');
        let _ = writeln!(out, "{rule}");

        for (row, squares) in self.squares.iter().enumerate() {
            let _ = write!(out, "{}| ", row + 1);
            for square in squares {
                let _ = write!(out, "{}  ", marker(square.status(), mode));
            }
            let _ = writeln!(out, "\n{rule}");
        }
        out
    }
}

fn marker(status: SquareStatus, mode: RenderMode) -> char {
    match (status, mode) {
        (SquareStatus::Hit, _) => 'H',
        (SquareStatus::Miss, _) => 'M',
        (SquareStatus::Ship, RenderMode::Placement) => 'S',
        (SquareStatus::Ship, RenderMode::Combat) | (SquareStatus::Empty, _) => ' ',
    }
}
