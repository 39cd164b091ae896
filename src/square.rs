//! A single grid cell.

use thiserror::Error;

use crate::ship::ShipId;

/// Observable state of a square, derived from (ship present, fired).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareStatus {
    /// Open water, not fired upon.
    Empty,
    /// Ship segment, not fired upon.
    Ship,
    /// Ship segment that has been fired upon.
    Hit,
    /// Open water that has been fired upon.
    Miss,
}

impl SquareStatus {
    /// `true` once the square has been fired upon.
    pub fn is_fired(&self) -> bool {
        matches!(self, SquareStatus::Hit | SquareStatus::Miss)
    }
}

/// Returned when firing on a square that was already fired upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("square was already fired upon")]
pub struct AlreadyFired;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    ship: Option<ShipId>,
    fired: bool,
}

impl Square {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the ship reference and the fired flag.
    pub fn reset(&mut self) {
        *self = Square::default();
    }

    /// Assign a ship to this square. Overlap is the board's concern.
    pub fn add_ship(&mut self, id: ShipId) {
        self.ship = Some(id);
    }

    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn status(&self) -> SquareStatus {
        match (self.ship.is_some(), self.fired) {
            (false, false) => SquareStatus::Empty,
            (true, false) => SquareStatus::Ship,
            (true, true) => SquareStatus::Hit,
            (false, true) => SquareStatus::Miss,
        }
    }

    /// Fire upon this square.
    ///
    /// Returns the occupying ship when one was struck, `None` for a miss, or
    /// [`AlreadyFired`] if the square had already been fired upon, in which
    /// case nothing changes.
    pub fn fire(&mut self) -> Result<Option<ShipId>, AlreadyFired> {
        if self.fired {
            return Err(AlreadyFired);
        }
        self.fired = true;
        Ok(self.ship)
    }
}
