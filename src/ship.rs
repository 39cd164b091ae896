//! Ship definitions and damage tracking.

use core::fmt;

/// Index of a ship within its owner's fleet.
///
/// Squares store this handle instead of the ship itself; the fleet array
/// owned by the player is the only owner of ship state.
pub type ShipId = usize;

/// Type of ship: name and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    size: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells the ship spans.
    pub const fn size(&self) -> usize {
        self.size
    }
}

/// A fleet ship and the damage it has taken.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    hits: usize,
}

impl Ship {
    pub fn new(ship_type: ShipType) -> Self {
        Ship { ship_type, hits: 0 }
    }

    /// Register one hit. Saturates at the ship's size.
    pub fn hit(&mut self) {
        self.hits = (self.hits + 1).min(self.ship_type.size());
    }

    /// Check if the ship is sunk (every segment hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.size()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn size(&self) -> usize {
        self.ship_type.size()
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Repair all damage.
    pub fn reset(&mut self) {
        self.hits = 0;
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", size: {}, hits: {} }}",
            self.ship_type.name(),
            self.ship_type.size(),
            self.hits,
        )
    }
}
