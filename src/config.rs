//! Fixed game parameters: grid size and the standard five-ship fleet.

use crate::ship::ShipType;

/// Rows and columns on each board.
pub const BOARD_SIZE: usize = 8;
pub const NUM_SHIPS: usize = 5;

/// Fleet in placement order. A ship's index here is its `ShipId`.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Hits needed to sink the whole fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&SHIPS);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].size();
        i += 1;
    }
    total
}
