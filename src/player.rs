use log::info;

use crate::{
    board::{Board, RenderMode},
    commander::Commander,
    common::{BoardError, Coord, Direction, Shot},
    config::{NUM_SHIPS, SHIPS},
    ship::Ship,
};

/// A participant: a name, the board they defend and the fleet on it.
///
/// The player is the sole owner of its ships; squares on the board only
/// refer to them by fleet index.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
    fleet: [Ship; NUM_SHIPS],
    placed: [bool; NUM_SHIPS],
}

impl Player {
    /// Create a player with an empty board and the standard fleet.
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            board: Board::new(),
            fleet: SHIPS.map(Ship::new),
            placed: [false; NUM_SHIPS],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// `true` once fleet ship `index` is on the board.
    pub fn is_placed(&self, index: usize) -> bool {
        self.placed.get(index).copied().unwrap_or(false)
    }

    /// `true` once every fleet ship is on the board.
    pub fn fleet_ready(&self) -> bool {
        self.placed.iter().all(|&placed| placed)
    }

    /// Place fleet ship `index` starting at `start` heading `direction`.
    pub fn place_ship(
        &mut self,
        index: usize,
        start: Coord,
        direction: Direction,
    ) -> Result<(), BoardError> {
        let ship = self
            .fleet
            .get(index)
            .ok_or(BoardError::InvalidIndex(index))?
            .ship_type();
        if self.placed[index] {
            return Err(BoardError::ShipAlreadyPlaced(ship.name()));
        }
        self.board.place_ship(start, direction, index, ship)?;
        self.placed[index] = true;
        Ok(())
    }

    /// Place every ship still off the board, in fleet order, asking
    /// `commander` for positions until each placement is accepted.
    pub fn place_fleet(&mut self, commander: &mut dyn Commander) -> anyhow::Result<()> {
        for index in 0..NUM_SHIPS {
            if self.placed[index] {
                continue;
            }
            let ship = self.fleet[index].ship_type();
            loop {
                let (start, direction) =
                    commander.choose_placement(&self.name, index, ship, &self.board)?;
                match self.place_ship(index, start, direction) {
                    Ok(()) => {
                        let view = self.render(RenderMode::Placement, None);
                        commander.ship_placed(&self.name, ship, start, direction, &view)?;
                        break;
                    }
                    Err(err) => commander.placement_rejected(&err)?,
                }
            }
        }
        info!("{} has placed their fleet", self.name);
        commander.pause()
    }

    /// Take a shot from the opponent at `target` on this player's board.
    pub fn receive_fire(&mut self, target: Coord) -> Result<Shot, BoardError> {
        self.board.fire_at(target, &mut self.fleet)
    }

    /// `true` iff every ship in the fleet is sunk.
    pub fn has_lost(&self) -> bool {
        self.fleet.iter().all(Ship::is_sunk)
    }

    /// Number of fleet ships sunk so far.
    pub fn ships_sunk(&self) -> usize {
        self.fleet.iter().filter(|s| s.is_sunk()).count()
    }

    /// Clear the board and repair the fleet, ready for a fresh placement.
    pub fn reset(&mut self) {
        self.board.reset();
        self.fleet.iter_mut().for_each(Ship::reset);
        self.placed = [false; NUM_SHIPS];
    }

    /// Render this player's board under their own name.
    pub fn render(&self, mode: RenderMode, turn: Option<u32>) -> String {
        self.board.render(mode, &self.name, turn)
    }
}
