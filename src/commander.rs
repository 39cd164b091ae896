//! The seam between game state and whoever drives it.
//!
//! A [`Commander`] supplies validated placements and targets and is told
//! about every outcome. The console implementation lives in [`crate::cli`];
//! [`RandomCommander`] plays uniformly at random for simulations and tests.

use anyhow::anyhow;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    board::Board,
    common::{BoardError, Coord, Direction},
    game::TurnReport,
    ship::ShipType,
};

/// Interface implemented by the different ways of driving a player.
pub trait Commander {
    /// Choose where fleet ship `index` goes on `board`.
    fn choose_placement(
        &mut self,
        player: &str,
        index: usize,
        ship: ShipType,
        board: &Board,
    ) -> anyhow::Result<(Coord, Direction)>;

    /// Choose the square `attacker` fires at on the defender's `target` board.
    fn choose_target(&mut self, attacker: &str, target: &Board) -> anyhow::Result<Coord>;

    /// A placement was refused; the same ship will be asked for again.
    fn placement_rejected(&mut self, _err: &BoardError) -> anyhow::Result<()> {
        Ok(())
    }

    /// A ship was placed. `view` is the owner's board after placement.
    fn ship_placed(
        &mut self,
        _player: &str,
        _ship: ShipType,
        _start: Coord,
        _direction: Direction,
        _view: &str,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    /// Show a rendered board.
    fn show_board(&mut self, _view: &str) -> anyhow::Result<()> {
        Ok(())
    }

    /// A shot was refused; a new target will be asked for.
    fn shot_rejected(&mut self, _err: &BoardError) -> anyhow::Result<()> {
        Ok(())
    }

    /// A shot was resolved.
    fn shot_resolved(&mut self, _report: &TurnReport) -> anyhow::Result<()> {
        Ok(())
    }

    fn game_over(&mut self, _winner: &str) -> anyhow::Result<()> {
        Ok(())
    }

    /// Wait for acknowledgement before moving on, e.g. before the seat
    /// changes hands.
    fn pause(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Commander that places and fires uniformly at random.
pub struct RandomCommander {
    rng: SmallRng,
}

impl RandomCommander {
    /// Seeded commander; the same seed yields the same game.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Commander for RandomCommander {
    fn choose_placement(
        &mut self,
        _player: &str,
        _index: usize,
        ship: ShipType,
        board: &Board,
    ) -> anyhow::Result<(Coord, Direction)> {
        Ok(board.random_placement(&mut self.rng, ship)?)
    }

    fn choose_target(&mut self, attacker: &str, target: &Board) -> anyhow::Result<Coord> {
        let open: Vec<Coord> = Coord::all()
            .filter(|&c| !target.status(c).is_fired())
            .collect();
        if open.is_empty() {
            return Err(anyhow!("{attacker} has no squares left to fire at"));
        }
        Ok(open[self.rng.random_range(0..open.len())])
    }
}

