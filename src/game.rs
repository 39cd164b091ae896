//! Game session: two players, the turn counter and whose shot it is.

use anyhow::ensure;
use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::{
    board::RenderMode,
    commander::Commander,
    common::{BoardError, Coord, Shot},
    player::Player,
};

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fleets are being placed.
    Placement,
    /// Players alternate shots.
    Combat,
    /// A fleet has been sunk; `winner` is the seat index of the victor.
    Over { winner: usize },
}

/// Errors returned by [`Game`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("action requires the {expected:?} phase, game is in {actual:?}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
    #[error("{name} has not placed their whole fleet")]
    FleetIncomplete { seat: usize, name: String },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Record of one resolved shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Turn number the shot was fired on.
    pub turn: u32,
    pub attacker: String,
    pub defender: String,
    pub target: Coord,
    pub shot: Shot,
    /// `true` if this shot sank the defender's last ship.
    pub defender_lost: bool,
}

/// Per-player statistics for a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub lost: bool,
    /// Shots fired at this player's board.
    pub shots_taken: usize,
    pub ships_sunk: usize,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub player1: PlayerSummary,
    pub player2: PlayerSummary,
    pub winner: String,
    /// Number of resolved shots.
    pub turns: u32,
}

/// Core game state shared by both seats.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    attacker: usize,
    turn: u32,
    phase: GamePhase,
}

impl Game {
    /// Start a game between two named players. Player one shoots first.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Game {
            players: [Player::new(first), Player::new(second)],
            attacker: 0,
            turn: 1,
            phase: GamePhase::Placement,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Number of the turn about to be played.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    pub fn attacker(&self) -> &Player {
        &self.players[self.attacker]
    }

    pub fn defender(&self) -> &Player {
        &self.players[1 - self.attacker]
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            GamePhase::Over { winner } => Some(&self.players[winner]),
            _ => None,
        }
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Move from placement to combat once both fleets are fully placed.
    pub fn begin_combat(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Placement)?;
        if let Some(seat) = self.players.iter().position(|p| !p.fleet_ready()) {
            return Err(GameError::FleetIncomplete {
                seat,
                name: self.players[seat].name().to_string(),
            });
        }
        self.phase = GamePhase::Combat;
        info!(
            "combat begins: {} vs {}",
            self.players[0].name(),
            self.players[1].name()
        );
        Ok(())
    }

    /// Place the fleet of the player in `seat` using `commander`.
    pub fn place_fleet(
        &mut self,
        seat: usize,
        commander: &mut dyn Commander,
    ) -> anyhow::Result<()> {
        self.expect_phase(GamePhase::Placement)?;
        let player = self
            .players
            .get_mut(seat)
            .ok_or_else(|| anyhow::anyhow!("no player in seat {seat}"))?;
        player.place_fleet(commander)
    }

    /// The attacker fires at `target` on the defender's board.
    ///
    /// A rejected shot changes nothing: the turn counter and roles stay as
    /// they were. A resolved shot advances the turn and either ends the game
    /// or swaps roles.
    pub fn fire(&mut self, target: Coord) -> Result<TurnReport, GameError> {
        self.expect_phase(GamePhase::Combat)?;
        let attacker = self.attacker;
        let defender = 1 - attacker;

        let shot = self.players[defender].receive_fire(target)?;
        let defender_lost = self.players[defender].has_lost();
        let report = TurnReport {
            turn: self.turn,
            attacker: self.players[attacker].name().to_string(),
            defender: self.players[defender].name().to_string(),
            target,
            shot,
            defender_lost,
        };

        self.turn += 1;
        if defender_lost {
            self.phase = GamePhase::Over { winner: attacker };
            info!("{} won on turn {}", report.attacker, report.turn);
        } else {
            self.attacker = defender;
        }
        Ok(report)
    }

    /// Play one turn interactively: show the defender's board, then ask the
    /// attacker's commander for targets until a shot resolves.
    pub fn play_turn(&mut self, commander: &mut dyn Commander) -> anyhow::Result<TurnReport> {
        self.expect_phase(GamePhase::Combat)?;
        commander.show_board(&self.defender().render(RenderMode::Combat, Some(self.turn)))?;
        loop {
            let target = commander.choose_target(self.attacker().name(), self.defender().board())?;
            match self.fire(target) {
                Ok(report) => {
                    commander.shot_resolved(&report)?;
                    commander.pause()?;
                    return Ok(report);
                }
                Err(GameError::Board(err)) => commander.shot_rejected(&err)?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Run a whole game: place both fleets, then alternate turns until one
    /// fleet is sunk.
    ///
    /// With a single commander it drives both seats (hot-seat play); with two,
    /// seat `i` is driven by `commanders[i]`.
    pub fn run(&mut self, commanders: &mut [&mut dyn Commander]) -> anyhow::Result<GameSummary> {
        ensure!(
            matches!(commanders.len(), 1 | 2),
            "expected one or two commanders, got {}",
            commanders.len()
        );
        let seats = commanders.len();

        for seat in 0..self.players.len() {
            self.place_fleet(seat, &mut *commanders[seat % seats])?;
        }
        self.begin_combat()?;

        while let GamePhase::Combat = self.phase {
            let seat = self.attacker % seats;
            self.play_turn(&mut *commanders[seat])?;
        }

        let winner = self
            .winner()
            .map(|p| p.name().to_string())
            .ok_or_else(|| anyhow::anyhow!("game ended without a winner"))?;
        for commander in commanders.iter_mut() {
            commander.game_over(&winner)?;
        }
        Ok(self.summary(winner))
    }

    fn summary(&self, winner: String) -> GameSummary {
        let [first, second] = self.players.each_ref().map(|p| PlayerSummary {
            name: p.name().to_string(),
            lost: p.has_lost(),
            shots_taken: p.board().fired_count(),
            ships_sunk: p.ships_sunk(),
        });
        GameSummary {
            player1: first,
            player2: second,
            winner,
            turns: self.turn - 1,
        }
    }
}
