//! Commonly used types and utilities for ease of import.

pub use crate::{
    init_logging, Board, Commander, Coord, Direction, Game, GamePhase, GameSummary, Player,
    RandomCommander, RenderMode, Shot, SquareStatus,
};

pub use crate::cli::CliCommander;
