mod board;
pub mod cli;
mod commander;
mod common;
mod config;
mod game;
mod logging;
mod player;
pub mod prelude;
mod ship;
mod square;

pub use board::*;
pub use commander::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::*;
pub use ship::*;
pub use square::*;
