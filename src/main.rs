use broadside::cli::{CliCommander, MenuChoice};
use broadside::{init_logging, Commander, Game};

use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Two-player hot-seat Battleships on an 8×8 grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Do not wait for ENTER between turns")]
    no_pause: bool,
    #[arg(long, help = "Start the game without showing the main menu")]
    skip_menu: bool,
    #[arg(long, value_name = "NAME")]
    player1: Option<String>,
    #[arg(long, value_name = "NAME")]
    player2: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => {
            info!("using fixed seed {s}");
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let mut console = CliCommander::stdio(rng).with_pause(!cli.no_pause);

    if !cli.skip_menu && console.main_menu()? == MenuChoice::Exit {
        return Ok(());
    }

    let first = match cli.player1 {
        Some(name) => name,
        None => console.read_player_name(1)?,
    };
    let second = match cli.player2 {
        Some(name) => name,
        None => console.read_player_name(2)?,
    };

    let mut game = Game::new(first, second);
    let mut commanders: [&mut dyn Commander; 1] = [&mut console];
    let summary = game.run(&mut commanders)?;
    info!("game finished after {} turns", summary.turns);
    Ok(())
}
