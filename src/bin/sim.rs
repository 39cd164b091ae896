use broadside::prelude::*;
use clap::Parser;

/// Play two seeded random commanders against each other and print the
/// outcome as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    seed1: u64,
    seed2: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut p1 = RandomCommander::new(args.seed1);
    let mut p2 = RandomCommander::new(args.seed2);

    let mut game = Game::new("player1", "player2");
    let mut commanders: [&mut dyn Commander; 2] = [&mut p1, &mut p2];
    let summary = game.run(&mut commanders)?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
