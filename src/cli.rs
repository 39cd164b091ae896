//! Console front end: the main menu, name entry and a [`Commander`] that
//! reads placements and targets from a line-oriented reader.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    commander::Commander,
    common::{BoardError, Coord, Direction, Shot},
    config::{NUM_SHIPS, SHIPS},
    game::TurnReport,
    ship::ShipType,
};

const RULE: &str = "---------------------------------";

/// Selection made on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Exit,
}

/// What was typed at the x-coordinate prompt.
enum ColumnInput {
    /// Blank line: let the game choose.
    Random,
    /// A full coordinate such as `A5`.
    Cell(Coord),
    /// A lone column letter; the row is asked for next.
    Column(char),
}

/// [`Commander`] that talks to a human through a reader and a writer.
///
/// Both seats of a hot-seat game share one `CliCommander`.
pub struct CliCommander<R, W> {
    input: R,
    output: W,
    buf: String,
    rng: SmallRng,
    pause: bool,
}

impl CliCommander<StdinLock<'static>, Stdout> {
    /// Commander on the process's stdin and stdout.
    pub fn stdio(rng: SmallRng) -> Self {
        let stdin: Stdin = io::stdin();
        CliCommander::new(stdin.lock(), io::stdout(), rng)
    }
}

impl<R, W> CliCommander<R, W> {
    /// `rng` backs the blank-line random placement shortcut.
    pub fn new(input: R, output: W, rng: SmallRng) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
            rng,
            pause: true,
        }
    }

    /// Enable or disable the "Press enter to continue!" pauses.
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> CliCommander<R, W> {
    /// Repeatedly prompt until `checker` accepts the trimmed line, printing
    /// the reason whenever it does not.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> anyhow::Result<T>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            self.read_line(prompt)?;
            match checker(self.buf.trim()) {
                Ok(val) => return Ok(val),
                Err(reason) => writeln!(self.output, "{reason}")?,
            }
        }
    }

    /// Print the prompt, clear the buffer and read one line.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            bail!("input closed");
        }
        Ok(())
    }

    /// Show the main menu and wait for a valid selection.
    pub fn main_menu(&mut self) -> anyhow::Result<MenuChoice> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "\tBattleships")?;
        writeln!(self.output, "\tMain Menu")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "\t1. Start Game")?;
        writeln!(self.output, "\t2. Exit Game")?;
        writeln!(self.output)?;
        let choice = self.read_input("Enter menu selection(1-2):", |line| match line {
            "1" => Ok(MenuChoice::Start),
            "2" => Ok(MenuChoice::Exit),
            _ => Err("Invalid Entry! Please try again".to_string()),
        })?;
        if choice == MenuChoice::Exit {
            writeln!(self.output, "Goodbye!")?;
        }
        Ok(choice)
    }

    /// Ask player `seat` (1-based) for a name. Only the first word is kept.
    pub fn read_player_name(&mut self, seat: usize) -> anyhow::Result<String> {
        let prompt = format!("**Player {seat}, enter your name:");
        self.read_input(&prompt, |line| {
            line.split_whitespace()
                .next()
                .map(str::to_string)
                .ok_or_else(|| "A name is required.".to_string())
        })
    }

    /// Read a coordinate, either in one go (`A5`) or as a column then a row.
    /// Returns `None` when `allow_random` is set and the line was blank.
    fn read_coord(&mut self, allow_random: bool) -> anyhow::Result<Option<Coord>> {
        let first = self.read_input("Enter the x coordinate (A-H):", |line| {
            if line.is_empty() && allow_random {
                return Ok(ColumnInput::Random);
            }
            if let Ok(coord) = line.parse::<Coord>() {
                return Ok(ColumnInput::Cell(coord));
            }
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(column), None) => Coord::from_chars(column, '1')
                    .map(|_| ColumnInput::Column(column))
                    .map_err(|e| e.to_string()),
                _ => Err(format!("'{line}' is not a column A-H")),
            }
        })?;

        let column = match first {
            ColumnInput::Random => return Ok(None),
            ColumnInput::Cell(coord) => return Ok(Some(coord)),
            ColumnInput::Column(column) => column,
        };
        let coord = self.read_input("Enter the y coordinate (1-8):", |line| {
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(row), None) => Coord::from_chars(column, row).map_err(|e| e.to_string()),
                _ => Err(format!("'{line}' is not a row 1-8")),
            }
        })?;
        Ok(Some(coord))
    }

    fn read_direction(&mut self) -> anyhow::Result<Direction> {
        self.read_input("Enter the direction (N/E/S/W):", |line| {
            let mut chars = line.chars();
            let direction = match (chars.next(), chars.next()) {
                (Some(c), None) => Direction::from_char(c),
                _ => None,
            };
            direction.ok_or_else(|| format!("'{line}' is not a direction N/E/S/W"))
        })
    }

    fn print_fleet_table(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "\tAdd Ship")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "\tName\t\tSquares")?;
        writeln!(self.output, "{RULE}")?;
        for def in SHIPS.iter() {
            writeln!(self.output, "\t{:<12}\t{}", def.name(), def.size())?;
        }
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "Press ENTER at the x prompt to place a ship randomly.")
    }
}

impl<R: BufRead, W: Write> Commander for CliCommander<R, W> {
    fn choose_placement(
        &mut self,
        player: &str,
        index: usize,
        ship: ShipType,
        board: &Board,
    ) -> anyhow::Result<(Coord, Direction)> {
        if index == 0 {
            self.print_fleet_table()?;
        }
        writeln!(
            self.output,
            "\nPlayer {player} adds {} with size {}",
            ship.name(),
            ship.size()
        )?;
        writeln!(self.output, "---{} of {NUM_SHIPS}---", index + 1)?;

        loop {
            let Some(start) = self.read_coord(true)? else {
                match board.random_placement(&mut self.rng, ship) {
                    Ok(placement) => {
                        writeln!(self.output, "Placing the {} randomly.", ship.name())?;
                        return Ok(placement);
                    }
                    Err(err) => {
                        writeln!(self.output, "{err}")?;
                        continue;
                    }
                }
            };
            let direction = self.read_direction()?;
            return Ok((start, direction));
        }
    }

    fn choose_target(&mut self, attacker: &str, _target: &Board) -> anyhow::Result<Coord> {
        writeln!(self.output, "\nPlayer {attacker} enter coordinates to fire")?;
        writeln!(self.output, "{RULE}")?;
        loop {
            if let Some(target) = self.read_coord(false)? {
                writeln!(
                    self.output,
                    "{attacker} fired at x:{} y:{}",
                    target.column_letter(),
                    target.row_number()
                )?;
                return Ok(target);
            }
        }
    }

    fn placement_rejected(&mut self, err: &BoardError) -> anyhow::Result<()> {
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    fn ship_placed(
        &mut self,
        player: &str,
        _ship: ShipType,
        start: Coord,
        direction: Direction,
        view: &str,
    ) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "{player} added a ship to x:{} and y:{} with direction: {direction}",
            start.column_letter(),
            start.row_number()
        )?;
        write!(self.output, "{view}")?;
        Ok(())
    }

    fn show_board(&mut self, view: &str) -> anyhow::Result<()> {
        write!(self.output, "{view}")?;
        Ok(())
    }

    fn shot_rejected(&mut self, err: &BoardError) -> anyhow::Result<()> {
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    fn shot_resolved(&mut self, report: &TurnReport) -> anyhow::Result<()> {
        match report.shot {
            Shot::Hit => writeln!(self.output, "HIT!")?,
            Shot::Sunk(name) => {
                writeln!(self.output, "HIT!")?;
                writeln!(self.output, "{}'s {name} has been sunk!", report.defender)?;
            }
            Shot::Miss => writeln!(self.output, "MISS!")?,
        }
        Ok(())
    }

    fn game_over(&mut self, winner: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{winner} won!")?;
        self.output.flush()?;
        Ok(())
    }

    fn pause(&mut self) -> anyhow::Result<()> {
        if self.pause {
            self.read_line("\nPress enter to continue!")?;
        }
        Ok(())
    }
}
