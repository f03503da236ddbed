// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg};
use log::{debug, info};

use seabattle::{
    board::{Board, GameError, Mark, ShotOutcome, View},
    coord::{self, Coordinate, Segment},
    game::{GameState, Phase, Player},
};

mod logging;

/// Clears the terminal and moves the cursor home.
const CLEAR_SCREEN: &str = "\u{1b}[H\u{1b}[2J";

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two-player hot-seat battleship for the terminal.")
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log more to stderr; repeat for more detail"),
        )
        .arg(
            Arg::with_name("no_clear")
                .long("no-clear")
                .help("do not clear the screen when passing the move to the other player"),
        )
        .get_matches();

    logging::init_logging(logging::level_for(matches.occurrences_of("verbose")));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), !matches.is_present("no_clear"));

    match play(&mut console) {
        Ok(winner) => {
            info!("game over, {} won", winner);
            Ok(())
        }
        // Running out of input ends the game quietly.
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            debug!("input closed, exiting");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Play a whole game on the console, returning the winner.
fn play<B: BufRead, W: Write>(console: &mut Console<B, W>) -> io::Result<Player> {
    let mut game = GameState::new();
    while game.pending().is_some() {
        place_fleet(&mut game, console)?;
        console.handoff()?;
    }
    loop {
        if let Some(winner) = shooting_turn(&mut game, console)? {
            return Ok(winner);
        }
        console.handoff()?;
    }
}

/// Ask the placing player for each of their ships in turn.
fn place_fleet<B: BufRead, W: Write>(
    game: &mut GameState,
    console: &mut Console<B, W>,
) -> io::Result<()> {
    let player = match game.pending() {
        Some((player, _)) => player,
        None => return Ok(()),
    };
    writeln!(console.out, "{}, place your ships to the game field", player)?;
    show_board(&mut console.out, game.board(), player, View::Fleet)?;

    while let Some((current, kind)) = game.pending() {
        if current != player {
            break;
        }
        writeln!(
            console.out,
            "Enter the coordinates of the {} ({} cells):\n",
            kind,
            kind.len()
        )?;
        let placed = console.read_input(|line| {
            let segment: Segment = line.parse()?;
            game.place(&segment)
        })?;
        debug!("{} placed {} {:?}", placed.player, placed.kind, placed.orientation);
        show_board(&mut console.out, game.board(), player, View::Fleet)?;
    }
    Ok(())
}

/// Run a single turn of the shooting phase. Returns the winner if this shot ended the game.
fn shooting_turn<B: BufRead, W: Write>(
    game: &mut GameState,
    console: &mut Console<B, W>,
) -> io::Result<Option<Player>> {
    let player = match game.phase() {
        Phase::Shooting(player) => player,
        Phase::GameOver(winner) => return Ok(Some(winner)),
        Phase::Placing { .. } => return Ok(None),
    };
    show_views(&mut console.out, game.board(), player)?;
    writeln!(console.out, "{}, it's your turn:", player)?;

    let target: Coordinate = console.read_input(|line| line.parse())?;
    let outcome = game.fire(target);
    show_views(&mut console.out, game.board(), player)?;
    writeln!(console.out, "{}", ShotMessage(outcome))?;
    Ok(game.winner())
}

/// Message shown to the shooter after a shot.
struct ShotMessage(ShotOutcome);

impl fmt::Display for ShotMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self.0 {
            ShotOutcome::Miss => "You missed!",
            ShotOutcome::Hit(_) => "You hit a ship!",
            ShotOutcome::Sunk { .. } => "You sank a ship!",
            ShotOutcome::Victory(_) => "You sank the last ship.\nYou won. Congratulations!",
        })
    }
}

/// Print the player's view of the opponent above their own fleet.
fn show_views(out: &mut impl Write, board: &Board, player: Player) -> io::Result<()> {
    show_board(out, board, player, View::Fog)?;
    writeln!(out, "---------------------")?;
    show_board(out, board, player, View::Fleet)
}

/// Print one of the player's grids with column numbers across the top and row letters
/// down the side.
fn show_board(out: &mut impl Write, board: &Board, player: Player, view: View) -> io::Result<()> {
    write!(out, "\n ")?;
    for column in 1..=coord::SIZE {
        write!(out, " {}", column)?;
    }
    writeln!(out)?;
    for (y, row) in board.iter_rows(player, view).enumerate() {
        write!(out, "{}", coord::row_letter(y))?;
        for mark in row {
            write!(out, " {}", MarkSymbol(mark))?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Display helper that prints the symbol for a cell.
struct MarkSymbol(Mark);

impl MarkSymbol {
    fn symbol(&self) -> &'static str {
        match self.0 {
            Mark::Water => "~",
            Mark::Ship => "O",
            Mark::Hit => "X",
            Mark::Miss => "M",
        }
    }
}

impl fmt::Display for MarkSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// Reads player input and writes the game's output.
struct Console<B, W> {
    read: B,
    out: W,
    buf: String,

    /// Whether to clear the screen after passing the move.
    clear: bool,
}

impl<B: BufRead, W: Write> Console<B, W> {
    fn new(read: B, out: W, clear: bool) -> Self {
        Self {
            read,
            out,
            buf: String::new(),
            clear,
        }
    }

    /// Repeatedly reads lines until the checker accepts one. Each rejection is reported
    /// with the error's message before reading again.
    fn read_input<F, T>(&mut self, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Result<T, GameError>,
    {
        loop {
            self.read_line()?;
            match checker(&self.buf) {
                Ok(val) => return Ok(val),
                Err(err) => {
                    debug!("rejected input {:?}: {:?}", self.buf.trim_end(), err);
                    writeln!(self.out, "{}", err)?;
                }
            }
        }
    }

    /// Hide the board before the other player sits down.
    fn handoff(&mut self) -> io::Result<()> {
        writeln!(self.out, "Press Enter and pass the move to another player\n...")?;
        self.read_line()?;
        if self.clear {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        self.out.flush()
    }

    /// Flush pending output, clear the buffer and read a line. End of input is reported
    /// as [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(())
    }
}
