//! Terminal driver for the memory-match engine.
//!
//! Reads one command per line from stdin:
//!
//! - `<id>` or `pick <id>`: reveal a tile
//! - `grid <n>`: change the grid size (starts a new game)
//! - `moves <m>`: change the move limit (before the first move only)
//! - `reset`: start a new game
//! - `quit`

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use memory_match::{
    GameConfig, GameRng, GridSize, MemoryGame, MoveLimit, Outcome, Selection, SystemClock, TileId,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "memory-match", about = "Play the tile-matching memory game in a terminal")]
struct Cli {
    /// Side length of the grid (2-10).
    #[arg(long, default_value_t = 4)]
    grid: i64,

    /// Move limit (4-100). Defaults to one per tile plus two.
    #[arg(long)]
    moves: Option<i64>,

    /// Seed for a reproducible deal.
    #[arg(long)]
    seed: Option<u64>,

    /// How long a mismatched pair stays visible, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

enum Command {
    Pick(u16),
    Grid(i64),
    Moves(i64),
    Reset,
    Quit,
}

fn parse(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    let arg = words.next();

    match (first, arg) {
        ("quit" | "q" | "exit", _) => Some(Command::Quit),
        ("reset" | "r", _) => Some(Command::Reset),
        ("pick" | "p", Some(id)) => id.parse().ok().map(Command::Pick),
        ("grid" | "g", Some(n)) => n.parse().ok().map(Command::Grid),
        ("moves" | "m", Some(n)) => n.parse().ok().map(Command::Moves),
        (id, None) => id.parse().ok().map(Command::Pick),
        _ => None,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::default()
        .with_grid_size(GridSize::new(cli.grid)?)
        .with_mismatch_delay(Duration::from_millis(cli.delay_ms));
    if let Some(moves) = cli.moves {
        config = config.with_move_limit(MoveLimit::new(moves)?);
    }
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    println!("seed {}", rng.seed());

    let mut game = MemoryGame::with_clock(config, rng, SystemClock);
    let mut out = io::stdout().lock();
    render(&mut out, &game)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let Some(command) = parse(&line) else {
            if !line.trim().is_empty() {
                writeln!(out, "unknown command: {}", line.trim())?;
            }
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Reset => game.reset(),
            Command::Grid(n) => {
                if let Err(err) = game.configure_grid_size(n) {
                    warn!(%err, "grid size not changed");
                    writeln!(out, "{err}")?;
                }
            }
            Command::Moves(m) => {
                if let Err(err) = game.configure_move_limit(m) {
                    warn!(%err, "move limit not changed");
                    writeln!(out, "{err}")?;
                }
            }
            Command::Pick(id) => {
                if let Selection::Mismatched { .. } = game.select_tile(TileId::new(id)) {
                    render(&mut out, &game)?;
                    thread::sleep(game.config().mismatch_delay);
                    game.tick();
                }
            }
        }

        render(&mut out, &game)?;
    }

    Ok(())
}

fn render(out: &mut impl Write, game: &MemoryGame) -> io::Result<()> {
    let view = game.view();
    writeln!(out, "{view}")?;
    match view.outcome {
        Outcome::Won => writeln!(out, "You won! Type `reset` to play again.")?,
        Outcome::Lost => writeln!(out, "Game over: maximum moves reached. Type `reset` to play again.")?,
        Outcome::InProgress => {}
    }
    out.flush()
}
