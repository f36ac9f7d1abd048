//! Terminal maze runner (default binary).
//!
//! Wires a maze source (random carver or text map) to the core state machine
//! and the crossterm renderer. The game is turn-based: the loop blocks on a
//! key event, applies at most one move, and redraws.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_maze::gen::{MazeSource, RandomMaze, TextMaze};
use tui_maze::input::{handle_key_event, should_quit};
use tui_maze::term::{MazeView, TerminalRenderer, Viewport};
use tui_maze::types::GameCommand;

const USAGE: &str = "\
USAGE: tui-maze [OPTIONS]

OPTIONS:
  --rows N     maze interior rows (default 15)
  --cols N     maze interior columns (default 21)
  --trail N    footprint trail capacity (default 10, 0 disables)
  --seed N     random seed (default: derived from the clock)
  --map FILE   load a hand-authored map instead of generating one
  --help       print this help
";

struct Config {
    rows: usize,
    cols: usize,
    trail: usize,
    seed: Option<u64>,
    map: Option<String>,
}

impl Config {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Option<Self>> {
        let mut config = Config {
            rows: 15,
            cols: 21,
            trail: 10,
            seed: None,
            map: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(None),
                "--rows" => config.rows = parse_value(&arg, args.next())?,
                "--cols" => config.cols = parse_value(&arg, args.next())?,
                "--trail" => config.trail = parse_value(&arg, args.next())?,
                "--seed" => config.seed = Some(parse_value(&arg, args.next())?),
                "--map" => {
                    config.map = Some(
                        args.next()
                            .with_context(|| format!("{arg} expects a file path"))?,
                    )
                }
                other => bail!("unknown argument {other:?}\n\n{USAGE}"),
            }
        }
        Ok(Some(config))
    }

    fn source(&self) -> Result<Box<dyn MazeSource>> {
        if let Some(path) = &self.map {
            let source = TextMaze::from_path(path, self.trail)
                .with_context(|| format!("loading map {path:?}"))?;
            return Ok(Box::new(source));
        }
        let seed = self.seed.unwrap_or_else(clock_seed);
        Ok(Box::new(RandomMaze::new(
            self.rows, self.cols, self.trail, seed,
        )))
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.with_context(|| format!("{flag} expects a value"))?;
    value
        .parse()
        .with_context(|| format!("{flag} got invalid value {value:?}"))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    let Some(config) = Config::parse(std::env::args().skip(1))? else {
        print!("{USAGE}");
        return Ok(());
    };
    let source = config.source()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, source.as_ref());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, source: &dyn MazeSource) -> Result<()> {
    let mut maze = source.generate()?.into_maze()?;
    let view = MazeView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(&maze.snapshot(), Viewport::new(w, h));
        term.draw(&frame)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameCommand::Move(dir)) => {
                        // Rejected moves (walls, border, game already won)
                        // simply leave the state as-is; the redraw is a no-op
                        // visually.
                        maze.move_hero(dir);
                    }
                    Some(GameCommand::Restart) => {
                        maze = source.generate()?.into_maze()?;
                    }
                    None => {}
                }
            }
            // Resize falls through to the redraw at the top of the loop.
            _ => {}
        }
    }
}
