//! Terminal board viewer (default binary).
//!
//! Seeds a demo board, then repaints it on a fixed tick until `q`, Esc, or
//! Ctrl-C. Logging is opt-in via `RUST_LOG` and goes to stderr.

use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use tetris_view::core::Board;
use tetris_view::run::RenderLoop;
use tetris_view::term::{BoardView, TerminalRenderer};
use tetris_view::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_TICK_MS, PIECE_KINDS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewerConfig {
    width: u32,
    height: u32,
    cell_size: u32,
    tick_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            // Pixels are whole character cells here; the classic 25px canvas
            // metric would not fit on screen.
            cell_size: 2,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

fn parse_args(args: &[String]) -> Result<ViewerConfig> {
    let mut config = ViewerConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                config.width = parse_value(args.get(i), "--width")?;
            }
            "--height" => {
                i += 1;
                config.height = parse_value(args.get(i), "--height")?;
            }
            "--cell-size" => {
                i += 1;
                config.cell_size = parse_value(args.get(i), "--cell-size")?;
            }
            "--tick-ms" => {
                i += 1;
                config.tick_ms = parse_value(args.get(i), "--tick-ms")?;
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {} (expected --width, --height, --cell-size, --tick-ms)",
                    other
                ));
            }
        }
        i += 1;
    }

    if config.width == 0 || config.height == 0 || config.cell_size == 0 || config.tick_ms == 0 {
        return Err(anyhow!(
            "board dimensions, cell size, and tick interval must all be positive"
        ));
    }

    Ok(config)
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid value for {}: {}", flag, v))
}

/// Fill the board with a deterministic pattern: a full bottom row that clears
/// on the first tick, a nearly full row that survives and drops, and a short
/// staircase of single cells.
fn seed_demo_board(board: &mut Board) {
    let w = board.width();
    let h = board.height();
    let kinds = PIECE_KINDS;

    for x in 0..w {
        board.set(x, h - 1, Some(kinds[(x as usize) % kinds.len()]));
    }

    if h >= 2 {
        for x in 0..w.saturating_sub(1) {
            board.set(x, h - 2, Some(kinds[(x as usize + 3) % kinds.len()]));
        }
    }

    for (i, &kind) in kinds.iter().enumerate() {
        let i = i as u32;
        if i + 4 <= h && i < w {
            board.set(i, h - 3 - i, Some(kind));
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut board = Board::new(config.width, config.height);
    seed_demo_board(&mut board);

    let view = BoardView::new(config.cell_size);
    let mut render_loop = RenderLoop::new(board, view, Duration::from_millis(config.tick_ms));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = render_loop.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}
