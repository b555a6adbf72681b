//! Tick-driven render loop with deterministic teardown.
//!
//! Each tick advances the board, renders a fresh frame, and presents it.
//! The delay is measured from the start of the tick, so ticks fire at a
//! fixed cadence and can never overlap. A [`StopHandle`] ends the loop from
//! anywhere; tests drive [`RenderLoop::step`] directly instead of waiting on
//! real timers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::core::Board;
use crate::term::{BoardView, Pixmap, TerminalRenderer};

/// How often the waiting loop wakes up to check the stop flag.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Cloneable cancellation token for a [`RenderLoop`].
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    fn new() -> Self {
        Self::default()
    }

    /// Request shutdown; observed at the next loop iteration.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Owns the board and view and repaints on a fixed interval.
pub struct RenderLoop {
    board: Board,
    view: BoardView,
    interval: Duration,
    stop: StopHandle,
}

impl RenderLoop {
    pub fn new(board: Board, view: BoardView, interval: Duration) -> Self {
        Self {
            board,
            view,
            interval,
            stop: StopHandle::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Handle that cancels this loop. Cloneable and thread-safe.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Advance one tick and render the resulting frame.
    pub fn step(&mut self) -> Pixmap {
        self.board.tick();
        self.view.render(&self.board.snapshot())
    }

    /// Run until stopped or a quit key is pressed.
    pub fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        debug!(
            interval_ms = self.interval.as_millis() as u64,
            width = self.board.width(),
            height = self.board.height(),
            "render loop started"
        );

        'ticks: while !self.stop.is_stopped() {
            let tick_started = Instant::now();
            let mut frame = self.step();
            term.draw_swap(&mut frame)?;

            // Wait out the rest of the interval, reacting to quit keys and
            // the stop handle without busy-spinning.
            loop {
                if self.stop.is_stopped() {
                    break 'ticks;
                }
                let elapsed = tick_started.elapsed();
                if elapsed >= self.interval {
                    break;
                }
                let timeout = (self.interval - elapsed).min(STOP_POLL_INTERVAL);
                if event::poll(timeout)? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press && is_quit_key(key) {
                            self.stop.stop();
                        }
                    }
                }
            }
        }

        debug!("render loop stopped");
        Ok(())
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
