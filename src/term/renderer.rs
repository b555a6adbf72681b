//! TerminalRenderer: flushes a pixmap to a real terminal.
//!
//! Each pixel becomes one background-colored space. The first frame (and any
//! size change) is a full redraw; afterwards only runs of changed pixels are
//! rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::term::pixmap::{Pixmap, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Pixmap>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, swapping it into internal state.
    ///
    /// Callers keep one `Pixmap` and pass it in every frame; the renderer
    /// diffs against the previous frame and swaps buffers so nothing is
    /// cloned.
    pub fn draw_swap(&mut self, frame: &mut Pixmap) -> Result<()> {
        if self.last.is_none() {
            self.full_redraw(frame)?;
            self.last = Some(frame.clone());
            return Ok(());
        }

        let mut prev = self.last.take().unwrap();
        if prev.width() != frame.width() || prev.height() != frame.height() {
            self.full_redraw(frame)?;
        } else {
            self.diff_redraw(frame, &prev)?;
        }

        std::mem::swap(&mut prev, frame);
        self.last = Some(prev);
        Ok(())
    }

    fn full_redraw(&mut self, frame: &Pixmap) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<Rgb> = None;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let px = frame.get(x, y).unwrap_or_default();
                if current != Some(px) {
                    self.stdout.queue(SetBackgroundColor(to_color(px)))?;
                    current = Some(px);
                }
                self.stdout.queue(Print(' '))?;
            }
            if y + 1 < frame.height() {
                self.stdout.queue(ResetColor)?;
                self.stdout.queue(Print("\r\n"))?;
                current = None;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &Pixmap, prev: &Pixmap) -> Result<()> {
        let mut current: Option<Rgb> = None;

        for_each_changed_run(prev, next, |x, y, len| {
            self.stdout.queue(cursor::MoveTo(clamp_u16(x), clamp_u16(y)))?;
            for dx in 0..len {
                let px = next.get(x + dx, y).unwrap_or_default();
                if current != Some(px) {
                    self.stdout.queue(SetBackgroundColor(to_color(px)))?;
                    current = Some(px);
                }
                self.stdout.queue(Print(' '))?;
            }
            Ok(())
        })?;

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(px: Rgb) -> Color {
    Color::Rgb {
        r: px.r,
        g: px.g,
        b: px.b,
    }
}

fn clamp_u16(v: u32) -> u16 {
    v.min(u16::MAX as u32) as u16
}

/// Invoke `f(x, y, len)` for each horizontal run of pixels that differ
/// between the two buffers. Buffers must be the same size.
fn for_each_changed_run(
    prev: &Pixmap,
    next: &Pixmap,
    mut f: impl FnMut(u32, u32, u32) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_run_coalesces_adjacent_pixels() {
        let a = Pixmap::new(5, 1);
        let mut b = Pixmap::new(5, 1);
        for x in 1..=3 {
            b.set(x, 0, Rgb::BLACK);
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn identical_frames_produce_no_runs() {
        let a = Pixmap::new(3, 3);
        let b = a.clone();
        let mut runs = 0;
        for_each_changed_run(&a, &b, |_, _, _| {
            runs += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, 0);
    }
}
