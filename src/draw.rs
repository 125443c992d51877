use std::{
    fmt,
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use crossterm::{
    style::{Attribute, Color, Colors, SetAttribute, SetColors},
    Command,
};
use tracing::{debug, error};

use crate::{
    error::{Error, Result},
    proc::{self, Grid},
    term::{Screen, Terminal},
};

pub const GLYPH: &str = "░";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellStyle {
    pub bold: bool,
    pub fg: Color,
    pub bg: Color,
}

const fn plain(bg: Color) -> CellStyle {
    CellStyle { bold: false, fg: Color::Black, bg }
}

const fn bold(bg: Color) -> CellStyle {
    CellStyle { bold: true, fg: Color::Black, bg }
}

/// Colour of a live cell, indexed by its live-neighbor count.
pub static STYLES: [CellStyle; 9] = [
    plain(Color::DarkBlue),
    bold(Color::Cyan),
    plain(Color::DarkCyan),
    plain(Color::DarkGreen),
    bold(Color::DarkGreen),
    plain(Color::DarkRed),
    plain(Color::DarkRed),
    bold(Color::DarkRed),
    CellStyle { bold: true, fg: Color::White, bg: Color::DarkMagenta },
];

#[inline]
pub fn style_by_neighbors(n: usize) -> CellStyle {
    STYLES[n]
}

/// Appends `glyph` in `style`, followed by a full reset so nothing bleeds into the next cell.
pub fn paint(line: &mut String, style: CellStyle, glyph: &str) -> fmt::Result {
    let weight = if style.bold { Attribute::Bold } else { Attribute::Reset };
    SetAttribute(weight).write_ansi(line)?;
    SetColors(Colors::new(style.fg, style.bg)).write_ansi(line)?;
    line.push_str(glyph);
    SetAttribute(Attribute::Reset).write_ansi(line)
}

/// Draws every row of `grid` starting at `(left, top)`, then the status line below it.
/// Returns the number of live cells drawn.
pub fn render<T: Terminal>(grid: &Grid, left: u16, top: u16, term: &mut T) -> Result<usize> {
    let (w, h) = (grid.width(), grid.height());
    let mut live = 0;
    let mut line = String::with_capacity(w * 16);

    for y in 0..h {
        line.clear();
        for x in 0..w {
            if grid.get(x, y) {
                let n = grid.live_neighbor_count(x, y);
                paint(&mut line, style_by_neighbors(n), GLYPH)?;
                live += 1;
            } else {
                line.push(' ');
            }
        }
        term.move_to(left, row(top, y))?;
        term.print(&line)?;
    }

    // Trailing spaces wipe whatever a longer status line left behind last frame.
    term.move_to(left, row(top, h))?;
    term.print(&format!(
        "Size: {}x{} ({})    Tick: {}        Live cells: {}    ",
        w,
        h,
        w * h,
        grid.generation(),
        live
    ))?;
    term.flush()?;
    Ok(live)
}

#[inline]
fn row(top: u16, y: usize) -> u16 {
    u16::try_from(y).map_or(u16::MAX, |y| top.saturating_add(y))
}

/// Simulation settings plus the pause flag shared with the signal listener.
pub struct App {
    pause: Arc<AtomicBool>,
    fps: u32,
    maxgen: Option<u64>,
}

impl App {
    pub fn new(fps: u32, maxgen: Option<u64>) -> Result<Self> {
        if fps == 0 {
            return Err(Error::InvalidFrameRate);
        }
        Ok(App {
            pause: Arc::new(false.into()),
            fps,
            maxgen,
        })
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    #[inline]
    pub fn pause(&self) -> bool {
        self.pause.load(Ordering::Acquire)
    }

    /// Handle for the signal listener. Pausing is one-way.
    #[inline]
    pub fn pause_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.pause)
    }

    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    /// One scheduler iteration without the pacing sleep: tick and draw unless paused.
    pub fn step<T: Terminal>(&self, grid: Grid, term: &mut T) -> Result<Grid> {
        if self.pause() {
            return Ok(grid);
        }
        let next = proc::tick(grid);
        render(&next, 0, 0, term)?;
        Ok(next)
    }

    fn finished(&self, grid: &Grid) -> bool {
        self.maxgen.is_some_and(|max| grid.generation() >= max)
    }
}

/// Sets up the screen, runs the frame loop and restores the screen however the loop ended.
pub fn run<W: Write>(app: &App, grid: Grid, screen: &mut Screen<W>) -> Result<Grid> {
    screen.runup("Toroid Life")?;
    let d = draw(app, grid, screen);
    if let Err(err) = screen.shutdown() {
        error!(?err, "failed to restore terminal");
        d?;
        return Err(err);
    }
    d
}

/// Frame loop. Runs until the generation limit, forever without one.
pub fn draw<T: Terminal>(app: &App, mut grid: Grid, term: &mut T) -> Result<Grid> {
    let interval = app.frame_interval();

    while !app.finished(&grid) {
        let deadline = Instant::now() + interval;

        grid = app.step(grid, term)?;

        // No catch-up: a late frame just starts the next one late.
        let now = Instant::now();
        if now < deadline {
            thread::sleep(deadline - now);
        } else {
            debug!(
                generation = grid.generation(),
                over_us = (now - deadline).as_micros() as u64,
                "frame over budget"
            );
        }
    }
    Ok(grid)
}
