use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};

use crate::error::Result;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Rect {
    w: u16,
    h: u16,
}

impl Rect {
    #[inline]
    pub fn new(width: u16, height: u16) -> Self {
        Rect { w: width, h: height }
    }

    #[inline]
    pub fn term_size() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Rect::new(width, height))
    }

    #[inline]
    pub fn unwrap(&self) -> (u16, u16) {
        (self.w, self.h)
    }
}

/// The handful of terminal operations the simulation needs.
pub trait Terminal {
    fn size(&self) -> Result<Rect>;

    /// Zero-based column and row.
    fn move_to(&mut self, x: u16, y: u16) -> Result<()>;

    fn print(&mut self, s: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// Crossterm-backed terminal over any writer.
///
/// `Screen::stdout()` asks the real terminal for its size; `Screen::headless`
/// reports a fixed size and is what tests draw into.
pub struct Screen<W: Write> {
    out: W,
    size: Option<Rect>,
}

impl Screen<Stdout> {
    pub fn stdout() -> Self {
        Screen {
            out: io::stdout(),
            size: None,
        }
    }
}

impl<W: Write> Screen<W> {
    pub fn headless(out: W, size: Rect) -> Self {
        Screen {
            out,
            size: Some(size),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Alternate screen with a hidden cursor. Raw mode stays off so Ctrl-C still raises SIGINT.
    pub fn runup(&mut self, title: &str) -> Result<()> {
        queue!(self.out, EnterAlternateScreen, SetTitle(title), Hide)?;
        self.clear()?;
        self.flush()
    }

    pub fn shutdown(&mut self) -> Result<()> {
        queue!(self.out, LeaveAlternateScreen, Show)?;
        self.flush()
    }
}

impl<W: Write> Terminal for Screen<W> {
    fn size(&self) -> Result<Rect> {
        match self.size {
            Some(r) => Ok(r),
            None => Rect::term_size(),
        }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.out, MoveTo(x, y))?;
        Ok(())
    }

    fn print(&mut self, s: &str) -> Result<()> {
        queue!(self.out, Print(s))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
