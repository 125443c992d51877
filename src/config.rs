use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::{Error, Result},
    term::Rect,
};

/// Conway's Game of Life on a wrap-around grid, drawn straight to the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "toroid-life", version)]
pub struct Config {
    /// World width in cells [default: terminal width]
    #[arg(long)]
    pub width: Option<usize>,

    /// World height in cells [default: terminal height minus the status line]
    #[arg(long)]
    pub height: Option<usize>,

    /// Target frames (generations) per second
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Seed for the initial random fill; time-seeded when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Exit after this many generations instead of running until interrupted
    #[arg(long)]
    pub generations: Option<u64>,

    /// Start from a text pattern instead of noise ('0', '.' and ' ' are dead)
    #[arg(long, conflicts_with = "seed")]
    pub pattern: Option<PathBuf>,

    /// Write logs here; nothing is logged otherwise
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// World dimensions for a terminal of size `term`, keeping one row for the status line.
    pub fn world_size(&self, term: Rect) -> Result<(usize, usize)> {
        let (tw, th) = term.unwrap();
        let width = self.width.unwrap_or(tw as usize);
        let height = self.height.unwrap_or((th as usize).saturating_sub(1));

        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if width > tw as usize || height + 1 > th as usize {
            return Err(Error::TerminalTooSmall {
                term_w: tw,
                term_h: th,
                need_w: width,
                need_h: height + 1,
            });
        }
        Ok((width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("toroid-life").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_follow_the_terminal() {
        let c = parse(&[]);
        assert_eq!(c.fps, 30);
        assert!(c.seed.is_none() && c.generations.is_none());
        assert_eq!(c.world_size(Rect::new(120, 40)).unwrap(), (120, 39));
    }

    #[test]
    fn explicit_size_and_seed() {
        let c = parse(&["--width", "20", "--height", "10", "--seed", "9", "--fps", "60"]);
        assert_eq!(c.seed, Some(9));
        assert_eq!(c.fps, 60);
        assert_eq!(c.world_size(Rect::new(80, 24)).unwrap(), (20, 10));
    }

    #[test]
    fn world_must_leave_room_for_status_line() {
        let c = parse(&["--height", "24"]);
        assert!(matches!(
            c.world_size(Rect::new(80, 24)),
            Err(Error::TerminalTooSmall { need_h: 25, .. })
        ));
    }

    #[test]
    fn zero_sized_world_is_rejected() {
        let c = parse(&["--width", "0"]);
        assert!(matches!(
            c.world_size(Rect::new(80, 24)),
            Err(Error::InvalidDimensions { width: 0, .. })
        ));
        // A one-row terminal has no room for any world.
        assert!(parse(&[]).world_size(Rect::new(80, 1)).is_err());
    }

    #[test]
    fn pattern_and_seed_conflict() {
        assert!(Config::try_parse_from(["toroid-life", "--pattern", "p.txt", "--seed", "1"]).is_err());
    }
}
