use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("world size {width}x{height} is not usable")]
    InvalidDimensions { width: usize, height: usize },

    #[error("frame rate must be at least 1 fps")]
    InvalidFrameRate,

    #[error("pattern is {pattern_w}x{pattern_h} but the world is only {world_w}x{world_h}")]
    PatternTooLarge {
        pattern_w: usize,
        pattern_h: usize,
        world_w: usize,
        world_h: usize,
    },

    #[error("terminal is {term_w}x{term_h}, need {need_w}x{need_h} for the world and status line")]
    TerminalTooSmall {
        term_w: u16,
        term_h: u16,
        need_w: usize,
        need_h: usize,
    },

    #[error("could not install the signal handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("could not format a frame")]
    Format(#[from] std::fmt::Error),

    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
