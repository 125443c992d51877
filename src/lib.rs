pub mod config;
pub mod draw;
pub mod error;
pub mod proc;
pub mod signal;
pub mod term;

pub use error::{Error, Result};
