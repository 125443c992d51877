use toroid_life::{
    config::Config,
    draw::{self, App},
    proc::Grid,
    signal,
    term::{Screen, Terminal},
};

use std::{fs::File, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cfg = Config::parse();
    init_tracing(&cfg)?;

    let mut screen = Screen::stdout();
    let term = screen.size().context("failed to query terminal size")?;
    let (width, height) = cfg.world_size(term)?;
    let grid = seed_world(&cfg, width, height)?;
    let app = App::new(cfg.fps, cfg.generations)?;

    info!(width, height, fps = app.fps(), seed = ?cfg.seed, "starting");
    signal::listen(app.pause_flag()).context("failed to install signal handler")?;

    let last = draw::run(&app, grid, &mut screen)?;
    info!(generation = last.generation(), "generation limit reached");
    Ok(())
}

fn seed_world(cfg: &Config, width: usize, height: usize) -> Result<Grid> {
    if let Some(path) = &cfg.pattern {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read pattern {}", path.display()))?;
        return Ok(Grid::from_pattern(&s, width, height)?);
    }

    let mut grid = Grid::new(width, height)?;
    match cfg.seed {
        Some(seed) => grid.randomize_seeded(seed),
        None => grid.randomize(),
    }
    Ok(grid)
}

fn init_tracing(cfg: &Config) -> Result<()> {
    let Some(path) = &cfg.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to install log subscriber")
}
