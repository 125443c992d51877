use std::{
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use tracing::{error, info};

use crate::{
    error::Result,
    term::{Screen, Terminal},
};

/// How long the in-flight frame gets before the screen is cleared.
pub const GRACE: Duration = Duration::from_millis(125);

/// Installs the SIGINT/SIGTERM handler. On the first signal it pauses the simulation,
/// wipes the screen and exits the process with status 0. Only one handler per process.
pub fn listen(pause: Arc<AtomicBool>) -> Result<()> {
    ctrlc::set_handler(move || {
        info!("shutting down");
        if let Err(err) = wind_down(&pause, GRACE, &mut Screen::stdout()) {
            error!(?err, "failed to restore terminal");
        }
        std::process::exit(0);
    })?;
    Ok(())
}

/// Everything that happens between the signal and the process exit.
pub fn wind_down<W: Write>(pause: &AtomicBool, grace: Duration, screen: &mut Screen<W>) -> Result<()> {
    pause.store(true, Ordering::Release);
    thread::sleep(grace);
    screen.clear()?;
    screen.shutdown()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, term::Rect};

    #[test]
    fn wind_down_pauses_then_clears() {
        let pause = AtomicBool::new(false);
        let mut screen = Screen::headless(Vec::new(), Rect::new(20, 5));
        wind_down(&pause, Duration::ZERO, &mut screen).unwrap();

        assert!(pause.load(Ordering::Acquire));
        let out = String::from_utf8(screen.into_inner()).unwrap();
        let cleared = out.find("\x1b[2J").unwrap();
        let shown = out.find("\x1b[?25h").unwrap();
        assert!(cleared < shown);
    }

    #[test]
    fn handler_is_installed_once() {
        let pause = Arc::new(AtomicBool::new(false));
        listen(Arc::clone(&pause)).unwrap();
        assert!(matches!(listen(Arc::clone(&pause)), Err(Error::Signal(_))));
        assert!(!pause.load(Ordering::Acquire));
    }
}
