use toroid_life::{
    draw::{self, App},
    proc::{self, Grid},
    term::{Rect, Screen},
};

const GLIDER: &str = "\
.#.
..#
###
";

fn run_headless(app: &App, grid: Grid) -> (Grid, String) {
    let mut screen = Screen::headless(Vec::new(), Rect::new(40, 20));
    let last = draw::run(app, grid, &mut screen).unwrap();
    (last, String::from_utf8(screen.into_inner()).unwrap())
}

#[test]
fn run_restores_the_screen_after_the_last_generation() {
    let app = App::new(500, Some(3)).unwrap();
    let mut grid = Grid::new(16, 8).unwrap();
    grid.randomize_seeded(1);

    let (last, out) = run_headless(&app, grid);
    assert_eq!(last.generation(), 3);

    // Alternate screen on, cursor hidden; then off and shown again.
    assert!(out.starts_with("\x1b[?1049h"));
    assert!(out.contains("\x1b[?25l"));
    assert!(out.ends_with("\x1b[?1049l\x1b[?25h"));
    assert!(out.contains("Tick: 1 "));
    assert!(out.contains("Tick: 3 "));
    assert!(!out.contains("Tick: 4 "));
}

#[test]
fn glider_crosses_the_seam() {
    // Four generations move a glider one cell down and right; on an 8x8 torus
    // 32 generations bring it back where it started.
    let start = Grid::from_pattern(GLIDER, 8, 8).unwrap();
    let app = App::new(1000, Some(32)).unwrap();
    let (last, _) = run_headless(&app, start.clone());

    assert_eq!(last.generation(), 32);
    assert_eq!(last.cells(), start.cells());
    assert_eq!(last.live_count(), 5);
}

#[test]
fn status_line_tracks_every_frame() {
    let mut grid = Grid::new(12, 6).unwrap();
    grid.randomize_seeded(77);
    let app = App::new(1000, Some(5)).unwrap();
    let (_, out) = run_headless(&app, grid.clone());

    for _ in 0..5 {
        grid = proc::tick(grid);
        let status = format!(
            "Tick: {}        Live cells: {}    ",
            grid.generation(),
            grid.live_count()
        );
        assert!(out.contains(&status), "missing {status:?}");
    }
}

#[test]
fn paused_app_stops_advancing() {
    let app = App::new(1000, None).unwrap();
    app.pause_flag().store(true, std::sync::atomic::Ordering::Release);

    let mut screen = Screen::headless(Vec::new(), Rect::new(10, 10));
    let grid = Grid::from_pattern(GLIDER, 6, 6).unwrap();
    let after = app.step(grid.clone(), &mut screen).unwrap();
    assert_eq!(after, grid);
}
