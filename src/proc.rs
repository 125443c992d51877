use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Error, Result};

/// Toroidal field of cells. Row-major, `index(x, y) = y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    generation: u64,
}

/// What a cell becomes for a given live-neighbor count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Next {
    Dead,
    Keep,
    Alive,
}

/// Indexed by live-neighbor count. Three neighbors always give a live cell,
/// two keep whatever the cell was.
pub static RULES: [Next; 9] = [
    Next::Dead,
    Next::Dead,
    Next::Keep,
    Next::Alive,
    Next::Dead,
    Next::Dead,
    Next::Dead,
    Next::Dead,
    Next::Dead,
];

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Grid {
    /// All cells dead, generation 0.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|len| *len > 0 && isize::try_from(*len).is_ok())
            .ok_or(Error::InvalidDimensions { width, height })?;

        Ok(Grid {
            width,
            height,
            cells: vec![false; len],
            generation: 0,
        })
    }

    /// Builds a `width`x`height` world with `pattern` drawn at its top-left corner.
    ///
    /// `'0'`, `'.'` and spaces are dead cells, every other character is live.
    /// Empty lines are skipped and short rows are padded with dead cells.
    pub fn from_pattern(pattern: &str, width: usize, height: usize) -> Result<Self> {
        let rows: Vec<&str> = pattern
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        let pattern_w = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let pattern_h = rows.len();

        let mut grid = Grid::new(width, height)?;
        if pattern_w > width || pattern_h > height {
            return Err(Error::PatternTooLarge {
                pattern_w,
                pattern_h,
                world_w: width,
                world_h: height,
            });
        }

        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let live = !matches!(c, '0' | '.' | ' ');
                grid.set(x, y, live);
            }
        }
        Ok(grid)
    }

    /// Coin-flip fill from an OS/time seeded source.
    pub fn randomize(&mut self) {
        self.fill_random(&mut rand::thread_rng());
    }

    /// Coin-flip fill that is reproducible for a given seed.
    pub fn randomize_seeded(&mut self, seed: u64) {
        self.fill_random(&mut StdRng::seed_from_u64(seed));
    }

    fn fill_random<R: Rng>(&mut self, rng: &mut R) {
        for c in self.cells.iter_mut() {
            *c = rng.gen_bool(0.5);
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Wraps coordinates at most one step outside the field back onto it.
    #[inline]
    pub fn wrap_index(&self, x: isize, y: isize) -> usize {
        let (w, h) = (self.width as isize, self.height as isize);
        debug_assert!((-1..=w).contains(&x) && (-1..=h).contains(&y));

        let x = if x < 0 {
            x + w
        } else if x >= w {
            x - w
        } else {
            x
        };
        let y = if y < 0 {
            y + h
        } else if y >= h {
            y - h
        } else {
            y
        };
        (y * w + x) as usize
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, live: bool) {
        self.cells[y * self.width + x] = live;
    }

    /// Live cells among the eight wrapped neighbors of `(x, y)`. The cell itself is not one of
    /// them unless the world is under 3 cells wide or tall and an offset wraps back onto it.
    pub fn live_neighbor_count(&self, x: usize, y: usize) -> usize {
        let (x, y) = (x as isize, y as isize);
        NEIGHBORS
            .iter()
            .filter(|(dx, dy)| self.cells[self.wrap_index(x + dx, y + dy)])
            .count()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }
}

/// Consumes one generation and returns the next.
pub fn tick(grid: Grid) -> Grid {
    let (w, h) = (grid.width, grid.height);
    let mut cells = Vec::with_capacity(w * h);

    for y in 0..h {
        for x in 0..w {
            let current = grid.cells[y * w + x];
            cells.push(match RULES[grid.live_neighbor_count(x, y)] {
                Next::Dead => false,
                Next::Keep => current,
                Next::Alive => true,
            });
        }
    }

    Grid {
        width: w,
        height: h,
        cells,
        generation: grid.generation + 1,
    }
}
