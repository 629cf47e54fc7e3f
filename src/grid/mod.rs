mod cell;
mod error;

pub use cell::CellState;
pub use error::GridError;

use crate::{get_config, Engine, Pattern};
use rand::{Rng, SeedableRng};

/// Conway's Game of Life field with edges stitched together.
///
/// Cells are stored row-major: `index = x + y * width`.
/// The next generation is built in a separate buffer and swapped in
/// once complete, so a step never reads a cell it has already written.
#[derive(Clone, Debug)]
pub struct Grid {
    cells_curr: Vec<CellState>,
    cells_next: Vec<CellState>,
    width: usize,
    height: usize,
    generation: u64,
}

impl Grid {
    /// Creates a `width x height` field filled with dead cells.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let size = Self::checked_size(width, height)?;
        Ok(Self {
            cells_curr: vec![CellState::Dead; size],
            cells_next: vec![CellState::Dead; size],
            width,
            height,
            generation: 0,
        })
    }

    /// Creates a field from row-major `cells`.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<CellState>,
    ) -> Result<Self, GridError> {
        let size = Self::checked_size(width, height)?;
        if cells.len() != size {
            return Err(GridError::CellCountMismatch {
                expected: size,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells_curr: cells,
            cells_next: vec![CellState::Dead; size],
            width,
            height,
            generation: 0,
        })
    }

    fn checked_size(width: usize, height: usize) -> Result<usize, GridError> {
        match width.checked_mul(height) {
            Some(size) if size != 0 => Ok(size),
            _ => Err(GridError::InvalidDimension { width, height }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of steps since the field was last overwritten as a whole.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current generation in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells_curr
    }

    /// State at `(x, y)`; coordinates wrap around the torus.
    pub fn cell_state(&self, x: usize, y: usize) -> CellState {
        self.cells_curr[x % self.width + (y % self.height) * self.width]
    }

    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|c| c.is_alive()).count()
    }

    fn alive_at(&self, x: usize, y: usize) -> usize {
        self.cells_curr[x + y * self.width] as usize
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        let x1 = if x == 0 { self.width - 1 } else { x - 1 };
        let x2 = if x == self.width - 1 { 0 } else { x + 1 };
        let y1 = if y == 0 { self.height - 1 } else { y - 1 };
        let y2 = if y == self.height - 1 { 0 } else { y + 1 };
        self.alive_at(x1, y1)
            + self.alive_at(x, y1)
            + self.alive_at(x2, y1)
            + self.alive_at(x1, y)
            + self.alive_at(x2, y)
            + self.alive_at(x1, y2)
            + self.alive_at(x, y2)
            + self.alive_at(x2, y2)
    }

    /// Advances the field by one generation.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.count_neibs(x, y);
                let idx = x + y * self.width;
                self.cells_next[idx] = self.cells_curr[idx].next(neibs);
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
    }

    /// Advances the field by `n` generations.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Kills every cell.
    pub fn reset(&mut self) {
        self.cells_curr.fill(CellState::Dead);
        self.generation = 0;
    }

    /// Makes every cell alive with probability `live_percent`%.
    ///
    /// Each cell draws a uniform integer in `0..100` from `rng` and is alive
    /// iff the draw is below `live_percent`; values above 100 act as 100.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, live_percent: u8, rng: &mut R) {
        for cell in self.cells_curr.iter_mut() {
            *cell = CellState::from(rng.gen_range(0u8..100) < live_percent);
        }
        self.generation = 0;
    }

    /// Same as [`Grid::seed_random`] with a ChaCha generator.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn seed_random_from(&mut self, live_percent: u8, seed: Option<u64>) {
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        self.seed_random(live_percent, &mut rng);
    }

    /// Random fill with the configured density.
    pub fn seed_random_default(&mut self, seed: Option<u64>) {
        self.seed_random_from(get_config().random_fill_percent, seed);
    }

    /// Copies a square pattern into the center of the field.
    ///
    /// `pattern` lists rows bottom-to-top; they are flipped so that the
    /// first pattern row lands lowest on screen. `edge` defaults to
    /// `round(sqrt(pattern.len()))`. Cells outside the pattern keep their state.
    ///
    /// Source row `r` lands on row `height - (r + offset_y)`. With
    /// `offset_y == 0` the first source row maps to `height` and wraps to 0.
    pub fn seed_pattern(
        &mut self,
        pattern: &[CellState],
        edge: Option<usize>,
    ) -> Result<(), GridError> {
        let edge = edge.unwrap_or_else(|| (pattern.len() as f64).sqrt().round() as usize);
        if edge > self.width || edge > self.height {
            return Err(GridError::PatternTooLarge {
                edge,
                width: self.width,
                height: self.height,
            });
        }
        if edge.checked_mul(edge) != Some(pattern.len()) {
            return Err(GridError::PatternShape {
                len: pattern.len(),
                edge,
            });
        }

        let offset_x = self.width / 2 - edge / 2;
        let offset_y = self.height / 2 - edge / 2;
        for (i, &state) in pattern.iter().enumerate() {
            let x = i % edge + offset_x;
            let y = (self.height - (i / edge + offset_y)) % self.height;
            self.cells_curr[x + y * self.width] = state;
        }
        self.generation = 0;
        Ok(())
    }

    /// Places one of the built-in [`Pattern`]s.
    pub fn seed_sample(&mut self, pattern: &Pattern) -> Result<(), GridError> {
        self.seed_pattern(&pattern.cells(), Some(pattern.edge))
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.cells_curr == other.cells_curr
    }
}

impl Eq for Grid {}

impl Engine for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell_state(&self, x: usize, y: usize) -> CellState {
        Grid::cell_state(self, x, y)
    }

    fn step(&mut self) {
        Grid::step(self);
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> usize {
        Grid::population(self)
    }
}
