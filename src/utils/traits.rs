use super::NiceInt;
use crate::CellState;

/// Game engine for a toroidal Game of Life field.
///
/// This is the surface the loop driver and external observers rely on;
/// seeding lives on the concrete engine.
pub trait Engine {
    /// Width of the field in cells.
    fn width(&self) -> usize;

    /// Height of the field in cells.
    fn height(&self) -> usize;

    /// Get cell state at (x, y).
    fn cell_state(&self, x: usize, y: usize) -> CellState;

    /// Advances the field by exactly one generation.
    ///
    /// Must be deterministic: equal fields produce equal successors.
    fn step(&mut self);

    /// Number of steps taken since the field was last seeded or reset.
    fn generation(&self) -> u64;

    /// Number of live cells.
    fn population(&self) -> usize;

    /// Returns multiline string reporting engine stats.
    fn statistics(&self) -> String {
        format!(
            "Size: {}x{}\nGeneration: {}\nPopulation: {}\n",
            NiceInt::from_usize(self.width()),
            NiceInt::from_usize(self.height()),
            NiceInt::from(self.generation()),
            NiceInt::from_usize(self.population()),
        )
    }
}
