#![warn(clippy::all, clippy::cargo)]

mod config;
mod driver;
mod grid;
mod patterns;
mod utils;

pub use config::{get_config, set_random_fill_percent, set_step_period_ms, ConfigSnapshot};
pub use driver::{DriverState, LoopDriver};
pub use grid::{CellState, Grid, GridError};
pub use patterns::{Pattern, PATTERNS};
pub use utils::{Engine, NiceInt};
