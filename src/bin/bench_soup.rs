use anyhow::{ensure, Context, Result};
use torus_life::*;

fn main() -> Result<()> {
    let size = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid field size {:?}", arg))?,
        None => 1 << 10,
    };

    let timer = std::time::Instant::now();
    let mut grid = Grid::new(size, size)?;
    grid.seed_random_default(Some(42));
    let initial = grid.population();
    println!("Time on building field: {:?}", timer.elapsed());

    let timer = std::time::Instant::now();
    let generations = 1 << 8;
    grid.step_n(generations);
    println!("Time on {} steps: {:?}", generations, timer.elapsed());
    println!("{}", grid.statistics());

    ensure!(
        grid.generation() == generations,
        "generation counter is off"
    );
    eprintln!(
        "population {} -> {}",
        NiceInt::from_usize(initial),
        NiceInt::from_usize(grid.population())
    );
    Ok(())
}
