pub mod config;
pub mod disjoint_set;
pub mod error;
pub mod grid;
pub mod maze;
pub mod render;
pub mod rng;
pub mod walls;

use std::time::Instant;

use log::info;
use rayon::prelude::*;

use config::Params;
use error::Result;
use maze::{Maze, MazeGenerator};
use rng::{Rng, ThreadSource};

pub use error::MazeError;
pub use walls::{Direction, Walls};

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Validate `params` and build one maze, seeded when `params.seed` is set.
pub fn generate(params: &Params) -> Result<(Maze, Vec<Timing>)> {
    params.validate()?;
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let t = Instant::now();
    let maze = match params.seed {
        Some(seed) => MazeGenerator::new(params.cells, Rng::new(seed)).finish()?,
        None => MazeGenerator::new(params.cells, ThreadSource::new()).finish()?,
    };
    timings.push(Timing {
        name: "generate",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    timings.push(Timing {
        name: "TOTAL",
        ms: total_ms,
    });

    info!(
        "generated {0}x{0} maze in {1:.2} ms ({2} draws)",
        params.cells,
        total_ms,
        maze.attempts()
    );

    Ok((maze, timings))
}

/// One seeded maze per entry of `seeds`, built in parallel. Each maze gets its
/// own generator, disjoint set and RNG.
pub fn generate_batch(cells: usize, seeds: &[u64]) -> Result<Vec<Maze>> {
    Params { cells, seed: None }.validate()?;
    seeds
        .par_iter()
        .map(|&seed| MazeGenerator::new(cells, Rng::new(seed)).finish())
        .collect()
}
