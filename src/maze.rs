use log::{debug, trace};
use serde::{Serialize, Serializer};

use crate::disjoint_set::DisjointSet;
use crate::error::{MazeError, Result};
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::walls::{Direction, Walls};

/// True when `d` from cell `(x, y)` would cross the outer edge of an `n`-wide grid.
#[inline]
pub fn is_boundary(n: usize, x: usize, y: usize, d: Direction) -> bool {
    match d {
        Direction::Left => x == 0,
        Direction::Up => y == 0,
        Direction::Right => x == n - 1,
        Direction::Down => y == n - 1,
    }
}

/// Flat index of the cell across wall `d`. Only range-checked against the
/// grid as a whole, so callers must rule out boundary walls first.
#[inline]
pub fn neighbor_index(n: usize, index: usize, d: Direction) -> Result<usize> {
    let len = n * n;
    if index >= len {
        return Err(MazeError::OutOfRange { index, len });
    }
    let out = match d {
        Direction::Left => index.checked_sub(1),
        Direction::Up => index.checked_sub(n),
        Direction::Right => index.checked_add(1),
        Direction::Down => index.checked_add(n),
    };
    match out {
        Some(i) if i < len => Ok(i),
        _ => Err(MazeError::OutOfRange { index, len }),
    }
}

/// Randomized spanning-tree construction over an `n * n` grid.
///
/// Each step draws a cell and a wall. A wall on the grid edge is swapped for
/// the opposite one. The wall is removed only when it joins two cells that
/// are not yet connected, so the loop ends after exactly `n * n - 1` removals.
pub struct MazeGenerator<R> {
    n: usize,
    walls: Grid<Walls>,
    sets: DisjointSet,
    rng: R,
    removed: usize,
    attempts: u64,
    rejected: u64,
}

impl<R: RandomSource> MazeGenerator<R> {
    /// `cells` must already be validated (see [`crate::config::Params::validate`]).
    pub fn new(cells: usize, rng: R) -> Self {
        debug_assert!(cells >= 2);
        Self {
            n: cells,
            walls: Grid::new(cells, cells),
            sets: DisjointSet::new(cells * cells),
            rng,
            removed: 0,
            attempts: 0,
            rejected: 0,
        }
    }

    pub fn cells(&self) -> usize {
        self.n
    }

    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Every successful removal merges two components, so the grid is one
    /// component exactly when `n * n - 1` walls are gone.
    pub fn is_complete(&self) -> bool {
        self.removed + 1 >= self.walls.len()
    }

    /// One draw. Returns the removed wall, or `None` when the candidate
    /// joined cells that were already connected.
    pub fn step(&mut self) -> Result<Option<(usize, Direction)>> {
        let index = self.rng.next_in_range(self.walls.len());
        let drawn = self.rng.next_in_range(4) as u8;
        self.attempts += 1;

        let (x, y) = self.walls.coords(index);
        let mut dir = Direction::try_from(drawn)?;
        if is_boundary(self.n, x, y, dir) {
            dir = dir.opposite();
        }
        // A cell cannot sit on both opposite edges while n >= 2.
        let n = self.n;
        assert!(
            !is_boundary(n, x, y, dir),
            "cell ({x}, {y}) has no valid wall along {dir:?} in a {n}x{n} grid"
        );

        let neighbor = neighbor_index(self.n, index, dir)?;
        if self.sets.find(index)? == self.sets.find(neighbor)? {
            self.rejected += 1;
            return Ok(None);
        }

        self.walls.at_mut(index)?.open(dir);
        self.walls.at_mut(neighbor)?.open(dir.opposite());
        self.sets.union(index, neighbor)?;
        self.removed += 1;
        trace!("opened {dir:?} wall of cell {index} ({x}, {y}) towards {neighbor}");

        Ok(Some((index, dir)))
    }

    /// Draw until the grid is a single component.
    pub fn run(&mut self) -> Result<()> {
        while !self.is_complete() {
            self.step()?;
        }
        debug_assert!(self.sets.is_fully_connected());
        debug!(
            "{0}x{0} maze connected: {1} walls removed in {2} draws ({3} rejected)",
            self.n, self.removed, self.attempts, self.rejected
        );
        Ok(())
    }

    /// Finish the loop if needed, then open the entry (left of the first cell)
    /// and exit (right of the last cell). Those two openings bypass the
    /// disjoint set.
    pub fn finish(mut self) -> Result<Maze> {
        self.run()?;
        assert!(
            self.sets.is_fully_connected(),
            "{} walls removed but the grid is not one component",
            self.removed
        );

        let last = self.n - 1;
        let entry = (0, 0);
        let exit = (last, last);
        let entry_index = self.walls.idx(entry.0, entry.1);
        let exit_index = self.walls.idx(exit.0, exit.1);
        self.walls.at_mut(entry_index)?.open(Direction::Left);
        self.walls.at_mut(exit_index)?.open(Direction::Right);

        Ok(Maze {
            cells: self.n,
            entry,
            exit,
            walls: self.walls,
            removed: self.removed,
            attempts: self.attempts,
            rejected: self.rejected,
            sets: self.sets,
        })
    }
}

fn walls_as_bits<S: Serializer>(
    grid: &Grid<Walls>,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.collect_seq(grid.data.iter())
}

/// A finished maze. Read-only: renderers query open walls per cell.
#[derive(Clone, Debug, Serialize)]
pub struct Maze {
    cells: usize,
    entry: (usize, usize),
    exit: (usize, usize),
    #[serde(serialize_with = "walls_as_bits")]
    walls: Grid<Walls>,
    removed: usize,
    attempts: u64,
    rejected: u64,
    #[serde(skip)]
    sets: DisjointSet,
}

impl Maze {
    /// Side length; the maze has `cells * cells` cells.
    pub fn cells(&self) -> usize {
        self.cells
    }

    pub fn cell_count(&self) -> usize {
        self.walls.len()
    }

    pub fn entry(&self) -> (usize, usize) {
        self.entry
    }

    pub fn exit(&self) -> (usize, usize) {
        self.exit
    }

    pub fn walls(&self, index: usize) -> Result<Walls> {
        self.walls.at(index)
    }

    pub fn walls_at(&self, x: usize, y: usize) -> Result<Walls> {
        self.walls.get(x, y)
    }

    pub fn is_open(&self, x: usize, y: usize, d: Direction) -> Result<bool> {
        Ok(self.walls_at(x, y)?.is_open(d))
    }

    /// Walls removed by the connectivity loop; always `cells^2 - 1`.
    pub fn removed(&self) -> usize {
        self.removed
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn component_count(&self) -> usize {
        self.sets.component_count()
    }

    pub fn root_of(&self, index: usize) -> Result<usize> {
        self.sets.root_of(index)
    }

    pub fn sets(&self) -> &DisjointSet {
        &self.sets
    }

    /// Cells reachable from `index` through one open interior wall.
    pub fn open_neighbors(&self, index: usize) -> Result<Vec<usize>> {
        let w = self.walls(index)?;
        let (x, y) = self.walls.coords(index);
        Ok(w.iter_open()
            .filter(|&d| !is_boundary(self.cells, x, y, d))
            .map(|d| {
                let (dx, dy) = d.offset();
                let nx = (x as i32 + dx) as usize;
                let ny = (y as i32 + dy) as usize;
                self.walls.idx(nx, ny)
            })
            .collect())
    }
}
