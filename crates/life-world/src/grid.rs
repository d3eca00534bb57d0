//! 2D toroidal grid of cells.

use life_core::{Cell, CellState, Direction, Error, Position, Result};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-size toroidal grid holding exactly one [`Cell`] per coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::dead(x, y)))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid where exactly the listed coordinates are alive.
    ///
    /// Fails on the first seed outside the grid; nothing is clamped.
    pub fn create<I>(width: usize, height: usize, live_coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(width, height)?;
        for (x, y) in live_coords {
            grid.set(x, y, CellState::Alive)?;
        }
        Ok(grid)
    }

    /// Random soup where each cell is alive with probability `density`
    pub fn random(
        width: usize,
        height: usize,
        density: f32,
        rng: &mut ChaCha8Rng,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidConfig(format!(
                "density must be within [0, 1], got {}",
                density
            )));
        }

        let mut grid = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, CellState::from(rng.gen::<f32>() < density))?;
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked state lookup
    pub fn get(&self, x: usize, y: usize) -> Result<CellState> {
        self.cell(x, y).map(Cell::state)
    }

    /// Bounds-checked cell lookup
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell> {
        let index = self.checked_index(x, y)?;
        Ok(&self.cells[index])
    }

    /// State lookup with toroidal wrapping; never fails
    pub fn get_wrapped(&self, x: isize, y: isize) -> CellState {
        let (x, y) = Position::new(x, y).wrap(self.width, self.height);
        self.cells[self.pos_to_index(x, y)].state()
    }

    /// Replace the cell at (x, y) with a new one carrying `state`
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<()> {
        let index = self.checked_index(x, y)?;
        self.cells[index] = Cell::with_state(x, y, state);
        Ok(())
    }

    /// Number of live cells among the four orthogonal neighbours, with wrapping.
    ///
    /// On grids narrower than 3 a neighbour may be counted twice (or be the
    /// cell itself), as the torus dictates.
    pub fn neighbor_sum(&self, x: usize, y: usize) -> u8 {
        let pos = Position::from((x, y));
        Direction::all()
            .iter()
            .map(|dir| {
                let (dx, dy) = dir.to_delta();
                let n = pos.add(dx, dy);
                self.get_wrapped(n.x, n.y)
            })
            .filter(|state| state.is_alive())
            .count() as u8
    }

    /// Build a fresh grid of the same size whose cells take the states
    /// returned by `f`, which only ever sees cells of `self`.
    pub(crate) fn next_generation<F>(&self, f: F) -> Grid
    where
        F: Fn(&Cell) -> CellState,
    {
        let cells = self
            .cells
            .iter()
            .map(|cell| Cell::with_state(cell.x(), cell.y(), f(cell)))
            .collect();

        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Iterator over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Iterator over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Coordinates of every live cell in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.x(), cell.y()))
            .collect()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::InvalidCoordinate {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pos_to_index(x, y))
    }

    fn pos_to_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl fmt::Display for Grid {
    /// Rows of `0`/`1` separated by spaces, one row per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|cell| cell.state().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
