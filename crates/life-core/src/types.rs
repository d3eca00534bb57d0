//! Core type definitions for the simulator.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed 2D position used for neighbour arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

impl Position {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: isize, dy: isize) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Apply toroidal wrapping for given grid dimensions.
    ///
    /// Both dimensions must be non-zero.
    pub fn wrap(&self, width: usize, height: usize) -> (usize, usize) {
        let w = width as isize;
        let h = height as isize;
        (
            (((self.x % w) + w) % w) as usize,
            (((self.y % h) + h) % h) as usize,
        )
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x as isize, y as isize)
    }
}

/// One of the four orthogonal (von Neumann) neighbour directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    West,
    East,
    North,
    South,
}

impl Direction {
    /// Offset in grid coordinates; `y` grows downwards.
    pub fn to_delta(&self) -> (isize, isize) {
        match self {
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::South => (0, 1),
        }
    }

    pub fn all() -> [Direction; 4] {
        [
            Direction::West,
            Direction::East,
            Direction::North,
            Direction::South,
        ]
    }
}

/// Binary cell state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn as_u8(self) -> u8 {
        match self {
            CellState::Dead => 0,
            CellState::Alive => 1,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl TryFrom<i64> for CellState {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            other => Err(Error::InvalidState(other)),
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Immutable cell record: a grid coordinate and its state for one generation.
///
/// Cells are never updated in place; the next generation gets new cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    x: usize,
    y: usize,
    state: CellState,
}

impl Cell {
    /// Build a cell from a raw 0/1 state value.
    pub fn new(x: usize, y: usize, state: i64) -> Result<Self> {
        Ok(Self::with_state(x, y, CellState::try_from(state)?))
    }

    pub fn with_state(x: usize, y: usize, state: CellState) -> Self {
        Self { x, y, state }
    }

    pub fn dead(x: usize, y: usize) -> Self {
        Self::with_state(x, y, CellState::Dead)
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.state)
    }
}
