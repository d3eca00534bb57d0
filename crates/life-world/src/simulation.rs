//! Simulation engine stepping a grid through generations.

use crate::grid::Grid;
use crate::patterns;
use crate::rule;
use life_core::{CellState, Result, SimulationConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

/// Owns the current generation and advances it with double-buffered steps
#[derive(Debug, Clone)]
pub struct Simulator {
    grid: Grid,
    generation: u64,
}

impl Simulator {
    /// Start from a grid where exactly `live_cells` are alive.
    pub fn new<I>(width: usize, height: usize, live_cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Ok(Self::from_grid(Grid::create(width, height, live_cells)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    /// Build the initial grid from configuration: an optional random soup,
    /// then the explicit seeds, then the optional named pattern.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        let mut grid = match &config.random {
            Some(random) => {
                let mut rng = ChaCha8Rng::seed_from_u64(random.seed);
                Grid::random(config.width, config.height, random.density, &mut rng)?
            }
            None => Grid::new(config.width, config.height)?,
        };

        let mut seeds = config.live_cells.clone();
        if let Some(placement) = &config.pattern {
            let pattern = patterns::find(&placement.name)?;
            seeds.extend(pattern.place(placement.x, placement.y, config.width, config.height)?);
        }
        for (x, y) in seeds {
            grid.set(x, y, CellState::Alive)?;
        }

        info!(
            width = grid.width(),
            height = grid.height(),
            live_cells = grid.live_count(),
            "Simulator initialized"
        );
        Ok(Self::from_grid(grid))
    }

    /// Advance `n` generations. `n == 0` leaves the simulator untouched.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn step(&mut self, n: u64) {
        for _ in 0..n {
            self.step_once();
        }
    }

    /// Compute the next generation from the current one and swap it in.
    ///
    /// Reads only from the current grid and writes only to the new grid.
    fn step_once(&mut self) {
        let current = &self.grid;
        let next = current.next_generation(|cell| {
            let sum = current.neighbor_sum(cell.x(), cell.y());
            let state = rule::next_state(cell.state(), sum);
            trace!(x = cell.x(), y = cell.y(), sum, ?state, "cell transition");
            state
        });

        self.grid = next;
        self.generation += 1;

        debug!(
            generation = self.generation,
            live_cells = self.grid.live_count(),
            "Generation computed"
        );
    }

    /// Read-only view of the current generation
    pub fn current_grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current generation
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Generations advanced since construction
    pub fn generation_count(&self) -> u64 {
        self.generation
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            generations: self.generation,
            width: self.grid.width(),
            height: self.grid.height(),
            live_cells: self.grid.live_count(),
        }
    }
}

/// End-of-run statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub generations: u64,
    pub width: usize,
    pub height: usize,
    pub live_cells: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::{CellState, Error, PatternPlacement, RandomSoupConfig};
    use proptest::prelude::*;

    fn states(grid: &Grid) -> Vec<Vec<u8>> {
        grid.rows()
            .map(|row| row.iter().map(|cell| cell.state().as_u8()).collect())
            .collect()
    }

    #[test]
    fn test_vertical_line_on_3x3_torus() {
        let mut sim = Simulator::new(3, 3, [(1, 0), (1, 1), (1, 2)]).unwrap();
        sim.step(1);

        // Column x = 1: up and down wrap onto the line itself, sum = 2, survives.
        // Columns x = 0 and x = 2: only one orthogonal neighbour (the line), sum = 1, stay dead.
        let expected = vec![
            vec![0, 1, 0],
            vec![0, 1, 0],
            vec![0, 1, 0],
        ];
        assert_eq!(states(sim.current_grid()), expected);
        assert_eq!(sim.generation_count(), 1);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut sim = Simulator::new(5, 5, [(2, 2)]).unwrap();
        sim.step(1);
        assert_eq!(sim.current_grid().live_count(), 0);
    }

    #[test]
    fn test_birth_with_three_neighbors() {
        // (2, 2) is dead with live left, right and up neighbours
        let mut sim = Simulator::new(5, 5, [(1, 2), (3, 2), (2, 1)]).unwrap();
        sim.step(1);
        assert_eq!(sim.current_grid().get(2, 2).unwrap(), CellState::Alive);
        assert_eq!(sim.current_grid().live_cells(), vec![(2, 2)]);
    }

    #[test]
    fn test_survival_with_two_and_three_neighbors() {
        let mut sim = Simulator::new(5, 5, [(2, 2), (1, 2), (3, 2)]).unwrap();
        sim.step(1);
        assert_eq!(sim.current_grid().get(2, 2).unwrap(), CellState::Alive);

        let mut sim = Simulator::new(5, 5, [(2, 2), (1, 2), (3, 2), (2, 1)]).unwrap();
        sim.step(1);
        assert_eq!(sim.current_grid().live_cells(), vec![(2, 2)]);
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        let mut sim = Simulator::new(5, 5, [(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]).unwrap();
        sim.step(1);
        assert_eq!(sim.current_grid().get(2, 2).unwrap(), CellState::Dead);
        assert_eq!(sim.current_grid().live_count(), 0);
    }

    #[test]
    fn test_step_zero_is_noop() {
        let mut sim = Simulator::new(4, 4, [(0, 0), (1, 0)]).unwrap();
        let before = sim.snapshot();
        sim.step(0);
        assert_eq!(sim.current_grid(), &before);
        assert_eq!(sim.generation_count(), 0);
    }

    #[test]
    fn test_generation_count_accumulates() {
        let mut sim = Simulator::new(4, 4, Vec::<(usize, usize)>::new()).unwrap();
        sim.step(3);
        sim.step(4);
        assert_eq!(sim.generation_count(), 7);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut sim = Simulator::new(3, 3, [(1, 1)]).unwrap();
        let snapshot = sim.snapshot();
        sim.step(1);
        assert_eq!(snapshot.get(1, 1).unwrap(), CellState::Alive);
        assert_eq!(sim.current_grid().get(1, 1).unwrap(), CellState::Dead);
    }

    #[test]
    fn test_new_rejects_out_of_range_seed() {
        assert!(matches!(
            Simulator::new(3, 3, [(3, 0)]),
            Err(Error::InvalidCoordinate { x: 3, y: 0, .. })
        ));
    }

    #[test]
    fn test_from_config_with_pattern() {
        let config = SimulationConfig {
            width: 8,
            height: 8,
            live_cells: vec![(0, 0)],
            pattern: Some(PatternPlacement {
                name: "blinker".to_string(),
                x: 3,
                y: 3,
            }),
            random: None,
        };
        let sim = Simulator::from_config(&config).unwrap();
        assert_eq!(
            sim.current_grid().live_cells(),
            vec![(0, 0), (4, 3), (4, 4), (4, 5)]
        );
    }

    #[test]
    fn test_from_config_errors() {
        let config = SimulationConfig {
            pattern: Some(PatternPlacement {
                name: "nope".to_string(),
                x: 0,
                y: 0,
            }),
            ..Default::default()
        };
        assert!(matches!(
            Simulator::from_config(&config),
            Err(Error::UnknownPattern(_))
        ));

        let config = SimulationConfig {
            width: 3,
            height: 3,
            live_cells: vec![(0, 5)],
            ..Default::default()
        };
        assert!(matches!(
            Simulator::from_config(&config),
            Err(Error::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_from_config_rejects_overflowing_pattern_offset() {
        let json = r#"{ "name": "blinker", "x": 18446744073709551615 }"#;
        let config = SimulationConfig {
            pattern: Some(serde_json::from_str(json).unwrap()),
            ..Default::default()
        };
        assert!(matches!(
            Simulator::from_config(&config),
            Err(Error::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_from_config_random_is_reproducible() {
        let config = SimulationConfig {
            width: 16,
            height: 16,
            live_cells: vec![],
            pattern: None,
            random: Some(RandomSoupConfig {
                seed: 99,
                density: 0.3,
            }),
        };
        let a = Simulator::from_config(&config).unwrap();
        let b = Simulator::from_config(&config).unwrap();
        assert_eq!(a.current_grid(), b.current_grid());
    }

    #[test]
    fn test_summary() {
        let mut sim = Simulator::new(3, 3, [(1, 0), (1, 1), (1, 2)]).unwrap();
        sim.step(2);
        assert_eq!(
            sim.summary(),
            SimulationSummary {
                generations: 2,
                width: 3,
                height: 3,
                live_cells: 3,
            }
        );
    }

    fn arb_seeds() -> impl Strategy<Value = (usize, usize, Vec<(usize, usize)>)> {
        (1usize..10, 1usize..10).prop_flat_map(|(w, h)| {
            (
                Just(w),
                Just(h),
                prop::collection::vec((0..w, 0..h), 0..30),
            )
        })
    }

    proptest! {
        #[test]
        fn identical_simulators_stay_identical(
            (w, h, seeds) in arb_seeds(),
            steps in 0u64..8,
        ) {
            let mut a = Simulator::new(w, h, seeds.clone()).unwrap();
            let mut b = Simulator::new(w, h, seeds).unwrap();
            a.step(steps);
            b.step(steps);
            prop_assert_eq!(a.current_grid(), b.current_grid());
        }

        #[test]
        fn split_steps_match_combined(
            (w, h, seeds) in arb_seeds(),
            n in 0u64..6,
            m in 0u64..6,
        ) {
            let mut split = Simulator::new(w, h, seeds.clone()).unwrap();
            let mut combined = Simulator::new(w, h, seeds).unwrap();
            split.step(n);
            split.step(m);
            combined.step(n + m);
            prop_assert_eq!(split.current_grid(), combined.current_grid());
            prop_assert_eq!(split.generation_count(), combined.generation_count());
        }

        #[test]
        fn step_preserves_dimensions_and_cell_coordinates(
            (w, h, seeds) in arb_seeds(),
        ) {
            let mut sim = Simulator::new(w, h, seeds).unwrap();
            sim.step(1);
            let grid = sim.current_grid();
            prop_assert_eq!((grid.width(), grid.height()), (w, h));
            prop_assert_eq!(grid.cells().count(), w * h);
            for (i, cell) in grid.cells().enumerate() {
                prop_assert_eq!((cell.x(), cell.y()), (i % w, i / w));
            }
        }
    }
}
