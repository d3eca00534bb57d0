//! Grid and simulation engine.
//!
//! A toroidal grid of binary cells stepped with a four-neighbour
//! birth/survival rule, plus the renderer interface used to display it.

pub mod grid;
pub mod history;
pub mod patterns;
pub mod renderer;
pub mod rule;
pub mod simulation;

pub use grid::Grid;
pub use history::{GridHistory, Outcome};
pub use renderer::{Renderer, TextRenderer};
pub use simulation::{SimulationSummary, Simulator};
