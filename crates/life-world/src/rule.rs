//! Birth/survival transition rule.
//!
//! The neighbourhood is the four orthogonal cells (von Neumann), not the
//! eight-cell Moore neighbourhood of classical Life. The thresholds are the
//! classical ones.

use life_core::CellState;

/// Live cells with fewer live neighbours die
pub const SURVIVE_MIN: u8 = 2;
/// Live cells with more live neighbours die
pub const SURVIVE_MAX: u8 = 3;
/// Dead cells with exactly this many live neighbours are born
pub const BIRTH: u8 = 3;

/// State of a cell in the next generation
pub fn next_state(current: CellState, neighbor_sum: u8) -> CellState {
    match (current, neighbor_sum) {
        // Survival
        (CellState::Alive, n) if (SURVIVE_MIN..=SURVIVE_MAX).contains(&n) => CellState::Alive,
        // Birth
        (CellState::Dead, BIRTH) => CellState::Alive,
        // Death or stays dead
        _ => CellState::Dead,
    }
}
