use crate::cell::CellState;

/// Rules of Conway's Game of Life.
pub const B3S23: Rule = Rule::new(0b1000, 0b1100);

/// # Representation
/// A rule is a pair of neighbor count sets, one bit per count:
/// ```notrust
/// births:    0000_000b_bbbb_bbbb
/// survivals: 0000_000s_ssss_ssss
/// ```
/// Bit `i` of `births` being on means a dead cell with `i` alive neighbors comes alive. Bit `i`
/// of `survivals` being on means an alive cell with `i` alive neighbors stays alive. Every other
/// cell is dead in the next generation.
///
/// # Examples
/// ```notrust
/// b3s23: births 0000_0000_0000_1000, survivals 0000_0000_0000_1100
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    births: u16,
    survivals: u16,
}

impl Default for Rule {
    fn default() -> Self {
        B3S23
    }
}

impl Rule {
    /// Any bit past the 8th is ignored, since a cell has at most 8 neighbors.
    const fn new(births: u16, survivals: u16) -> Self {
        Self {
            births: births & 0x1FF,
            survivals: survivals & 0x1FF,
        }
    }

    /// State of a cell in the next generation given its current state and its count of alive
    /// neighbors.
    pub const fn next(&self, state: CellState, neighbors: u8) -> CellState {
        debug_assert!(neighbors <= 8);

        let mask = match state {
            CellState::Alive => self.survivals,
            CellState::Dead => self.births,
        };

        if mask & (1 << neighbors) != 0 {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
