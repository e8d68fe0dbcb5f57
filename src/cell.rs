/// Marker stored for a live interior cell.
pub const ALIVE: u8 = b'o';

/// Marker stored for a dead interior cell.
pub const DEAD: u8 = b' ';

/// Corner of the top and bottom border rows
pub const CORNER: u8 = b'+';

/// Fill of the top and bottom border rows
pub const HORIZONTAL: u8 = b'-';

/// Left and right border of a content row
pub const VERTICAL: u8 = b'|';

/// Last byte of every row
pub const TERMINATOR: u8 = b'\n';

/// Change to the population caused by a single write. One of `-1`, `0` or `1`.
pub type PopulationDelta = i8;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    /// Map a byte of the surface to a state. Anything other than [`ALIVE`] reads as dead, which
    /// is what makes border bytes count as dead neighbors.
    pub const fn from_byte(b: u8) -> Self {
        if b == ALIVE {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }

    pub const fn to_byte(self) -> u8 {
        match self {
            CellState::Alive => ALIVE,
            CellState::Dead => DEAD,
        }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub const fn toggled(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }

    /// The population delta of going from `self` to `next`
    pub const fn delta(self, next: CellState) -> PopulationDelta {
        match (self, next) {
            (CellState::Dead, CellState::Alive) => 1,
            (CellState::Alive, CellState::Dead) => -1,
            _ => 0,
        }
    }
}
