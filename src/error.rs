use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Value provided for {axis} ({got}) is not in the range {min} - {max}")]
    InvalidDimension {
        axis: Axis,
        got: usize,
        min: usize,
        max: usize,
    },

    #[error("Failed to allocate {bytes} bytes for the grid surface: {source}")]
    Allocation {
        bytes: usize,

        #[source]
        source: TryReserveError,
    },
}
