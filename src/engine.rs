use tracing::trace;

use crate::cell::ALIVE;
use crate::cell::CellState;
use crate::grid::GridBuffer;
use crate::rule::Rule;

/// What happened during a single generation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub births: usize,
    pub deaths: usize,
}

impl StepReport {
    /// Net change to the population
    pub fn delta(&self) -> isize {
        self.births as isize - self.deaths as isize
    }
}

/// Advances a [`GridBuffer`] one generation at a time.
///
/// Cells have 8 neighbors and the grid does not wrap around: the neighbors of an edge cell that
/// fall on the border are border bytes, which never read as alive.
#[derive(Debug, Default, Clone, Copy)]
pub struct LifeEngine {
    rule: Rule,
}

impl LifeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute exactly one generation.
    ///
    /// `shadow` first receives a verbatim copy of `buffer`. Neighbor counts and current states are
    /// then read from `shadow` only, while `buffer` is written. After the call `shadow` holds the
    /// previous generation.
    ///
    /// Panics if the two buffers differ in size.
    pub fn step(&self, buffer: &mut GridBuffer, shadow: &mut GridBuffer) -> StepReport {
        shadow.copy_from(buffer);

        let (width, height) = buffer.interior_bounds();
        let stride = buffer.stride();
        let snapshot = shadow.as_bytes();

        let mut report = StepReport::default();

        for y in 1..=height {
            for x in 1..=width {
                let i = y * stride + x;

                let state = CellState::from_byte(snapshot[i]);
                let next = self.rule.next(state, count_neighbors(snapshot, i, stride));

                match buffer.set_cell(x, y, next) {
                    1 => report.births += 1,
                    -1 => report.deaths += 1,
                    _ => {}
                }
            }
        }

        trace!(births = report.births, deaths = report.deaths, "step");

        report
    }
}

/// Count the alive bytes around interior index `i`.
///
///   nw n ne
///    w i e
///   sw s se
///
/// Interior cells always have a full ring of bytes around them, borders included, so none of
/// these indices can leave the surface.
fn count_neighbors(snapshot: &[u8], i: usize, stride: usize) -> u8 {
    let ring = [
        i - stride - 1,
        i - stride,
        i - stride + 1,
        i - 1,
        i + 1,
        i + stride - 1,
        i + stride,
        i + stride + 1,
    ];

    ring.into_iter().filter(|&j| snapshot[j] == ALIVE).count() as u8
}
