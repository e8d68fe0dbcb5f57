use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Delay between generations when no FPS is given
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(200);

/// Conway's Game of Life in the terminal.
///
/// Move with the arrow keys or h/j/k/l, toggle a cell with Enter, start the simulation with Space
/// and quit with q. While running, any other key steps one generation right away.
///
/// A grid needs `width + 2` columns and `height + 3` rows of terminal. A warning is printed before
/// starting if it does not fit.
#[derive(Debug, Parser)]
#[command(name = "termlife", version)]
pub struct Config {
    /// Width of the grid in cells, 1 - 255
    #[arg(value_parser = clap::value_parser!(u8).range(1..))]
    pub width: u8,

    /// Height of the grid in cells, 1 - 255
    #[arg(value_parser = clap::value_parser!(u8).range(1..))]
    pub height: u8,

    /// Generations per second while the simulation runs
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: Option<u32>,

    /// Append logs to this file. Filtered with `RUST_LOG`, `info` by default
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn frame_delay(&self) -> Duration {
        frame_delay(self.fps)
    }
}

/// `1000 / fps` milliseconds, never less than one millisecond.
pub fn frame_delay(fps: Option<u32>) -> Duration {
    match fps {
        None => DEFAULT_FRAME_DELAY,
        Some(fps) => Duration::from_millis(u64::from(1000 / fps.max(1)).max(1)),
    }
}
