use tracing::debug;
use tracing::info;

use crate::cell::CellState;
use crate::cursor::Cursor;
use crate::engine::LifeEngine;
use crate::engine::StepReport;
use crate::error::GridError;
use crate::events::Direction;
use crate::events::Event;
use crate::grid::GridBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The user is placing cells
    Editing,

    /// The simulation is advancing on a timer
    Running,
}

/// What the caller should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Nothing visible changed
    Idle,

    /// The screen is stale and should be drawn again
    Redraw,

    /// One generation was computed. The screen is stale and the frame timer starts over.
    Stepped(StepReport),

    /// Editing is over and the simulation is running
    Started,

    /// Leave right away
    Exit,
}

/// Everything one run of the program owns: the grid, its shadow once the simulation has
/// started, the edit cursor and the counters shown on the status line.
///
/// `population` is kept up to date from the deltas reported by every write and is never
/// recomputed from the grid.
#[derive(Debug)]
pub struct Session {
    grid: GridBuffer,
    shadow: Option<GridBuffer>,
    engine: LifeEngine,
    cursor: Cursor,
    phase: Phase,
    population: usize,
    generation: u64,
}

impl Session {
    /// Start a session on an empty `width` by `height` grid. The shadow buffer is not allocated
    /// until [`Session::start`].
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let grid = GridBuffer::create(width, height)?;

        info!(width, height, "created grid");

        Ok(Self {
            grid,
            shadow: None,
            engine: LifeEngine::new(),
            cursor: Cursor::default(),
            phase: Phase::Editing,
            population: 0,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &GridBuffer {
        &self.grid
    }

    /// The previous generation, once at least one step has run
    pub fn shadow(&self) -> Option<&GridBuffer> {
        self.shadow.as_ref()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor.step(direction, self.grid.interior_bounds());
    }

    pub fn toggle_at_cursor(&mut self) -> CellState {
        let (x, y) = self.cursor.position();
        self.toggle(x, y)
    }

    /// Flip `(x, y)`, which must be an interior cell.
    pub fn toggle(&mut self, x: usize, y: usize) -> CellState {
        let state = self.grid.get_cell(x, y).toggled();
        self.set(x, y, state);

        state
    }

    /// Write `state` to `(x, y)`, which must be an interior cell.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        let delta = self.grid.set_cell(x, y, state);
        self.apply_delta(delta as isize);
    }

    /// Allocate the shadow buffer and switch to [`Phase::Running`]. Calling this again is a no-op.
    pub fn start(&mut self) -> Result<(), GridError> {
        if self.shadow.is_none() {
            self.shadow = Some(self.grid.shadow()?);
        }

        self.enter_running();

        Ok(())
    }

    fn enter_running(&mut self) {
        if self.phase != Phase::Running {
            info!(population = self.population, "starting simulation");
            self.phase = Phase::Running;
        }
    }

    /// Advance the grid by exactly one generation, starting the simulation first if needed.
    pub fn tick(&mut self) -> Result<StepReport, GridError> {
        let mut shadow = match self.shadow.take() {
            Some(shadow) => shadow,
            None => self.grid.shadow()?,
        };
        self.enter_running();

        let report = self.engine.step(&mut self.grid, &mut shadow);
        self.shadow = Some(shadow);

        self.apply_delta(report.delta());
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.population,
            births = report.births,
            deaths = report.deaths,
            "generation"
        );

        Ok(report)
    }

    /// Handle an event while cells are being placed.
    pub fn on_editing_event(&mut self, event: Event) -> Result<Flow, GridError> {
        let flow = match event {
            Event::Exit => Flow::Exit,
            Event::Start => {
                self.start()?;
                Flow::Started
            }
            Event::Move(direction) => {
                self.move_cursor(direction);
                Flow::Redraw
            }
            Event::Toggle => {
                self.toggle_at_cursor();
                Flow::Redraw
            }
            Event::Redraw => Flow::Redraw,
            Event::Step => Flow::Idle,
        };

        Ok(flow)
    }

    /// Handle an event while the simulation runs. `None` means the frame delay expired without
    /// any event.
    ///
    /// A timeout or [`Event::Step`] computes exactly one generation, a redraw never steps, and
    /// an exit returns before touching the grid.
    pub fn on_running_event(&mut self, event: Option<Event>) -> Result<Flow, GridError> {
        let flow = match event {
            None | Some(Event::Step) => Flow::Stepped(self.tick()?),
            Some(Event::Exit) => Flow::Exit,
            Some(Event::Redraw) => Flow::Redraw,
            Some(Event::Move(_) | Event::Toggle | Event::Start) => Flow::Idle,
        };

        Ok(flow)
    }

    fn apply_delta(&mut self, delta: isize) {
        self.population = self
            .population
            .checked_add_signed(delta)
            .unwrap_or_else(|| unreachable!("population cannot go below zero"));
    }
}
