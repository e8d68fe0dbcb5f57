use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::event;
use crossterm::terminal;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use termlife::config::Config;
use termlife::draw;
use termlife::draw::Terminal;
use termlife::io::convert_event;
use termlife::session::Flow;
use termlife::session::Phase;
use termlife::session::Session;

/// Logs can't go to the screen, it belongs to the grid. Without a log file nothing is installed
/// and every event is dropped.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Place cells until the user starts the simulation. Returns false if the user quit instead.
fn edit(term: &mut Terminal, session: &mut Session) -> anyhow::Result<bool> {
    loop {
        let event = event::read().context("Failed to read terminal event")?;

        let Some(event) = convert_event(event, Phase::Editing) else {
            continue;
        };

        match session
            .on_editing_event(event)
            .context("Failed to allocate the shadow grid")?
        {
            Flow::Exit => return Ok(false),
            Flow::Started => return Ok(true),
            Flow::Redraw | Flow::Stepped(_) => term.draw(session)?,
            Flow::Idle => {}
        }
    }
}

/// Step and draw once per `frame_delay`, or sooner on a key press, until the user quits.
fn simulate(
    term: &mut Terminal,
    session: &mut Session,
    frame_delay: Duration,
) -> anyhow::Result<()> {
    term.draw(session)?;

    let mut next_frame = Instant::now() + frame_delay;

    loop {
        let timeout = next_frame.saturating_duration_since(Instant::now());

        let event = if event::poll(timeout)? {
            let event = event::read().context("Failed to read terminal event")?;

            match convert_event(event, Phase::Running) {
                Some(event) => Some(event),
                None => continue,
            }
        } else {
            None
        };

        match session.on_running_event(event)? {
            Flow::Exit => return Ok(()),
            Flow::Stepped(_) => {
                term.draw(session)?;
                next_frame = Instant::now() + frame_delay;
            }
            Flow::Redraw => term.draw(session)?,
            Flow::Started | Flow::Idle => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let (width, height) = (config.width as usize, config.height as usize);
    let frame_delay = config.frame_delay();

    let mut session = Session::new(width, height).context("Failed to create the grid")?;

    if let Ok((cols, rows)) = terminal::size()
        && !draw::fits_terminal((width, height), (cols, rows))
    {
        // Logs may not be going anywhere, and the screen is about to be taken over
        warn!(cols, rows, width, height, "grid does not fit in the terminal");
        eprintln!(
            "Warning: a {width}x{height} grid needs a {}x{} terminal, this one is {cols}x{rows}",
            width + 2,
            height + 3
        );
    }

    info!(?frame_delay, "entering terminal");

    {
        let mut term = Terminal::enter().context("Failed to set up the terminal")?;
        term.draw(&session)?;

        if edit(&mut term, &mut session)? {
            simulate(&mut term, &mut session, frame_delay)?;
        }
    }

    info!(
        generation = session.generation(),
        population = session.population(),
        "exiting"
    );

    Ok(())
}
