use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::events::Direction;
use crate::events::Event;
use crate::session::Phase;

/// Converts a crossterm event into a termlife event.
///
/// While running, `q` and Ctrl-C still exit but every other key press steps the simulation once.
pub fn convert_event(event: CrossTermEvent, phase: Phase) -> Option<Event> {
    match event {
        // Windows reports releases too
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => match (phase, convert_key(key_event)) {
            (_, Some(Event::Exit)) => Some(Event::Exit),
            (Phase::Editing, event) => event,
            (Phase::Running, _) => Some(Event::Step),
        },
        CrossTermEvent::Resize(..) => Some(Event::Redraw),
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    match key_event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('q'),
            ..
        } => Some(Event::Exit),

        KeyEvent {
            code: KeyCode::Left | KeyCode::Char('h'),
            ..
        } => Some(Event::Move(Direction::Left)),
        KeyEvent {
            code: KeyCode::Down | KeyCode::Char('j'),
            ..
        } => Some(Event::Move(Direction::Down)),
        KeyEvent {
            code: KeyCode::Up | KeyCode::Char('k'),
            ..
        } => Some(Event::Move(Direction::Up)),
        KeyEvent {
            code: KeyCode::Right | KeyCode::Char('l'),
            ..
        } => Some(Event::Move(Direction::Right)),

        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => Some(Event::Toggle),
        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Some(Event::Start),

        _ => None,
    }
}
