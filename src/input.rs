//! Keyboard mapping.
//!
//! Translates crossterm key events into [`Action`]s. Release events are
//! ignored so terminals that report them don't double every key.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::algorithms::Algorithm;
use crate::playback::Command;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Playback(Command),
    CycleTheme,
    Quit,
}

/// Map a key event to an action. `None` for unbound keys.
pub fn map_key(event: KeyEvent) -> Option<Action> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let action = match event.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        KeyCode::Char(' ') | KeyCode::Enter => Action::Playback(Command::TogglePlay),
        KeyCode::Right | KeyCode::Char('n') => Action::Playback(Command::StepForward),
        KeyCode::Char('r') => Action::Playback(Command::ResetToBeginning),
        KeyCode::Char('g') => Action::Playback(Command::NewArray),

        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Action::Playback(Command::SelectAlgorithm(Algorithm::ALL[index]))
        }
        KeyCode::Tab => Action::Playback(Command::NextAlgorithm),
        KeyCode::BackTab => Action::Playback(Command::PreviousAlgorithm),

        KeyCode::Char('+') | KeyCode::Char('=') => Action::Playback(Command::Faster),
        KeyCode::Char('-') | KeyCode::Char('_') => Action::Playback(Command::Slower),
        KeyCode::Char(']') => Action::Playback(Command::GrowArray),
        KeyCode::Char('[') => Action::Playback(Command::ShrinkArray),

        KeyCode::Char('t') => Action::CycleTheme,
        _ => return None,
    };
    Some(action)
}

/// Map any terminal event. Only key events carry actions.
pub fn map_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(*key),
        _ => None,
    }
}
