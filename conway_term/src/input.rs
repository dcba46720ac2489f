use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the user asked for between two generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    /// Advance one generation while paused.
    Step,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Command::TogglePause),
        KeyCode::Char('s') | KeyCode::Right => Some(Command::Step),
        _ => None,
    }
}

/// What the host loop does once input has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    /// Paused with nothing to do; look again shortly.
    Wait,
    Advance,
}

/// Pause flag and the optional `--generations` limit.
#[derive(Debug, Default)]
pub struct LoopState {
    pub paused: bool,
    limit: Option<u64>,
}

impl LoopState {
    pub fn new(limit: Option<u64>) -> Self {
        Self { paused: false, limit }
    }

    /// Decides the next move at a generation boundary. The limit is checked
    /// before any step, single steps while paused included.
    pub fn decide(&mut self, command: Option<Command>, generation: u64) -> Action {
        match command {
            Some(Command::Quit) => return Action::Exit,
            Some(Command::TogglePause) => self.paused = !self.paused,
            _ => {}
        }
        if self.limit.is_some_and(|n| generation >= n) {
            return Action::Exit;
        }
        match (self.paused, command) {
            (false, _) | (true, Some(Command::Step)) => Action::Advance,
            (true, _) => Action::Wait,
        }
    }
}

/// Drains pending input without blocking. A quit anywhere in the queue wins;
/// otherwise the last recognised key does.
pub fn poll_command() -> io::Result<Option<Command>> {
    let mut command = None;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            match command_for(key) {
                Some(Command::Quit) => return Ok(Some(Command::Quit)),
                Some(other) => command = Some(other),
                None => {}
            }
        }
    }
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn key_bindings() {
        assert_eq!(command_for(press(KeyCode::Char('q'), KeyModifiers::NONE)), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Esc, KeyModifiers::NONE)), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(command_for(press(KeyCode::Char(' '), KeyModifiers::NONE)), Some(Command::TogglePause));
        assert_eq!(command_for(press(KeyCode::Right, KeyModifiers::NONE)), Some(Command::Step));
    }

    #[test]
    fn releases_ignored() {
        let mut key = press(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for(key), None);
    }

    #[test]
    fn paused_step_respects_the_limit() {
        let mut state = LoopState::new(Some(3));
        assert_eq!(state.decide(Some(Command::TogglePause), 2), Action::Wait);
        assert_eq!(state.decide(Some(Command::Step), 2), Action::Advance);
        assert_eq!(state.decide(Some(Command::Step), 3), Action::Exit);
    }

    #[test]
    fn loop_decisions() {
        let mut state = LoopState::new(None);
        assert_eq!(state.decide(None, 0), Action::Advance);
        // a step key while running is just another generation
        assert_eq!(state.decide(Some(Command::Step), 1), Action::Advance);
        assert_eq!(state.decide(Some(Command::TogglePause), 2), Action::Wait);
        assert_eq!(state.decide(None, 2), Action::Wait);
        assert_eq!(state.decide(Some(Command::TogglePause), 2), Action::Advance);
        assert_eq!(state.decide(Some(Command::Quit), 3), Action::Exit);

        let mut limited = LoopState::new(Some(0));
        assert_eq!(limited.decide(None, 0), Action::Exit);
    }
}
