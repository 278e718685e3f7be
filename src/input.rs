use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One tick's worth of external input, consumed by [`crate::game::GameState::step`].
///
/// The default value is a no-op command: no turn, no pause toggle, no quit.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InputCommand {
    pub direction: Option<Direction>,
    pub pause: bool,
    pub quit: bool,
}

impl InputCommand {
    /// Command that only requests a turn.
    #[must_use]
    pub fn turn(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            ..Self::default()
        }
    }

    /// Command that only toggles pause.
    #[must_use]
    pub fn toggle_pause() -> Self {
        Self {
            pause: true,
            ..Self::default()
        }
    }

    /// Command that requests immediate termination.
    #[must_use]
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }
}

/// Choice made on the game-over screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuChoice {
    Restart,
    Quit,
}

/// Non-blocking keyboard reader with single-slot buffering.
///
/// Between ticks only the most recent relevant keypress survives: a later
/// direction key replaces an earlier one, and a pause or quit key replaces
/// any buffered direction outright. This mirrors the one-key-per-tick
/// behavior of a raw `kbhit`/`getch` poll loop.
#[derive(Debug, Default)]
pub struct InputHandler {
    pending: Option<InputCommand>,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains all currently pending terminal events into the command slot.
    pub fn poll(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = command_for_key(key) {
                    self.pending = Some(command);
                }
            }
        }
        Ok(())
    }

    /// Takes the buffered command for this tick, leaving the slot empty.
    pub fn take_command(&mut self) -> InputCommand {
        self.pending.take().unwrap_or_default()
    }

    /// Blocks until the player chooses to restart or quit.
    pub fn wait_for_menu_choice(&mut self) -> io::Result<MenuChoice> {
        // Drop anything buffered during the final tick.
        self.pending = None;

        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuChoice::Restart),
                    KeyCode::Char('q' | 'x') | KeyCode::Esc => return Ok(MenuChoice::Quit),
                    _ => {}
                }
            }
        }
    }
}

fn command_for_key(key: KeyEvent) -> Option<InputCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(InputCommand::turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(InputCommand::turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(InputCommand::turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(InputCommand::turn(Direction::Right)),
        KeyCode::Char('p') => Some(InputCommand::toggle_pause()),
        KeyCode::Char('q' | 'x') | KeyCode::Esc => Some(InputCommand::quit()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, InputCommand, InputHandler};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn default_command_is_a_no_op() {
        let command = InputCommand::default();
        assert_eq!(command.direction, None);
        assert!(!command.pause);
        assert!(!command.quit);
    }

    #[test]
    fn empty_handler_yields_the_no_op_command() {
        let mut handler = InputHandler::new();
        assert_eq!(handler.take_command(), InputCommand::default());
    }

    #[test]
    fn take_command_empties_the_slot() {
        let mut handler = InputHandler {
            pending: Some(InputCommand::turn(Direction::Up)),
        };

        assert_eq!(handler.take_command(), InputCommand::turn(Direction::Up));
        assert_eq!(handler.take_command(), InputCommand::default());
    }
}
