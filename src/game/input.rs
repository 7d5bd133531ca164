use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::config::KeyBindings;

/// The full command vocabulary the simulation understands. Adapters (keyboard
/// or socket) translate raw events into these; nothing else ever reaches the
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Paddle1Up,
    Paddle1Down,
    Paddle1Stop,
    Paddle2Up,
    Paddle2Down,
    Paddle2Stop,
    Start,
    Continue,
    Quit,
}

/// Key bindings resolved from config strings into key codes once at startup.
#[derive(Debug, Clone)]
pub struct KeyMap {
    paddle1_up: KeyCode,
    paddle1_down: KeyCode,
    paddle2_up: KeyCode,
    paddle2_down: KeyCode,
    start: KeyCode,
    acknowledge: KeyCode,
    quit: KeyCode,
}

impl KeyMap {
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        Self {
            paddle1_up: key_for_binding(&bindings.paddle1_up),
            paddle1_down: key_for_binding(&bindings.paddle1_down),
            paddle2_up: key_for_binding(&bindings.paddle2_up),
            paddle2_down: key_for_binding(&bindings.paddle2_down),
            start: key_for_binding(&bindings.start),
            acknowledge: key_for_binding(&bindings.acknowledge),
            quit: key_for_binding(&bindings.quit),
        }
    }

    fn press_command(&self, code: KeyCode) -> Option<Command> {
        if code == self.paddle1_up {
            Some(Command::Paddle1Up)
        } else if code == self.paddle1_down {
            Some(Command::Paddle1Down)
        } else if code == self.paddle2_up {
            Some(Command::Paddle2Up)
        } else if code == self.paddle2_down {
            Some(Command::Paddle2Down)
        } else if code == self.start {
            Some(Command::Start)
        } else if code == self.acknowledge {
            Some(Command::Continue)
        } else if code == self.quit || code == KeyCode::Esc {
            Some(Command::Quit)
        } else {
            None
        }
    }

    /// Releasing a motion key stops that paddle. Requires the terminal to
    /// report key release events; without them the paddle keeps its last
    /// direction, which matches the feel of the game under key auto-repeat.
    fn release_command(&self, code: KeyCode) -> Option<Command> {
        if code == self.paddle1_up || code == self.paddle1_down {
            Some(Command::Paddle1Stop)
        } else if code == self.paddle2_up || code == self.paddle2_down {
            Some(Command::Paddle2Stop)
        } else {
            None
        }
    }
}

/// Map a config binding string to a key code. Named keys cover the arrows and
/// common controls; anything else is matched as a single character,
/// case-insensitively.
fn key_for_binding(binding: &str) -> KeyCode {
    match binding {
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Enter" => KeyCode::Enter,
        "Esc" => KeyCode::Esc,
        "Space" => KeyCode::Char(' '),
        other => KeyCode::Char(other.chars().next().unwrap_or(' ').to_ascii_lowercase()),
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Drain all pending terminal events into commands. Non-blocking; called once
/// at the top of every frame.
pub fn poll_commands(keys: &KeyMap) -> io::Result<Vec<Command>> {
    let mut commands = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            let code = normalize(key.code);
            // Repeat counts as a press; it just re-asserts the direction.
            let command = if key.kind == KeyEventKind::Release {
                keys.release_command(code)
            } else {
                keys.press_command(code)
            };
            if let Some(command) = command {
                commands.push(command);
            }
        }
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keymap() -> KeyMap {
        KeyMap::from_bindings(&KeyBindings::default())
    }

    #[test]
    fn named_bindings_resolve_to_special_keys() {
        assert_eq!(key_for_binding("Up"), KeyCode::Up);
        assert_eq!(key_for_binding("Space"), KeyCode::Char(' '));
        assert_eq!(key_for_binding("Esc"), KeyCode::Esc);
    }

    #[test]
    fn character_bindings_are_case_insensitive() {
        assert_eq!(key_for_binding("W"), KeyCode::Char('w'));
        assert_eq!(key_for_binding("w"), KeyCode::Char('w'));
    }

    #[test]
    fn default_motion_keys_map_to_paddle_commands() {
        let keys = keymap();
        assert_eq!(
            keys.press_command(KeyCode::Char('w')),
            Some(Command::Paddle1Up)
        );
        assert_eq!(
            keys.press_command(KeyCode::Char('s')),
            Some(Command::Paddle1Down)
        );
        assert_eq!(keys.press_command(KeyCode::Up), Some(Command::Paddle2Up));
        assert_eq!(
            keys.press_command(KeyCode::Down),
            Some(Command::Paddle2Down)
        );
    }

    #[test]
    fn control_keys_map_to_session_commands() {
        let keys = keymap();
        assert_eq!(keys.press_command(KeyCode::Char(' ')), Some(Command::Start));
        assert_eq!(
            keys.press_command(KeyCode::Char('y')),
            Some(Command::Continue)
        );
        assert_eq!(keys.press_command(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(keys.press_command(KeyCode::Esc), Some(Command::Quit));
    }

    #[test]
    fn releasing_a_motion_key_stops_that_paddle() {
        let keys = keymap();
        assert_eq!(
            keys.release_command(KeyCode::Char('w')),
            Some(Command::Paddle1Stop)
        );
        assert_eq!(
            keys.release_command(KeyCode::Down),
            Some(Command::Paddle2Stop)
        );
        assert_eq!(keys.release_command(KeyCode::Char('q')), None);
    }

    #[test]
    fn unbound_keys_are_discarded() {
        let keys = keymap();
        assert_eq!(keys.press_command(KeyCode::Char('x')), None);
    }
}
