use std::io;
use std::time::Instant;

use ratatui::Terminal;

use super::common::{limit_frame_rate, log_events};
use crate::config::Config;
use crate::debug;
use crate::game::{poll_commands, KeyMap, MatchSession};
use crate::ui;

/// Run a local two-player match, both paddles on one keyboard.
pub fn run_local<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), io::Error> {
    debug::log("GAME_START", "local two-player mode");

    let keys = KeyMap::from_bindings(&config.keybindings);
    let mut session = MatchSession::new(&config.physics);

    loop {
        let frame_start = Instant::now();

        let commands = poll_commands(&keys)?;
        let events = session.advance(&commands);
        log_events(&events);

        if session.is_quit() {
            debug::log("GAME_END", "quit command received");
            return Ok(());
        }

        let snapshot = session.snapshot();
        terminal.draw(|f| ui::render(f, &snapshot, &config.display))?;

        limit_frame_rate(frame_start);
    }
}
