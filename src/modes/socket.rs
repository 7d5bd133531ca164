use std::io;
use std::time::Instant;

use ratatui::Terminal;

use super::common::{limit_frame_rate, log_events};
use crate::config::Config;
use crate::debug;
use crate::game::{poll_commands, KeyMap, MatchSession};
use crate::net::SocketAdapter;
use crate::ui;

/// Run a match driven by the keyboard plus the legacy socket controller.
///
/// Both sources feed the same command queue; the session's last-write-wins
/// folding settles any conflict within a tick. If the socket drops, its
/// reader emits stops and the match carries on under keyboard control alone.
pub fn run_socket<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    socket: SocketAdapter,
) -> Result<(), io::Error> {
    debug::log("GAME_START", "socket-controlled mode");

    let keys = KeyMap::from_bindings(&config.keybindings);
    let mut session = MatchSession::new(&config.physics);

    loop {
        let frame_start = Instant::now();

        let mut commands = poll_commands(&keys)?;
        commands.extend(socket.drain());
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
