//! Legacy socket input adapter.
//!
//! Connects to a controller process as a TCP client and reads newline-framed
//! tokens (`w`, `s`, `up`, `down`, `space`, `y`, `quit`), translating them
//! into the same [`Command`]s the keyboard produces. The reader runs on its
//! own thread and hands validated commands to the game loop through a
//! channel; it never touches simulation state directly.

use std::io::{self, BufRead, BufReader};
use std::net::TcpStream;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::debug;
use crate::game::Command;

pub struct SocketAdapter {
    rx: Receiver<Command>,
}

impl SocketAdapter {
    /// Connect to the controller. Fails fast so a bad address surfaces
    /// before the terminal is taken over.
    pub fn connect(address: &str) -> io::Result<Self> {
        let stream = TcpStream::connect(address)?;
        debug::log("SOCKET", &format!("connected to {}", address));

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || read_loop(stream, tx));

        Ok(Self { rx })
    }

    /// Drain every command received since the last frame. Non-blocking.
    pub fn drain(&self) -> Vec<Command> {
        self.rx.try_iter().collect()
    }
}

fn read_loop(stream: TcpStream, tx: Sender<Command>) {
    let reader = BufReader::new(stream);

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        let token = line.trim();
        if token.is_empty() {
            continue;
        }

        match parse_token(token) {
            Some(command) => {
                if tx.send(command).is_err() {
                    return; // game loop gone
                }
            }
            // Invalid commands are an adapter concern: log and discard,
            // never forward.
            None => debug::log("SOCKET", &format!("discarding unknown token {:?}", token)),
        }
    }

    // Connection lost or closed: equivalent to a sustained stop, not a crash.
    debug::log("SOCKET", "connection closed, stopping both paddles");
    let _ = tx.send(Command::Paddle1Stop);
    let _ = tx.send(Command::Paddle2Stop);
}

/// Token protocol of the original controller, one token per line.
pub fn parse_token(token: &str) -> Option<Command> {
    match token {
        "w" => Some(Command::Paddle1Up),
        "s" => Some(Command::Paddle1Down),
        "up" => Some(Command::Paddle2Up),
        "down" => Some(Command::Paddle2Down),
        "space" => Some(Command::Start),
        "y" => Some(Command::Continue),
        "quit" => Some(Command::Quit),
        _ => None,
    }
}
