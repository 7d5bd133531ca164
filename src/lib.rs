//! termpong: the classic two-paddle arcade game in the terminal.
//!
//! The simulation core ([`game`]) is a fixed-rate tick machine that consumes
//! abstract paddle commands and exposes render snapshots and score events;
//! keyboard and socket adapters feed it, and the ratatui layer ([`ui`])
//! draws it. The core never touches the terminal, the network, or audio.

pub mod config;
pub mod debug;
pub mod game;
pub mod modes;
pub mod net;
pub mod ui;

use std::time::Duration;

/// Simulation and render rate. One tick is 1/60 s.
pub const TARGET_FPS: u64 = 60;
pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / TARGET_FPS);
