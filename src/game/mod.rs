pub mod ball;
pub mod input;
pub mod session;
pub mod state;

pub use ball::{Ball, TickEvents};
pub use input::{poll_commands, Command, KeyMap};
pub use session::{MatchEvents, MatchSession, Phase, RectF, Snapshot};
pub use state::{Paddle, Player, Score};
