//! Helpers shared by the game mode loops.

use std::time::Instant;

use crate::debug;
use crate::game::MatchEvents;
use crate::FRAME_DURATION;

/// Apply frame rate limiting to maintain consistent game speed.
///
/// Called at the end of each game loop iteration; sleeps for the remaining
/// frame budget so every mode runs at the same fixed rate.
pub fn limit_frame_rate(frame_start: Instant) {
    let elapsed = frame_start.elapsed();
    if elapsed < FRAME_DURATION {
        std::thread::sleep(FRAME_DURATION - elapsed);
    }
}

/// Record the tick's notable events in the debug log. This is where an audio
/// backend would hook in; the simulation itself never touches sound.
pub fn log_events(events: &MatchEvents) {
    if events.paddle_bounce {
        debug::log("BOUNCE", "paddle");
    }
    if events.wall_bounce {
        debug::log("BOUNCE", "wall");
    }
    if let Some(loser) = events.point_lost {
        debug::log(
            "SCORE",
            &format!("player {} conceded a point", loser.number()),
        );
    }
    if let Some((winner, (score1, score2))) = events.match_won {
        debug::log(
            "MATCH",
            &format!("player {} wins {} - {}", winner.number(), score1, score2),
        );
    }
}
