// File-based diagnostic logging, enabled with --debug.
// The TUI owns stdout/stderr while the game runs, so diagnostics go to a
// side file that can be tailed from another terminal.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

const DEFAULT_LOG_PATH: &str = "/tmp/termpong-debug.log";

fn log_path() -> String {
    std::env::var("TERMPONG_LOG").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string())
}

/// Enable or disable diagnostic logging. When enabled, truncates the log
/// file and writes a session header; when disabled, `log` is a no-op and no
/// file is touched.
pub fn init(enabled: bool) -> io::Result<()> {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);

    if !enabled {
        return Ok(());
    }

    let path = log_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    writeln!(file, "=== termpong session {:?} ===", SystemTime::now())?;
    writeln!(file, "monitor with: tail -f {}\n", path)?;

    Ok(())
}

/// Append `[timestamp] [CATEGORY] message` to the log file. Safe to call
/// from the socket reader thread; appends are atomic at the fs level.
pub fn log(category: &str, message: &str) {
    if !DEBUG_ENABLED.load(Ordering::Relaxed) {
        return;
    }

    let timestamp = SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path()) {
        let _ = writeln!(file, "[{:013}] [{}] {}", timestamp, category, message);
    }
}
