use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use termpong::net::SocketAdapter;
use termpong::{config, debug, modes};

struct Options {
    debug: bool,
    socket: bool,
    address: Option<String>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    debug::init(options.debug).context("failed to initialize debug log")?;
    let config = config::load_config().context("failed to load configuration")?;

    // Connect before taking over the terminal so a refused connection stays
    // readable instead of corrupting the alternate screen.
    let socket = if options.socket {
        let address = options
            .address
            .clone()
            .unwrap_or_else(|| config.socket.address.clone());
        let adapter = SocketAdapter::connect(&address)
            .with_context(|| format!("failed to connect to controller at {}", address))?;
        Some(adapter)
    } else {
        None
    };

    // Setup terminal
    enable_raw_mode().context("failed to enable raw terminal mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Key release events (paddle stop on key-up) need the enhanced keyboard
    // protocol; push it where the terminal supports it.
    let enhanced_keys = matches!(supports_keyboard_enhancement(), Ok(true));
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run game
    let result = match socket {
        Some(socket) => modes::run_socket(&mut terminal, &config, socket),
        None => modes::run_local(&mut terminal, &config),
    };

    // Restore terminal
    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("game loop failed")
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        debug: false,
        socket: false,
        address: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--debug" => options.debug = true,
            "--socket" | "-n" => {
                options.socket = true;
                // Optional address argument after the flag
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    options.address = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

fn print_usage(program: &str) {
    println!("termpong - two-player Pong for the terminal");
    println!();
    println!("Usage:");
    println!("  {}                        # Local two-player (W/S and Up/Down)", program);
    println!("  {} --socket [addr]        # Also accept commands from a TCP controller", program);
    println!("  {} --debug                # Write diagnostics to /tmp/termpong-debug.log", program);
    println!();
    println!("The socket controller sends one token per line: w, s, up, down,");
    println!("space, y, quit. Default address is localhost:8888 (configurable).");
}
