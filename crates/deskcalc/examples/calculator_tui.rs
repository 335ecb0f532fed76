//! Calculator TUI.
//!
//! Run with: cargo run --example calculator_tui
//!
//! Keys follow the help sidebar; keypad buttons are clickable. Set
//! `DESKCALC_LOG=<file>` to capture tracing output, and
//! `DESKCALC_PREFS=<file>` to relocate the persisted theme preference.

use std::io;
use std::path::{Path, PathBuf};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use deskcalc::theme::JsonFileStore;
use deskcalc::tui::{keypad_area, render, CalculatorApp, InputHandler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Logs to a file when `DESKCALC_LOG` names one; stderr would tear up
/// the alternate screen
fn init_tracing() {
    let Ok(path) = std::env::var("DESKCALC_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("deskcalc=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Where the theme preference lives
fn prefs_path() -> PathBuf {
    if let Some(path) = std::env::var_os("DESKCALC_PREFS") {
        return path.into();
    }
    match std::env::var_os("HOME") {
        Some(home) => Path::new(&home).join(".deskcalc.json"),
        None => std::env::temp_dir().join("deskcalc-prefs.json"),
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::new(prefs_path());
    let mut app = CalculatorApp::with_store(Box::new(store));
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        match event::read()? {
            Event::Key(key) => {
                app.apply_action(input_handler.handle_key(key));
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    let keypad_rect = keypad_area(area);
                    if let Some(token) =
                        app.keypad().hit_test(keypad_rect, mouse.column, mouse.row)
                    {
                        app.press(token);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
