//! TUI application state.
//!
//! Owns the engine, the keypad highlight state, and the theme with its
//! injected persistence capability. The event loop feeds it
//! [`KeyAction`]s; rendering reads the two display lines back out.

use tracing::{debug, warn};

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::core::{Engine, Token};
use crate::theme::{MemoryStore, Theme, ThemeStore};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The calculator engine
    engine: Engine,
    /// Keypad highlight state
    keypad: Keypad,
    /// Active display theme
    theme: Theme,
    /// Injected preference persistence
    store: Box<dyn ThemeStore>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with an in-memory preference store
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Creates an app persisting its theme through the given store.
    ///
    /// A failing or empty store falls back to the default theme; the
    /// failure is logged, never surfaced.
    #[must_use]
    pub fn with_store(store: Box<dyn ThemeStore>) -> Self {
        let theme = match store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(%err, "theme preference unavailable, using default");
                Theme::default()
            }
        };
        Self {
            engine: Engine::new(),
            keypad: Keypad::new(),
            theme,
            store,
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the keypad highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The upper display line (pending operand and operator)
    #[must_use]
    pub fn previous_line(&self) -> String {
        self.engine.display_previous()
    }

    /// The lower display line (current operand)
    #[must_use]
    pub fn current_line(&self) -> String {
        self.engine.display_current()
    }

    /// Feeds one token to the engine and highlights its keypad button
    pub fn press(&mut self, token: Token) {
        self.engine.apply(token);
        self.keypad.highlight_token(token);
        debug!(?token, current = %self.engine.current(), "token applied");
    }

    /// Applies a mapped key action
    pub fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(token) => self.press(token),
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Flips the theme and persists the preference.
    ///
    /// Persistence failures are logged and ignored - the toggle itself
    /// always takes effect.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "theme toggled");
        if let Err(err) = self.store.save(self.theme) {
            warn!(%err, "failed to persist theme preference");
        }
    }
}
