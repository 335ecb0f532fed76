//! Browser bindings over web-sys.
//!
//! The real-page mirror of [`super::WasmCalculator`]: the host page
//! registers its own event listeners and forwards clicks and key
//! presses here; this side owns the engine, keeps the two readout
//! elements in sync, and persists the theme in `localStorage` under
//! [`Theme::STORAGE_KEY`].

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::calculator::token_for_key;
use super::keypad::WasmKeypad;
use crate::core::Engine;
use crate::theme::Theme;

/// Browser calculator - the WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    engine: Engine,
    keypad: WasmKeypad,
    theme: Theme,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator, restoring any stored theme preference
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        let theme = load_stored_theme().unwrap_or_default();
        let calculator = Self {
            engine: Engine::new(),
            keypad: WasmKeypad::new(),
            theme,
        };
        calculator.apply_theme_class();
        calculator.sync_display();
        calculator
    }

    /// The lower readout field
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn current_display(&self) -> String {
        self.engine.display_current()
    }

    /// The upper readout field
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn previous_display(&self) -> String {
        self.engine.display_previous()
    }

    /// The active theme name ("light" or "dark")
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn theme_name(&self) -> String {
        self.theme.name().to_string()
    }

    /// Handles a click on the element with the given ID.
    ///
    /// Returns true when the ID mapped to a button or the theme toggle.
    pub fn click(&mut self, id: &str) -> bool {
        if id == "theme-toggle" {
            self.toggle_theme();
            return true;
        }
        match self.keypad.token_for_id(id) {
            Some(token) => {
                self.engine.apply(token);
                self.sync_display();
                true
            }
            None => false,
        }
    }

    /// Handles a document-level `KeyboardEvent.key` value.
    ///
    /// Returns true when the key mapped to a token (the page should
    /// `preventDefault()` in that case).
    pub fn press_key(&mut self, key: &str) -> bool {
        match token_for_key(key) {
            Some(token) => {
                self.engine.apply(token);
                self.sync_display();
                true
            }
            None => false,
        }
    }

    /// Flips the theme, persists it, and swaps the body classes
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        store_theme(self.theme);
        self.apply_theme_class();
    }

    /// Writes both readout fields into the page
    pub fn sync_display(&self) {
        set_element_text("current-operand", &self.engine.display_current());
        set_element_text("previous-operand", &self.engine.display_previous());
    }
}

impl BrowserCalculator {
    fn apply_theme_class(&self) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let classes = body.class_list();
        let _ = classes.remove_1("light-theme");
        let _ = classes.remove_1("dark-theme");
        let class = match self.theme {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        };
        if classes.add_1(class).is_err() {
            console::warn_1(&"failed to apply theme class".into());
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the stored theme preference from `localStorage`
fn load_stored_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(Theme::STORAGE_KEY).ok()??;
    Theme::from_name(&value)
}

/// Persists the theme preference; storage failures only warn
fn store_theme(theme: Theme) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        console::warn_1(&"localStorage unavailable, theme not persisted".into());
        return;
    };
    if storage.set_item(Theme::STORAGE_KEY, theme.name()).is_err() {
        console::warn_1(&"failed to persist theme preference".into());
    }
}

/// Sets an element's text content by ID, if the element exists
fn set_element_text(id: &str, text: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.set_text_content(Some(text));
    }
}
