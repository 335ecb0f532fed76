//! Browser-ready calculator over the mock DOM.
//!
//! [`WasmCalculator`] is the whole page wiring - engine, keypad, theme,
//! display sync - expressed against [`MockDom`] so it runs natively in
//! tests. The `wasm` feature's [`super::BrowserCalculator`] mirrors this
//! contract over web-sys.

use tracing::warn;

use super::dom::{DomEvent, MockDom};
use super::keypad::{MockDomKeypadExt, WasmKeypad};
use crate::core::{BinaryOp, Engine, Token};
use crate::theme::{Theme, ThemeStore};

/// Maps a DOM `KeyboardEvent.key` value onto an engine token.
///
/// `*` is ×, `/` is ÷, Enter and `=` compute, Escape clears, `%` is the
/// unary percent, `r` the square root, `m` the binary remainder, `n`
/// the sign toggle - the same bindings the TUI uses.
#[must_use]
pub fn token_for_key(key: &str) -> Option<Token> {
    match key {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
            key.bytes().next().map(|b| Token::Digit(b - b'0'))
        }
        "." => Some(Token::Point),
        "+" => Some(Token::Operator(BinaryOp::Add)),
        "-" => Some(Token::Operator(BinaryOp::Subtract)),
        "*" => Some(Token::Operator(BinaryOp::Multiply)),
        "/" => Some(Token::Operator(BinaryOp::Divide)),
        "m" => Some(Token::Operator(BinaryOp::Modulo)),
        "%" => Some(Token::Percent),
        "r" | "R" => Some(Token::SquareRoot),
        "n" => Some(Token::ToggleSign),
        "Enter" | "=" => Some(Token::Equals),
        "Backspace" => Some(Token::Backspace),
        "Escape" => Some(Token::Clear),
        _ => None,
    }
}

/// The calculator page, wired against the mock DOM
#[derive(Debug)]
pub struct WasmCalculator {
    /// The calculator engine
    engine: Engine,
    /// Button definitions
    keypad: WasmKeypad,
    /// Active theme
    theme: Theme,
    /// The observable page
    dom: MockDom,
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmCalculator {
    /// Creates a calculator over a fresh page with no stored preference
    #[must_use]
    pub fn new() -> Self {
        Self::with_dom(MockDom::calculator())
    }

    /// Creates a calculator over an existing page, honoring any theme
    /// preference already in its storage slot
    #[must_use]
    pub fn with_dom(mut dom: MockDom) -> Self {
        let keypad = WasmKeypad::new();
        dom.install_keypad(&keypad);

        let theme = match dom.load() {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) => {
                warn!(%err, "theme preference unavailable, using default");
                Theme::default()
            }
        };

        let mut calculator = Self {
            engine: Engine::new(),
            keypad,
            theme,
            dom,
        };
        calculator.apply_theme_class();
        calculator.sync_display();
        calculator
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the keypad definitions
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Returns the active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the page, mutably
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Feeds one token to the engine and refreshes the readout
    pub fn press(&mut self, token: Token) {
        self.engine.apply(token);
        self.sync_display();
    }

    /// Feeds a token sequence in order
    pub fn press_all(&mut self, tokens: &[Token]) {
        for &token in tokens {
            self.press(token);
        }
    }

    /// Simulates a click on the element with the given ID.
    ///
    /// Keypad buttons feed their token; the theme toggle flips the
    /// theme. Returns false for IDs that map to nothing.
    pub fn click(&mut self, id: &str) -> bool {
        self.dom.dispatch_event(DomEvent::click(id));
        if id == "theme-toggle" {
            self.toggle_theme();
            return true;
        }
        match self.keypad.token_for_id(id) {
            Some(token) => {
                self.press(token);
                true
            }
            None => false,
        }
    }

    /// Simulates a document-level key press.
    ///
    /// Returns false for keys the page ignores.
    pub fn press_key(&mut self, key: &str) -> bool {
        self.dom.dispatch_event(DomEvent::keydown(key));
        match token_for_key(key) {
            Some(token) => {
                self.press(token);
                true
            }
            None => false,
        }
    }

    /// Flips the theme, persists it to the page's storage slot, and
    /// updates the body classes
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(err) = self.dom.save(self.theme) {
            warn!(%err, "failed to persist theme preference");
        }
        self.apply_theme_class();
    }

    /// The lower readout field, as shown on the page
    #[must_use]
    pub fn current_display(&self) -> String {
        self.dom
            .text("current-operand")
            .unwrap_or_default()
            .to_string()
    }

    /// The upper readout field, as shown on the page
    #[must_use]
    pub fn previous_display(&self) -> String {
        self.dom
            .text("previous-operand")
            .unwrap_or_default()
            .to_string()
    }

    fn apply_theme_class(&mut self) {
        let body = self.dom.body_mut();
        body.remove_class("light-theme");
        body.remove_class("dark-theme");
        match self.theme {
            Theme::Light => body.add_class("light-theme"),
            Theme::Dark => body.add_class("dark-theme"),
        }
        self.dom.set_text("theme-toggle", self.theme.name());
    }

    fn sync_display(&mut self) {
        let current = self.engine.display_current();
        let previous = self.engine.display_previous();
        self.dom.set_text("current-operand", &current);
        self.dom.set_text("previous-operand", &previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MathFault;

    // ===== Construction =====

    #[test]
    fn test_new_shows_initial_display() {
        let calc = WasmCalculator::new();
        assert_eq!(calc.current_display(), "0");
        assert_eq!(calc.previous_display(), "");
        assert_eq!(calc.theme(), Theme::Dark);
        assert!(calc.dom().body().has_class("dark-theme"));
    }

    #[test]
    fn test_with_dom_honors_stored_theme() {
        let mut dom = MockDom::calculator();
        dom.storage_set(Theme::STORAGE_KEY, "light");
        let calc = WasmCalculator::with_dom(dom);
        assert_eq!(calc.theme(), Theme::Light);
        assert!(calc.dom().body().has_class("light-theme"));
    }

    #[test]
    fn test_with_dom_ignores_garbage_theme() {
        let mut dom = MockDom::calculator();
        dom.storage_set(Theme::STORAGE_KEY, "sepia");
        let calc = WasmCalculator::with_dom(dom);
        assert_eq!(calc.theme(), Theme::Dark);
    }

    #[test]
    fn test_keypad_installed_into_dom() {
        let calc = WasmCalculator::new();
        assert!(calc.dom().get_element("btn-7").is_some());
        assert!(calc.dom().get_element("btn-equals").is_some());
    }

    // ===== Key mapping =====

    #[test]
    fn test_token_for_key_digits() {
        for d in 0..=9u8 {
            assert_eq!(token_for_key(&d.to_string()), Some(Token::Digit(d)));
        }
    }

    #[test]
    fn test_token_for_key_operators() {
        assert_eq!(token_for_key("*"), Some(Token::Operator(BinaryOp::Multiply)));
        assert_eq!(token_for_key("/"), Some(Token::Operator(BinaryOp::Divide)));
        assert_eq!(token_for_key("m"), Some(Token::Operator(BinaryOp::Modulo)));
    }

    #[test]
    fn test_token_for_key_percent_is_unary() {
        assert_eq!(token_for_key("%"), Some(Token::Percent));
    }

    #[test]
    fn test_token_for_key_controls() {
        assert_eq!(token_for_key("Enter"), Some(Token::Equals));
        assert_eq!(token_for_key("="), Some(Token::Equals));
        assert_eq!(token_for_key("Backspace"), Some(Token::Backspace));
        assert_eq!(token_for_key("Escape"), Some(Token::Clear));
        assert_eq!(token_for_key("r"), Some(Token::SquareRoot));
    }

    #[test]
    fn test_token_for_key_unknown() {
        assert_eq!(token_for_key("F1"), None);
        assert_eq!(token_for_key("a"), None);
        assert_eq!(token_for_key(""), None);
    }

    // ===== Clicks =====

    #[test]
    fn test_click_buttons_compute() {
        let mut calc = WasmCalculator::new();
        for id in ["btn-3", "btn-add", "btn-4", "btn-equals"] {
            assert!(calc.click(id));
        }
        assert_eq!(calc.current_display(), "7");
    }

    #[test]
    fn test_click_records_events() {
        let mut calc = WasmCalculator::new();
        calc.click("btn-1");
        assert_eq!(calc.dom().events().last(), Some(&DomEvent::click("btn-1")));
    }

    #[test]
    fn test_click_unknown_id() {
        let mut calc = WasmCalculator::new();
        assert!(!calc.click("btn-bogus"));
        assert_eq!(calc.current_display(), "0");
    }

    #[test]
    fn test_pending_line_updates_on_click() {
        let mut calc = WasmCalculator::new();
        calc.click("btn-8");
        calc.click("btn-divide");
        assert_eq!(calc.previous_display(), "8 ÷");
    }

    // ===== Keys =====

    #[test]
    fn test_press_key_sequence() {
        let mut calc = WasmCalculator::new();
        for key in ["1", "2", ".", "5"] {
            assert!(calc.press_key(key));
        }
        assert_eq!(calc.current_display(), "12.5");
    }

    #[test]
    fn test_press_key_ignored() {
        let mut calc = WasmCalculator::new();
        assert!(!calc.press_key("x"));
        assert_eq!(calc.current_display(), "0");
    }

    #[test]
    fn test_escape_clears() {
        let mut calc = WasmCalculator::new();
        calc.press_key("9");
        calc.press_key("Escape");
        assert_eq!(calc.current_display(), "0");
    }

    // ===== Display sync =====

    #[test]
    fn test_display_groups_thousands() {
        let mut calc = WasmCalculator::new();
        for key in ["1", "2", "3", "4", "5", "6", "7"] {
            calc.press_key(key);
        }
        assert_eq!(calc.current_display(), "1,234,567");
    }

    #[test]
    fn test_fault_marker_reaches_page() {
        let mut calc = WasmCalculator::new();
        calc.press_all(&[
            Token::Digit(8),
            Token::Operator(BinaryOp::Divide),
            Token::Digit(0),
            Token::Equals,
        ]);
        assert_eq!(calc.current_display(), "Division by zero");
        assert_eq!(calc.engine().fault(), Some(MathFault::DivisionByZero));
        assert_eq!(calc.previous_display(), "");
    }

    // ===== Theme =====

    #[test]
    fn test_theme_toggle_click() {
        let mut calc = WasmCalculator::new();
        assert!(calc.click("theme-toggle"));
        assert_eq!(calc.theme(), Theme::Light);
        assert!(calc.dom().body().has_class("light-theme"));
        assert!(!calc.dom().body().has_class("dark-theme"));
        assert_eq!(
            calc.dom().storage_get(Theme::STORAGE_KEY),
            Some("light")
        );
    }

    #[test]
    fn test_theme_persists_across_page_loads() {
        let mut calc = WasmCalculator::new();
        calc.click("theme-toggle");

        // Carry the page (with its storage) into a fresh calculator,
        // like a reload would
        let reloaded = WasmCalculator::with_dom(calc.dom().clone());
        assert_eq!(reloaded.theme(), Theme::Light);
    }

    #[test]
    fn test_theme_toggle_updates_button() {
        let mut calc = WasmCalculator::new();
        assert_eq!(calc.dom().text("theme-toggle"), Some("dark"));
        calc.toggle_theme();
        assert_eq!(calc.dom().text("theme-toggle"), Some("light"));
    }
}
