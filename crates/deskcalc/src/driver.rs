//! Unified calculator driver.
//!
//! One abstract interface over both frontends, so an interaction script
//! written once can be asserted against the TUI and the browser wiring
//! alike.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::core::{BinaryOp, Token};
//! use deskcalc::driver::CalculatorDriver;
//! use deskcalc::wasm::WasmDriver;
//!
//! fn verify_chained_fold<D: CalculatorDriver>(driver: &mut D) {
//!     driver.press_all(&[
//!         Token::Digit(3),
//!         Token::Operator(BinaryOp::Add),
//!         Token::Digit(4),
//!         Token::Equals,
//!     ]);
//!     assert_eq!(driver.current_display(), "7");
//! }
//!
//! let mut driver = WasmDriver::new();
//! verify_chained_fold(&mut driver);
//! ```

use crate::core::Token;
use crate::theme::Theme;

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

/// Abstract driver over a calculator frontend.
///
/// Both the TUI and the WASM wiring implement this, so test scripts can
/// run on either and compare the exact display strings a user would see.
pub trait CalculatorDriver {
    /// Feeds one token to the calculator
    fn press(&mut self, token: Token);

    /// Feeds a token sequence in order
    fn press_all(&mut self, tokens: &[Token]) {
        for &token in tokens {
            self.press(token);
        }
    }

    /// The lower readout field as rendered
    fn current_display(&self) -> String;

    /// The upper readout field as rendered
    fn previous_display(&self) -> String;

    /// Resets the calculator state
    fn clear(&mut self);

    /// The active theme
    fn theme(&self) -> Theme;

    /// Flips (and persists) the theme
    fn toggle_theme(&mut self);
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, Theme, Token};
    use crate::theme::ThemeStore;
    use crate::tui::CalculatorApp;

    /// Driver wrapping the TUI application state
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a driver over a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Creates a driver over an app persisting through the given store
        #[must_use]
        pub fn with_store(store: Box<dyn ThemeStore>) -> Self {
            Self {
                app: CalculatorApp::with_store(store),
            }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns the underlying app, mutably
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, token: Token) {
            self.app.press(token);
        }

        fn current_display(&self) -> String {
            self.app.current_line()
        }

        fn previous_display(&self) -> String {
            self.app.previous_line()
        }

        fn clear(&mut self) {
            self.app.press(Token::Clear);
        }

        fn theme(&self) -> Theme {
            self.app.theme()
        }

        fn toggle_theme(&mut self) {
            self.app.toggle_theme();
        }
    }
}
