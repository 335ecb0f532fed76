//! deskcalc - Keypad Calculator
//!
//! A keypad-style arithmetic calculator built around one pure state
//! machine and rendered by interchangeable frontends:
//!
//! - **Engine**: two decimal-string operands, one pending operator, a
//!   display-formatting pass. No UI toolkit anywhere near it.
//! - **TUI** (`tui` feature, default): ratatui frontend with a clickable
//!   keypad and the keyboard map of a desk calculator.
//! - **WASM** (`wasm` feature): wasm-bindgen browser bindings. A mock
//!   DOM is always compiled so the browser wiring is testable natively.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! for token in [
//!     Token::Digit(3),
//!     Token::Operator(BinaryOp::Add),
//!     Token::Digit(4),
//!     Token::Operator(BinaryOp::Add),
//!     Token::Digit(5),
//!     Token::Equals,
//! ] {
//!     engine.apply(token);
//! }
//! // Chained entry folds left to right, no precedence.
//! assert_eq!(engine.current(), "12");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod theme;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{BinaryOp, Engine, MathFault, Token};
    pub use crate::driver::CalculatorDriver;
    pub use crate::theme::{MemoryStore, Theme, ThemeStore};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmCalculator, WasmDriver};
}
