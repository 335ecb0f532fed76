//! Calculator core: tokens, faults, and the operand/operator engine.
//!
//! Everything here is plain data plus synchronous transitions; frontends
//! feed [`Token`]s in and read two display strings back out.

pub mod engine;
pub mod format;
mod ops;

pub use engine::Engine;
pub use ops::BinaryOp;

use thiserror::Error;

/// Arithmetic faults that put the engine into its terminal display state.
///
/// The display shows the marker text in place of a numeric operand; no
/// further input is accepted until an explicit clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathFault {
    /// A binary division whose divisor was exactly zero
    #[error("Division by zero")]
    DivisionByZero,
    /// A square root of a negative operand
    #[error("Imaginary number")]
    ImaginaryRoot,
}

impl MathFault {
    /// The literal marker string shown in place of the operand
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Division by zero",
            Self::ImaginaryRoot => "Imaginary number",
        }
    }

    /// Recognizes an operand string that carries a fault marker
    #[must_use]
    pub fn from_marker(operand: &str) -> Option<Self> {
        [Self::DivisionByZero, Self::ImaginaryRoot]
            .into_iter()
            .find(|fault| fault.marker() == operand)
    }
}

/// One discrete input event, as forwarded by an input adapter.
///
/// Keypad buttons, keyboard events, and DOM events all map onto this
/// enum; the engine never sees where a token came from. Note that
/// [`Token::Operator`]`(`[`BinaryOp::Modulo`]`)` is the binary remainder
/// and [`Token::Percent`] the immediate divide-by-100 - the two share a
/// `%` glyph, adapters keep them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A digit key, 0 through 9
    Digit(u8),
    /// The decimal point key
    Point,
    /// A binary operator key
    Operator(BinaryOp),
    /// The square-root unary key
    SquareRoot,
    /// The sign-toggle unary key
    ToggleSign,
    /// The percent unary key (immediate divide by 100)
    Percent,
    /// The equals key
    Equals,
    /// The clear key
    Clear,
    /// The backspace/delete key
    Backspace,
}
