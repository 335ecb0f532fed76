//! Keypad definitions for the browser frontend.
//!
//! The same 5×4 grid as the TUI keypad, expressed as DOM button
//! definitions: each button knows its element ID, label, grid position,
//! and the token it feeds the engine. An extension trait installs the
//! buttons into a [`MockDom`] so click paths are testable natively.

use super::dom::{DomElement, MockDom};
use crate::core::{BinaryOp, Token};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The token this button feeds the engine
    pub token: Token,
    /// The DOM element ID for this button
    pub id: String,
    /// The label rendered on the button
    pub label: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a button definition for a token at a grid position
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        Self {
            id: button_id(token),
            label: button_label(token),
            token,
            row,
            col,
        }
    }
}

/// The DOM element ID for a token's button
fn button_id(token: Token) -> String {
    match token {
        Token::Digit(d) => format!("btn-{d}"),
        Token::Point => "btn-decimal".to_string(),
        Token::Operator(op) => format!("btn-{}", op_name(op)),
        Token::SquareRoot => "btn-sqrt".to_string(),
        Token::ToggleSign => "btn-sign".to_string(),
        Token::Percent => "btn-percent".to_string(),
        Token::Equals => "btn-equals".to_string(),
        Token::Clear => "btn-clear".to_string(),
        Token::Backspace => "btn-delete".to_string(),
    }
}

/// The label rendered on a token's button
fn button_label(token: Token) -> String {
    match token {
        Token::Digit(d) => d.to_string(),
        Token::Point => ".".to_string(),
        Token::Operator(op) => op.symbol().to_string(),
        Token::SquareRoot => "√".to_string(),
        Token::ToggleSign => "±".to_string(),
        Token::Percent => "%".to_string(),
        Token::Equals => "=".to_string(),
        Token::Clear => "C".to_string(),
        Token::Backspace => "⌫".to_string(),
    }
}

/// A stable lowercase name for an operator, used in element IDs
fn op_name(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "add",
        BinaryOp::Subtract => "subtract",
        BinaryOp::Multiply => "multiply",
        BinaryOp::Divide => "divide",
        BinaryOp::Modulo => "modulo",
    }
}

/// The browser keypad: the TUI grid plus a backspace button the page
/// had room for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard keypad definitions
    #[must_use]
    pub fn new() -> Self {
        let layout: [[Token; 4]; 5] = [
            [
                Token::Digit(7),
                Token::Digit(8),
                Token::Digit(9),
                Token::Operator(BinaryOp::Divide),
            ],
            [
                Token::Digit(4),
                Token::Digit(5),
                Token::Digit(6),
                Token::Operator(BinaryOp::Multiply),
            ],
            [
                Token::Digit(1),
                Token::Digit(2),
                Token::Digit(3),
                Token::Operator(BinaryOp::Subtract),
            ],
            [
                Token::Digit(0),
                Token::Point,
                Token::Equals,
                Token::Operator(BinaryOp::Add),
            ],
            [
                Token::Clear,
                Token::ToggleSign,
                Token::SquareRoot,
                Token::Percent,
            ],
        ];

        let mut buttons = Vec::with_capacity(21);
        for (row, tokens) in layout.iter().enumerate() {
            for (col, &token) in tokens.iter().enumerate() {
                buttons.push(KeypadButtonDef::new(token, row, col));
            }
        }
        // Backspace sits beside the display, outside the grid
        buttons.push(KeypadButtonDef::new(Token::Backspace, 5, 0));

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns an iterator over all button definitions
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButtonDef> {
        self.buttons.iter()
    }

    /// Finds a button by its element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// The token fed by the button with the given element ID
    #[must_use]
    pub fn token_for_id(&self, id: &str) -> Option<Token> {
        self.find_by_id(id).map(|b| b.token)
    }

    /// Gets a button by grid position
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }
}

/// Installs keypad buttons into a mock page
pub trait MockDomKeypadExt {
    /// Adds one `<button>` per keypad definition under `#keypad`
    fn install_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn install_keypad(&mut self, keypad: &WasmKeypad) {
        let Some(container) = self.get_element_mut("keypad") else {
            return;
        };
        // Reloading an already-populated page keeps its buttons
        if !container.children.is_empty() {
            return;
        }
        for def in keypad.buttons() {
            container.children.push(
                DomElement::new("button")
                    .with_id(&def.id)
                    .with_text(&def.label)
                    .with_class("keypad-button"),
            );
        }
    }
}
