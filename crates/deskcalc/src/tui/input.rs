//! Keyboard input handling for the TUI frontend.
//!
//! Maps crossterm key events onto engine tokens plus the few
//! frontend-only actions (theme toggle, quit). Same bindings as the
//! browser frontend: `*` and `/` land on × and ÷, Enter and `=`
//! compute, Escape clears, `%` is the unary percent and `r` the square
//! root; `m` carries the binary remainder, `n` the sign toggle, `t` the
//! theme.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{BinaryOp, Token};

/// Actions a key press can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a token to the engine
    Input(Token),
    /// Flip and persist the theme
    ToggleTheme,
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => {
                KeyAction::Input(Token::Digit(c as u8 - b'0'))
            }
            KeyCode::Char('.') => KeyAction::Input(Token::Point),
            KeyCode::Char('+') => KeyAction::Input(Token::Operator(BinaryOp::Add)),
            KeyCode::Char('-') => KeyAction::Input(Token::Operator(BinaryOp::Subtract)),
            KeyCode::Char('*') => KeyAction::Input(Token::Operator(BinaryOp::Multiply)),
            KeyCode::Char('/') => KeyAction::Input(Token::Operator(BinaryOp::Divide)),
            KeyCode::Char('m') => KeyAction::Input(Token::Operator(BinaryOp::Modulo)),
            KeyCode::Char('%') => KeyAction::Input(Token::Percent),
            KeyCode::Char('r' | 'R') => KeyAction::Input(Token::SquareRoot),
            KeyCode::Char('n') => KeyAction::Input(Token::ToggleSign),
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Input(Token::Equals),
            KeyCode::Char('c' | 'C') | KeyCode::Esc => KeyAction::Input(Token::Clear),
            KeyCode::Backspace => KeyAction::Input(Token::Backspace),
            KeyCode::Char('t') => KeyAction::ToggleTheme,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
