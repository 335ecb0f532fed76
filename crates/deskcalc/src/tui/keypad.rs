//! Clickable keypad for the TUI frontend.
//!
//! A 5×4 grid of buttons matching the browser page's layout: digits
//! with the four primary binaries down the right-hand column, and the
//! bottom row carrying clear, sign toggle, square root, and percent.
//! Buttons map straight onto engine tokens, support mouse hit-testing,
//! and highlight when their key is pressed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use super::ui::Palette;
use crate::core::{BinaryOp, Token};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The glyph on the button
    pub label: char,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The token this button feeds the engine
    pub token: Token,
}

impl KeypadButton {
    /// Creates a digit button
    #[must_use]
    pub fn digit(digit: u8) -> Self {
        Self {
            label: char::from_digit(u32::from(digit), 10).unwrap_or('?'),
            pressed: false,
            token: Token::Digit(digit),
        }
    }

    /// Creates the decimal point button
    #[must_use]
    pub fn point() -> Self {
        Self {
            label: '.',
            pressed: false,
            token: Token::Point,
        }
    }

    /// Creates a binary operator button
    #[must_use]
    pub fn operator(op: BinaryOp) -> Self {
        let label = match op {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '×',
            BinaryOp::Divide => '÷',
            BinaryOp::Modulo => '%',
        };
        Self {
            label,
            pressed: false,
            token: Token::Operator(op),
        }
    }

    /// Creates the equals button
    #[must_use]
    pub fn equals() -> Self {
        Self {
            label: '=',
            pressed: false,
            token: Token::Equals,
        }
    }

    /// Creates the clear button
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: 'C',
            pressed: false,
            token: Token::Clear,
        }
    }

    /// Creates the sign-toggle button
    #[must_use]
    pub fn toggle_sign() -> Self {
        Self {
            label: '±',
            pressed: false,
            token: Token::ToggleSign,
        }
    }

    /// Creates the square-root button
    #[must_use]
    pub fn square_root() -> Self {
        Self {
            label: '√',
            pressed: false,
            token: Token::SquareRoot,
        }
    }

    /// Creates the unary percent button
    #[must_use]
    pub fn percent() -> Self {
        Self {
            label: '%',
            pressed: false,
            token: Token::Percent,
        }
    }

    /// Sets the highlight state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout - a 5x4 grid of buttons
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
/// [ 4 ] [ 5 ] [ 6 ] [ × ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// [ C ] [ ± ] [ √ ] [ % ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order (5 rows x 4 cols)
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: 7 8 9 ÷
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(BinaryOp::Divide),
            // Row 2: 4 5 6 ×
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(BinaryOp::Multiply),
            // Row 3: 1 2 3 -
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(BinaryOp::Subtract),
            // Row 4: 0 . = +
            KeypadButton::digit(0),
            KeypadButton::point(),
            KeypadButton::equals(),
            KeypadButton::operator(BinaryOp::Add),
            // Row 5: C ± √ %
            KeypadButton::clear(),
            KeypadButton::toggle_sign(),
            KeypadButton::square_root(),
            KeypadButton::percent(),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the index of the button feeding the given token
    #[must_use]
    pub fn find_button_by_token(&self, token: Token) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Releases every button
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.set_pressed(false);
        }
    }

    /// Highlights the button feeding the given token, releasing the rest
    pub fn highlight_token(&mut self, token: Token) {
        self.release_all();
        if let Some(index) = self.find_button_by_token(token) {
            if let Some(button) = self.buttons.get_mut(index) {
                button.set_pressed(true);
            }
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, button)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), button)
        })
    }

    /// Converts a click position inside the rendered area to the token
    /// of the button under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Token> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // The outer border is not clickable
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        self.get_button_at(row, col).map(|b| b.token)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    palette: &'a Palette,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget styled by the given palette
    #[must_use]
    pub fn new(keypad: &'a Keypad, palette: &'a Palette) -> Self {
        Self { keypad, palette }
    }

    fn button_style(&self, button: &KeypadButton) -> Style {
        if button.pressed {
            return Style::default()
                .fg(self.palette.pressed_fg)
                .bg(self.palette.pressed_bg)
                .add_modifier(Modifier::BOLD);
        }
        match button.token {
            Token::Digit(_) | Token::Point => Style::default().fg(self.palette.digit),
            Token::Operator(_) | Token::SquareRoot | Token::ToggleSign | Token::Percent => {
                Style::default().fg(self.palette.operator)
            }
            Token::Equals => Style::default().fg(self.palette.equals),
            Token::Clear | Token::Backspace => Style::default().fg(self.palette.clear),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), button) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);
            let style = self.button_style(button);

            if btn_width >= 3 {
                let label = format!("[{}]", button.label);
                let label_x = x + (btn_width.saturating_sub(3)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
