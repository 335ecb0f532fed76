//! The operand/operator state machine.
//!
//! The engine is a finite-state accumulator over two decimal-string
//! operands and one pending binary operator. Operands stay strings
//! during entry so the display preserves exact keystrokes (trailing
//! points, typed zeros); they are parsed to `f64` only at the moment a
//! fold happens.
//!
//! States: Entering, OperatorPending, and a terminal fault state entered
//! on divide-by-zero or a negative square root. While faulted, every
//! operation except [`Engine::reset`] is a no-op; the display carries
//! the fault marker until an explicit clear.

use crate::core::format;
use crate::core::{BinaryOp, MathFault, Token};

/// Parses an operand, treating NaN text the same as unparseable input
fn parse_operand(operand: &str) -> Option<f64> {
    operand.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// The calculator engine state.
///
/// Constructed by whatever wires up an input adapter - there is no
/// ambient instance. Mutated exclusively through the methods below, all
/// synchronous; observed through plain accessors, so any renderer
/// (ratatui, DOM, test harness) can read it without the engine knowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    /// Operand being typed, or a fault marker
    current: String,
    /// Captured operand awaiting the second argument
    previous: String,
    /// Pending binary operator, if any
    operator: Option<BinaryOp>,
    /// Next digit/point input starts a fresh `current`
    reset_pending: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its initial state: `current = "0"`, nothing
    /// pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operator: None,
            reset_pending: false,
        }
    }

    /// The operand being typed (or the fault marker)
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The captured operand awaiting an operator's second argument
    #[must_use]
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// The pending binary operator
    #[must_use]
    pub fn operator(&self) -> Option<BinaryOp> {
        self.operator
    }

    /// True when the next digit/point input starts a fresh operand
    #[must_use]
    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// The fault this engine is stuck on, if any
    #[must_use]
    pub fn fault(&self) -> Option<MathFault> {
        MathFault::from_marker(&self.current)
    }

    /// Routes one input token to the matching operation
    pub fn apply(&mut self, token: Token) {
        match token {
            Token::Digit(digit) => self.input_digit(digit),
            Token::Point => self.input_point(),
            Token::Operator(op) => self.select_operator(op),
            Token::Equals => self.compute(),
            Token::SquareRoot => self.square_root(),
            Token::ToggleSign => self.toggle_sign(),
            Token::Percent => self.percent(),
            Token::Backspace => self.backspace(),
            Token::Clear => self.reset(),
        }
    }

    /// Returns to the initial state, clearing any fault
    pub fn reset(&mut self) {
        self.current = "0".to_string();
        self.previous.clear();
        self.operator = None;
        self.reset_pending = false;
    }

    /// Removes the last typed character; a lone character becomes "0"
    pub fn backspace(&mut self) {
        if self.fault().is_some() || self.current == "0" {
            return;
        }
        if self.current.len() <= 1 {
            self.current = "0".to_string();
        } else {
            self.current.pop();
        }
    }

    /// Appends a digit, replacing a leading "0"
    pub fn input_digit(&mut self, digit: u8) {
        if self.fault().is_some() || digit > 9 {
            return;
        }
        self.begin_entry();
        if self.current == "0" {
            self.current.clear();
        }
        self.current.push(char::from(b'0' + digit));
    }

    /// Appends the decimal point; a second point in one operand is ignored
    pub fn input_point(&mut self) {
        if self.fault().is_some() {
            return;
        }
        self.begin_entry();
        if self.current.contains('.') {
            return;
        }
        self.current.push('.');
    }

    /// Selects a binary operator, folding any already-pending pair first.
    ///
    /// This is what makes chained entry (`3 + 4 + 5`) fold left to right
    /// with no precedence.
    pub fn select_operator(&mut self, op: BinaryOp) {
        if self.fault().is_some() || self.current.is_empty() {
            return;
        }
        if !self.previous.is_empty() {
            self.compute();
            if self.fault().is_some() {
                return;
            }
        }
        self.operator = Some(op);
        self.previous = self.current.clone();
        self.reset_pending = true;
    }

    /// Folds `previous ⟨op⟩ current` into a fresh `current`.
    ///
    /// No-op unless an operator is pending and both operands parse. A
    /// zero divisor trips the terminal fault state instead of producing
    /// a value.
    pub fn compute(&mut self) {
        if self.fault().is_some() {
            return;
        }
        let Some(op) = self.operator else {
            return;
        };
        let (Some(lhs), Some(rhs)) = (
            parse_operand(&self.previous),
            parse_operand(&self.current),
        ) else {
            return;
        };

        match op.apply(lhs, rhs) {
            Ok(value) => {
                self.current = format::stringify_result(value);
                self.previous.clear();
                self.operator = None;
                self.reset_pending = true;
            }
            Err(fault) => {
                self.current = fault.marker().to_string();
                self.previous.clear();
                self.operator = None;
            }
        }
    }

    /// Replaces the operand with its square root.
    ///
    /// A negative operand trips the terminal fault state. Results run
    /// through the same formatting pass as binary folds.
    pub fn square_root(&mut self) {
        if self.fault().is_some() {
            return;
        }
        let Some(value) = parse_operand(&self.current) else {
            return;
        };
        if value < 0.0 {
            self.current = MathFault::ImaginaryRoot.marker().to_string();
            return;
        }
        self.current = format::stringify_result(value.sqrt());
        self.reset_pending = true;
    }

    /// Divides the operand by 100 in place; entry continues afterwards
    pub fn percent(&mut self) {
        if self.fault().is_some() {
            return;
        }
        let Some(value) = parse_operand(&self.current) else {
            return;
        };
        self.current = (value / 100.0).to_string();
    }

    /// Negates the operand in place; "0" is left alone
    pub fn toggle_sign(&mut self) {
        if self.fault().is_some() || self.current == "0" {
            return;
        }
        let Some(value) = parse_operand(&self.current) else {
            return;
        };
        let negated = -value;
        self.current = if negated == 0.0 {
            "0".to_string()
        } else {
            negated.to_string()
        };
    }

    /// The lower display line: the current operand, formatted
    #[must_use]
    pub fn display_current(&self) -> String {
        format::display_operand(&self.current)
    }

    /// The upper display line: the pending operand and operator symbol,
    /// or empty when nothing pends
    #[must_use]
    pub fn display_previous(&self) -> String {
        match self.operator {
            Some(op) => format!(
                "{} {}",
                format::display_operand(&self.previous),
                op.symbol()
            ),
            None => String::new(),
        }
    }

    /// Consumes a pending fresh-entry flag before digit/point input
    fn begin_entry(&mut self) {
        if self.reset_pending {
            self.current.clear();
            self.reset_pending = false;
        }
    }
}
