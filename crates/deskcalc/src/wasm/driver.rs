//! WASM driver implementing the unified testing interface.

use super::calculator::WasmCalculator;
use super::dom::MockDom;
use crate::core::Token;
use crate::driver::CalculatorDriver;
use crate::theme::Theme;

/// Driver wrapping the browser wiring over the mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    calculator: WasmCalculator,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over a fresh page
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: WasmCalculator::new(),
        }
    }

    /// Creates a driver over an existing page (with its storage)
    #[must_use]
    pub fn with_dom(dom: MockDom) -> Self {
        Self {
            calculator: WasmCalculator::with_dom(dom),
        }
    }

    /// Returns the wrapped calculator
    #[must_use]
    pub fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    /// Returns the wrapped calculator, mutably
    pub fn calculator_mut(&mut self) -> &mut WasmCalculator {
        &mut self.calculator
    }

    /// Simulates a click on an element by ID
    pub fn click(&mut self, id: &str) -> bool {
        self.calculator.click(id)
    }

    /// Simulates a document-level key press
    pub fn press_key(&mut self, key: &str) -> bool {
        self.calculator.press_key(key)
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, token: Token) {
        self.calculator.press(token);
    }

    fn current_display(&self) -> String {
        self.calculator.current_display()
    }

    fn previous_display(&self) -> String {
        self.calculator.previous_display()
    }

    fn clear(&mut self) {
        self.calculator.press(Token::Clear);
    }

    fn theme(&self) -> Theme {
        self.calculator.theme()
    }

    fn toggle_theme(&mut self) {
        self.calculator.toggle_theme();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BinaryOp;

    #[test]
    fn test_driver_press_and_read() {
        let mut driver = WasmDriver::new();
        driver.press_all(&[
            Token::Digit(1),
            Token::Point,
            Token::Digit(5),
            Token::Operator(BinaryOp::Multiply),
            Token::Digit(2),
            Token::Equals,
        ]);
        assert_eq!(driver.current_display(), "3");
    }

    #[test]
    fn test_driver_clear() {
        let mut driver = WasmDriver::new();
        driver.press(Token::Digit(9));
        driver.clear();
        assert_eq!(driver.current_display(), "0");
        assert_eq!(driver.previous_display(), "");
    }

    #[test]
    fn test_driver_clicks_reach_engine() {
        let mut driver = WasmDriver::new();
        assert!(driver.click("btn-5"));
        assert!(driver.click("btn-sqrt"));
        // √5 runs through the shared formatting pass
        assert_eq!(driver.current_display(), "2.23606798");
    }

    #[test]
    fn test_driver_theme_roundtrip() {
        let mut driver = WasmDriver::new();
        driver.toggle_theme();
        assert_eq!(driver.theme(), Theme::Light);

        let dom = driver.calculator().dom().clone();
        let reloaded = WasmDriver::with_dom(dom);
        assert_eq!(reloaded.theme(), Theme::Light);
    }
}
