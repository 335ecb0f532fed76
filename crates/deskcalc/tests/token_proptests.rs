//! Property-based tests over arbitrary token streams.

use proptest::prelude::*;

use deskcalc::core::{BinaryOp, Engine, MathFault, Token};
use deskcalc::driver::CalculatorDriver;
use deskcalc::wasm::WasmDriver;

#[cfg(feature = "tui")]
use deskcalc::driver::TuiDriver;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any binary operator
fn operator_strategy() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Subtract),
        Just(BinaryOp::Multiply),
        Just(BinaryOp::Divide),
        Just(BinaryOp::Modulo),
    ]
}

/// Generate any input token
fn token_strategy() -> impl Strategy<Value = Token> {
    prop_oneof![
        digit_strategy().prop_map(Token::Digit),
        Just(Token::Point),
        operator_strategy().prop_map(Token::Operator),
        Just(Token::SquareRoot),
        Just(Token::ToggleSign),
        Just(Token::Percent),
        Just(Token::Equals),
        Just(Token::Clear),
        Just(Token::Backspace),
    ]
}

/// Generate a token stream of moderate length
fn token_stream() -> impl Strategy<Value = Vec<Token>> {
    proptest::collection::vec(token_strategy(), 0..50)
}

// ===== Engine properties =====

proptest! {
    /// The engine survives any token stream and its display never
    /// comes back empty
    #[test]
    fn prop_engine_total_over_token_streams(tokens in token_stream()) {
        let mut engine = Engine::new();
        for &token in &tokens {
            engine.apply(token);
        }
        prop_assert!(!engine.display_current().is_empty());
    }

    /// A faulted engine only ever leaves the marker state through Clear
    #[test]
    fn prop_fault_is_sticky_until_clear(tokens in token_stream()) {
        let mut engine = Engine::new();
        // Force the divide-by-zero marker first
        for token in [
            Token::Digit(8),
            Token::Operator(BinaryOp::Divide),
            Token::Digit(0),
            Token::Equals,
        ] {
            engine.apply(token);
        }
        prop_assert_eq!(engine.fault(), Some(MathFault::DivisionByZero));

        for &token in &tokens {
            engine.apply(token);
            if token == Token::Clear {
                break;
            }
            prop_assert_eq!(engine.fault(), Some(MathFault::DivisionByZero));
        }
    }

    /// Clear always restores the initial state, whatever came before
    #[test]
    fn prop_clear_restores_initial_state(tokens in token_stream()) {
        let mut engine = Engine::new();
        for &token in &tokens {
            engine.apply(token);
        }
        engine.apply(Token::Clear);
        prop_assert_eq!(engine, Engine::new());
    }
}

// ===== Driver properties =====

proptest! {
    /// The browser wiring keeps its readout in lockstep with the engine
    #[test]
    fn prop_wasm_display_matches_engine(tokens in token_stream()) {
        let mut driver = WasmDriver::new();
        for &token in &tokens {
            driver.press(token);
        }
        let engine_view = driver.calculator().engine().display_current();
        prop_assert_eq!(driver.current_display(), engine_view);
    }
}

/// Both frontends render byte-identical display strings for any stream
#[cfg(feature = "tui")]
mod parity {
    use super::*;

    proptest! {
        #[test]
        fn prop_frontend_display_parity(tokens in token_stream()) {
            let mut tui = TuiDriver::new();
            let mut wasm = WasmDriver::new();
            for &token in &tokens {
                tui.press(token);
                wasm.press(token);
            }
            prop_assert_eq!(tui.current_display(), wasm.current_display());
            prop_assert_eq!(tui.previous_display(), wasm.previous_display());
        }
    }
}
