//! Browser frontend for the calculator.
//!
//! The wiring is written twice at the edges and once in the middle: a
//! [`MockDom`]-backed [`WasmCalculator`] that runs natively in tests,
//! and a web-sys [`BrowserCalculator`] (behind the `wasm` feature) that
//! mirrors the same contract against the real page.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::{token_for_key, WasmCalculator};
pub use dom::{DomElement, DomEvent, DomEventKind, MockDom};
pub use driver::WasmDriver;
pub use keypad::{KeypadButtonDef, MockDomKeypadExt, WasmKeypad};
