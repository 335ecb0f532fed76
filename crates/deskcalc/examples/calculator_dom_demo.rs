//! Scripted walkthrough of the browser wiring over the mock DOM.
//!
//! Run with: cargo run --example calculator_dom_demo
//!
//! Clicks through a few calculations exactly the way the page would,
//! printing the readout fields after each step.

use deskcalc::wasm::WasmCalculator;

fn show(calc: &WasmCalculator, step: &str) {
    println!(
        "{step:<28} previous: {:>16}   current: {:>16}",
        calc.previous_display(),
        calc.current_display()
    );
}

fn main() {
    let mut calc = WasmCalculator::new();
    show(&calc, "page loaded");

    // 1234.5 + 8765.5 = 10000, clicked like a pointer would
    for id in [
        "btn-1", "btn-2", "btn-3", "btn-4", "btn-decimal", "btn-5",
    ] {
        calc.click(id);
    }
    show(&calc, "typed 1234.5");

    calc.click("btn-add");
    show(&calc, "clicked +");

    for id in [
        "btn-8", "btn-7", "btn-6", "btn-5", "btn-decimal", "btn-5",
    ] {
        calc.click(id);
    }
    calc.click("btn-equals");
    show(&calc, "= (grouped readout)");

    // Keyboard path: square root of the running result
    calc.press_key("r");
    show(&calc, "pressed r (square root)");

    // Divide by zero parks the display on the marker until clear
    calc.press_key("/");
    calc.press_key("0");
    calc.press_key("Enter");
    show(&calc, "divided by zero");

    calc.press_key("5");
    show(&calc, "input bounces off marker");

    calc.click("btn-clear");
    show(&calc, "cleared");

    // Theme round trip, persisted in the page's storage slot
    calc.click("theme-toggle");
    println!(
        "theme toggled to {:?}, body classes: {:?}",
        calc.theme(),
        calc.dom().body().classes
    );
}
