//! Shared test helpers.

use std::cell::Cell;
use std::rc::Rc;

use anchor_ui::render::DrawList;
use anchor_ui::Element;

/// Draw a subtree into a fresh draw list.
#[allow(dead_code)]
pub fn record(element: &Element) -> DrawList {
    let mut list = DrawList::new();
    element.draw(&mut list);
    list
}

/// Install a click handler that counts invocations.
#[allow(dead_code)]
pub fn count_clicks(element: &mut Element) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    element.set_on_click(move |_| seen.set(seen.get() + 1));
    count
}

/// Assert two floats agree within a small tolerance.
#[allow(dead_code)]
pub fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
    let tol = 1e-4;
    assert!(
        (actual.0 - expected.0).abs() <= tol && (actual.1 - expected.1).abs() <= tol,
        "expected {expected:?}, got {actual:?}"
    );
}
