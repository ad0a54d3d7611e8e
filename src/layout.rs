//! Layout rectangles and anchor resolution.
//!
//! Coordinates are Y-up: `(x, y)` is the bottom-left corner of a box, and
//! "top" means larger `y`.

use crate::widget::Anchor;

/// An axis-aligned box in screen space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict containment: points on an edge are outside.
    pub fn contains_strict(&self, px: f32, py: f32) -> bool {
        self.x < px && px < self.right() && self.y < py && py < self.top()
    }
}

/// Resolve the bottom-left corner of a `width` x `height` box authored at
/// `(offset_x, offset_y)` relative to `parent` under `anchor`.
///
/// Offsets measure inward from the anchored edge; centered axes ignore them.
pub fn resolve_anchor(
    anchor: Anchor,
    offset_x: f32,
    offset_y: f32,
    width: f32,
    height: f32,
    parent: LayoutRect,
) -> (f32, f32) {
    let from_left = parent.x + offset_x;
    let from_right = parent.right() - offset_x - width;
    let center_x = parent.x + parent.width / 2.0 - width / 2.0;

    let from_bottom = parent.y + offset_y;
    let from_top = parent.top() - offset_y - height;
    let center_y = parent.y + parent.height / 2.0 - height / 2.0;

    match anchor {
        Anchor::BottomLeft => (from_left, from_bottom),
        Anchor::BottomRight => (from_right, from_bottom),
        Anchor::TopLeft => (from_left, from_top),
        Anchor::TopRight => (from_right, from_top),
        Anchor::Center => (center_x, center_y),
        Anchor::Top => (center_x, from_top),
        Anchor::Bottom => (center_x, from_bottom),
        Anchor::Left => (from_left, center_y),
        Anchor::Right => (from_right, center_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_outside() {
        let rect = LayoutRect::new(10.0, 20.0, 30.0, 40.0);
        assert!(!rect.contains_strict(10.0, 30.0));
        assert!(!rect.contains_strict(40.0, 30.0));
        assert!(!rect.contains_strict(20.0, 20.0));
        assert!(!rect.contains_strict(20.0, 60.0));
        assert!(rect.contains_strict(11.0, 21.0));
    }

    #[test]
    fn right_anchor_measures_from_right_edge() {
        let parent = LayoutRect::new(0.0, 0.0, 200.0, 100.0);
        let (x, y) = resolve_anchor(Anchor::Right, 10.0, 99.0, 50.0, 20.0, parent);
        assert_eq!((x, y), (140.0, 40.0));
    }
}
