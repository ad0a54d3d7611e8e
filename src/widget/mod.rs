//! The element tree: a single node type composed recursively.

mod anchor;
mod color;
mod element;
mod sprite;

pub use anchor::Anchor;
pub use color::Color;
pub use element::{ClickHandler, Element};
pub use sprite::{Sprite, SpriteSet, VisualState};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Generate a unique element ID.
pub fn next_element_id() -> ElementId {
    ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed))
}
