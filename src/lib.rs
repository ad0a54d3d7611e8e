//! Anchor UI
//!
//! A retained-mode widget tree for 2D hosts. Elements are rectangles laid
//! out against their parent by anchor, track hover and press from host
//! mouse events, draw a per-state sprite and a centered label, and fire a
//! click callback.

pub mod config;
pub mod demo;
pub mod dump;
pub mod error;
pub mod event;
pub mod layout;
pub mod loader;
pub mod render;
pub mod texture;
pub mod ui;
pub mod widget;
pub mod xml;

pub use error::{Error, Result};
pub use layout::LayoutRect;
pub use ui::Ui;
pub use widget::{Anchor, Color, Element, ElementId};
