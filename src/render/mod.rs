//! Drawing seam between the element tree and the host renderer.

mod software;

pub use software::render_to_image;

use crate::layout::LayoutRect;
use crate::widget::{Color, Sprite};

/// Horizontal alignment of text inside its wrap width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Which part of the text box sits on the origin's `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Center,
    Bottom,
    Baseline,
}

/// A text draw request.
#[derive(Debug, Clone, Copy)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub font_size: f32,
    pub wrap_width: f32,
    pub align: HorizontalAlign,
    pub anchor_y: VerticalAnchor,
}

/// Drawing primitives provided by the host.
pub trait Canvas {
    fn draw_sprite(&mut self, sprite: &Sprite);
    fn draw_text(&mut self, text: &TextRun<'_>);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        source: String,
        rect: LayoutRect,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Color,
        font_size: f32,
        wrap_width: f32,
    },
}

/// Canvas that records draw calls in order instead of drawing them.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprite sources in draw order.
    pub fn sprite_sources(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { source, .. } => Some(source.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text contents in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.commands.push(DrawCommand::Sprite {
            source: sprite.source().to_string(),
            rect: sprite.rect(),
        });
    }

    fn draw_text(&mut self, text: &TextRun<'_>) {
        self.commands.push(DrawCommand::Text {
            text: text.text.to_string(),
            x: text.x,
            y: text.y,
            color: text.color,
            font_size: text.font_size,
            wrap_width: text.wrap_width,
        });
    }
}
