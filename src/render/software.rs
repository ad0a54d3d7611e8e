//! CPU compositing of a recorded draw list, for headless screenshots.
//!
//! Element coordinates are Y-up; image rows run top to bottom, so every
//! sprite is flipped into image space before it is blitted.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::{DrawCommand, DrawList};
use crate::texture::TextureManager;
use crate::widget::Color;

/// Composite the sprite commands of `list` over a `background` fill.
///
/// Sprites whose texture cannot be loaded are skipped. Text commands are not
/// rasterized.
pub fn render_to_image(
    list: &DrawList,
    textures: &mut TextureManager,
    width: u32,
    height: u32,
    background: Color,
) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba(background.to_rgba()));

    for command in &list.commands {
        match command {
            DrawCommand::Sprite { source, rect } => {
                let w = rect.width.round() as u32;
                let h = rect.height.round() as u32;
                if w == 0 || h == 0 {
                    continue;
                }
                let Some(texture) = textures.load(source) else {
                    continue;
                };
                let scaled = imageops::resize(texture, w, h, FilterType::Nearest);
                let left = rect.x.round() as i64;
                let top = height as i64 - (rect.y + rect.height).round() as i64;
                imageops::overlay(&mut img, &scaled, left, top);
            }
            DrawCommand::Text { text, x, y, .. } => {
                tracing::trace!("Skipping text {:?} at ({}, {})", text, x, y);
            }
        }
    }

    img
}
