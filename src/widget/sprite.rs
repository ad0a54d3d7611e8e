//! Per-state sprite slots.

use crate::layout::LayoutRect;

/// An image reference placed over an element's box.
///
/// The image itself is resolved by the host when drawing; the sprite only
/// carries where and how large to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    source: String,
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            center_x: 0.0,
            center_y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Center the sprite on `rect` and stretch it to the same size.
    pub fn fit_to(&mut self, rect: LayoutRect) {
        let (cx, cy) = rect.center();
        self.center_x = cx;
        self.center_y = cy;
        self.width = rect.width;
        self.height = rect.height;
    }

    /// Box covered by the sprite (bottom-left origin).
    pub fn rect(&self) -> LayoutRect {
        LayoutRect::new(
            self.center_x - self.width / 2.0,
            self.center_y - self.height / 2.0,
            self.width,
            self.height,
        )
    }
}

/// Visual state used for sprite selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Default,
    Hovered,
    Pressed,
}

impl VisualState {
    /// Press wins over hover.
    pub fn from_flags(hovered: bool, pressed: bool) -> Self {
        if pressed {
            Self::Pressed
        } else if hovered {
            Self::Hovered
        } else {
            Self::Default
        }
    }
}

/// The three optional sprite slots of an element.
#[derive(Debug, Clone, Default)]
pub struct SpriteSet {
    pub default: Option<Sprite>,
    pub hovered: Option<Sprite>,
    pub pressed: Option<Sprite>,
}

impl SpriteSet {
    /// Sprite for `state`. An empty slot does not fall back to another one.
    pub fn select(&self, state: VisualState) -> Option<&Sprite> {
        match state {
            VisualState::Default => self.default.as_ref(),
            VisualState::Hovered => self.hovered.as_ref(),
            VisualState::Pressed => self.pressed.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, state: VisualState) -> &mut Option<Sprite> {
        match state {
            VisualState::Default => &mut self.default,
            VisualState::Hovered => &mut self.hovered,
            VisualState::Pressed => &mut self.pressed,
        }
    }

    pub fn fit_all(&mut self, rect: LayoutRect) {
        for sprite in [&mut self.default, &mut self.hovered, &mut self.pressed]
            .into_iter()
            .flatten()
        {
            sprite.fit_to(rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_beats_hovered() {
        assert_eq!(VisualState::from_flags(true, true), VisualState::Pressed);
        assert_eq!(VisualState::from_flags(true, false), VisualState::Hovered);
        assert_eq!(VisualState::from_flags(false, false), VisualState::Default);
    }

    #[test]
    fn empty_slot_selects_nothing() {
        let set = SpriteSet {
            default: Some(Sprite::new("button.png")),
            ..Default::default()
        };
        assert!(set.select(VisualState::Hovered).is_none());
        assert_eq!(set.select(VisualState::Default).map(Sprite::source), Some("button.png"));
    }

    #[test]
    fn fit_centers_on_rect() {
        let mut sprite = Sprite::new("a.png");
        sprite.fit_to(LayoutRect::new(50.0, 50.0, 70.0, 30.0));
        assert_eq!((sprite.center_x, sprite.center_y), (85.0, 65.0));
        assert_eq!(sprite.rect(), LayoutRect::new(50.0, 50.0, 70.0, 30.0));
    }
}
