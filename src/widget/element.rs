//! Element - both leaf widget and container.

use std::fmt;

use super::{next_element_id, Anchor, Color, ElementId, Sprite, SpriteSet, VisualState};
use crate::layout::{resolve_anchor, LayoutRect};
use crate::render::{Canvas, HorizontalAlign, TextRun, VerticalAnchor};
use crate::{Error, Result};

/// Click callback. Receives the element that was clicked.
pub type ClickHandler = Box<dyn FnMut(&mut Element)>;

/// A rectangular node of the UI tree.
///
/// Geometry is authored once at construction; only the resolved position
/// changes afterwards, whenever the parent runs a layout pass.
pub struct Element {
    id: ElementId,
    /// Optional name for lookups and tree dumps.
    pub name: Option<String>,
    original_x: f32,
    original_y: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    anchor: Anchor,
    children: Vec<Element>,
    hovered: bool,
    pressed: bool,
    sprites: SpriteSet,
    /// Centered label. Empty means nothing is drawn.
    pub text: String,
    pub font_size: f32,
    pub text_color: Color,
    on_click: Option<ClickHandler>,
    /// Bumped whenever the handler slot is set or cleared.
    on_click_generation: u64,
}

impl Element {
    /// Create an element anchored to its parent's bottom-left corner.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::with_anchor(x, y, width, height, Anchor::default())
    }

    pub fn with_anchor(x: f32, y: f32, width: f32, height: f32, anchor: Anchor) -> Self {
        Self {
            id: next_element_id(),
            name: None,
            original_x: x,
            original_y: y,
            x,
            y,
            width,
            height,
            anchor,
            children: Vec::new(),
            hovered: false,
            pressed: false,
            sprites: SpriteSet::default(),
            text: String::new(),
            font_size: 16.0,
            text_color: Color::BLACK,
            on_click: None,
            on_click_generation: 0,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Offsets as authored, before anchor resolution.
    pub fn original_position(&self) -> (f32, f32) {
        (self.original_x, self.original_y)
    }

    /// Resolved bottom-left corner.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn rect(&self) -> LayoutRect {
        LayoutRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn visual_state(&self) -> VisualState {
        VisualState::from_flags(self.hovered, self.pressed)
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children.iter().map(|c| 1 + c.descendant_count()).sum()
    }

    /// Resolve this element against `parent`, then lay out the subtree
    /// against the new box.
    pub fn update_position(&mut self, parent: LayoutRect) {
        let (x, y) = resolve_anchor(
            self.anchor,
            self.original_x,
            self.original_y,
            self.width,
            self.height,
            parent,
        );
        self.x = x;
        self.y = y;

        let rect = self.rect();
        self.sprites.fit_all(rect);
        for child in &mut self.children {
            child.update_position(rect);
        }
    }

    /// Hit-test the pointer against every node in the subtree.
    pub fn update(&mut self, mouse_x: f32, mouse_y: f32) {
        self.hovered = self.rect().contains_strict(mouse_x, mouse_y);
        for child in &mut self.children {
            child.update(mouse_x, mouse_y);
        }
    }

    /// Apply a button transition to every node in the subtree.
    ///
    /// A press over a hovered node marks it pressed and fires its click
    /// handler. Anything else (release, or press elsewhere) clears pressed.
    pub fn check_clicks(&mut self, pressed: bool) {
        if pressed && self.hovered {
            self.pressed = true;
            self.click();
        } else {
            self.pressed = false;
        }
        for child in &mut self.children {
            child.check_clicks(pressed);
        }
    }

    /// Run the click handler, if any.
    ///
    /// The handler is detached while it runs, so it may freely mutate this
    /// element. Setting or clearing the handler from inside wins over the
    /// running one.
    pub fn click(&mut self) {
        let Some(mut handler) = self.on_click.take() else {
            return;
        };
        let generation = self.on_click_generation;
        tracing::trace!(id = %self.id, name = ?self.name, "click");
        handler(self);
        if self.on_click_generation == generation {
            self.on_click = Some(handler);
        }
    }

    pub fn set_on_click(&mut self, handler: impl FnMut(&mut Element) + 'static) {
        self.on_click = Some(Box::new(handler));
        self.on_click_generation += 1;
    }

    pub fn clear_on_click(&mut self) {
        self.on_click = None;
        self.on_click_generation += 1;
    }

    pub fn has_on_click(&self) -> bool {
        self.on_click.is_some()
    }

    /// Draw this element, then its children in insertion order.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if let Some(sprite) = self.current_sprite() {
            canvas.draw_sprite(sprite);
        }

        if !self.text.is_empty() {
            canvas.draw_text(&TextRun {
                text: &self.text,
                x: self.x,
                y: self.y + self.height / 2.0,
                color: self.text_color,
                font_size: self.font_size,
                wrap_width: self.width,
                align: HorizontalAlign::Center,
                anchor_y: VerticalAnchor::Center,
            });
        }

        for child in &self.children {
            child.draw(canvas);
        }
    }

    /// Sprite for the current visual state.
    pub fn current_sprite(&self) -> Option<&Sprite> {
        self.sprites.select(self.visual_state())
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    pub fn set_sprite(&mut self, state: VisualState, source: impl Into<String>) {
        let mut sprite = Sprite::new(source);
        sprite.fit_to(self.rect());
        *self.sprites.slot_mut(state) = Some(sprite);
    }

    pub fn set_default_sprite(&mut self, source: impl Into<String>) {
        self.set_sprite(VisualState::Default, source);
    }

    pub fn set_hovered_sprite(&mut self, source: impl Into<String>) {
        self.set_sprite(VisualState::Hovered, source);
    }

    pub fn set_pressed_sprite(&mut self, source: impl Into<String>) {
        self.set_sprite(VisualState::Pressed, source);
    }

    /// Use one image for all three states.
    pub fn set_sprites(&mut self, source: impl Into<String>) {
        let source = source.into();
        self.set_default_sprite(source.clone());
        self.set_hovered_sprite(source.clone());
        self.set_pressed_sprite(source);
    }

    /// Lay out `child` against this element's box and append it.
    pub fn add_element(&mut self, mut child: Element) -> ElementId {
        child.update_position(self.rect());
        let id = child.id;
        tracing::debug!(parent = %self.id, child = %id, name = ?child.name, "attach element");
        self.children.push(child);
        id
    }

    /// Detach the direct child with `id` and hand it back.
    pub fn remove_element(&mut self, id: ElementId) -> Result<Element> {
        let index = self
            .children
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::ElementNotFound(id))?;
        tracing::debug!(parent = %self.id, child = %id, "detach element");
        Ok(self.children.remove(index))
    }

    /// Depth-first, pre-order lookup including `self`.
    pub fn find(&self, id: ElementId) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Element> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_name(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Element> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_by_name_mut(name))
    }

    /// Visit every node of the subtree, pre-order.
    pub fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            child.for_each_mut(f);
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("anchor", &self.anchor)
            .field("rect", &self.rect())
            .field("hovered", &self.hovered)
            .field("pressed", &self.pressed)
            .field("text", &self.text)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unattached_element_sits_at_authored_offset() {
        let el = Element::with_anchor(5.0, 7.0, 10.0, 10.0, Anchor::TopRight);
        assert_eq!(el.position(), (5.0, 7.0));
        assert_eq!(el.original_position(), (5.0, 7.0));
    }

    #[test]
    fn sprite_follows_layout() {
        let mut el = Element::new(5.0, 5.0, 20.0, 10.0);
        el.set_default_sprite("a.png");
        el.update_position(LayoutRect::new(100.0, 200.0, 50.0, 50.0));
        let sprite = el.sprites().default.as_ref().unwrap();
        assert_eq!((sprite.center_x, sprite.center_y), (115.0, 210.0));
        assert_eq!((sprite.width, sprite.height), (20.0, 10.0));
    }

    #[test]
    fn handler_can_replace_itself() {
        let mut el = Element::new(0.0, 0.0, 1.0, 1.0);
        el.set_on_click(|me| {
            me.text = "first".into();
            me.set_on_click(|me| me.text = "second".into());
        });
        el.click();
        assert_eq!(el.text, "first");
        el.click();
        assert_eq!(el.text, "second");
    }

    #[test]
    fn handler_can_clear_itself() {
        let mut el = Element::new(0.0, 0.0, 10.0, 10.0);
        el.set_on_click(|me| {
            me.text.push('x');
            me.clear_on_click();
        });
        el.update(5.0, 5.0);
        el.check_clicks(true);
        assert!(!el.has_on_click());

        el.check_clicks(false);
        el.check_clicks(true);
        assert_eq!(el.text, "x");
    }

    #[test]
    fn handler_survives_when_slot_untouched() {
        let mut el = Element::new(0.0, 0.0, 10.0, 10.0);
        el.set_on_click(|me| me.text.push('x'));
        el.click();
        el.click();
        assert!(el.has_on_click());
        assert_eq!(el.text, "xx");
    }
}
