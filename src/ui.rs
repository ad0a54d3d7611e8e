//! The host-owned root of the element tree.

use crate::event::{EventQueue, InputEvent};
use crate::render::Canvas;
use crate::widget::{Element, ElementId};
use crate::Result;

/// Root element spanning the window plus per-window input state.
///
/// The host constructs one `Ui` and forwards its events to it; nothing here
/// is global.
#[derive(Debug)]
pub struct Ui {
    root: Element,
    mouse_position: Option<(f32, f32)>,
    fps: Option<f32>,
}

impl Ui {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            root: Element::new(0.0, 0.0, width, height).named("root"),
            mouse_position: None,
            fps: None,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn add_element(&mut self, element: Element) -> ElementId {
        self.root.add_element(element)
    }

    pub fn remove_element(&mut self, id: ElementId) -> Result<Element> {
        self.root.remove_element(id)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.root.find_by_name_mut(name)
    }

    /// Last pointer position seen in a mouse event.
    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    /// Frame rate derived from the most recent frame update.
    pub fn fps(&self) -> Option<f32> {
        self.fps
    }

    /// Forward one host event to the tree.
    ///
    /// Button events do not re-run hit testing: hover comes from the last
    /// mouse move. Every button behaves the same.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::MouseMove { x, y } => {
                self.mouse_position = Some((x, y));
                self.root.update(x, y);
            }
            InputEvent::MouseDown { x, y, button, .. } => {
                tracing::trace!(?button, x, y, "mouse down");
                self.mouse_position = Some((x, y));
                self.root.check_clicks(true);
            }
            InputEvent::MouseUp { x, y, button, .. } => {
                tracing::trace!(?button, x, y, "mouse up");
                self.mouse_position = Some((x, y));
                self.root.check_clicks(false);
            }
            InputEvent::FrameUpdate { delta } => {
                if delta > 0.0 {
                    self.fps = Some(1.0 / delta);
                }
            }
        }
    }

    /// Dispatch every queued event in order.
    pub fn process(&mut self, queue: &mut EventQueue) {
        while let Some(event) = queue.pop() {
            self.handle_event(&event);
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.root.draw(canvas);
    }
}
