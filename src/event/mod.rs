//! Input events delivered by the host runtime.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Mouse button that changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard modifiers held during a button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// One event from the host, in screen coordinates (Y-up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    MouseMove {
        x: f32,
        y: f32,
    },
    MouseDown {
        x: f32,
        y: f32,
        #[serde(default)]
        button: MouseButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    MouseUp {
        x: f32,
        y: f32,
        #[serde(default)]
        button: MouseButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    FrameUpdate {
        delta: f32,
    },
}

impl InputEvent {
    pub fn mouse_down(x: f32, y: f32) -> Self {
        Self::MouseDown {
            x,
            y,
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    pub fn mouse_up(x: f32, y: f32) -> Self {
        Self::MouseUp {
            x,
            y,
            button: MouseButton::Left,
            modifiers: Modifiers::default(),
        }
    }
}

/// Parse a JSON array of events (an event script).
pub fn parse_event_script(json: &str) -> crate::Result<Vec<InputEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// FIFO of events waiting to be dispatched.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn pop(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Extend<InputEvent> for EventQueue {
    fn extend<T: IntoIterator<Item = InputEvent>>(&mut self, iter: T) {
        self.pending.extend(iter);
    }
}
