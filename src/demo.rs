//! Counter button demo: a single skinned button that shows how many times
//! it has been clicked.

use crate::event::InputEvent;
use crate::ui::Ui;
use crate::widget::{Color, Element};

pub const BUTTON_NAME: &str = "button";

/// Build the demo tree: a 70x70 button at (50, 50) with three sprite skins.
pub fn counter_demo(width: f32, height: f32) -> Ui {
    let mut ui = Ui::new(width, height);

    let mut button = Element::new(50.0, 50.0, 70.0, 70.0).named(BUTTON_NAME);
    button.set_default_sprite("Sprites/UI/button.png");
    button.set_hovered_sprite("Sprites/UI/button_hovered.png");
    button.set_pressed_sprite("Sprites/UI/button_pressed.png");
    button.text = "XDXD".into();
    button.text_color = Color::BLACK;

    let mut count = 0u32;
    button.set_on_click(move |me| {
        me.text = count.to_string();
        count += 1;
    });

    ui.add_element(button);
    ui
}

/// Hover the button, click it twice, then move away.
pub fn demo_script() -> Vec<InputEvent> {
    vec![
        InputEvent::FrameUpdate { delta: 1.0 / 60.0 },
        InputEvent::MouseMove { x: 85.0, y: 85.0 },
        InputEvent::mouse_down(85.0, 85.0),
        InputEvent::mouse_up(85.0, 85.0),
        InputEvent::mouse_down(85.0, 85.0),
        InputEvent::mouse_up(85.0, 85.0),
        InputEvent::MouseMove { x: 5.0, y: 5.0 },
    ]
}
