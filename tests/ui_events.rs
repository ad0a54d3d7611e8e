//! Event forwarding through the `Ui` root and the counter demo.

mod common;

use anchor_ui::demo::{counter_demo, demo_script, BUTTON_NAME};
use anchor_ui::event::{parse_event_script, EventQueue, InputEvent, Modifiers, MouseButton};
use anchor_ui::{Element, Ui};
use common::{count_clicks, record};

#[test]
fn root_spans_the_window() {
    let ui = Ui::new(800.0, 600.0);
    assert_eq!(ui.root().position(), (0.0, 0.0));
    assert_eq!(ui.root().size(), (800.0, 600.0));
    assert_eq!(ui.fps(), None);
    assert_eq!(ui.mouse_position(), None);
}

#[test]
fn press_uses_hover_from_last_move() {
    let mut ui = Ui::new(800.0, 600.0);
    let mut button = Element::new(50.0, 50.0, 70.0, 70.0);
    let clicks = count_clicks(&mut button);
    ui.add_element(button);

    // No move yet: the press coordinates alone do not hover anything.
    ui.handle_event(&InputEvent::mouse_down(60.0, 60.0));
    assert_eq!(clicks.get(), 0);
    assert_eq!(ui.mouse_position(), Some((60.0, 60.0)));

    ui.handle_event(&InputEvent::MouseMove { x: 60.0, y: 60.0 });
    ui.handle_event(&InputEvent::MouseDown {
        x: 60.0,
        y: 60.0,
        button: MouseButton::Right,
        modifiers: Modifiers { ctrl: true, ..Default::default() },
    });
    assert_eq!(clicks.get(), 1);
}

#[test]
fn frame_update_tracks_fps() {
    let mut ui = Ui::new(100.0, 100.0);
    ui.handle_event(&InputEvent::FrameUpdate { delta: 0.5 });
    assert_eq!(ui.fps(), Some(2.0));
    ui.handle_event(&InputEvent::FrameUpdate { delta: 0.0 });
    assert_eq!(ui.fps(), Some(2.0));
}

#[test]
fn queue_is_processed_in_order() {
    let mut ui = Ui::new(800.0, 600.0);
    let mut button = Element::new(0.0, 0.0, 10.0, 10.0);
    let clicks = count_clicks(&mut button);
    let id = ui.add_element(button);

    let mut queue = EventQueue::new();
    queue.extend(
        parse_event_script(
            r#"[
                {"type": "mouse_move", "x": 5, "y": 5},
                {"type": "mouse_down", "x": 5, "y": 5},
                {"type": "mouse_up", "x": 5, "y": 5},
                {"type": "mouse_down", "x": 5, "y": 5}
            ]"#,
        )
        .unwrap(),
    );
    ui.process(&mut queue);

    assert!(queue.is_empty());
    assert_eq!(clicks.get(), 2);
    assert!(ui.root().find(id).unwrap().is_pressed());
}

#[test]
fn removed_element_stops_receiving_events() {
    let mut ui = Ui::new(800.0, 600.0);
    let mut button = Element::new(0.0, 0.0, 10.0, 10.0);
    let clicks = count_clicks(&mut button);
    let id = ui.add_element(button);

    let detached = ui.remove_element(id).unwrap();
    ui.handle_event(&InputEvent::MouseMove { x: 5.0, y: 5.0 });
    ui.handle_event(&InputEvent::mouse_down(5.0, 5.0));
    assert_eq!(clicks.get(), 0);
    assert!(!detached.is_hovered());
}

#[test]
fn counter_demo_counts_clicks() {
    let mut ui = counter_demo(800.0, 600.0);
    assert_eq!(record(ui.root()).sprite_sources(), ["Sprites/UI/button.png"]);
    assert_eq!(record(ui.root()).texts(), ["XDXD"]);

    for event in demo_script() {
        ui.handle_event(&event);
    }

    let button = ui.root().find_by_name(BUTTON_NAME).unwrap();
    assert_eq!(button.text, "1");
    assert!(!button.is_hovered());
    assert!(ui.fps().is_some());

    ui.handle_event(&InputEvent::MouseMove { x: 85.0, y: 85.0 });
    assert_eq!(record(ui.root()).sprite_sources(), ["Sprites/UI/button_hovered.png"]);
    ui.handle_event(&InputEvent::mouse_down(85.0, 85.0));
    assert_eq!(record(ui.root()).sprite_sources(), ["Sprites/UI/button_pressed.png"]);
    assert_eq!(ui.find_by_name_mut(BUTTON_NAME).unwrap().text, "2");
}
