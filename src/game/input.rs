use raylib::prelude::{KeyboardKey, MouseButton, RaylibHandle, Vector2};

#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    /// Window close or Escape.
    Quit,
    PointerDown(Vector2),
    KeyDown(KeyboardKey),
}

impl InputEvent {
    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            InputEvent::KeyDown(KeyboardKey::KEY_SPACE | KeyboardKey::KEY_ENTER)
        )
    }
}

pub fn poll_events(rl: &mut RaylibHandle) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if rl.window_should_close() {
        events.push(InputEvent::Quit);
    }
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(InputEvent::PointerDown(rl.get_mouse_position()));
    }
    while let Some(key) = rl.get_key_pressed() {
        events.push(InputEvent::KeyDown(key));
    }
    events
}
