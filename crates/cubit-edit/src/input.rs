use cubit_world::GridError;

use crate::EditorContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Shift,
    Ctrl,
    R,
    C,
    V,
    Delete,
    W,
    A,
    S,
    D,
    /// Any key the editor has no binding for, by platform key code.
    Other(u32),
}

/// Raw input delivered by the windowing layer. Screen coordinates are pixels from the
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32, button: PointerButton },
    PointerUp { x: f32, y: f32, button: PointerButton },
    PointerDrag { x: f32, y: f32, button: PointerButton },
    KeyDown(Key),
    KeyUp(Key),
    Scroll { amount: f32 },
}

/// Modifier keys currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    /// Tracks shift/ctrl from key events.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(Key::Shift) => self.shift = true,
            InputEvent::KeyUp(Key::Shift) => self.shift = false,
            InputEvent::KeyDown(Key::Ctrl) => self.ctrl = true,
            InputEvent::KeyUp(Key::Ctrl) => self.ctrl = false,
            _ => {}
        }
    }
}

/// One link of the input chain. Returning `Ok(true)` claims the event and stops
/// dispatch to lower-priority handlers.
pub trait InputHandler {
    fn handle(&mut self, event: &InputEvent, ctx: &mut EditorContext<'_>)
    -> Result<bool, GridError>;
}
