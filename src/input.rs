/// Device-independent input events. The binary translates terminal events
/// into these; the library never sees a terminal type.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Start,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Window closed / interrupt.
    Quit,
    /// Primary button pressed at playfield coordinates.
    PointerDown { x: f32, y: f32 },
    KeyDown(Key),
    KeyUp(Key),
}

/// What the frame loop should do after handling an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
