//! Window-system-neutral input vocabulary.

/// One raw input occurrence, as delivered by the host window.
///
/// The host translates its native events into these and hands them to
/// [`InputProcessor::handle_event`](super::InputProcessor::handle_event),
/// which decides whether they become a
/// [`TriaxisCommand`](crate::TriaxisCommand).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved; coordinates are absolute physical pixels.
    CursorMoved {
        /// Distance from the left edge.
        x: f32,
        /// Distance from the top edge.
        y: f32,
    },
    /// A pointer button changed state.
    MouseButton {
        /// The button.
        button: MouseButton,
        /// Press (`true`) or release (`false`).
        pressed: bool,
    },
    /// Wheel turned by `delta` notches; positive moves the camera closer.
    Scroll {
        /// Notches turned.
        delta: f32,
    },
    /// A key went down.
    Key {
        /// Physical key code in `KeyboardEvent.code` form, e.g. `"KeyR"`.
        code: String,
    },
    /// The drawing surface was resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Orbits the camera while held.
    Left,
    /// Not bound.
    Right,
    /// Not bound.
    Middle,
}
