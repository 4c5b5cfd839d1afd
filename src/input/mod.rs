//! Input handling: event types and the input processor that converts raw
//! window events into scheduler commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into scheduler commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
