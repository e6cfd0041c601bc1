//! Input events for the host event loop.
//!
//! The strip itself is driven by plain method calls; this module only
//! adapts raw terminal events into the small set the host screen cares
//! about.

use crossterm::event::KeyEvent;

/// Input events from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
    /// Periodic tick with no input attached.
    Tick,
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(key) => InputEvent::Key(key),
            crossterm::event::Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Tick,
        }
    }
}
