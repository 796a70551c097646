//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the pointer dispatcher. Terminal
//! cells are used as pixels: column and row become `x` and `y`.
//!
//! # API
//!
//! - `convert_event` - Convert a crossterm Event to an InputEvent
//! - `convert_mouse_event` - Convert a crossterm MouseEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use boxflow::input::poll_event;
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         app.handle(event);
//!     }
//! }
//! ```

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
    MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind, poll,
    read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use crate::types::MouseButton;

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Decoded host event, routed by [`crate::App::handle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved (with or without a button held)
    Move { x: f32, y: f32 },
    /// Pointer entered the window
    Enter { x: f32, y: f32 },
    /// Pointer or focus left the window
    LeaveWindow,
    /// Button pressed
    Down { button: MouseButton, x: f32, y: f32 },
    /// Button released
    Up { button: MouseButton, x: f32, y: f32 },
    /// Wheel notches; positive moves toward the start of the content
    Scroll { dx: f32, dy: f32 },
    /// Window resized (new width, height)
    Resize { width: u32, height: u32 },
    /// No event or unhandled event type
    None,
}

// =============================================================================
// EVENT CONVERSION
// =============================================================================

/// Convert any crossterm event. Keyboard and paste events map to `None`.
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::Resize(w, h) => InputEvent::Resize { width: w as u32, height: h as u32 },
        CrosstermEvent::FocusLost => InputEvent::LeaveWindow,
        _ => InputEvent::None,
    }
}

/// Convert a crossterm MouseEvent
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> InputEvent {
    let x = event.column as f32;
    let y = event.row as f32;
    match event.kind {
        MouseEventKind::Down(btn) => InputEvent::Down { button: convert_mouse_button(btn), x, y },
        MouseEventKind::Up(btn) => InputEvent::Up { button: convert_mouse_button(btn), x, y },
        MouseEventKind::Drag(_) | MouseEventKind::Moved => InputEvent::Move { x, y },
        MouseEventKind::ScrollUp => InputEvent::Scroll { dx: 0.0, dy: 1.0 },
        MouseEventKind::ScrollDown => InputEvent::Scroll { dx: 0.0, dy: -1.0 },
        MouseEventKind::ScrollLeft => InputEvent::Scroll { dx: 1.0, dy: 0.0 },
        MouseEventKind::ScrollRight => InputEvent::Scroll { dx: -1.0, dy: 0.0 },
    }
}

/// Convert crossterm MouseButton to our MouseButton
fn convert_mouse_button(btn: CrosstermMouseButton) -> MouseButton {
    match btn {
        CrosstermMouseButton::Left => MouseButton::Left,
        CrosstermMouseButton::Right => MouseButton::Right,
        CrosstermMouseButton::Middle => MouseButton::Middle,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
