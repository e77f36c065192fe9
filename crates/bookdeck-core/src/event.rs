#![forbid(unsafe_code)]

//! Input events.
//!
//! Backends translate whatever their transport delivers (terminal escape
//! sequences, touch callbacks) into these types; controllers only ever see
//! this representation.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier state at the time of a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

/// A key on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    Tab,
}

/// Whether a key event is a press or a release.
///
/// Only presses drive state transitions; releases are delivered so
/// backends don't have to filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Press,
    Release,
}

/// A single keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a plain key press with no modifiers.
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// True if this is a press of the given key with no modifiers.
    pub fn is_press(&self, code: KeyCode) -> bool {
        self.kind == KeyEventKind::Press && self.code == code && self.modifiers.is_empty()
    }
}

/// Phase of a pointer (touch or drag) interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Contact started.
    Down,
    /// Contact moved while held.
    Move,
    /// Contact ended.
    Up,
}

/// A pointer event in surface coordinates.
///
/// Coordinates are whatever unit the backend works in (pixels for a touch
/// surface, cells for a terminal); the swipe threshold is configured in the
/// same unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }
}

/// Any input event the runtime can deliver to an application model.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Key(KeyEvent),
    Pointer(PointerEvent),
    /// Periodic timer tick, delivered when no input arrived within the
    /// configured tick interval. Drives time-based housekeeping such as
    /// notification expiry.
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_press_matches() {
        let ev = KeyEvent::press(KeyCode::Left);
        assert!(ev.is_press(KeyCode::Left));
        assert!(!ev.is_press(KeyCode::Right));
    }

    #[test]
    fn modified_press_does_not_match_plain() {
        let ev = KeyEvent {
            code: KeyCode::Left,
            modifiers: Modifiers::CTRL,
            kind: KeyEventKind::Press,
        };
        assert!(!ev.is_press(KeyCode::Left));
    }

    #[test]
    fn release_does_not_match_press() {
        let ev = KeyEvent {
            code: KeyCode::Enter,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Release,
        };
        assert!(!ev.is_press(KeyCode::Enter));
    }
}
