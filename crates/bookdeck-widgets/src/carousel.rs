#![forbid(unsafe_code)]

//! Circular carousel index state.
//!
//! [`CarouselState`] owns the displayed index for one carousel instance.
//! Two instances on the same page (the book showcase and the slide deck)
//! each hold their own state; nothing here is shared or global.
//!
//! Transitions wrap modulo the item count. With zero items every
//! transition is a no-op: there is nothing to show, and nothing to divide
//! by.

use bookdeck_core::event::{KeyCode, KeyEvent};
use bookdeck_core::swipe::SwipeDirection;
use thiserror::Error;
use tracing::debug;

/// A direct jump target outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("carousel index {index} out of range for {len} items")]
pub struct RangeError {
    pub index: usize,
    pub len: usize,
}

/// Mutable state for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    /// Create state over `len` items, starting at the first.
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The currently displayed index. Meaningless when empty.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Step forward, wrapping at the end. Returns false when empty.
    pub fn advance(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        debug!(current = self.current, "carousel advance");
        true
    }

    /// Step backward, wrapping at the start. Returns false when empty.
    pub fn retreat(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.current = (self.current + self.len - 1) % self.len;
        debug!(current = self.current, "carousel retreat");
        true
    }

    /// Jump straight to `index`.
    pub fn jump_to(&mut self, index: usize) -> Result<(), RangeError> {
        if index >= self.len {
            return Err(RangeError {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Apply an arrow-key binding: Left retreats, Right advances.
    ///
    /// Returns true when the event caused a transition.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.is_press(KeyCode::Left) {
            self.retreat()
        } else if event.is_press(KeyCode::Right) {
            self.advance()
        } else {
            false
        }
    }

    /// Apply a completed swipe: leftward travel advances, rightward
    /// retreats (content follows the finger).
    pub fn handle_swipe(&mut self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Left => self.advance(),
            SwipeDirection::Right => self.retreat(),
        }
    }
}
