#![forbid(unsafe_code)]

//! Core types for the Bookdeck browsing layer.
//!
//! This crate holds the pieces everything else builds on:
//!
//! - [`event`] — key and pointer input events.
//! - [`swipe`] — turning raw pointer events into swipe gestures.
//! - [`book`] — the immutable book record projected from server data.
//! - [`catalog`] — the card catalog that resolves a book id to its record.

pub mod book;
pub mod catalog;
pub mod event;
pub mod swipe;

pub use book::BookRecord;
pub use catalog::{Card, CardCatalog, LookupError};
pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, PointerPhase};
pub use swipe::{SwipeConfig, SwipeDirection, SwipeTracker};
