#![forbid(unsafe_code)]

//! The assembled Bookdeck demo application.
//!
//! - [`app`] — the [`app::BrowseApp`] model wiring carousels, quiz,
//!   modals, toasts, and the reading-list gateway together.
//! - [`library`] — the built-in demonstration library.
//! - [`term`] — the crossterm event source and raw-mode output adapter.

pub mod app;
pub mod library;
pub mod term;
