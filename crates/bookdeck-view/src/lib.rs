#![forbid(unsafe_code)]

//! The view surface widgets draw on.
//!
//! The actual overlay machinery (a browser DOM, a terminal grid) is an
//! external collaborator; all this layer needs from it is "make visible /
//! make hidden / set content" semantics. [`tree::ViewTree`] is the retained
//! model of that surface: named regions with a visibility flag and content
//! slots. Widgets mutate the tree, and a [`present::Present`] backend turns
//! the finished tree into real output once per loop iteration, so the user
//! never observes a half-applied mutation batch.

pub mod present;
pub mod tree;

pub use present::{Present, TextPresenter};
pub use tree::{Region, ViewTree};
