#![forbid(unsafe_code)]

//! Slide-deck carousel over server-rendered regions.
//!
//! The server renders one region per slide; this widget only flips
//! visibility. A render pass sets every slide's visibility in one batch,
//! so after any pass exactly one slide (the current one) is visible.

use bookdeck_view::ViewTree;

use crate::carousel::CarouselState;

/// Visibility-flipping carousel over a fixed list of slide regions.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slide_ids: Vec<String>,
}

impl SlideDeck {
    pub fn new(slide_ids: Vec<String>) -> Self {
        Self { slide_ids }
    }

    /// Build a deck of `count` slides named `{prefix}{n}`, 1-based.
    pub fn numbered(prefix: &str, count: usize) -> Self {
        Self::new((1..=count).map(|n| format!("{prefix}{n}")).collect())
    }

    pub fn len(&self) -> usize {
        self.slide_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slide_ids.is_empty()
    }

    /// Fresh state sized to this deck.
    pub fn state(&self) -> CarouselState {
        CarouselState::new(self.slide_ids.len())
    }

    /// Show the current slide and hide all others.
    pub fn render(&self, tree: &mut ViewTree, state: &CarouselState) {
        for (index, id) in self.slide_ids.iter().enumerate() {
            tree.set_visible(id, !state.is_empty() && index == state.current());
        }
    }
}
