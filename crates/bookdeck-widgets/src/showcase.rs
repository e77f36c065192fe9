#![forbid(unsafe_code)]

//! The book showcase carousel.
//!
//! Displays one book at a time from a fixed record list: cover, title,
//! author, the four stat slots, and a two-part summary whose full text is
//! collapsed behind a "Read More" disclosure.

use bookdeck_core::book::BookRecord;
use bookdeck_view::ViewTree;

use crate::carousel::CarouselState;

/// Region id for the cover image.
pub const COVER: &str = "book-cover";
/// Region id for the title.
pub const NAME: &str = "book-name";
/// Region id for the author line.
pub const AUTHOR: &str = "book-author";
/// Region id for the rating stat.
pub const STAT_RATING: &str = "stat-rating";
/// Region id for the genre stat.
pub const STAT_GENRE: &str = "stat-genre";
/// Region id for the language stat.
pub const STAT_LANGUAGE: &str = "stat-language";
/// Region id for the year stat.
pub const STAT_YEAR: &str = "stat-year";
/// Region id for the always-visible summary preview.
pub const SUMMARY_PREVIEW: &str = "summary-preview";
/// Region id for the collapsible full summary.
pub const FULL_SUMMARY: &str = "full-summary";
/// Region id for the disclosure label.
pub const READ_MORE: &str = "read-more-text";

const EXPANDED_LABEL: &str = "Read Less";
const COLLAPSED_LABEL: &str = "Read More";
const UNKNOWN_STAT: &str = "—";

/// Per-showcase disclosure state for the full summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryDisclosure {
    pub expanded: bool,
}

impl SummaryDisclosure {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Collapse, as happens whenever the displayed book changes.
    pub fn reset(&mut self) {
        self.expanded = false;
    }

    pub fn label(&self) -> &'static str {
        if self.expanded {
            EXPANDED_LABEL
        } else {
            COLLAPSED_LABEL
        }
    }
}

/// Stateless showcase renderer over its record list.
#[derive(Debug, Clone)]
pub struct Showcase {
    books: Vec<BookRecord>,
}

impl Showcase {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Fresh state sized to the record list.
    pub fn state(&self) -> CarouselState {
        CarouselState::new(self.books.len())
    }

    /// The record at the carousel's current index.
    pub fn current<'a>(&'a self, state: &CarouselState) -> Option<&'a BookRecord> {
        self.books.get(state.current())
    }

    /// Render the current book into the showcase regions.
    ///
    /// Every region is written on every pass, so stale content from the
    /// previous book can never leak through.
    pub fn render(&self, tree: &mut ViewTree, state: &CarouselState, summary: &SummaryDisclosure) {
        let Some(book) = self.current(state) else {
            for id in [
                COVER,
                NAME,
                AUTHOR,
                STAT_RATING,
                STAT_GENRE,
                STAT_LANGUAGE,
                STAT_YEAR,
                SUMMARY_PREVIEW,
                FULL_SUMMARY,
                READ_MORE,
            ] {
                tree.hide(id);
            }
            return;
        };

        tree.set_image(COVER, book.cover_src());
        tree.show(COVER);
        tree.set_text(NAME, &book.title);
        tree.show(NAME);
        tree.set_text(AUTHOR, format!("by {}", book.author));
        tree.show(AUTHOR);

        let rating = book
            .rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| UNKNOWN_STAT.to_string());
        tree.set_text(STAT_RATING, rating);
        tree.show(STAT_RATING);
        for (id, value) in [
            (STAT_GENRE, &book.genre),
            (STAT_LANGUAGE, &book.language),
            (STAT_YEAR, &book.year),
        ] {
            tree.set_text(id, value.as_deref().unwrap_or(UNKNOWN_STAT));
            tree.show(id);
        }

        tree.set_text(
            SUMMARY_PREVIEW,
            book.summary_short.as_deref().unwrap_or_default(),
        );
        tree.show(SUMMARY_PREVIEW);
        tree.set_text(
            FULL_SUMMARY,
            book.summary_full.as_deref().unwrap_or_default(),
        );
        tree.set_visible(FULL_SUMMARY, summary.expanded);
        tree.set_text(READ_MORE, summary.label());
        tree.show(READ_MORE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Vec<BookRecord> {
        vec![
            BookRecord::new("1", "Don Quixote", "Miguel de Cervantes", "quixote.jpg")
                .rating(4.5)
                .genre("Novel")
                .language("Spanish")
                .year("1605")
                .summaries("A noble loses his sanity...", "The story tells..."),
            BookRecord::new("2", "Hamlet", "William Shakespeare", "hamlet.jpg"),
        ]
    }

    #[test]
    fn renders_current_book_fields() {
        let showcase = Showcase::new(books());
        let state = showcase.state();
        let mut tree = ViewTree::new();
        showcase.render(&mut tree, &state, &SummaryDisclosure::default());

        assert_eq!(tree.text(NAME), Some("Don Quixote"));
        assert_eq!(tree.text(AUTHOR), Some("by Miguel de Cervantes"));
        assert_eq!(tree.text(STAT_RATING), Some("4.5"));
        assert_eq!(tree.text(STAT_YEAR), Some("1605"));
        assert_eq!(
            tree.image(COVER),
            Some("/static/images/products/quixote.jpg")
        );
    }

    #[test]
    fn advancing_replaces_every_field() {
        let showcase = Showcase::new(books());
        let mut state = showcase.state();
        let mut tree = ViewTree::new();
        showcase.render(&mut tree, &state, &SummaryDisclosure::default());

        state.advance();
        showcase.render(&mut tree, &state, &SummaryDisclosure::default());
        assert_eq!(tree.text(NAME), Some("Hamlet"));
        // Missing stats render as placeholders, not as the previous book's.
        assert_eq!(tree.text(STAT_GENRE), Some(UNKNOWN_STAT));
    }

    #[test]
    fn full_summary_follows_disclosure() {
        let showcase = Showcase::new(books());
        let state = showcase.state();
        let mut tree = ViewTree::new();
        let mut summary = SummaryDisclosure::default();

        showcase.render(&mut tree, &state, &summary);
        assert!(!tree.is_visible(FULL_SUMMARY));
        assert_eq!(tree.text(READ_MORE), Some("Read More"));

        summary.toggle();
        showcase.render(&mut tree, &state, &summary);
        assert!(tree.is_visible(FULL_SUMMARY));
        assert_eq!(tree.text(READ_MORE), Some("Read Less"));
    }

    #[test]
    fn disclosure_reset_collapses() {
        let mut summary = SummaryDisclosure::default();
        summary.toggle();
        assert!(summary.expanded);
        summary.reset();
        assert!(!summary.expanded);
    }

    #[test]
    fn empty_showcase_hides_all_regions() {
        let showcase = Showcase::new(Vec::new());
        let state = showcase.state();
        let mut tree = ViewTree::new();
        tree.show(NAME);
        showcase.render(&mut tree, &state, &SummaryDisclosure::default());
        assert!(tree.visible_ids().is_empty());
    }
}
