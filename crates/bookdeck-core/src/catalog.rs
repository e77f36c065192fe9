#![forbid(unsafe_code)]

//! The card catalog: data source adapter over server-rendered book cards.
//!
//! The server renders one card per book, each carrying its data as
//! key/value attributes (`data-book-id`, `data-title`, `data-author`,
//! `data-cover`). The catalog is built once from that projection; every
//! action that needs book data resolves through [`CardCatalog::resolve`]
//! instead of re-reading attributes piecemeal.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::book::BookRecord;

/// Attribute key carrying the book identifier.
pub const ATTR_BOOK_ID: &str = "data-book-id";
/// Attribute key carrying the title.
pub const ATTR_TITLE: &str = "data-title";
/// Attribute key carrying the author.
pub const ATTR_AUTHOR: &str = "data-author";
/// Attribute key carrying the cover reference.
pub const ATTR_COVER: &str = "data-cover";

const FALLBACK_TITLE: &str = "Unknown Title";
const FALLBACK_AUTHOR: &str = "Unknown Author";
const FALLBACK_COVER: &str = "default-book-cover.jpg";

/// No card carries the requested book id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no book card found with {ATTR_BOOK_ID} {0:?}")]
pub struct LookupError(pub String);

/// One rendered book card's attached metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    attrs: HashMap<String, String>,
}

impl Card {
    /// Create a card for the given book id.
    pub fn new(book_id: impl Into<String>) -> Self {
        let mut attrs = HashMap::new();
        attrs.insert(ATTR_BOOK_ID.to_string(), book_id.into());
        Self { attrs }
    }

    /// Attach an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Read an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    fn book_id(&self) -> Option<&str> {
        self.get(ATTR_BOOK_ID)
    }
}

/// All book cards visible on the current page.
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
}

impl CardCatalog {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Resolve a book id to its record.
    ///
    /// Missing cards are an error the caller must surface; missing
    /// attributes on a present card fall back to placeholder values so a
    /// half-rendered card still produces a submittable record.
    pub fn resolve(&self, book_id: &str) -> Result<BookRecord, LookupError> {
        let card = self
            .cards
            .iter()
            .find(|card| card.book_id() == Some(book_id))
            .ok_or_else(|| LookupError(book_id.to_string()))?;

        let record = BookRecord::new(
            book_id,
            card.get(ATTR_TITLE).unwrap_or(FALLBACK_TITLE),
            card.get(ATTR_AUTHOR).unwrap_or(FALLBACK_AUTHOR),
            card.get(ATTR_COVER).unwrap_or(FALLBACK_COVER),
        );
        debug!(
            book_id,
            title = %record.title,
            author = %record.author,
            cover = %record.cover_ref,
            "resolved book card"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CardCatalog {
        CardCatalog::new(vec![
            Card::new("42")
                .attr(ATTR_TITLE, "Dune")
                .attr(ATTR_AUTHOR, "Frank Herbert")
                .attr(ATTR_COVER, "dune.jpg"),
            Card::new("7").attr(ATTR_TITLE, "Hamlet"),
        ])
    }

    #[test]
    fn resolve_reads_all_attributes() {
        let record = catalog().resolve("42").unwrap();
        assert_eq!(record.title, "Dune");
        assert_eq!(record.author, "Frank Herbert");
        assert_eq!(record.cover_ref, "dune.jpg");
    }

    #[test]
    fn resolve_missing_card_errors() {
        let err = catalog().resolve("999").unwrap_err();
        assert_eq!(err, LookupError("999".to_string()));
    }

    #[test]
    fn missing_attributes_fall_back() {
        let record = catalog().resolve("7").unwrap();
        assert_eq!(record.title, "Hamlet");
        assert_eq!(record.author, "Unknown Author");
        assert_eq!(record.cover_ref, "default-book-cover.jpg");
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let catalog = CardCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.resolve("42").is_err());
    }
}
