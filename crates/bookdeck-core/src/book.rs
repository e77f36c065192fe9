#![forbid(unsafe_code)]

//! The book record.
//!
//! A [`BookRecord`] is a read-only projection of data the server rendered
//! into the page (or of the built-in showcase list). It is constructed
//! once and never mutated; a reload rebuilds the projection from scratch.

/// Path prefix under which cover images are served.
pub const COVER_ASSET_PREFIX: &str = "/static/images/products/";

/// An immutable book, as the browsing layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Cover reference relative to [`COVER_ASSET_PREFIX`], or a full URL.
    pub cover_ref: String,
    pub rating: Option<f32>,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub year: Option<String>,
    pub summary_short: Option<String>,
    pub summary_full: Option<String>,
}

impl BookRecord {
    /// Create a record with the required fields; the rest default to none.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        cover_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            cover_ref: cover_ref.into(),
            rating: None,
            genre: None,
            language: None,
            year: None,
            summary_short: None,
            summary_full: None,
        }
    }

    #[must_use]
    pub fn rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    #[must_use]
    pub fn summaries(
        mut self,
        short: impl Into<String>,
        full: impl Into<String>,
    ) -> Self {
        self.summary_short = Some(short.into());
        self.summary_full = Some(full.into());
        self
    }

    /// Resolve the cover reference to a displayable source.
    ///
    /// Full URLs pass through untouched; bare file names are joined onto
    /// the static asset prefix.
    pub fn cover_src(&self) -> String {
        if self.cover_ref.starts_with("http://") || self.cover_ref.starts_with("https://") {
            self.cover_ref.clone()
        } else {
            format!("{COVER_ASSET_PREFIX}{}", self.cover_ref)
        }
    }
}
