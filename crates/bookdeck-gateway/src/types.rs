#![forbid(unsafe_code)]

//! Wire shapes for the reading-list call.

use bookdeck_core::book::BookRecord;
use serde::{Deserialize, Serialize};

/// Reading status submitted when the user starts a book.
pub const STATUS_CURRENT: &str = "current";

/// Request body for `POST /add-to-reading-list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToReadingList {
    pub book_id: String,
    pub status: String,
    pub title: String,
    pub author: String,
    pub cover_image: String,
}

impl AddToReadingList {
    /// Build the "start reading" request from a resolved record.
    pub fn start_reading(book: &BookRecord) -> Self {
        Self {
            book_id: book.id.clone(),
            status: STATUS_CURRENT.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            cover_image: book.cover_ref.clone(),
        }
    }
}

/// What the server says about an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}
