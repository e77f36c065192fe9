#![forbid(unsafe_code)]

//! Full-page navigation targets.
//!
//! These are ordinary page loads, not API calls; the application hands
//! the URL to whatever hosts it.

/// The book page.
pub fn book_url(base_url: &str, book_id: &str) -> String {
    format!("{base_url}/book/{book_id}")
}

/// The expanded details page.
pub fn book_details_url(base_url: &str, book_id: &str) -> String {
    format!("{base_url}/book/details/{book_id}")
}
