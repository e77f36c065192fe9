#![forbid(unsafe_code)]

//! The built-in demonstration library.
//!
//! Stands in for the server-rendered page: a showcase list for the
//! carousel and the matching book cards the modals and the reading-list
//! action resolve against.

use bookdeck_core::book::BookRecord;
use bookdeck_core::catalog::{ATTR_AUTHOR, ATTR_COVER, ATTR_TITLE, Card, CardCatalog};

/// Books shown in the showcase carousel.
pub fn showcase_books() -> Vec<BookRecord> {
    vec![
        BookRecord::new(
            "1",
            "Don Quixote",
            "Miguel de Cervantes",
            "https://covers.openlibrary.org/b/id/8224816-L.jpg",
        )
        .rating(4.5)
        .genre("Novel")
        .language("Spanish")
        .year("1605")
        .summaries(
            "Don Quixote follows the adventures of a noble who, after reading \
             too many chivalric romances, loses his sanity...",
            "The story tells the adventures of a nobleman who reads so many \
             chivalric romances that he loses his mind and decides to become \
             a knight-errant, recruiting a simple farmer, Sancho Panza, as \
             his squire...",
        ),
        BookRecord::new(
            "2",
            "One Hundred Years of Solitude",
            "Gabriel García Márquez",
            "https://covers.openlibrary.org/b/id/8701264-L.jpg",
        )
        .rating(4.7)
        .genre("Magical realism")
        .language("Spanish")
        .year("1967")
        .summaries(
            "The multi-generational story of the Buendía family in the town \
             of Macondo...",
            "Through seven generations the Buendía family lives out the rise \
             and fall of Macondo, the town they founded in the Colombian \
             jungle, as history repeats itself in their names and fates...",
        ),
        BookRecord::new(
            "3",
            "Pride and Prejudice",
            "Jane Austen",
            "https://covers.openlibrary.org/b/id/8409593-L.jpg",
        )
        .rating(4.6)
        .genre("Romance")
        .language("English")
        .year("1813")
        .summaries(
            "Elizabeth Bennet navigates manners, upbringing, and marriage in \
             Georgian England...",
            "When the wealthy Mr. Bingley and his friend Mr. Darcy arrive in \
             the neighbourhood, the Bennet family's five daughters are swept \
             into a comedy of courtship, pride, and second impressions...",
        ),
    ]
}

/// The book cards the page carries, one per showcase book.
pub fn library_cards() -> CardCatalog {
    let cards = showcase_books()
        .into_iter()
        .map(|book| {
            Card::new(book.id)
                .attr(ATTR_TITLE, book.title)
                .attr(ATTR_AUTHOR, book.author)
                .attr(ATTR_COVER, book.cover_ref)
        })
        .collect();
    CardCatalog::new(cards)
}

/// Captions for the server-rendered slide deck the demo fakes up.
pub fn slide_captions() -> Vec<String> {
    vec![
        "Staff picks this week".to_string(),
        "New arrivals".to_string(),
        "Because you liked classics".to_string(),
    ]
}
