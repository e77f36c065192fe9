#![forbid(unsafe_code)]

//! Modal dialog presentation.
//!
//! Three dialogs hang off a book card: full details, note taking, and
//! reading-progress updates. Opening one populates its regions from an
//! already-resolved [`BookRecord`] — resolution failures are the caller's
//! to surface, so a modal can never appear half-populated — and stashes
//! the book id in a hidden field for the eventual form submission.

use bookdeck_core::book::BookRecord;
use bookdeck_view::ViewTree;
use tracing::debug;

/// Container region for the details dialog.
pub const DETAILS_MODAL: &str = "bookDetailsModal";
/// Title region inside the details dialog.
pub const DETAILS_TITLE: &str = "modalBookTitle";
/// Author region inside the details dialog.
pub const DETAILS_AUTHOR: &str = "modalBookAuthor";
/// Cover image region inside the details dialog.
pub const DETAILS_COVER: &str = "modalBookCover";

/// Container region for the note dialog.
pub const NOTE_MODAL: &str = "addNoteModal";
/// Heading region of the note dialog.
pub const NOTE_HEADING: &str = "addNoteModalTitle";
/// Hidden field carrying the book id for note submission.
pub const NOTE_BOOK_ID: &str = "noteBookId";

/// Container region for the progress dialog.
pub const PROGRESS_MODAL: &str = "updateProgressModal";
/// Heading region of the progress dialog.
pub const PROGRESS_HEADING: &str = "updateProgressModalTitle";
/// Hidden field carrying the book id for progress submission.
pub const PROGRESS_BOOK_ID: &str = "progressBookId";

/// Which dialog an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Details,
    AddNote,
    UpdateProgress,
}

impl ModalKind {
    /// The dialog's container region.
    pub const fn container(self) -> &'static str {
        match self {
            ModalKind::Details => DETAILS_MODAL,
            ModalKind::AddNote => NOTE_MODAL,
            ModalKind::UpdateProgress => PROGRESS_MODAL,
        }
    }
}

/// Stateless modal presenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modal;

impl Modal {
    /// Populate and show the dialog for `kind`.
    pub fn open(tree: &mut ViewTree, kind: ModalKind, book: &BookRecord) {
        debug!(?kind, book_id = %book.id, "opening modal");
        match kind {
            ModalKind::Details => {
                tree.set_text(DETAILS_TITLE, &book.title);
                tree.set_text(DETAILS_AUTHOR, &book.author);
                tree.set_image(DETAILS_COVER, book.cover_src());
            }
            ModalKind::AddNote => {
                tree.set_value(NOTE_BOOK_ID, &book.id);
                tree.set_text(NOTE_HEADING, format!("Add Note for \"{}\"", book.title));
            }
            ModalKind::UpdateProgress => {
                tree.set_value(PROGRESS_BOOK_ID, &book.id);
                tree.set_text(
                    PROGRESS_HEADING,
                    format!("Update Progress for \"{}\"", book.title),
                );
            }
        }
        tree.show(kind.container());
    }

    /// Hide the dialog for `kind`. Populated content is left in place; the
    /// next open overwrites it.
    pub fn close(tree: &mut ViewTree, kind: ModalKind) {
        debug!(?kind, "closing modal");
        tree.hide(kind.container());
    }

    /// Hide every dialog, e.g. on reload.
    pub fn close_all(tree: &mut ViewTree) {
        for kind in [ModalKind::Details, ModalKind::AddNote, ModalKind::UpdateProgress] {
            tree.hide(kind.container());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> BookRecord {
        BookRecord::new("42", "Dune", "Frank Herbert", "dune.jpg")
    }

    #[test]
    fn details_modal_populates_and_shows() {
        let mut tree = ViewTree::new();
        Modal::open(&mut tree, ModalKind::Details, &dune());

        assert!(tree.is_visible(DETAILS_MODAL));
        assert_eq!(tree.text(DETAILS_TITLE), Some("Dune"));
        assert_eq!(tree.text(DETAILS_AUTHOR), Some("Frank Herbert"));
        assert_eq!(
            tree.image(DETAILS_COVER),
            Some("/static/images/products/dune.jpg")
        );
    }

    #[test]
    fn note_modal_carries_hidden_book_id() {
        let mut tree = ViewTree::new();
        Modal::open(&mut tree, ModalKind::AddNote, &dune());

        assert!(tree.is_visible(NOTE_MODAL));
        assert_eq!(tree.value(NOTE_BOOK_ID), Some("42"));
        assert_eq!(tree.text(NOTE_HEADING), Some("Add Note for \"Dune\""));
    }

    #[test]
    fn progress_modal_carries_hidden_book_id() {
        let mut tree = ViewTree::new();
        Modal::open(&mut tree, ModalKind::UpdateProgress, &dune());

        assert!(tree.is_visible(PROGRESS_MODAL));
        assert_eq!(tree.value(PROGRESS_BOOK_ID), Some("42"));
        assert_eq!(
            tree.text(PROGRESS_HEADING),
            Some("Update Progress for \"Dune\"")
        );
    }

    #[test]
    fn close_hides_only_the_target() {
        let mut tree = ViewTree::new();
        Modal::open(&mut tree, ModalKind::Details, &dune());
        Modal::open(&mut tree, ModalKind::AddNote, &dune());

        Modal::close(&mut tree, ModalKind::Details);
        assert!(!tree.is_visible(DETAILS_MODAL));
        assert!(tree.is_visible(NOTE_MODAL));
    }

    #[test]
    fn close_all_hides_everything() {
        let mut tree = ViewTree::new();
        Modal::open(&mut tree, ModalKind::Details, &dune());
        Modal::open(&mut tree, ModalKind::UpdateProgress, &dune());
        Modal::close_all(&mut tree);
        assert!(tree.visible_ids().is_empty());
    }
}
