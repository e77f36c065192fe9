#![forbid(unsafe_code)]

//! Presentation backends.
//!
//! A backend consumes the whole [`ViewTree`] after a frame's mutations are
//! complete. That single handoff point is what makes widget updates atomic
//! from the user's perspective.

use std::io::{self, Write};

use tracing::trace;

use crate::tree::ViewTree;

/// Turns a finished view tree into user-visible output.
pub trait Present {
    fn present(&mut self, tree: &ViewTree);
}

/// Plain-text presenter: writes one line per visible region.
///
/// Good enough for a line-oriented terminal and for capturing output in
/// tests; a richer overlay backend would replace this wholesale.
#[derive(Debug)]
pub struct TextPresenter<W: Write> {
    out: W,
    /// Clear the scrollback between frames (interactive use).
    pub clear_between_frames: bool,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_between_frames: false,
        }
    }

    #[must_use]
    pub fn clearing(mut self) -> Self {
        self.clear_between_frames = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, tree: &ViewTree) -> io::Result<()> {
        if self.clear_between_frames {
            // ANSI clear-screen + home.
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        for (id, region) in tree.iter() {
            if !region.visible {
                continue;
            }
            write!(self.out, "{id}")?;
            if let Some(hint) = &region.hint {
                write!(self.out, " [{hint}]")?;
            }
            if let Some(text) = &region.text {
                write!(self.out, ": {text}")?;
            }
            if let Some(image) = &region.image {
                write!(self.out, " <{image}>")?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Present for TextPresenter<W> {
    fn present(&mut self, tree: &ViewTree) {
        trace!(visible = tree.visible_ids().len(), "presenting frame");
        if let Err(err) = self.write_frame(tree) {
            tracing::warn!(%err, "presenter write failed");
        }
    }
}
