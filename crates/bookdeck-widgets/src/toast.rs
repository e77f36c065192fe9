#![forbid(unsafe_code)]

//! Stacked transient notifications.
//!
//! Every user-visible outcome — success, server rejection, lookup failure,
//! network trouble — lands here as exactly one toast. Toasts stack rather
//! than replace each other, auto-hide after a fixed delay unless pinned
//! (the "adding..." loading toast stays until explicitly dismissed), and
//! expire on the runtime's tick with the clock passed in so tests control
//! time.

use std::time::{Duration, Instant};

use bookdeck_view::ViewTree;
use tracing::debug;

/// Region id prefix for rendered toasts.
pub const TOAST_REGION_PREFIX: &str = "toast-";

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Danger,
}

impl Severity {
    /// Presentation hint the styling layer maps to a background class.
    pub const fn hint(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }
}

/// Handle to a shown toast, usable for explicit dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// One live notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    /// When the toast leaves on its own; pinned toasts have none.
    pub expires_at: Option<Instant>,
}

/// Configuration for toast lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    pub auto_hide_delay: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_hide_delay: Duration::from_secs(5),
        }
    }
}

/// The notification stack.
#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    config: ToastConfig,
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            toasts: Vec::new(),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Show a new toast on top of whatever is already stacked.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        auto_hide: bool,
        now: Instant,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let message = message.into();
        debug!(toast = id.0, %message, hint = severity.hint(), "toast shown");
        self.toasts.push(Toast {
            id,
            message,
            severity,
            expires_at: auto_hide.then(|| now + self.config.auto_hide_delay),
        });
        id
    }

    /// Dismiss a toast by handle. Unknown handles are ignored (it may have
    /// already expired).
    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop every toast whose deadline has passed.
    pub fn sweep(&mut self, now: Instant) {
        self.toasts
            .retain(|t| t.expires_at.is_none_or(|deadline| deadline > now));
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    fn region_id(id: ToastId) -> String {
        format!("{TOAST_REGION_PREFIX}{}", id.0)
    }

    /// Render the stack: one region per live toast, stale regions pruned.
    pub fn render(&self, tree: &mut ViewTree) {
        let live: Vec<String> = self.toasts.iter().map(|t| Self::region_id(t.id)).collect();
        tree.prune_prefix(TOAST_REGION_PREFIX, &live);
        for toast in &self.toasts {
            let region = Self::region_id(toast.id);
            tree.set_text(&region, &toast.message);
            tree.set_hint(&region, toast.severity.hint());
            tree.show(&region);
        }
    }
}
