//! Stacking toast notifications.
//!
//! The TUI implementation of the notification sink: notices pile up in an
//! overlay and fall off after a fixed time-to-live. Fire-and-forget; no
//! caller ever observes delivery.

use std::time::{Duration, Instant};

use restdeck_core::{Notice, NotificationSink};

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(5);

/// A notice with its arrival time.
pub struct Toast {
    /// The displayed notice.
    pub notice: Notice,
    /// When the notice arrived.
    created: Instant,
}

/// Stack of live toasts, oldest first.
#[derive(Default)]
pub struct ToastStack {
    /// Live toasts.
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops toasts older than the time-to-live.
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    /// Prune against an explicit clock, for tests.
    fn prune_at(&mut self, now: Instant) {
        self.toasts
            .retain(|toast| now.duration_since(toast.created) < TOAST_TTL);
    }

    /// Live toasts, oldest first.
    #[must_use]
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    /// Whether any toast is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl NotificationSink for ToastStack {
    fn notify(&mut self, notice: Notice) {
        self.toasts.push(Toast {
            notice,
            created: Instant::now(),
        });
    }
}
