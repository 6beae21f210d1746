//! Usage output widget state.
//!
//! Shows the usage snippet with a copy affordance. After a copy the button
//! reads "Copied" for [`COPIED_RESET`], then reverts on its own.

use std::time::{Duration, Instant};

/// How long the copied indicator stays on.
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

/// Events emitted by the output widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEvent {
    /// The reader asked for the snippet to be copied.
    Copy,
}

/// Clipboard capability supplied by the host.
pub trait Clipboard {
    /// Write `text`. Returns whether the write went through.
    fn write_text(&mut self, text: &str) -> bool;
}

/// Clipboard that keeps the last written text.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> bool {
        self.text = Some(text.to_string());
        true
    }
}

/// State of the usage output widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageOutput {
    copied_at: Option<Instant>,
}

impl UsageOutput {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on the copy button.
    #[inline]
    pub fn copy_click(&mut self, now: Instant) -> OutputEvent {
        self.copied_at = Some(now);
        OutputEvent::Copy
    }

    /// Whether the copied indicator is showing at `now`.
    #[inline]
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_RESET)
    }

    /// Drop the indicator once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_copied(now) {
            self.copied_at = None;
        }
    }

    /// Label of the copy button at `now`.
    #[inline]
    pub fn button_label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            "Copied"
        } else {
            "Copy"
        }
    }
}
