//! Snackbar state: at most one notice visible, auto-dismissed after its
//! duration. A newer notice replaces the current one and brings its own
//! deadline, so a stale deadline can never close it early.

use crate::domain::{Severity, Variant};
use std::time::{Duration, Instant};

/// Default time a notice stays visible
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// A visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub variant: Variant,
    pub duration: Duration,
    pub shown_at: Instant,
}

impl Notice {
    pub fn deadline(&self) -> Instant {
        self.shown_at + self.duration
    }
}

/// Snackbar controller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Snackbar {
    #[default]
    Hidden,
    Visible(Notice),
}

impl Snackbar {
    /// Show `message` with all attributes explicit
    pub fn open(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u64,
        variant: Variant,
    ) {
        self.open_at(message, severity, duration_ms, variant, Instant::now());
    }

    pub fn open_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u64,
        variant: Variant,
        now: Instant,
    ) {
        *self = Snackbar::Visible(Notice {
            message: message.into(),
            severity,
            variant,
            duration: Duration::from_millis(duration_ms),
            shown_at: now,
        });
    }

    /// Show `message` with default severity, duration and variant
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn open_default(&mut self, message: impl Into<String>) {
        self.open(
            message,
            Severity::default(),
            DEFAULT_DURATION_MS,
            Variant::default(),
        );
    }

    pub fn close(&mut self) {
        *self = Snackbar::Hidden;
    }

    /// Hide the notice once its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if let Snackbar::Visible(notice) = self {
            if now >= notice.deadline() {
                *self = Snackbar::Hidden;
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Snackbar::Visible(_))
    }

    pub fn current(&self) -> Option<&Notice> {
        match self {
            Snackbar::Visible(notice) => Some(notice),
            Snackbar::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_starts_hidden() {
        let snackbar = Snackbar::default();
        assert!(!snackbar.is_visible());
        assert!(snackbar.current().is_none());
    }

    #[test]
    fn test_defaults() {
        let mut snackbar = Snackbar::default();
        snackbar.open_default("Saved!");

        let notice = snackbar.current().unwrap();
        assert_eq!(notice.message, "Saved!");
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.variant, Variant::Filled);
        assert_eq!(notice.duration, ms(3000));
    }

    #[test]
    fn test_auto_dismiss_after_duration() {
        let t0 = Instant::now();
        let mut snackbar = Snackbar::default();
        snackbar.open_at("Saved!", Severity::Success, 100, Variant::Filled, t0);

        snackbar.tick(t0 + ms(99));
        assert!(snackbar.is_visible());

        snackbar.tick(t0 + ms(100));
        assert!(!snackbar.is_visible());
    }

    #[test]
    fn test_explicit_close() {
        let mut snackbar = Snackbar::default();
        snackbar.open_default("bye");
        snackbar.close();
        assert_eq!(snackbar, Snackbar::Hidden);
    }

    #[test]
    fn test_last_writer_wins_and_restarts_timer() {
        let t0 = Instant::now();
        let mut snackbar = Snackbar::default();
        snackbar.open_at("Saved!", Severity::Success, 100, Variant::Filled, t0);
        snackbar.open_at("Error!", Severity::Error, 100, Variant::Filled, t0 + ms(50));

        // The first notice's deadline has passed, the replacement's has not
        snackbar.tick(t0 + ms(120));
        let notice = snackbar.current().unwrap();
        assert_eq!(notice.message, "Error!");
        assert_eq!(notice.severity, Severity::Error);

        snackbar.tick(t0 + ms(150));
        assert!(!snackbar.is_visible());
    }

    #[test]
    fn test_tick_while_hidden_is_noop() {
        let mut snackbar = Snackbar::default();
        snackbar.tick(Instant::now());
        assert!(!snackbar.is_visible());
    }
}
