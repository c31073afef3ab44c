// SPDX-License-Identifier: MPL-2.0
//! Notification data: severity, localized title and message, lifetime.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity picks the accent color and glyph of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Text glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }
}

/// A toast waiting to be shown or on screen.
///
/// Title and message are i18n keys resolved at render time, so a locale
/// change re-translates toasts already on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title_key: String,
    message_key: String,
    message_args: Vec<(String, String)>,
    shown_at: Option<Instant>,
    lifetime: Option<Duration>,
}

impl Notification {
    pub fn new(
        severity: Severity,
        title_key: impl Into<String>,
        message_key: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            title_key: title_key.into(),
            message_key: message_key.into(),
            message_args: Vec::new(),
            shown_at: None,
            lifetime: None,
        }
    }

    pub fn success(title_key: impl Into<String>, message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, title_key, message_key)
    }

    pub fn warning(title_key: impl Into<String>, message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title_key, message_key)
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the manager's default lifetime for this toast.
    #[must_use]
    pub fn lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Starts the dismiss timer. The clock only runs while visible, so
    /// queued toasts get their full lifetime once promoted.
    pub(super) fn mark_shown(&mut self, now: Instant, default_lifetime: Duration) {
        self.shown_at = Some(now);
        self.lifetime.get_or_insert(default_lifetime);
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        match (self.shown_at, self.lifetime) {
            (Some(shown_at), Some(lifetime)) => now.saturating_duration_since(shown_at) >= lifetime,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let first = Notification::success("title", "message");
        let second = Notification::success("title", "message");
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unshown_notification_never_expires() {
        let notification = Notification::success("t", "m");
        assert!(!notification.is_expired(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn explicit_lifetime_wins_over_default() {
        let start = Instant::now();
        let mut notification =
            Notification::warning("t", "m").lifetime(Duration::from_secs(10));
        notification.mark_shown(start, Duration::from_secs(2));

        assert!(!notification.is_expired(start + Duration::from_secs(5)));
        assert!(notification.is_expired(start + Duration::from_secs(10)));
    }

    #[test]
    fn builder_collects_arguments() {
        let notification = Notification::warning("title", "message")
            .with_arg("path", "catalog.toml")
            .with_arg("reason", "duplicate id");
        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(notification.title_key(), "title");
        assert_eq!(notification.message_args().len(), 2);
    }
}
