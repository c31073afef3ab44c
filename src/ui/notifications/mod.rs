// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts carry a localized title and message, stack in the bottom-right
//! corner, dismiss themselves after `notifications.toast_duration_secs`
//! and never block interaction. At most three are visible; the rest queue.
//!
//! # Components
//!
//! - [`notification`] - `Notification` data with severity and lifetime
//! - [`manager`] - `Manager` for queuing and expiry
//! - [`toast`] - rendering
//!
//! Components that only need to raise a toast depend on the [`Notifier`]
//! trait rather than on the manager.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;

/// Capability to show a `{title, description}` toast.
pub trait Notifier {
    fn notify(&mut self, title_key: &str, message_key: &str);
}
