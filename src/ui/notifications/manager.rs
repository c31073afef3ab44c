// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` limits the number of visible toasts, queues the rest and
//! dismisses toasts once their lifetime runs out.

use super::notification::{Notification, NotificationId, Severity};
use super::Notifier;
use crate::config::NotificationsConfig;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic clock used to expire toasts.
    Tick(Instant),
}

#[derive(Debug)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
    lifetime: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(&NotificationsConfig::default())
    }
}

impl Manager {
    #[must_use]
    pub fn new(config: &NotificationsConfig) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            lifetime: config.toast_duration(),
        }
    }

    /// Shows `notification` now, or queues it when [`MAX_VISIBLE`] toasts
    /// are already on screen.
    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    fn push_at(&mut self, mut notification: Notification, now: Instant) {
        log::debug!(
            "toast {:?}: {} / {}",
            notification.severity(),
            notification.title_key(),
            notification.message_key()
        );
        if self.visible.len() < MAX_VISIBLE {
            notification.mark_shown(now, self.lifetime);
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible toast whose lifetime has elapsed at `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss_at(id, now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the expiry clock needs to run.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.mark_shown(now, self.lifetime);
            self.visible.push_back(notification);
        }
    }
}

impl Notifier for Manager {
    fn notify(&mut self, title_key: &str, message_key: &str) {
        self.push(Notification::new(Severity::Success, title_key, message_key));
    }
}
