// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Frames are only requested while a viewer animates, and the toast clock
//! only runs while toasts are shown, so an idle page does no work.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

const TOAST_TICK: Duration = Duration::from_millis(100);

/// Window resizes drive the gallery column count.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Redraw requests for viewers that spin, play or load.
pub fn create_frame_subscription(needs_frames: bool) -> Subscription<Message> {
    if needs_frames {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TOAST_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
