// SPDX-License-Identifier: MPL-2.0
//! Subscription management for the application.

use super::Message;
use crate::config::TOAST_TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick that expires toasts.
///
/// Only active while toasts exist, so an idle window does no work.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(TOAST_TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
