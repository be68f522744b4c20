// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Toaster`] handles queuing, display timing, and dismissal of toasts.
//! It limits the number of visible toasts and expires them on tick.

use super::notification::{Body, CustomToast, Notification, NotificationId, ToastOptions};
use crate::application::port::ToastSink;
use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::domain::limits::MaxVisible;
use crate::domain::request::{NotificationRequest, ToastKind};
use crate::domain::style::Position;
use std::collections::VecDeque;
use std::time::Instant;

/// i18n key of the title shown on custom cards.
pub const CUSTOM_TITLE_KEY: &str = "toast-custom-title";

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(NotificationId),
    /// Tick for checking expiry timers.
    Tick(Instant),
}

/// Manages the toast queue and visible toasts.
#[derive(Debug, Default)]
pub struct Toaster {
    /// Currently visible toasts, oldest first.
    visible: VecDeque<Notification>,
    /// Toasts waiting for a free slot.
    queue: VecDeque<Notification>,
    max_visible: MaxVisible,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Toaster {
    #[must_use]
    pub fn new(max_visible: MaxVisible) -> Self {
        Self {
            max_visible,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle used to record manual dismissals.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a plain message toast.
    pub fn notify(&mut self, message_key: impl Into<String>, options: ToastOptions) -> NotificationId {
        self.show(ToastKind::Default, Body::Message(message_key.into()), options)
    }

    pub fn success(&mut self, message_key: impl Into<String>) -> NotificationId {
        self.show(
            ToastKind::Success,
            Body::Message(message_key.into()),
            ToastOptions::default(),
        )
    }

    pub fn error(&mut self, message_key: impl Into<String>) -> NotificationId {
        self.show(
            ToastKind::Error,
            Body::Message(message_key.into()),
            ToastOptions::default(),
        )
    }

    /// Shows a loading toast. It stays until dismissed.
    pub fn loading(&mut self, message_key: impl Into<String>) -> NotificationId {
        self.show(
            ToastKind::Loading,
            Body::Message(message_key.into()),
            ToastOptions::default(),
        )
    }

    /// Shows the card layout instead of the standard body.
    pub fn custom(&mut self, card: CustomToast) -> NotificationId {
        self.show(ToastKind::Custom, Body::Custom(card), ToastOptions::default())
    }

    fn show(&mut self, kind: ToastKind, body: Body, options: ToastOptions) -> NotificationId {
        self.push(Notification::new(kind, body, options, Instant::now()))
    }

    /// Pushes a toast, displaying it now if a slot is free or queuing it
    /// otherwise.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        if self.visible.len() < self.max_visible.value() {
            self.visible.push_back(notification);
        } else {
            self.queue.push_back(notification);
        }
        id
    }

    /// Removes a toast, visible or queued.
    ///
    /// Returns `true` if the toast was found.
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

    /// Removes every visible toast whose time is up, then fills free slots
    /// from the queue.
    pub fn tick(&mut self, now: Instant) {
        self.visible.retain(|n| !n.is_expired(now));
        self.promote_from_queue(now);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                if self.dismiss(*id) {
                    if let Some(handle) = &self.diagnostics {
                        handle.log_action(UserAction::DismissToast);
                    }
                }
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Visible toasts anchored at `position`, in display order.
    ///
    /// Top stacks list the newest toast first, closest to the screen edge.
    /// Bottom stacks list it last, again closest to the edge.
    #[must_use]
    pub fn at_position(&self, position: Position) -> Vec<&Notification> {
        let mut toasts: Vec<&Notification> = self
            .visible
            .iter()
            .filter(|n| n.position() == position)
            .collect();
        toasts.sort_by_key(|n| n.id());
        if position.is_top() {
            toasts.reverse();
        }
        toasts
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any toasts (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    #[must_use]
    pub fn max_visible(&self) -> MaxVisible {
        self.max_visible
    }

    /// Clears all toasts (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < self.max_visible.value() {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.restart(now);
            self.visible.push_back(notification);
        }
    }
}

impl ToastSink for Toaster {
    fn submit(&mut self, request: NotificationRequest) {
        let NotificationRequest {
            message_key,
            kind,
            style,
        } = request;

        let body = match kind {
            ToastKind::Custom => Body::Custom(CustomToast::new(CUSTOM_TITLE_KEY, message_key)),
            _ => Body::Message(message_key),
        };
        let options = style.map(ToastOptions::from).unwrap_or_default();
        self.show(kind, body, options);
    }
}
