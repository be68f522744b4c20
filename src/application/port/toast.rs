// SPDX-License-Identifier: MPL-2.0
//! Toast sink port definition.
//!
//! The [`ToastSink`] trait is the boundary between the dispatcher and
//! whatever displays toasts. The app plugs in the toast surface
//! (`ui::notifications::Toaster`); tests plug in a [`RecordingSink`].

use crate::domain::request::NotificationRequest;

/// Receives notification requests and takes ownership of their display.
///
/// Implementations schedule removal themselves (timers keyed to each
/// request's duration). The dispatcher never hears back.
pub trait ToastSink {
    /// Accepts one request. Called exactly once per dispatched notification.
    fn submit(&mut self, request: NotificationRequest);
}

/// A sink that keeps every request it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    requests: Vec<NotificationRequest>,
}

impl RecordingSink {
    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[NotificationRequest] {
        &self.requests
    }

    /// Returns the most recent request, if any.
    #[must_use]
    pub fn last(&self) -> Option<&NotificationRequest> {
        self.requests.last()
    }

    /// Drains the recorded requests.
    pub fn take(&mut self) -> Vec<NotificationRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl ToastSink for RecordingSink {
    fn submit(&mut self, request: NotificationRequest) {
        self.requests.push(request);
    }
}
