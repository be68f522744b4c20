// SPDX-License-Identifier: MPL-2.0
//! Notification dispatcher.
//!
//! Thin wrapper that turns a user action into exactly one
//! [`NotificationRequest`] on a [`ToastSink`]. Styled requests are resolved
//! against the [`StyleStore`] at the moment of the call, so no observer or
//! deferred effect is involved.

use super::port::ToastSink;
use crate::domain::request::{NotificationRequest, ToastKind};
use crate::domain::style::{StyleConfiguration, StyleOverride, StyleStore};

/// Owns the style store and issues notification requests.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    store: StyleStore,
}

impl Dispatcher {
    #[must_use]
    pub fn new(store: StyleStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &StyleStore {
        &self.store
    }

    /// Mutable access for per-field form edits.
    pub fn store_mut(&mut self) -> &mut StyleStore {
        &mut self.store
    }

    /// Resolves `partial` against the store, records it as the pending style
    /// and issues one styled notification with it.
    ///
    /// Returns the fully resolved configuration that was sent.
    pub fn configure_and_notify(
        &mut self,
        partial: StyleOverride,
        sink: &mut dyn ToastSink,
    ) -> StyleConfiguration {
        let style = self.store.configure(partial);
        sink.submit(NotificationRequest::styled(style));
        style
    }

    pub fn notify_default(&self, sink: &mut dyn ToastSink) {
        sink.submit(NotificationRequest::plain(ToastKind::Default));
    }

    pub fn notify_success(&self, sink: &mut dyn ToastSink) {
        sink.submit(NotificationRequest::plain(ToastKind::Success));
    }

    pub fn notify_error(&self, sink: &mut dyn ToastSink) {
        sink.submit(NotificationRequest::plain(ToastKind::Error));
    }

    pub fn notify_loading(&self, sink: &mut dyn ToastSink) {
        sink.submit(NotificationRequest::plain(ToastKind::Loading));
    }

    /// Issues a toast rendered with the alternate card layout.
    pub fn notify_custom(&self, sink: &mut dyn ToastSink) {
        sink.submit(NotificationRequest::plain(ToastKind::Custom));
    }

    /// Routes a trigger button to the matching operation.
    ///
    /// `Styled` is treated as configure-and-notify with nothing overridden.
    pub fn trigger(&mut self, kind: ToastKind, sink: &mut dyn ToastSink) {
        match kind {
            ToastKind::Default => self.notify_default(sink),
            ToastKind::Success => self.notify_success(sink),
            ToastKind::Error => self.notify_error(sink),
            ToastKind::Loading => self.notify_loading(sink),
            ToastKind::Custom => self.notify_custom(sink),
            ToastKind::Styled => {
                self.configure_and_notify(StyleOverride::default(), sink);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::RecordingSink;
    use crate::domain::style::{DurationMs, HexColor, Position};

    #[test]
    fn defaults_scenario_resolves_every_field() {
        let mut dispatcher = Dispatcher::default();
        let mut sink = RecordingSink::default();

        let style = dispatcher.configure_and_notify(StyleOverride::default(), &mut sink);

        assert_eq!(style.background.to_string(), "#6c757d");
        assert_eq!(style.color.to_string(), "#ffffff");
        assert_eq!(style.duration, DurationMs::new(4000));
        assert_eq!(style.position, Position::TopRight);
        assert_eq!(sink.requests().len(), 1);
        assert_eq!(sink.requests()[0], NotificationRequest::styled(style));
    }

    #[test]
    fn every_position_reaches_the_request() {
        for position in Position::ALL {
            let mut dispatcher = Dispatcher::default();
            let mut sink = RecordingSink::default();

            dispatcher.store_mut().set_position(position);
            dispatcher.configure_and_notify(StyleOverride::default(), &mut sink);

            let style = sink.last().and_then(|r| r.style).expect("styled request");
            assert_eq!(style.position, position);
        }
    }

    #[test]
    fn configuring_only_background_preserves_other_fields() {
        let mut dispatcher = Dispatcher::default();
        let mut sink = RecordingSink::default();
        dispatcher.store_mut().set_duration(DurationMs::new(900));
        dispatcher.store_mut().set_color(HexColor::from_rgb(1, 2, 3));
        dispatcher.store_mut().set_position(Position::BottomCenter);

        let green = HexColor::from_rgb(0, 255, 0);
        let style =
            dispatcher.configure_and_notify(StyleOverride::default().background(green), &mut sink);

        assert_eq!(style.background, green);
        assert_eq!(style.duration, DurationMs::new(900));
        assert_eq!(style.color, HexColor::from_rgb(1, 2, 3));
        assert_eq!(style.position, Position::BottomCenter);
    }

    #[test]
    fn duration_entered_in_form_reaches_the_request() {
        let mut dispatcher = Dispatcher::default();
        let mut sink = RecordingSink::default();
        let parsed = DurationMs::parse("4000").expect("valid duration");
        dispatcher.store_mut().set_duration(parsed);

        let style = dispatcher.configure_and_notify(StyleOverride::default(), &mut sink);
        assert_eq!(style.duration.millis(), 4000);
    }

    #[test]
    fn configure_and_notify_sets_pending_style() {
        let mut dispatcher = Dispatcher::default();
        let mut sink = RecordingSink::default();
        let style = dispatcher.configure_and_notify(
            StyleOverride::default().position(Position::BottomLeft),
            &mut sink,
        );
        assert_eq!(dispatcher.store().pending(), Some(style));
    }

    #[test]
    fn each_plain_operation_issues_one_request_of_its_kind() {
        let dispatcher = Dispatcher::default();
        let ops: [(fn(&Dispatcher, &mut dyn ToastSink), ToastKind); 5] = [
            (Dispatcher::notify_default, ToastKind::Default),
            (Dispatcher::notify_success, ToastKind::Success),
            (Dispatcher::notify_error, ToastKind::Error),
            (Dispatcher::notify_loading, ToastKind::Loading),
            (Dispatcher::notify_custom, ToastKind::Custom),
        ];

        for (op, kind) in ops {
            let mut sink = RecordingSink::default();
            op(&dispatcher, &mut sink);
            assert_eq!(sink.requests().len(), 1);
            assert_eq!(sink.requests()[0].kind, kind);
            assert!(sink.requests()[0].style.is_none());
        }
    }

    #[test]
    fn trigger_styled_uses_stored_configuration() {
        let mut dispatcher = Dispatcher::default();
        let mut sink = RecordingSink::default();
        dispatcher.store_mut().set_position(Position::TopLeft);

        dispatcher.trigger(ToastKind::Styled, &mut sink);

        let request = sink.last().expect("one request");
        assert_eq!(request.kind, ToastKind::Styled);
        assert_eq!(request.style.map(|s| s.position), Some(Position::TopLeft));
    }
}
