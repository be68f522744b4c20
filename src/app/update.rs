// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::application::dispatcher::Dispatcher;
use crate::diagnostics::{DiagnosticsHandle, UserAction, WarningEvent, WarningType};
use crate::ui::notifications::Toaster;
use crate::ui::playground::{self, Event as PlaygroundEvent};
use iced::Task;

/// Mutable slices of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub dispatcher: &'a mut Dispatcher,
    pub playground: &'a mut playground::State,
    pub notifications: &'a mut Toaster,
    pub diagnostics: &'a DiagnosticsHandle,
}

/// Routes a playground message and acts on the resulting event.
pub fn handle_playground_message(
    ctx: &mut UpdateContext<'_>,
    message: playground::Message,
) -> Task<Message> {
    let event = playground::update(ctx.playground, ctx.dispatcher.store_mut(), message);
    handle_playground_event(ctx, event);
    Task::none()
}

fn handle_playground_event(ctx: &mut UpdateContext<'_>, event: PlaygroundEvent) {
    match event {
        PlaygroundEvent::None => {}
        PlaygroundEvent::Trigger(kind) => {
            ctx.diagnostics.log_action(UserAction::ToastRequested {
                kind: kind.as_str().to_string(),
            });
            ctx.dispatcher.trigger(kind, &mut *ctx.notifications);
        }
        PlaygroundEvent::ConfigureAndNotify(partial) => {
            let style = ctx.dispatcher.configure_and_notify(partial, &mut *ctx.notifications);
            ctx.diagnostics.log_action(UserAction::ConfigureAndNotify {
                background: style.background.to_string(),
                color: style.color.to_string(),
                duration_ms: style.duration.millis(),
                position: style.position.as_str().to_string(),
            });
        }
        PlaygroundEvent::FieldChanged(field) => {
            ctx.diagnostics
                .log_action(UserAction::StyleFieldChanged { field });
        }
        PlaygroundEvent::InputRejected { field, error, raw } => {
            ctx.diagnostics.log_warning(WarningEvent::new(
                WarningType::InvalidInput,
                format!("{:?}: {} (input {:?})", field, error.i18n_key(), raw),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, DiagnosticsCollector};
    use crate::domain::request::ToastKind;
    use crate::domain::style::Position;
    use crate::ui::playground::PositionChoice;

    struct Fixture {
        dispatcher: Dispatcher,
        playground: playground::State,
        notifications: Toaster,
        collector: DiagnosticsCollector,
    }

    impl Fixture {
        fn new() -> Self {
            let dispatcher = Dispatcher::default();
            let playground = playground::State::new(dispatcher.store());
            Self {
                dispatcher,
                playground,
                notifications: Toaster::default(),
                collector: DiagnosticsCollector::new(BufferCapacity::default()),
            }
        }

        fn send(&mut self, message: playground::Message) {
            let handle = self.collector.handle();
            let mut ctx = UpdateContext {
                dispatcher: &mut self.dispatcher,
                playground: &mut self.playground,
                notifications: &mut self.notifications,
                diagnostics: &handle,
            };
            let _ = handle_playground_message(&mut ctx, message);
            self.collector.process_pending();
        }
    }

    #[test]
    fn trigger_shows_one_toast_and_logs_it() {
        let mut fixture = Fixture::new();
        fixture.send(playground::Message::Trigger(ToastKind::Success));

        assert_eq!(fixture.notifications.visible_count(), 1);
        assert_eq!(fixture.collector.len(), 1);
    }

    #[test]
    fn test_button_issues_styled_toast_at_selected_position() {
        let mut fixture = Fixture::new();
        fixture.send(playground::Message::PositionSelected(PositionChoice::Position(
            Position::BottomRight,
        )));
        fixture.send(playground::Message::Test);

        let toasts = fixture.notifications.at_position(Position::BottomRight);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind(), ToastKind::Styled);
        assert!(fixture.dispatcher.store().pending().is_some());
    }

    #[test]
    fn rejected_input_is_logged_as_warning() {
        let mut fixture = Fixture::new();
        fixture.send(playground::Message::DurationChanged("soon".to_string()));

        let last = fixture.collector.iter().last().expect("event logged");
        let DiagnosticEventKind::Warning { event } = &last.kind else {
            panic!("expected a warning, got {:?}", last.kind);
        };
        assert_eq!(event.warning_type, WarningType::InvalidInput);
        assert!(event.message.contains("Duration"));
        assert!(event.message.contains("input-error-not-a-number"));
        assert!(event.message.contains("\"soon\""));
        assert_eq!(fixture.notifications.visible_count(), 0);
    }
}
