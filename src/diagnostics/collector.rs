// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector receives events from handles over a bounded channel and
//! stores them in a circular buffer.

use std::io::Write;

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, UserAction,
    WarningEvent,
};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: events are dropped when the channel
/// is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    echo_to_stderr: bool,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("echo_to_stderr", &self.echo_to_stderr)
            .finish()
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            echo_to_stderr: false,
        }
    }

    /// Echoes every stored event to stderr as a JSON line.
    #[must_use]
    pub fn with_stderr_echo(mut self, enabled: bool) -> Self {
        self.echo_to_stderr = enabled;
        self
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the event channel into the buffer.
    ///
    /// Called from the UI update loop after each message.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.store(event);
        }
    }

    /// Logs an action directly to the buffer, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        self.store(DiagnosticEvent::new(DiagnosticEventKind::UserAction { action }));
    }

    /// Logs a warning directly to the buffer, bypassing the channel.
    pub fn log_warning(&mut self, event: WarningEvent) {
        self.store(DiagnosticEvent::new(DiagnosticEventKind::Warning { event }));
    }

    fn store(&mut self, event: DiagnosticEvent) {
        if self.echo_to_stderr {
            if let Ok(line) = serde_json::to_string(&event) {
                let _ = writeln!(std::io::stderr().lock(), "{line}");
            }
        }
        self.buffer.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{StyleField, WarningType};

    fn collector() -> DiagnosticsCollector {
        DiagnosticsCollector::new(BufferCapacity::new(100))
    }

    #[test]
    fn handle_events_are_stored_after_processing() {
        let mut collector = collector();
        let handle = collector.handle();

        handle.log_action(UserAction::ToastRequested {
            kind: "error".to_string(),
        });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn cloned_handles_share_the_channel() {
        let mut collector = collector();
        let first = collector.handle();
        let second = first.clone();

        first.log_action(UserAction::DismissToast);
        second.log_warning(WarningEvent::new(WarningType::InvalidInput, "-5"));
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(kinds.len(), 2);
        assert!(matches!(kinds[0], DiagnosticEventKind::UserAction { .. }));
        assert!(matches!(kinds[1], DiagnosticEventKind::Warning { .. }));
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = collector();
        let handle = collector.handle();

        for _ in 0..DIAGNOSTICS_CHANNEL_CAPACITY + 10 {
            handle.log_action(UserAction::DismissToast);
        }
        collector.process_pending();

        assert_eq!(collector.len(), DIAGNOSTICS_CHANNEL_CAPACITY.min(100));
    }

    #[test]
    fn direct_logging_bypasses_channel() {
        let mut collector = collector();
        collector.log_action(UserAction::StyleFieldChanged {
            field: StyleField::Background,
        });
        collector.log_warning(WarningEvent::new(
            WarningType::ConfigurationIssue,
            "notification-config-load-error",
        ));
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn buffer_capacity_bounds_storage() {
        let mut collector = collector();
        for _ in 0..150 {
            collector.log_action(UserAction::DismissToast);
        }
        assert_eq!(collector.len(), collector.capacity());

        collector.clear();
        assert!(collector.is_empty());
    }
}
