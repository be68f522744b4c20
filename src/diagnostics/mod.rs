// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording what happens in a session.
//!
//! Events are captured during application usage and stored in a
//! memory-bounded circular buffer. With `--log-events` each stored event is
//! also echoed to stderr as one JSON line.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer and drains the event channel
//! - [`DiagnosticsHandle`]: Cheap cloneable sender used by producers

mod buffer;
mod collector;
mod events;

pub use crate::domain::limits::BufferCapacity;
pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, StyleField, UserAction, WarningEvent, WarningType,
};
