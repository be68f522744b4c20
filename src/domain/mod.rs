// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core toast and style types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`limits`]: Bounded counts ([`BufferCapacity`](limits::BufferCapacity),
//!   [`MaxVisible`](limits::MaxVisible))
//! - [`style`]: Style value objects ([`HexColor`](style::HexColor),
//!   [`DurationMs`](style::DurationMs), [`Position`](style::Position)) and the
//!   [`StyleStore`](style::StyleStore)
//! - [`request`]: Notification requests ([`ToastKind`](request::ToastKind),
//!   [`NotificationRequest`](request::NotificationRequest))
//! - [`error`]: Input errors ([`InputError`](error::InputError))

pub mod error;
pub mod limits;
pub mod request;
pub mod style;
