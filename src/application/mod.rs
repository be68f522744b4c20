// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`dispatcher`]: The notification dispatcher driving a [`port::ToastSink`]
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - The toast surface in `ui::notifications` implements the sink port
//! - Presentation layer calls the dispatcher at the point of user action
//!
//! # Example
//!
//! ```
//! use iced_toaster::application::dispatcher::Dispatcher;
//! use iced_toaster::application::port::RecordingSink;
//! use iced_toaster::domain::style::StyleOverride;
//!
//! let mut dispatcher = Dispatcher::default();
//! let mut sink = RecordingSink::default();
//!
//! let style = dispatcher.configure_and_notify(StyleOverride::default(), &mut sink);
//! assert_eq!(sink.requests().len(), 1);
//! assert_eq!(sink.requests()[0].style, Some(style));
//! ```

pub mod dispatcher;
pub mod port;
