// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`toast`]: The rendering surface that receives notification requests
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced types)
//! - Submission is synchronous and infallible; the surface owns timers

pub mod toast;

pub use toast::{RecordingSink, ToastSink};
