// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a toast notification playground built with the Iced GUI
//! framework.
//!
//! A set of trigger buttons shows the stock toast kinds (default, success,
//! error, loading, custom) and a small form configures the style of a
//! "styled" toast: background, text color, duration and screen position.
//! Text is localized with Fluent and every user action is recorded in an
//! in-memory diagnostics buffer.

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
