// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system with `.ftl` bundles embedded in the
//! binary.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Variable interpolation through [`fluent::I18n::tr_with_args`]

pub mod fluent;
