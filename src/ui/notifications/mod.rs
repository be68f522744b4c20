// SPDX-License-Identifier: MPL-2.0
//! Toast notification surface.
//!
//! Toasts appear temporarily in one of six screen positions and disappear
//! after their duration, or when dismissed.
//!
//! # Components
//!
//! - [`notification`] - `Notification` data, ids and per-toast options
//! - [`manager`] - `Toaster` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering and the overlay of anchored stacks
//!
//! # Usage
//!
//! ```
//! use iced_toaster::ui::notifications::{ToastOptions, Toaster};
//!
//! let mut toaster = Toaster::default();
//! toaster.success("toast-success-message");
//! toaster.notify("toast-default-message", ToastOptions::default());
//! assert_eq!(toaster.visible_count(), 2);
//! ```
//!
//! # Lifetimes
//!
//! - Success: 2 s
//! - Default, error, custom and styled: 4 s unless the options set a duration
//! - Loading: until dismissed

mod manager;
mod notification;
mod toast;

pub use manager::{Message as NotificationMessage, Toaster, CUSTOM_TITLE_KEY};
pub use notification::{
    accent_color, Body, CustomToast, Notification, NotificationId, ToastColors, ToastOptions,
    DEFAULT_TOAST_POSITION,
};
pub use toast::Toast;
