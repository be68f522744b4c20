// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! A [`Notification`] is one toast as the surface holds it: what to show,
//! where, in which colors, and for how long.

use crate::domain::request::ToastKind;
use crate::domain::style::{HexColor, Position, StyleConfiguration};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Position used when a toast does not name one.
pub const DEFAULT_TOAST_POSITION: Position = Position::TopCenter;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Content of the alternate card layout used by custom toasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomToast {
    pub title_key: String,
    pub message_key: String,
}

impl CustomToast {
    pub fn new(title_key: impl Into<String>, message_key: impl Into<String>) -> Self {
        Self {
            title_key: title_key.into(),
            message_key: message_key.into(),
        }
    }
}

/// What a toast displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A single localized message.
    Message(String),
    /// The card layout.
    Custom(CustomToast),
}

/// Explicit background and text colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastColors {
    pub background: HexColor,
    pub text: HexColor,
}

/// Per-toast options, the equivalent of a toast library's `options` object.
///
/// Unset fields fall back to the defaults of the toast kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastOptions {
    pub position: Option<Position>,
    pub duration: Option<Duration>,
    pub colors: Option<ToastColors>,
}

impl From<StyleConfiguration> for ToastOptions {
    fn from(style: StyleConfiguration) -> Self {
        Self {
            position: Some(style.position),
            duration: Some(style.duration.as_duration()),
            colors: Some(ToastColors {
                background: style.background,
                text: style.color,
            }),
        }
    }
}

/// Accent color of the standard toast frame.
#[must_use]
pub fn accent_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Default | ToastKind::Styled => palette::GRAY_500,
        ToastKind::Success => palette::SUCCESS_500,
        ToastKind::Error => palette::ERROR_500,
        ToastKind::Loading => palette::INFO_500,
        ToastKind::Custom => palette::PRIMARY_500,
    }
}

/// A toast held by the surface.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: ToastKind,
    body: Body,
    position: Position,
    colors: Option<ToastColors>,
    /// When the toast became visible; queued toasts restart this on promotion.
    shown_at: Instant,
    /// `None` means manual dismiss only.
    duration: Option<Duration>,
}

impl Notification {
    pub fn new(kind: ToastKind, body: Body, options: ToastOptions, now: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            body,
            position: options.position.unwrap_or(DEFAULT_TOAST_POSITION),
            colors: options.colors,
            shown_at: now,
            duration: options.duration.or_else(|| kind.default_lifetime()),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn colors(&self) -> Option<ToastColors> {
        self.colors
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Time on screen at `now`.
    #[must_use]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.shown_at)
    }

    /// A toast expires once its age reaches its duration; a zero duration
    /// expires on the first tick.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.duration
            .is_some_and(|duration| self.age(now) >= duration)
    }

    pub(super) fn restart(&mut self, now: Instant) {
        self.shown_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::style::DurationMs;

    fn message(kind: ToastKind) -> Notification {
        Notification::new(
            kind,
            Body::Message(kind.message_key().to_string()),
            ToastOptions::default(),
            Instant::now(),
        )
    }

    #[test]
    fn notification_ids_are_unique() {
        let first = message(ToastKind::Default);
        let second = message(ToastKind::Default);
        assert_ne!(first.id(), second.id());
        assert!(second.id() > first.id());
    }

    #[test]
    fn unset_options_use_kind_defaults() {
        let success = message(ToastKind::Success);
        assert_eq!(success.duration(), Some(Duration::from_millis(2000)));
        assert_eq!(success.position(), DEFAULT_TOAST_POSITION);
        assert!(success.colors().is_none());

        assert_eq!(
            message(ToastKind::Error).duration(),
            Some(Duration::from_millis(4000))
        );
        assert!(message(ToastKind::Loading).duration().is_none());
    }

    #[test]
    fn style_configuration_fills_every_option() {
        let style = StyleConfiguration {
            duration: DurationMs::new(1500),
            position: Position::BottomLeft,
            ..StyleConfiguration::default()
        };

        let options = ToastOptions::from(style);
        assert_eq!(options.position, Some(Position::BottomLeft));
        assert_eq!(options.duration, Some(Duration::from_millis(1500)));
        let colors = options.colors.expect("colors should be set");
        assert_eq!(colors.background, style.background);
        assert_eq!(colors.text, style.color);
    }

    #[test]
    fn expiry_follows_duration() {
        let now = Instant::now();
        let options = ToastOptions {
            duration: Some(Duration::from_millis(500)),
            ..ToastOptions::default()
        };
        let toast = Notification::new(
            ToastKind::Styled,
            Body::Message("toast-styled-message".to_string()),
            options,
            now,
        );

        assert!(!toast.is_expired(now + Duration::from_millis(499)));
        assert!(toast.is_expired(now + Duration::from_millis(500)));
    }

    #[test]
    fn zero_duration_expires_immediately() {
        let now = Instant::now();
        let options = ToastOptions {
            duration: Some(Duration::ZERO),
            ..ToastOptions::default()
        };
        let toast = Notification::new(
            ToastKind::Default,
            Body::Message("toast-default-message".to_string()),
            options,
            now,
        );
        assert!(toast.is_expired(now));
    }

    #[test]
    fn loading_never_expires() {
        let now = Instant::now();
        let toast = message(ToastKind::Loading);
        assert!(!toast.is_expired(now + Duration::from_secs(3600)));
    }

    #[test]
    fn accent_colors_distinguish_status_kinds() {
        assert_ne!(
            accent_color(ToastKind::Success),
            accent_color(ToastKind::Error)
        );
        assert_ne!(
            accent_color(ToastKind::Loading),
            accent_color(ToastKind::Default)
        );
    }
}
