// SPDX-License-Identifier: MPL-2.0
//! Notification requests produced by the dispatcher.

use super::style::StyleConfiguration;
use std::fmt;
use std::time::Duration;

/// The flavour of toast a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// Plain message, no icon.
    Default,
    /// Check-mark icon, short lifetime.
    Success,
    /// Cross icon.
    Error,
    /// Spinner glyph, stays until dismissed.
    Loading,
    /// Alternate card layout instead of the standard toast body.
    Custom,
    /// Plain message rendered with a user-chosen style.
    Styled,
}

impl ToastKind {
    pub const ALL: [ToastKind; 6] = [
        ToastKind::Default,
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Loading,
        ToastKind::Custom,
        ToastKind::Styled,
    ];

    /// The i18n key of the fixed message the playground sends for this kind.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            ToastKind::Default => "toast-default-message",
            ToastKind::Success => "toast-success-message",
            ToastKind::Error => "toast-error-message",
            ToastKind::Loading => "toast-loading-message",
            ToastKind::Custom => "toast-custom-message",
            ToastKind::Styled => "toast-styled-message",
        }
    }

    /// Lifetime applied when a request carries no explicit duration.
    ///
    /// `None` means the toast stays until dismissed.
    #[must_use]
    pub fn default_lifetime(self) -> Option<Duration> {
        match self {
            ToastKind::Success => Some(Duration::from_millis(2000)),
            ToastKind::Default | ToastKind::Error | ToastKind::Custom | ToastKind::Styled => {
                Some(Duration::from_millis(4000))
            }
            ToastKind::Loading => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Default => "default",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Loading => "loading",
            ToastKind::Custom => "custom",
            ToastKind::Styled => "styled",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request for a toast, consumed immediately by a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub message_key: String,
    pub kind: ToastKind,
    pub style: Option<StyleConfiguration>,
}

impl NotificationRequest {
    /// A request of `kind` with its fixed message and no custom style.
    #[must_use]
    pub fn plain(kind: ToastKind) -> Self {
        Self {
            message_key: kind.message_key().to_string(),
            kind,
            style: None,
        }
    }

    /// A styled request carrying a fully resolved configuration.
    #[must_use]
    pub fn styled(style: StyleConfiguration) -> Self {
        Self {
            message_key: ToastKind::Styled.message_key().to_string(),
            kind: ToastKind::Styled,
            style: Some(style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_has_no_lifetime() {
        assert!(ToastKind::Loading.default_lifetime().is_none());
    }

    #[test]
    fn success_is_shorter_than_error() {
        let success = ToastKind::Success.default_lifetime().unwrap();
        let error = ToastKind::Error.default_lifetime().unwrap();
        assert!(success < error);
    }

    #[test]
    fn message_keys_are_unique() {
        let mut keys: Vec<_> = ToastKind::ALL.iter().map(|k| k.message_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ToastKind::ALL.len());
    }

    #[test]
    fn plain_request_has_no_style() {
        let request = NotificationRequest::plain(ToastKind::Error);
        assert_eq!(request.kind, ToastKind::Error);
        assert_eq!(request.message_key, "toast-error-message");
        assert!(request.style.is_none());
    }

    #[test]
    fn styled_request_carries_style() {
        let style = StyleConfiguration::default();
        let request = NotificationRequest::styled(style);
        assert_eq!(request.kind, ToastKind::Styled);
        assert_eq!(request.style, Some(style));
    }
}
