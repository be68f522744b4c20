// SPDX-License-Identifier: MPL-2.0
//! Style value objects and the in-session style configuration store.
//!
//! The store holds four independent fields (background, text color, duration,
//! position). Form edits replace one field at a time; a configure action
//! resolves a partial override against the stored fields so every field of the
//! resulting [`StyleConfiguration`] is always defined.

use super::error::InputError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// =============================================================================
// HexColor
// =============================================================================

/// An opaque RGB color written as `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb` or `#rrggbb` (case insensitive, surrounding whitespace ignored).
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(InputError::Empty);
        }
        let digits = text.strip_prefix('#').ok_or(InputError::InvalidColor)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InputError::InvalidColor);
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| InputError::InvalidColor);

        match digits.len() {
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self::from_rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::from_rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(InputError::InvalidColor),
        }
    }

    #[must_use]
    pub fn r(self) -> u8 {
        self.r
    }

    #[must_use]
    pub fn g(self) -> u8 {
        self.g
    }

    #[must_use]
    pub fn b(self) -> u8 {
        self.b
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =============================================================================
// DurationMs
// =============================================================================

/// Toast lifetime in whole milliseconds. Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DurationMs(u32);

impl DurationMs {
    #[must_use]
    pub const fn new(millis: u32) -> Self {
        Self(millis)
    }

    /// Parses the text of the duration field.
    ///
    /// Only plain decimal digits are accepted. Anything else is rejected with
    /// the reason, so a non-numeric value never reaches the store.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(InputError::Empty);
        }
        if let Some(rest) = text.strip_prefix('-') {
            if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
                return Err(InputError::Negative);
            }
            return Err(InputError::NotANumber);
        }
        if !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(InputError::NotANumber);
        }
        text.parse::<u32>()
            .map(Self)
            .map_err(|_| InputError::TooLarge)
    }

    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl fmt::Display for DurationMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Position
// =============================================================================

/// Screen anchor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// All positions in selector order.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The kebab-case name used in config files and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Returns the i18n key of the selector label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Position::TopLeft => "position-top-left",
            Position::TopCenter => "position-top-center",
            Position::TopRight => "position-top-right",
            Position::BottomLeft => "position-bottom-left",
            Position::BottomCenter => "position-bottom-center",
            Position::BottomRight => "position-bottom-right",
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown position: {:?}", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

// =============================================================================
// StyleConfiguration / StyleOverride
// =============================================================================

pub const DEFAULT_BACKGROUND: HexColor = HexColor::from_rgb(0x6c, 0x75, 0x7d);
pub const DEFAULT_COLOR: HexColor = HexColor::from_rgb(0xff, 0xff, 0xff);
pub const DEFAULT_DURATION: DurationMs = DurationMs::new(4000);
pub const DEFAULT_POSITION: Position = Position::TopRight;

/// A fully resolved set of visual parameters for a styled toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleConfiguration {
    pub background: HexColor,
    pub color: HexColor,
    pub duration: DurationMs,
    pub position: Position,
}

impl Default for StyleConfiguration {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            color: DEFAULT_COLOR,
            duration: DEFAULT_DURATION,
            position: DEFAULT_POSITION,
        }
    }
}

/// A partial style: `None` fields are taken from the store when resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleOverride {
    pub background: Option<HexColor>,
    pub color: Option<HexColor>,
    pub duration: Option<DurationMs>,
    pub position: Option<Position>,
}

impl StyleOverride {
    #[must_use]
    pub fn background(mut self, background: HexColor) -> Self {
        self.background = Some(background);
        self
    }

    #[must_use]
    pub fn color(mut self, color: HexColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: DurationMs) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

// =============================================================================
// StyleStore
// =============================================================================

/// In-memory style configuration owned by the session.
#[derive(Debug, Clone, Default)]
pub struct StyleStore {
    current: StyleConfiguration,
    pending: Option<StyleConfiguration>,
}

impl StyleStore {
    #[must_use]
    pub fn new(initial: StyleConfiguration) -> Self {
        Self {
            current: initial,
            pending: None,
        }
    }

    #[must_use]
    pub fn background(&self) -> HexColor {
        self.current.background
    }

    #[must_use]
    pub fn color(&self) -> HexColor {
        self.current.color
    }

    #[must_use]
    pub fn duration(&self) -> DurationMs {
        self.current.duration
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.current.position
    }

    /// The stored fields as one configuration.
    #[must_use]
    pub fn current(&self) -> StyleConfiguration {
        self.current
    }

    /// The configuration produced by the last configure action, if any.
    #[must_use]
    pub fn pending(&self) -> Option<StyleConfiguration> {
        self.pending
    }

    pub fn set_background(&mut self, background: HexColor) {
        self.current.background = background;
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.current.color = color;
    }

    pub fn set_duration(&mut self, duration: DurationMs) {
        self.current.duration = duration;
    }

    pub fn set_position(&mut self, position: Position) {
        self.current.position = position;
    }

    /// Fills every omitted field of `partial` from the stored values.
    #[must_use]
    pub fn resolve(&self, partial: StyleOverride) -> StyleConfiguration {
        StyleConfiguration {
            background: partial.background.unwrap_or(self.current.background),
            color: partial.color.unwrap_or(self.current.color),
            duration: partial.duration.unwrap_or(self.current.duration),
            position: partial.position.unwrap_or(self.current.position),
        }
    }

    /// Resolves `partial` and records the result as the pending style.
    ///
    /// The stored fields are not modified.
    pub fn configure(&mut self, partial: StyleOverride) -> StyleConfiguration {
        let resolved = self.resolve(partial);
        self.pending = Some(resolved);
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_parses_long_and_short_forms() {
        assert_eq!(
            HexColor::parse("#6c757d"),
            Ok(HexColor::from_rgb(0x6c, 0x75, 0x7d))
        );
        assert_eq!(
            HexColor::parse("#FFF"),
            Ok(HexColor::from_rgb(0xff, 0xff, 0xff))
        );
        assert_eq!(
            HexColor::parse("  #0a0B0c "),
            Ok(HexColor::from_rgb(0x0a, 0x0b, 0x0c))
        );
    }

    #[test]
    fn hex_color_rejects_malformed_text() {
        assert_eq!(HexColor::parse(""), Err(InputError::Empty));
        assert_eq!(HexColor::parse("6c757d"), Err(InputError::InvalidColor));
        assert_eq!(HexColor::parse("#6c757"), Err(InputError::InvalidColor));
        assert_eq!(HexColor::parse("#gggggg"), Err(InputError::InvalidColor));
        assert_eq!(HexColor::parse("#é12"), Err(InputError::InvalidColor));
    }

    #[test]
    fn hex_color_displays_lowercase_long_form() {
        assert_eq!(HexColor::from_rgb(0xAB, 0x0, 0xFF).to_string(), "#ab00ff");
        assert_eq!(HexColor::parse("#abc").unwrap().to_string(), "#aabbcc");
    }

    #[test]
    fn duration_accepts_non_negative_integers() {
        assert_eq!(DurationMs::parse("4000"), Ok(DurationMs::new(4000)));
        assert_eq!(DurationMs::parse(" 0 "), Ok(DurationMs::new(0)));
    }

    #[test]
    fn duration_rejects_everything_else() {
        assert_eq!(DurationMs::parse(""), Err(InputError::Empty));
        assert_eq!(DurationMs::parse("   "), Err(InputError::Empty));
        assert_eq!(DurationMs::parse("abc"), Err(InputError::NotANumber));
        assert_eq!(DurationMs::parse("12.5"), Err(InputError::NotANumber));
        assert_eq!(DurationMs::parse("+5"), Err(InputError::NotANumber));
        assert_eq!(DurationMs::parse("-"), Err(InputError::NotANumber));
        assert_eq!(DurationMs::parse("-5"), Err(InputError::Negative));
        assert_eq!(
            DurationMs::parse("99999999999"),
            Err(InputError::TooLarge)
        );
    }

    #[test]
    fn duration_converts_to_std_duration() {
        assert_eq!(
            DurationMs::new(1500).as_duration(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn position_round_trips_through_its_name() {
        for position in Position::ALL {
            assert_eq!(position.as_str().parse::<Position>(), Ok(position));
        }
        assert_eq!("TOP-LEFT".parse::<Position>(), Ok(Position::TopLeft));
        assert!("middle".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn only_top_positions_are_top() {
        let tops: Vec<_> = Position::ALL.into_iter().filter(|p| p.is_top()).collect();
        assert_eq!(
            tops,
            vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn default_configuration_matches_playground_defaults() {
        let config = StyleConfiguration::default();
        assert_eq!(config.background.to_string(), "#6c757d");
        assert_eq!(config.color.to_string(), "#ffffff");
        assert_eq!(config.duration.millis(), 4000);
        assert_eq!(config.position, Position::TopRight);
    }

    #[test]
    fn setters_replace_one_field() {
        let mut store = StyleStore::default();
        store.set_duration(DurationMs::new(250));
        assert_eq!(store.duration(), DurationMs::new(250));
        assert_eq!(store.background(), DEFAULT_BACKGROUND);
        assert_eq!(store.color(), DEFAULT_COLOR);
        assert_eq!(store.position(), DEFAULT_POSITION);
    }

    #[test]
    fn resolve_fills_omitted_fields_from_store() {
        let mut store = StyleStore::default();
        store.set_position(Position::BottomLeft);
        store.set_duration(DurationMs::new(1234));

        let red = HexColor::from_rgb(255, 0, 0);
        let resolved = store.resolve(StyleOverride::default().background(red));

        assert_eq!(resolved.background, red);
        assert_eq!(resolved.color, DEFAULT_COLOR);
        assert_eq!(resolved.duration, DurationMs::new(1234));
        assert_eq!(resolved.position, Position::BottomLeft);
    }

    #[test]
    fn configure_records_pending_without_touching_fields() {
        let mut store = StyleStore::default();
        assert!(store.pending().is_none());

        let resolved = store.configure(StyleOverride::default().position(Position::TopLeft));

        assert_eq!(store.pending(), Some(resolved));
        assert_eq!(resolved.position, Position::TopLeft);
        assert_eq!(store.position(), DEFAULT_POSITION);
    }
}
