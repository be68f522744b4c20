// SPDX-License-Identifier: MPL-2.0
//! Toast playground screen.
//!
//! Six trigger buttons plus the "Options and styles" form that edits the
//! style store. Form fields keep the raw text the user typed; only valid
//! values reach the store, invalid ones show an inline hint instead.

mod view;

pub use view::{view, ViewContext};

use crate::diagnostics::StyleField;
use crate::domain::error::InputError;
use crate::domain::request::ToastKind;
use crate::domain::style::{DurationMs, HexColor, Position, StyleOverride, StyleStore};

/// One entry of the position selector: the placeholder or a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionChoice {
    /// "--Select a position--". Keeps the stored position.
    #[default]
    Placeholder,
    Position(Position),
}

impl PositionChoice {
    /// All selector entries in display order.
    pub const ALL: [PositionChoice; 7] = [
        PositionChoice::Placeholder,
        PositionChoice::Position(Position::TopLeft),
        PositionChoice::Position(Position::TopCenter),
        PositionChoice::Position(Position::TopRight),
        PositionChoice::Position(Position::BottomLeft),
        PositionChoice::Position(Position::BottomCenter),
        PositionChoice::Position(Position::BottomRight),
    ];

    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            PositionChoice::Placeholder => None,
            PositionChoice::Position(position) => Some(position),
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            PositionChoice::Placeholder => "position-placeholder",
            PositionChoice::Position(position) => position.i18n_key(),
        }
    }
}

/// Form state of the playground.
#[derive(Debug, Clone, Default)]
pub struct State {
    background_input: String,
    color_input: String,
    duration_input: String,
    position_choice: PositionChoice,
    background_error: Option<InputError>,
    color_error: Option<InputError>,
    duration_error: Option<InputError>,
}

impl State {
    /// Creates a form showing the store's current values.
    #[must_use]
    pub fn new(store: &StyleStore) -> Self {
        Self {
            background_input: store.background().to_string(),
            color_input: store.color().to_string(),
            duration_input: store.duration().to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn background_input(&self) -> &str {
        &self.background_input
    }

    #[must_use]
    pub fn color_input(&self) -> &str {
        &self.color_input
    }

    #[must_use]
    pub fn duration_input(&self) -> &str {
        &self.duration_input
    }

    #[must_use]
    pub fn position_choice(&self) -> PositionChoice {
        self.position_choice
    }

    #[must_use]
    pub fn background_error(&self) -> Option<InputError> {
        self.background_error
    }

    #[must_use]
    pub fn color_error(&self) -> Option<InputError> {
        self.color_error
    }

    #[must_use]
    pub fn duration_error(&self) -> Option<InputError> {
        self.duration_error
    }

    /// The override sent by "Test": every field but the duration.
    ///
    /// The placeholder position leaves the position unset.
    #[must_use]
    pub fn test_override(&self, store: &StyleStore) -> StyleOverride {
        let partial = StyleOverride::default()
            .background(store.background())
            .color(store.color());
        match self.position_choice.position() {
            Some(position) => partial.position(position),
            None => partial,
        }
    }
}

/// Messages emitted by the playground.
#[derive(Debug, Clone)]
pub enum Message {
    BackgroundChanged(String),
    BackgroundPicked(HexColor),
    ColorChanged(String),
    ColorPicked(HexColor),
    DurationChanged(String),
    PositionSelected(PositionChoice),
    Trigger(ToastKind),
    Test,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A trigger button was pressed.
    Trigger(ToastKind),
    /// "Test" was pressed.
    ConfigureAndNotify(StyleOverride),
    /// A field accepted a new value and the store was updated.
    FieldChanged(StyleField),
    /// A field rejected its input; the store kept its previous value.
    InputRejected {
        field: StyleField,
        error: InputError,
        raw: String,
    },
}

/// Process a playground message, applying valid edits to `store`.
pub fn update(state: &mut State, store: &mut StyleStore, message: Message) -> Event {
    match message {
        Message::BackgroundChanged(raw) => {
            let result = HexColor::parse(&raw);
            state.background_input = raw;
            apply(
                StyleField::Background,
                result,
                &mut state.background_error,
                &state.background_input,
                |color| store.set_background(color),
            )
        }
        Message::BackgroundPicked(color) => {
            state.background_input = color.to_string();
            state.background_error = None;
            store.set_background(color);
            Event::FieldChanged(StyleField::Background)
        }
        Message::ColorChanged(raw) => {
            let result = HexColor::parse(&raw);
            state.color_input = raw;
            apply(
                StyleField::Color,
                result,
                &mut state.color_error,
                &state.color_input,
                |color| store.set_color(color),
            )
        }
        Message::ColorPicked(color) => {
            state.color_input = color.to_string();
            state.color_error = None;
            store.set_color(color);
            Event::FieldChanged(StyleField::Color)
        }
        Message::DurationChanged(raw) => {
            let result = DurationMs::parse(&raw);
            state.duration_input = raw;
            apply(
                StyleField::Duration,
                result,
                &mut state.duration_error,
                &state.duration_input,
                |duration| store.set_duration(duration),
            )
        }
        Message::PositionSelected(choice) => {
            state.position_choice = choice;
            match choice.position() {
                Some(position) => {
                    store.set_position(position);
                    Event::FieldChanged(StyleField::Position)
                }
                None => Event::None,
            }
        }
        Message::Trigger(kind) => Event::Trigger(kind),
        Message::Test => Event::ConfigureAndNotify(state.test_override(store)),
    }
}

fn apply<T>(
    field: StyleField,
    result: Result<T, InputError>,
    error_slot: &mut Option<InputError>,
    raw: &str,
    store_value: impl FnOnce(T),
) -> Event {
    match result {
        Ok(value) => {
            *error_slot = None;
            store_value(value);
            Event::FieldChanged(field)
        }
        Err(error) => {
            *error_slot = Some(error);
            Event::InputRejected {
                field,
                error,
                raw: raw.to_string(),
            }
        }
    }
}
