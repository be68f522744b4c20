// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts render as small cards with a kind glyph and a dismiss button, and
//! are overlaid on the screen in six anchored stacks.

use super::manager::{Message, Toaster};
use super::notification::{accent_color, Body, Notification};
use crate::domain::request::ToastKind;
use crate::domain::style::Position;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};
use std::time::{Duration, Instant};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
const SPINNER_FRAME_MS: u128 = 150;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        match notification.body() {
            Body::Message(key) => Self::view_message(notification, i18n.tr(key), i18n, now),
            Body::Custom(card) => Self::view_custom(
                notification,
                i18n.tr(&card.title_key),
                i18n.tr(&card.message_key),
                i18n,
            ),
        }
    }

    fn view_message<'a>(
        notification: &'a Notification,
        message: String,
        i18n: &'a I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        let colors = notification.colors();
        let text_color = colors.map(|c| styles::hex_to_color(c.text));

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if let Some((glyph, color)) = kind_glyph(notification.kind(), notification.age(now)) {
            content = content.push(
                Container::new(text(glyph).size(sizing::ICON_MD).color(color))
                    .padding(spacing::XXS),
            );
        }

        content = content
            .push(
                Container::new(Text::new(message).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button(notification, text_color, i18n));

        let accent = accent_color(notification.kind());
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| match colors {
                Some(colors) => styles::toast::styled(colors),
                None => styles::toast::standard(theme, accent),
            })
            .into()
    }

    fn view_custom<'a>(
        notification: &'a Notification,
        title: String,
        message: String,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(
                    Text::new(title)
                        .size(typography::BODY)
                        .font(Font {
                            weight: iced::font::Weight::Bold,
                            ..Font::DEFAULT
                        }),
                )
                .width(Length::Fill),
            )
            .push(dismiss_button(notification, None, i18n));

        let body = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(text("●").size(sizing::ICON_SM).color(palette::PRIMARY_500))
                    .padding(spacing::XXS),
            )
            .push(Text::new(message).size(typography::BODY));

        let card = Column::new()
            .spacing(spacing::XS)
            .push(Container::new(header).style(styles::container::card_band).padding(spacing::XS))
            .push(Container::new(body).padding([spacing::XXS, spacing::XS]));

        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::XXS)
            .style(styles::toast::custom_card)
            .into()
    }

    /// Renders every visible toast in its anchored stack.
    ///
    /// Returns an empty container when nothing is visible.
    pub fn view_overlay<'a>(toaster: &'a Toaster, i18n: &'a I18n) -> Element<'a, Message> {
        if toaster.visible_count() == 0 {
            return Container::new(Text::new(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let now = Instant::now();

        let layers: Vec<Element<'a, Message>> = Position::ALL
            .iter()
            .filter_map(|&position| {
                let toasts = toaster.at_position(position);
                if toasts.is_empty() {
                    return None;
                }
                let (align_x, align_y) = anchor(position);

                let column = Column::with_children(
                    toasts
                        .into_iter()
                        .map(|notification| Self::view(notification, i18n, now)),
                )
                .spacing(spacing::XS)
                .align_x(align_x);

                Some(
                    Container::new(column)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(align_x)
                        .align_y(align_y)
                        .padding(spacing::MD)
                        .into(),
                )
            })
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn dismiss_button<'a>(
    notification: &Notification,
    text_color: Option<Color>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let close = button(text("×").size(typography::TITLE_SM))
        .on_press(Message::Dismiss(notification.id()))
        .padding([0.0, spacing::XS])
        .style(styles::toast::dismiss_button(text_color));

    tooltip(
        close,
        container(text(i18n.tr("toast-dismiss")).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .into()
}

/// Screen corner or edge a stack is anchored to.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Leading glyph of a standard toast. The loading spinner advances with age.
fn kind_glyph(kind: ToastKind, age: Duration) -> Option<(&'static str, Color)> {
    match kind {
        ToastKind::Success => Some(("✓", palette::SUCCESS_500)),
        ToastKind::Error => Some(("✕", palette::ERROR_500)),
        ToastKind::Loading => {
            let frame = (age.as_millis() / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
            Some((SPINNER_FRAMES[frame], palette::INFO_500))
        }
        ToastKind::Default | ToastKind::Styled | ToastKind::Custom => None,
    }
}
