// SPDX-License-Identifier: MPL-2.0
//! Rendering of the playground screen.

use super::{Message, PositionChoice, State};
use crate::domain::error::InputError;
use crate::domain::request::ToastKind;
use crate::domain::style::{HexColor, StyleStore};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, swatches, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, pick_list, rule, scrollable, text_input, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the playground.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub store: &'a StyleStore,
}

/// Position selector entry with its localized label.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PositionOption {
    choice: PositionChoice,
    label: String,
}

impl std::fmt::Display for PositionOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Render the playground.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_LG);

    let status_row = Row::new()
        .spacing(spacing::LG)
        .push(build_trigger_section(&ctx, "section-default", ToastKind::Default))
        .push(build_trigger_section(&ctx, "section-success", ToastKind::Success))
        .push(build_trigger_section(&ctx, "section-error", ToastKind::Error));

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(title)
        .push(status_row)
        .push(rule::horizontal(1))
        .push(build_styled_section(&ctx))
        .push(rule::horizontal(1))
        .push(build_trigger_section(&ctx, "section-loading", ToastKind::Loading))
        .push(rule::horizontal(1))
        .push(build_trigger_section(&ctx, "section-custom", ToastKind::Custom));

    scrollable(content).into()
}

fn section_header<'a>(label: String) -> Text<'a> {
    Text::new(label).size(typography::TITLE_SM).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    })
}

fn trigger_label_key(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Default => "button-toast-default",
        ToastKind::Success => "button-toast-success",
        ToastKind::Error => "button-toast-error",
        ToastKind::Loading => "button-toast-loading",
        ToastKind::Custom => "button-toast-custom",
        ToastKind::Styled => "playground-test-button",
    }
}

/// Header plus a single trigger button.
fn build_trigger_section<'a>(
    ctx: &ViewContext<'a>,
    header_key: &str,
    kind: ToastKind,
) -> Element<'a, Message> {
    let trigger = button(Text::new(ctx.i18n.tr(trigger_label_key(kind))).size(typography::BODY))
        .on_press(Message::Trigger(kind))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::FillPortion(1))
        .push(section_header(ctx.i18n.tr(header_key)))
        .push(trigger)
        .into()
}

/// The "Styled" section: the options card with the "Test" footer.
fn build_styled_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let left = Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(1))
        .push(build_color_field(
            ctx,
            "playground-background-label",
            ctx.state.background_input(),
            ctx.state.background_error(),
            ctx.store.background(),
            Message::BackgroundChanged,
            Message::BackgroundPicked,
        ))
        .push(build_duration_field(ctx));

    let right = Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(1))
        .push(build_color_field(
            ctx,
            "playground-color-label",
            ctx.state.color_input(),
            ctx.state.color_error(),
            ctx.store.color(),
            Message::ColorChanged,
            Message::ColorPicked,
        ))
        .push(build_position_field(ctx));

    let header = Container::new(Text::new(ctx.i18n.tr("playground-card-title")).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card_band);

    let body = Container::new(Row::new().spacing(spacing::LG).push(left).push(right))
        .padding(spacing::MD);

    let test_button = button(Text::new(ctx.i18n.tr("playground-test-button")).size(typography::BODY))
        .on_press(Message::Test)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let footer = Container::new(test_button)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::card_band);

    let card = Container::new(Column::new().push(header).push(body).push(footer))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(section_header(ctx.i18n.tr("section-styled")))
        .push(
            Container::new(card)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .into()
}

fn field_label<'a>(label: String) -> Text<'a> {
    Text::new(label).size(typography::BODY)
}

fn error_hint<'a>(ctx: &ViewContext<'a>, error: Option<InputError>) -> Option<Text<'a>> {
    error.map(|error| {
        Text::new(ctx.i18n.tr(error.i18n_key()))
            .size(typography::CAPTION)
            .color(palette::ERROR_500)
    })
}

/// Color input: preview square, hex text input, preset swatches.
fn build_color_field<'a>(
    ctx: &ViewContext<'a>,
    label_key: &str,
    raw: &'a str,
    error: Option<InputError>,
    current: HexColor,
    on_input: fn(String) -> Message,
    on_pick: fn(HexColor) -> Message,
) -> Element<'a, Message> {
    let preview = Container::new(Text::new(""))
        .width(Length::Fixed(sizing::SWATCH_PREVIEW))
        .height(Length::Fixed(sizing::SWATCH_PREVIEW))
        .style(styles::container::swatch_preview(current));

    let input = text_input(&ctx.i18n.tr("playground-color-placeholder"), raw)
        .on_input(on_input)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    let presets = swatches::PRESETS
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &swatch| {
            row.push(
                button(Text::new(""))
                    .width(Length::Fixed(sizing::SWATCH))
                    .height(Length::Fixed(sizing::SWATCH))
                    .on_press(on_pick(swatch))
                    .style(styles::button::swatch(swatch, swatch == current)),
            )
        });

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(field_label(ctx.i18n.tr(label_key)))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(preview)
                .push(input),
        )
        .push(presets);

    if let Some(hint) = error_hint(ctx, error) {
        column = column.push(hint);
    }

    column.into()
}

/// Duration input with the accepted value shown underneath.
fn build_duration_field<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(
        &ctx.i18n.tr("playground-duration-placeholder"),
        ctx.state.duration_input(),
    )
    .on_input(Message::DurationChanged)
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::INPUT_WIDTH));

    let current = ctx.store.duration().to_string();
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(field_label(ctx.i18n.tr("playground-duration-label")))
        .push(input);

    column = match error_hint(ctx, ctx.state.duration_error()) {
        Some(hint) => column.push(hint),
        None => column.push(
            Text::new(
                ctx.i18n
                    .tr_with_args("playground-duration-current", &[("value", current.as_str())]),
            )
            .size(typography::CAPTION),
        ),
    };

    column.into()
}

/// Position pick list with the placeholder as its first entry.
fn build_position_field<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let options: Vec<PositionOption> = PositionChoice::ALL
        .iter()
        .map(|&choice| PositionOption {
            choice,
            label: ctx.i18n.tr(choice.i18n_key()),
        })
        .collect();

    let selected = options
        .iter()
        .find(|opt| opt.choice == ctx.state.position_choice())
        .cloned();

    let picker = pick_list(options, selected, |opt| Message::PositionSelected(opt.choice))
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::POSITION_PICKER_WIDTH));

    Column::new()
        .spacing(spacing::XS)
        .push(field_label(ctx.i18n.tr("playground-position-label")))
        .push(picker)
        .into()
}
