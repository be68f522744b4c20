// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The playground fills the window and the toast overlay is stacked on top.

use super::Message;
use crate::domain::style::StyleStore;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Toast, Toaster};
use crate::ui::playground::{self, ViewContext as PlaygroundViewContext};
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub playground: &'a playground::State,
    pub store: &'a StyleStore,
    pub notifications: &'a Toaster,
}

/// Renders the playground with the toast overlay above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = playground::view(PlaygroundViewContext {
        i18n: ctx.i18n,
        state: ctx.playground,
        store: ctx.store,
    })
    .map(Message::Playground);

    let base = Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill);

    // Always a stack: the playground subtree keeps its state across toast changes
    let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(overlay)
        .into()
}
