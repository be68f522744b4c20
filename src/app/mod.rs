// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the dispatcher and its style store, the
//! playground form, the toast surface, localization and diagnostics, and
//! routes every message through a single update entrypoint.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::dispatcher::Dispatcher;
use crate::config;
use crate::diagnostics::{
    BufferCapacity, DiagnosticsCollector, DiagnosticsHandle, WarningEvent, WarningType,
};
use crate::domain::style::StyleStore;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::Toaster;
use crate::ui::playground;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    dispatcher: Dispatcher,
    playground: playground::State,
    notifications: Toaster,
    diagnostics: DiagnosticsCollector,
    diagnostics_handle: DiagnosticsHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("style", &self.dispatcher.store().current())
            .field("visible_toasts", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let dispatcher = Dispatcher::default();
        let playground = playground::State::new(dispatcher.store());
        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let diagnostics_handle = diagnostics.handle();
        let mut notifications = Toaster::default();
        notifications.set_diagnostics(diagnostics_handle.clone());

        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            dispatcher,
            playground,
            notifications,
            diagnostics,
            diagnostics_handle,
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let (style, style_warning) = config.styled.resolve();

        let dispatcher = Dispatcher::new(StyleStore::new(style));
        let playground = playground::State::new(dispatcher.store());
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.buffer_capacity())
            .with_stderr_echo(flags.log_events);
        let diagnostics_handle = diagnostics.handle();
        let mut notifications = Toaster::new(config.toasts.max_visible());
        notifications.set_diagnostics(diagnostics_handle.clone());

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            theme_mode: config.general.theme_mode,
            dispatcher,
            playground,
            notifications,
            diagnostics,
            diagnostics_handle,
        };

        // Show warnings for config loading issues
        for key in [config_warning, style_warning].into_iter().flatten() {
            app.diagnostics
                .log_warning(WarningEvent::new(WarningType::ConfigurationIssue, key.clone()));
            app.notifications.error(key);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Playground(playground_message) => {
                let mut ctx = update::UpdateContext {
                    dispatcher: &mut self.dispatcher,
                    playground: &mut self.playground,
                    notifications: &mut self.notifications,
                    diagnostics: &self.diagnostics_handle,
                };
                update::handle_playground_message(&mut ctx, playground_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        };

        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            playground: &self.playground,
            store: self.dispatcher.store(),
            notifications: &self.notifications,
        })
    }
}
