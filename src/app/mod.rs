// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the desktop front.
//!
//! The `App` struct owns the notification manager and the form state, and
//! translates messages into side effects such as dismissal timers and the
//! simulated contact submission.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::forms::{ContactForm, NewsletterForm};
use crate::notifications::{AlertSpec, Manager, NotificationId};
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    theme: AppTheme,
    /// Toast notification manager for user feedback.
    notifications: Manager,
    contact: ContactForm,
    newsletter: NewsletterForm,
    /// Loading toast of the contact submission in flight.
    pending_submission: Option<NotificationId>,
    /// Clock used to draw countdown bars, refreshed by `Message::Tick`.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme.mode)
            .field("notifications", &self.notifications.len())
            .field("submitting", &self.contact.is_submitting())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Title of the warning shown when the settings file could not be read.
const CONFIG_WARNING_TITLE: &str = "Settings Not Loaded";

/// Builds the window settings
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

    // iced 0.14 requires the boot function to be `Fn`; flags are consumed once.
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

impl App {
    /// Loads the config and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();

        let mut app = Self::with_config(&config, flags.theme);
        tracing::info!(theme = %app.theme.mode, "application started");

        let task = match config_warning {
            Some(warning) => {
                let id = app.notifications.show(
                    AlertSpec::warning()
                        .title(CONFIG_WARNING_TITLE)
                        .message(warning),
                );
                update::schedule_dismissal(&app.notifications, id)
            }
            None => Task::none(),
        };

        (app, task)
    }

    /// Builds the state from an already loaded config. A theme passed on the
    /// command line wins over the config file.
    #[must_use]
    pub fn with_config(config: &Config, theme_override: Option<ThemeMode>) -> Self {
        let mode = theme_override.unwrap_or(config.general.theme_mode);

        Self {
            theme: AppTheme::new(mode),
            notifications: Manager::with_defaults(config.notification_defaults()),
            contact: ContactForm::new(),
            newsletter: NewsletterForm::new(),
            pending_submission: None,
            now: Instant::now(),
        }
    }

    fn title(&self) -> String {
        if self.contact.is_submitting() {
            "CodeCelix - Sending...".to_owned()
        } else {
            "CodeCelix".to_owned()
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_countdowns())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            notifications: &mut self.notifications,
            contact: &mut self.contact,
            newsletter: &mut self.newsletter,
            pending_submission: &mut self.pending_submission,
            now: &mut self.now,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            theme: &self.theme,
            notifications: &self.notifications,
            contact: &self.contact,
            newsletter: &self.newsletter,
            now: self.now,
        })
    }

    /// Notification manager, for inspection.
    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }
}
