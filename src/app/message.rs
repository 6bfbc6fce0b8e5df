// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::forms::Field;
use crate::notifications::{NotificationId, NotificationMessage};
use crate::site::PlanId;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A contact form input changed.
    ContactInput(Field, String),
    SubmitContact,
    /// The simulated contact submission finished; carries the loading toast.
    SubmissionCompleted(NotificationId),
    NewsletterInput(String),
    SubmitNewsletter,
    /// A pricing card call-to-action was pressed.
    SelectPlan(PlanId),
    /// "Dismiss all" was pressed.
    ClearNotifications,
    Notification(NotificationMessage),
    Tick(Instant), // Periodic tick for countdown bars
}

/// Runtime flags passed from `main` to the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Theme override from `--theme`. Takes precedence over the config file.
    pub theme: Option<ThemeMode>,
    /// Config directory override from `--config-dir`.
    /// Takes precedence over the `CODECELIX_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
