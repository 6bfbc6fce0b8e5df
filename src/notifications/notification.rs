// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable `Notification` record, its `Kind` and
//! `Position`, and the `AlertSpec` builder that callers fill partially before
//! the manager resolves it against `NotificationDefaults`.

use super::scenario::{ErrorCategory, SuccessScenario};
use crate::config::defaults::{
    DEFAULT_NOTIFICATION_DURATION_MS, ERROR_NOTIFICATION_DURATION_MS, FORM_SUCCESS_DURATION_MS,
};
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    ///
    /// IDs come from a process-wide counter, so two notifications created in
    /// the same instant still differ and a removed ID never comes back.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display kind. Determines visual treatment only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    /// Work in progress. Shown without a timer by convention.
    Loading,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
            Kind::Loading => palette::LOADING_500,
        }
    }

    /// Returns the glyph drawn in front of the toast text.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error | Kind::Warning => "⚠",
            Kind::Info => "ℹ",
            Kind::Loading => "↻",
        }
    }
}

/// Screen anchor for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    TopCenter,
    BottomLeft,
    BottomRight,
    BottomCenter,
}

impl Position {
    /// All anchors, in the order overlays are stacked.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::TopCenter
        )
    }
}

/// Values used for every field an `AlertSpec` leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationDefaults {
    pub kind: Kind,
    pub duration: Duration,
    pub position: Position,
    pub show_progress: bool,
    pub allow_manual_close: bool,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            kind: Kind::Info,
            duration: Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS),
            position: Position::TopRight,
            show_progress: true,
            allow_manual_close: true,
        }
    }
}

/// Partial notification specification.
///
/// Every field is optional; `Manager::show` fills the gaps from its
/// `NotificationDefaults`.
///
/// ```
/// use codecelix_site::notifications::{AlertSpec, Kind, Position};
///
/// let spec = AlertSpec::new(Kind::Warning)
///     .title("Heads up")
///     .duration_ms(0)
///     .position(Position::BottomCenter);
/// assert_eq!(spec.kind_override(), Some(Kind::Warning));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertSpec {
    kind: Option<Kind>,
    title: Option<String>,
    message: Option<String>,
    duration: Option<Duration>,
    position: Option<Position>,
    show_progress: Option<bool>,
    allow_manual_close: Option<bool>,
}

impl AlertSpec {
    /// Creates a spec with an explicit kind.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Creates a success spec.
    pub fn success() -> Self {
        Self::new(Kind::Success)
    }

    /// Creates an error spec with the longer error duration.
    pub fn error() -> Self {
        Self::new(Kind::Error).duration_ms(ERROR_NOTIFICATION_DURATION_MS)
    }

    /// Creates a warning spec.
    pub fn warning() -> Self {
        Self::new(Kind::Warning)
    }

    /// Creates an info spec.
    pub fn info() -> Self {
        Self::new(Kind::Info)
    }

    /// Creates a persistent loading spec: no timer, no close button, no countdown.
    pub fn loading() -> Self {
        Self::new(Kind::Loading)
            .duration(Duration::ZERO)
            .allow_manual_close(false)
            .show_progress(false)
    }

    /// Canned success for a form outcome, with a countdown.
    pub fn form_success(scenario: SuccessScenario) -> Self {
        let canned = scenario.canned();
        Self::success()
            .title(canned.title)
            .message(canned.message)
            .duration_ms(FORM_SUCCESS_DURATION_MS)
            .show_progress(true)
    }

    /// Canned error for a failed form submission.
    pub fn form_error(category: ErrorCategory) -> Self {
        let canned = category.canned();
        Self::error().title(canned.title).message(canned.message)
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the auto-dismiss delay. `Duration::ZERO` keeps the notification
    /// until it is removed explicitly.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = Some(show);
        self
    }

    #[must_use]
    pub fn allow_manual_close(mut self, allow: bool) -> Self {
        self.allow_manual_close = Some(allow);
        self
    }

    /// Returns the kind set on this spec, if any.
    #[must_use]
    pub fn kind_override(&self) -> Option<Kind> {
        self.kind
    }

    /// Resolves the spec into a full notification.
    pub(crate) fn resolve(
        self,
        id: NotificationId,
        defaults: &NotificationDefaults,
        created_at: Instant,
    ) -> Notification {
        Notification {
            id,
            kind: self.kind.unwrap_or(defaults.kind),
            title: self.title,
            message: self.message,
            duration: self.duration.unwrap_or(defaults.duration),
            position: self.position.unwrap_or(defaults.position),
            show_progress: self.show_progress.unwrap_or(defaults.show_progress),
            allow_manual_close: self
                .allow_manual_close
                .unwrap_or(defaults.allow_manual_close),
            created_at,
        }
    }
}

/// A notification to be displayed to the user. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: Option<String>,
    message: Option<String>,
    /// Zero means "until removed".
    duration: Duration,
    position: Position,
    show_progress: bool,
    allow_manual_close: bool,
    created_at: Instant,
}

impl Notification {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.show_progress
    }

    #[must_use]
    pub fn allow_manual_close(&self) -> bool {
        self.allow_manual_close
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the auto-dismiss delay, or `None` for persistent notifications.
    #[must_use]
    pub fn auto_dismiss(&self) -> Option<Duration> {
        (!self.duration.is_zero()).then_some(self.duration)
    }

    /// Whether a countdown bar is drawn. Never true without a timer.
    #[must_use]
    pub fn shows_countdown(&self) -> bool {
        self.show_progress && !self.duration.is_zero()
    }

    /// Fraction of the countdown left at `now`, from 1.0 down to 0.0.
    ///
    /// Returns `None` when no countdown is shown.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> Option<f32> {
        if !self.shows_countdown() {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.created_at);
        let left = self.duration.saturating_sub(elapsed);
        Some((left.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0))
    }
}
