// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the only writer of the active collection. It appends
//! notifications in call order, keeps one scheduled dismissal per timed
//! notification, and removes entries on timer expiry, manual close, or bulk
//! clear. Removal is idempotent, so a timer that fires after its notification
//! is already gone does nothing.

use super::notification::{AlertSpec, Notification, NotificationDefaults, NotificationId};
use super::scenario::{ErrorCategory, SuccessScenario};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed a notification.
    Dismiss(NotificationId),
    /// A scheduled dismissal fired.
    Expired(NotificationId),
    /// Fire every dismissal due at the given instant.
    Tick(Instant),
}

/// A one-shot dismissal scheduled for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DismissTimer {
    id: NotificationId,
    due: Instant,
}

/// Owns the ordered set of active notifications and their dismissal timers.
#[derive(Debug, Default)]
pub struct Manager {
    /// Active notifications, oldest first.
    active: Vec<Notification>,
    /// Pending dismissals, one per timed notification.
    timers: Vec<DismissTimer>,
    defaults: NotificationDefaults,
}

impl Manager {
    /// Creates a new empty notification manager with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager that fills unset fields from `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: NotificationDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &NotificationDefaults {
        &self.defaults
    }

    /// Shows a notification and returns its ID.
    ///
    /// Unset fields take the manager defaults. When the resolved duration is
    /// non-zero a dismissal is scheduled `duration` after now.
    pub fn show(&mut self, spec: AlertSpec) -> NotificationId {
        self.show_at(spec, Instant::now())
    }

    /// Same as [`Manager::show`] with an explicit creation instant.
    pub fn show_at(&mut self, spec: AlertSpec, now: Instant) -> NotificationId {
        self.insert(NotificationId::new(), spec, now)
    }

    /// Inserts a notification under an ID allocated by the caller.
    pub(crate) fn insert(
        &mut self,
        id: NotificationId,
        spec: AlertSpec,
        now: Instant,
    ) -> NotificationId {
        let notification = spec.resolve(id, &self.defaults, now);

        // A delay past the end of the clock never fires; no timer is kept.
        if let Some(due) = notification
            .auto_dismiss()
            .and_then(|delay| now.checked_add(delay))
        {
            self.timers.push(DismissTimer { id, due });
        }

        tracing::debug!(
            %id,
            kind = ?notification.kind(),
            duration_ms = notification.duration_ms(),
            "notification shown"
        );
        self.active.push(notification);
        id
    }

    /// Removes a notification by its ID.
    ///
    /// Returns `true` if it was active. Removing an unknown or already
    /// removed ID is a no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        self.timers.retain(|timer| timer.id != id);

        if let Some(pos) = self.active.iter().position(|n| n.id() == id) {
            self.active.remove(pos);
            tracing::debug!(%id, "notification removed");
            true
        } else {
            false
        }
    }

    /// Handles a fired dismissal for `id`.
    ///
    /// Equivalent to [`Manager::remove`]; a timer for a notification that was
    /// closed or cleared in the meantime changes nothing.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        let removed = self.remove(id);
        if removed {
            tracing::debug!(%id, "notification expired");
        }
        removed
    }

    /// Fires every dismissal due at `now` and returns the expired IDs in
    /// insertion order.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let due: Vec<NotificationId> = self
            .active
            .iter()
            .map(Notification::id)
            .filter(|id| {
                self.timers
                    .iter()
                    .any(|timer| timer.id == *id && timer.due <= now)
            })
            .collect();

        for id in &due {
            self.expire(*id);
        }
        due
    }

    /// Removes every notification and drops every pending dismissal.
    pub fn clear_all(&mut self) {
        if !self.active.is_empty() {
            tracing::debug!(count = self.active.len(), "notifications cleared");
        }
        self.active.clear();
        self.timers.clear();
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                // The close affordance only exists on closable toasts.
                if self.get(*id).is_some_and(Notification::allow_manual_close) {
                    self.remove(*id);
                }
            }
            Message::Expired(id) => {
                self.expire(*id);
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Shows a success notification with the canned text for `scenario`.
    pub fn form_success(&mut self, scenario: SuccessScenario) -> NotificationId {
        self.show(AlertSpec::form_success(scenario))
    }

    /// Shows an error notification with the canned text for `category`.
    pub fn form_error(&mut self, category: ErrorCategory) -> NotificationId {
        self.show(AlertSpec::form_error(category))
    }

    /// Shows a persistent loading notification. It has no timer and no close
    /// button; the caller removes it when the work finishes.
    pub fn loading(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.show(AlertSpec::loading().title(title).message(message))
    }

    /// Shows an error notification with free-form text.
    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
        self.show(AlertSpec::error().title(title).message(message))
    }

    /// Returns the active notifications, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns an owned copy of the active collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.active.clone()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns the delay after which `id` is scheduled to expire, measured
    /// from its creation. `None` for persistent or unknown notifications.
    #[must_use]
    pub fn dismiss_after(&self, id: NotificationId) -> Option<Duration> {
        if !self.timers.iter().any(|timer| timer.id == id) {
            return None;
        }
        self.get(id).and_then(Notification::auto_dismiss)
    }

    /// Returns the earliest pending dismissal, if any.
    #[cfg(test)]
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|timer| timer.due).min()
    }

    /// Number of pending dismissals.
    #[cfg(test)]
    pub(crate) fn scheduled_count(&self) -> usize {
        self.timers.len()
    }

    /// Whether any visible notification draws a countdown.
    #[must_use]
    pub fn has_countdowns(&self) -> bool {
        self.active.iter().any(Notification::shows_countdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Kind;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.scheduled_count(), 0);
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn show_appends_in_call_order() {
        let mut manager = Manager::new();
        let ids: Vec<_> = (0..4)
            .map(|i| manager.show(AlertSpec::info().title(format!("n{i}"))))
            .collect();

        let active: Vec<_> = manager.active().map(Notification::id).collect();
        assert_eq!(active, ids);
    }

    #[test]
    fn show_schedules_timer_only_for_timed_notifications() {
        let mut manager = Manager::new();
        let timed = manager.show(AlertSpec::info());
        let persistent = manager.show(AlertSpec::info().duration_ms(0));

        assert_eq!(manager.scheduled_count(), 1);
        assert_eq!(
            manager.dismiss_after(timed),
            Some(Duration::from_millis(5000))
        );
        assert_eq!(manager.dismiss_after(persistent), None);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut manager = Manager::new();
        let keep = manager.show(AlertSpec::info());
        let gone = manager.show(AlertSpec::info());

        assert!(manager.remove(gone));
        let after_first = manager.snapshot();
        assert!(!manager.remove(gone));

        assert_eq!(manager.snapshot(), after_first);
        assert_eq!(manager.len(), 1);
        assert!(manager.get(keep).is_some());
    }

    #[test]
    fn remove_drops_the_pending_timer() {
        let mut manager = Manager::new();
        let id = manager.show(AlertSpec::info());
        manager.remove(id);
        assert_eq!(manager.scheduled_count(), 0);
    }

    #[test]
    fn tick_expires_only_due_notifications() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let short = manager.show_at(AlertSpec::info().duration_ms(1000), start);
        let long = manager.show_at(AlertSpec::info().duration_ms(3000), start);

        assert!(manager.tick(start + Duration::from_millis(999)).is_empty());
        assert_eq!(manager.tick(start + Duration::from_millis(1000)), vec![short]);
        assert!(manager.get(long).is_some());
        assert_eq!(manager.tick(start + Duration::from_secs(10)), vec![long]);
        assert!(manager.is_empty());
    }

    #[test]
    fn persistent_notification_survives_any_tick() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.show_at(AlertSpec::info().duration_ms(0), start);

        manager.tick(start + Duration::from_secs(3600));
        assert!(manager.get(id).is_some());

        assert!(manager.remove(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_all_neutralises_pending_timers() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let ids: Vec<_> = [100, 0, 2500]
            .into_iter()
            .map(|ms| manager.show_at(AlertSpec::info().duration_ms(ms), start))
            .collect();

        manager.clear_all();
        assert!(manager.is_empty());
        assert_eq!(manager.scheduled_count(), 0);

        let later = manager.show_at(AlertSpec::info().duration_ms(0), start);
        for id in ids {
            assert!(!manager.expire(id));
        }
        assert!(manager.tick(start + Duration::from_secs(60)).is_empty());
        assert_eq!(manager.len(), 1);
        assert!(manager.get(later).is_some());
    }

    #[test]
    fn expired_message_after_manual_close_is_noop() {
        let mut manager = Manager::new();
        let id = manager.show(AlertSpec::success());
        let other = manager.show(AlertSpec::success());

        manager.handle_message(&Message::Dismiss(id));
        manager.handle_message(&Message::Expired(id));

        assert_eq!(manager.len(), 1);
        assert!(manager.get(other).is_some());
    }

    #[test]
    fn dismiss_is_ignored_for_non_closable_notifications() {
        let mut manager = Manager::new();
        let id = manager.loading("Sending Message...", "Please wait.");

        manager.handle_message(&Message::Dismiss(id));
        assert!(manager.get(id).is_some());

        assert!(manager.remove(id));
    }

    #[test]
    fn next_deadline_is_the_earliest_timer() {
        let mut manager = Manager::new();
        let start = Instant::now();
        manager.show_at(AlertSpec::info().duration_ms(4000), start);
        manager.show_at(AlertSpec::info().duration_ms(1500), start);

        assert_eq!(
            manager.next_deadline(),
            Some(start + Duration::from_millis(1500))
        );
    }

    #[test]
    fn form_success_uses_canned_text() {
        let mut manager = Manager::new();
        let id = manager.form_success(SuccessScenario::Newsletter);
        let notification = manager.get(id).unwrap();

        assert_eq!(notification.kind(), Kind::Success);
        assert_eq!(notification.title(), Some("Successfully Subscribed!"));
        assert_eq!(notification.duration_ms(), 5000);
        assert!(notification.shows_countdown());
    }

    #[test]
    fn form_success_unknown_key_uses_default_pair() {
        let mut manager = Manager::new();
        let id = manager.form_success(SuccessScenario::from_key("careers"));
        assert_eq!(
            manager.get(id).unwrap().title(),
            Some("Form Submitted Successfully!")
        );
    }

    #[test]
    fn form_error_and_error_last_six_seconds() {
        let mut manager = Manager::new();
        let canned = manager.form_error(ErrorCategory::Validation);
        let custom = manager.error("Form Validation Failed", "Please fix 2 errors before submitting.");

        for id in [canned, custom] {
            let notification = manager.get(id).unwrap();
            assert_eq!(notification.kind(), Kind::Error);
            assert_eq!(notification.duration_ms(), 6000);
        }
        assert_eq!(
            manager.get(canned).unwrap().title(),
            Some("Please Check Your Input")
        );
    }

    #[test]
    fn loading_is_persistent() {
        let mut manager = Manager::new();
        let start = Instant::now();
        let id = manager.loading("Sending Message...", "Please wait.");

        assert_eq!(manager.dismiss_after(id), None);
        manager.tick(start + Duration::from_secs(600));
        assert_eq!(manager.get(id).unwrap().kind(), Kind::Loading);
    }

    #[test]
    fn custom_defaults_fill_unset_fields() {
        let defaults = NotificationDefaults {
            duration: Duration::from_millis(800),
            position: crate::notifications::Position::BottomCenter,
            ..NotificationDefaults::default()
        };
        let mut manager = Manager::with_defaults(defaults);
        let id = manager.show(AlertSpec::default());
        let notification = manager.get(id).unwrap();

        assert_eq!(notification.duration_ms(), 800);
        assert_eq!(
            notification.position(),
            crate::notifications::Position::BottomCenter
        );
    }

    #[test]
    fn same_instant_notifications_get_distinct_ids() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let a = manager.show_at(AlertSpec::info(), now);
        let b = manager.show_at(AlertSpec::info(), now);
        assert_ne!(a, b);
    }

    #[test]
    fn show_with_huge_duration_does_not_panic() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager.show_at(AlertSpec::info().duration(Duration::MAX), now);

        assert!(manager.get(id).is_some());
        assert_eq!(manager.scheduled_count(), 0);
        assert_eq!(manager.dismiss_after(id), None);
        assert!(manager.tick(now + Duration::from_secs(86_400)).is_empty());
        assert!(manager.remove(id));
    }
}
