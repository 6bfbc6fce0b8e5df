// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler mutates state through an [`UpdateContext`] and returns the
//! follow-up [`Task`]: dismissal timers for newly shown notifications and
//! the simulated contact submission.

use super::Message;
use crate::config::defaults::SIMULATED_SUBMISSION_MS;
use crate::forms::{validation_failed_message, ContactForm, Field, NewsletterForm};
use crate::notifications::{
    ErrorCategory, Manager, NotificationId, NotificationMessage, SuccessScenario,
};
use crate::site::{self, PlanId};
use iced::Task;
use std::time::{Duration, Instant};

/// Title of the summary toast shown when a contact submit fails validation.
pub const VALIDATION_FAILED_TITLE: &str = "Form Validation Failed";
pub const SENDING_TITLE: &str = "Sending Message...";
pub const SENDING_MESSAGE: &str = "Please wait while we process your request.";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub notifications: &'a mut Manager,
    pub contact: &'a mut ContactForm,
    pub newsletter: &'a mut NewsletterForm,
    pub pending_submission: &'a mut Option<NotificationId>,
    pub now: &'a mut Instant,
}

/// Routes a message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::ContactInput(field, value) => {
            ctx.contact.set(field, value);
            Task::none()
        }
        Message::SubmitContact => handle_contact_submit(ctx),
        Message::SubmissionCompleted(loading_id) => handle_submission_completed(ctx, loading_id),
        Message::NewsletterInput(email) => {
            ctx.newsletter.set_email(email);
            Task::none()
        }
        Message::SubmitNewsletter => handle_newsletter_submit(ctx),
        Message::SelectPlan(plan_id) => handle_plan_selected(ctx, plan_id),
        Message::ClearNotifications => {
            ctx.notifications.clear_all();
            Task::none()
        }
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(now) => {
            *ctx.now = now;
            ctx.notifications.tick(now);
            Task::none()
        }
    }
}

/// Schedules the dismissal of `id` if it has a timer.
///
/// Persistent notifications get no task; they leave through `remove`.
pub fn schedule_dismissal(notifications: &Manager, id: NotificationId) -> Task<Message> {
    match notifications.dismiss_after(id) {
        Some(delay) => Task::perform(after(delay), move |()| {
            Message::Notification(NotificationMessage::Expired(id))
        }),
        None => Task::none(),
    }
}

fn handle_contact_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.contact.is_submitting() {
        return Task::none();
    }

    let validation = ctx.contact.validate();
    if !validation.is_valid {
        tracing::info!(
            errors = validation.error_count(),
            "contact form rejected by validation"
        );
        let summary = ctx.notifications.error(
            VALIDATION_FAILED_TITLE,
            validation_failed_message(validation.error_count()),
        );
        let detail = ctx.notifications.form_error(ErrorCategory::Validation);
        return Task::batch([
            schedule_dismissal(ctx.notifications, summary),
            schedule_dismissal(ctx.notifications, detail),
        ]);
    }

    if !ctx.contact.begin_submit() {
        return Task::none();
    }

    let loading_id = ctx.notifications.loading(SENDING_TITLE, SENDING_MESSAGE);
    *ctx.pending_submission = Some(loading_id);
    tracing::info!(company = %ctx.contact.value(Field::Company), "contact form submitted");

    Task::perform(
        after(Duration::from_millis(SIMULATED_SUBMISSION_MS)),
        move |()| Message::SubmissionCompleted(loading_id),
    )
}

/// Resolves after `delay`. The timer is created on first poll.
async fn after(delay: Duration) {
    tokio::time::sleep(delay).await;
}

fn handle_submission_completed(
    ctx: &mut UpdateContext<'_>,
    loading_id: NotificationId,
) -> Task<Message> {
    ctx.notifications.remove(loading_id);
    if *ctx.pending_submission != Some(loading_id) {
        tracing::debug!(id = %loading_id, "stale submission completion ignored");
        return Task::none();
    }
    *ctx.pending_submission = None;

    let id = ctx.notifications.form_success(SuccessScenario::Contact);
    ctx.contact.finish_submit();
    tracing::info!("contact submission completed");

    schedule_dismissal(ctx.notifications, id)
}

fn handle_newsletter_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let id = if ctx.newsletter.validate().is_valid {
        tracing::info!("newsletter subscription accepted");
        ctx.newsletter.reset();
        ctx.notifications.form_success(SuccessScenario::Newsletter)
    } else {
        ctx.notifications.form_error(ErrorCategory::Validation)
    };

    schedule_dismissal(ctx.notifications, id)
}

fn handle_plan_selected(ctx: &mut UpdateContext<'_>, plan_id: PlanId) -> Task<Message> {
    let plan = site::plan(plan_id);
    tracing::info!(plan = plan.name, "plan selected");
    let id = ctx.notifications.form_success(plan.selection_scenario());
    schedule_dismissal(ctx.notifications, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Kind;

    #[derive(Default)]
    struct Fixture {
        notifications: Manager,
        contact: ContactForm,
        newsletter: NewsletterForm,
        pending_submission: Option<NotificationId>,
        now: Option<Instant>,
    }

    impl Fixture {
        fn send(&mut self, message: Message) {
            let mut now = self.now.unwrap_or_else(Instant::now);
            let mut ctx = UpdateContext {
                notifications: &mut self.notifications,
                contact: &mut self.contact,
                newsletter: &mut self.newsletter,
                pending_submission: &mut self.pending_submission,
                now: &mut now,
            };
            let _ = update(&mut ctx, message);
            self.now = Some(now);
        }

        fn titles(&self) -> Vec<String> {
            self.notifications
                .active()
                .filter_map(|n| n.title().map(str::to_owned))
                .collect()
        }

        fn fill_contact(&mut self) {
            self.send(Message::ContactInput(Field::Name, "Ada Lovelace".into()));
            self.send(Message::ContactInput(Field::Email, "ada@example.com".into()));
            self.send(Message::ContactInput(Field::Company, "Analytical Engines".into()));
            self.send(Message::ContactInput(
                Field::Message,
                "We would like a demo next week.".into(),
            ));
        }
    }

    #[test]
    fn invalid_contact_submit_shows_summary_then_detail() {
        let mut fx = Fixture::default();
        fx.send(Message::SubmitContact);

        assert_eq!(
            fx.titles(),
            vec![
                VALIDATION_FAILED_TITLE.to_owned(),
                ErrorCategory::Validation.canned().title.to_owned(),
            ]
        );
        let summary = fx.notifications.active().next().map(|n| n.message());
        assert_eq!(
            summary,
            Some(Some("Please fix 4 errors before submitting."))
        );
        assert!(!fx.contact.is_submitting());
        assert_eq!(fx.notifications.scheduled_count(), 2);
    }

    #[test]
    fn valid_contact_submit_shows_persistent_loading() {
        let mut fx = Fixture::default();
        fx.fill_contact();
        fx.send(Message::SubmitContact);

        assert!(fx.contact.is_submitting());
        let loading_id = fx.pending_submission.expect("loading toast");
        let loading = fx.notifications.get(loading_id).expect("active");
        assert_eq!(loading.kind(), Kind::Loading);
        assert!(!loading.allow_manual_close());
        assert_eq!(fx.notifications.scheduled_count(), 0);

        // A second press while sending is ignored.
        fx.send(Message::SubmitContact);
        assert_eq!(fx.notifications.len(), 1);
    }

    #[test]
    fn submission_completion_swaps_loading_for_success() {
        let mut fx = Fixture::default();
        fx.fill_contact();
        fx.send(Message::SubmitContact);
        let loading_id = fx.pending_submission.expect("loading toast");

        fx.send(Message::SubmissionCompleted(loading_id));

        assert!(fx.notifications.get(loading_id).is_none());
        assert_eq!(fx.titles(), vec!["Message Sent Successfully!".to_owned()]);
        assert!(!fx.contact.is_submitting());
        assert_eq!(fx.contact.value(Field::Name), "");
        assert!(fx.pending_submission.is_none());
    }

    #[test]
    fn loading_toast_ignores_dismiss() {
        let mut fx = Fixture::default();
        fx.fill_contact();
        fx.send(Message::SubmitContact);
        let loading_id = fx.pending_submission.expect("loading toast");

        fx.send(Message::Notification(NotificationMessage::Dismiss(loading_id)));
        assert!(fx.notifications.get(loading_id).is_some());
    }

    #[test]
    fn newsletter_flows() {
        let mut fx = Fixture::default();
        fx.send(Message::NewsletterInput("nope".into()));
        fx.send(Message::SubmitNewsletter);
        assert_eq!(
            fx.titles(),
            vec![ErrorCategory::Validation.canned().title.to_owned()]
        );
        assert!(fx.newsletter.error().is_some());

        fx.send(Message::ClearNotifications);
        fx.send(Message::NewsletterInput("reader@example.com".into()));
        fx.send(Message::SubmitNewsletter);
        assert_eq!(fx.titles(), vec!["Successfully Subscribed!".to_owned()]);
        assert_eq!(fx.newsletter.email(), "");
    }

    #[test]
    fn plan_selection_uses_plan_scenario() {
        let mut fx = Fixture::default();
        fx.send(Message::SelectPlan(PlanId::Enterprise));
        fx.send(Message::SelectPlan(PlanId::Starter));

        assert_eq!(
            fx.titles(),
            vec![
                SuccessScenario::Demo.canned().title.to_owned(),
                SuccessScenario::Pricing.canned().title.to_owned(),
            ]
        );
    }

    #[test]
    fn tick_expires_due_notifications() {
        let mut fx = Fixture::default();
        fx.send(Message::SelectPlan(PlanId::Professional));
        let created = fx
            .notifications
            .active()
            .next()
            .map(|n| n.created_at())
            .expect("toast");

        fx.send(Message::Tick(created + Duration::from_millis(4_999)));
        assert_eq!(fx.notifications.len(), 1);

        fx.send(Message::Tick(created + Duration::from_millis(5_000)));
        assert!(fx.notifications.is_empty());
        assert_eq!(fx.now, Some(created + Duration::from_millis(5_000)));
    }

    #[test]
    fn clear_all_empties_the_stack() {
        let mut fx = Fixture::default();
        fx.send(Message::SubmitContact);
        fx.send(Message::SelectPlan(PlanId::Starter));
        fx.send(Message::ClearNotifications);

        assert!(fx.notifications.is_empty());
        assert_eq!(fx.notifications.scheduled_count(), 0);
    }
}
