// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to confirm form submissions, report
//! validation failures, or show that work is in progress, without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `Kind`, `Position` and the `AlertSpec` builder
//! - [`manager`] - `Manager`, the single owner of the active collection and its timers
//! - [`scenario`] - canned titles and messages for form outcomes
//! - [`service`] - actor wrapper for hosts that mutate from several tasks
//!
//! # Usage
//!
//! ```
//! use codecelix_site::notifications::{Manager, SuccessScenario};
//!
//! let mut manager = Manager::new();
//! let loading = manager.loading("Sending Message...", "Please wait.");
//! manager.remove(loading);
//! manager.form_success(SuccessScenario::Contact);
//!
//! assert_eq!(manager.len(), 1);
//! ```
//!
//! # Lifetime
//!
//! A notification is active from `show` until it is removed by its timer,
//! by `remove`, or by `clear_all`. Removal is idempotent, so a timer firing
//! for a notification that is already gone has no effect.

pub mod manager;
pub mod notification;
pub mod scenario;
pub mod service;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{AlertSpec, Kind, Notification, NotificationDefaults, NotificationId, Position};
pub use scenario::{CannedMessage, ErrorCategory, SuccessScenario};
pub use service::{NotificationHandle, NotificationService, Snapshot};
