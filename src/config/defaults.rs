// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast durations and their bounds
//! - **Submission**: Simulated form submission delay
//! - **Validation**: Field length limits

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for notifications that do not set one (milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Auto-dismiss delay for form success notifications (milliseconds).
pub const FORM_SUCCESS_DURATION_MS: u64 = 5000;

/// Auto-dismiss delay for error notifications (milliseconds).
pub const ERROR_NOTIFICATION_DURATION_MS: u64 = 6000;

/// Largest configurable default duration (milliseconds). Zero disables auto-dismiss.
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

/// Refresh interval for countdown bars while a countdown is visible (milliseconds).
pub const COUNTDOWN_REFRESH_MS: u64 = 50;

// ==========================================================================
// Submission Defaults
// ==========================================================================

/// Delay of the simulated contact form submission (milliseconds).
pub const SIMULATED_SUBMISSION_MS: u64 = 2000;

// ==========================================================================
// Validation Limits
// ==========================================================================

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const COMPANY_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
    assert!(ERROR_NOTIFICATION_DURATION_MS > FORM_SUCCESS_DURATION_MS);
    assert!(NAME_MIN_CHARS < NAME_MAX_CHARS);
    assert!(MESSAGE_MIN_CHARS < MESSAGE_MAX_CHARS);
};
