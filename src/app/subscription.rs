// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::defaults::COUNTDOWN_REFRESH_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Periodic tick that redraws countdown bars and sweeps due dismissals.
///
/// Only runs while a countdown is on screen, so an idle window does not wake
/// up every frame.
pub fn create_tick_subscription(has_countdowns: bool) -> Subscription<Message> {
    if has_countdowns {
        time::every(Duration::from_millis(COUNTDOWN_REFRESH_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
