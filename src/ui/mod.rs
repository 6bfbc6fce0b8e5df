// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`toast`] - Toast rendering for the notification manager

pub mod design_tokens;
pub mod theming;
pub mod toast;
