// SPDX-License-Identifier: MPL-2.0
//! `codecelix_site` is the desktop front of the CodeCelix marketing site.
//!
//! It provides a toast notification manager with timed and persistent
//! alerts, contact and newsletter form validation, and an Iced shell that
//! wires both together.

#![doc(html_root_url = "https://docs.rs/codecelix_site/0.3.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod notifications;
pub mod site;
pub mod ui;
