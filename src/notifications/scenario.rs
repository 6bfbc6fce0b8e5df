// SPDX-License-Identifier: MPL-2.0
//! Canned titles and messages for form outcomes.
//!
//! The catalogue is fixed: callers pick a scenario key and get the matching
//! pair back. Unknown keys fall back to the generic entry of each table.

use std::str::FromStr;

/// A title/message pair shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedMessage {
    pub title: &'static str,
    pub message: &'static str,
}

/// Which form completed successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessScenario {
    Contact,
    Newsletter,
    Demo,
    Pricing,
    #[default]
    Default,
}

impl SuccessScenario {
    /// Maps a scenario key, falling back to `Default` for anything unknown.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "contact" => Self::Contact,
            "newsletter" => Self::Newsletter,
            "demo" => Self::Demo,
            "pricing" => Self::Pricing,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Newsletter => "newsletter",
            Self::Demo => "demo",
            Self::Pricing => "pricing",
            Self::Default => "default",
        }
    }

    #[must_use]
    pub fn canned(&self) -> CannedMessage {
        match self {
            Self::Contact => CannedMessage {
                title: "Message Sent Successfully!",
                message: "Thank you for reaching out. We'll get back to you within 24 hours.",
            },
            Self::Newsletter => CannedMessage {
                title: "Successfully Subscribed!",
                message: "Welcome to our newsletter community. Stay tuned for updates!",
            },
            Self::Demo => CannedMessage {
                title: "Demo Request Submitted!",
                message: "Our team will contact you soon to schedule your personalized demo.",
            },
            Self::Pricing => CannedMessage {
                title: "Plan Selection Confirmed!",
                message: "Redirecting to secure payment processing...",
            },
            Self::Default => CannedMessage {
                title: "Form Submitted Successfully!",
                message: "Your information has been received and processed.",
            },
        }
    }
}

impl FromStr for SuccessScenario {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}

/// Why a form submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCategory {
    Validation,
    Network,
    Server,
    #[default]
    General,
}

impl ErrorCategory {
    /// Maps a category key, falling back to `General` for anything unknown.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "validation" => Self::Validation,
            "network" => Self::Network,
            "server" => Self::Server,
            _ => Self::General,
        }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Network => "network",
            Self::Server => "server",
            Self::General => "general",
        }
    }

    #[must_use]
    pub fn canned(&self) -> CannedMessage {
        match self {
            Self::Validation => CannedMessage {
                title: "Please Check Your Input",
                message: "Some fields contain errors. Please review and try again.",
            },
            Self::Network => CannedMessage {
                title: "Connection Error",
                message: "Unable to submit form. Please check your connection and try again.",
            },
            Self::Server => CannedMessage {
                title: "Server Error",
                message: "Something went wrong on our end. Please try again later.",
            },
            Self::General => CannedMessage {
                title: "Submission Failed",
                message: "Unable to process your request. Please try again.",
            },
        }
    }
}

impl FromStr for ErrorCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}
