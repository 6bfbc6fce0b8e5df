// SPDX-License-Identifier: MPL-2.0
//! Static site content used by the desktop front.

pub mod pricing;

pub use pricing::{plan, PlanId, PricingPlan, PLANS};
