// SPDX-License-Identifier: MPL-2.0
//! Pricing plans shown on the pricing page.

use crate::notifications::SuccessScenario;

/// Identifies a plan card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanId {
    Starter,
    Professional,
    Enterprise,
}

/// One pricing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPlan {
    pub id: PlanId,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

impl PricingPlan {
    /// Label of the call-to-action button.
    #[must_use]
    pub fn call_to_action(&self) -> &'static str {
        match self.id {
            PlanId::Enterprise => "Contact Sales",
            PlanId::Starter | PlanId::Professional => "Get Started",
        }
    }

    /// Confirmation shown when the call-to-action is pressed.
    ///
    /// Enterprise routes to a demo request, the other plans to checkout.
    #[must_use]
    pub fn selection_scenario(&self) -> SuccessScenario {
        match self.id {
            PlanId::Enterprise => SuccessScenario::Demo,
            PlanId::Starter | PlanId::Professional => SuccessScenario::Pricing,
        }
    }
}

pub static PLANS: [PricingPlan; 3] = [
    PricingPlan {
        id: PlanId::Starter,
        name: "Starter",
        price: "$99",
        period: "/month",
        description: "Perfect for small businesses getting started with AI automation",
        popular: false,
        features: &[
            "Up to 5 AI workflows",
            "Basic analytics dashboard",
            "Email support",
            "Standard integrations",
            "1 user account",
            "Community access",
        ],
    },
    PricingPlan {
        id: PlanId::Professional,
        name: "Professional",
        price: "$299",
        period: "/month",
        description: "Ideal for growing companies ready to scale their automation",
        popular: true,
        features: &[
            "Up to 25 AI workflows",
            "Advanced analytics & reporting",
            "Priority support",
            "Premium integrations",
            "5 user accounts",
            "Custom training sessions",
            "API access",
            "Advanced security features",
        ],
    },
    PricingPlan {
        id: PlanId::Enterprise,
        name: "Enterprise",
        price: "Custom",
        period: "",
        description: "Tailored solutions for large organizations with complex needs",
        popular: false,
        features: &[
            "Unlimited AI workflows",
            "Enterprise analytics suite",
            "24/7 dedicated support",
            "Custom integrations",
            "Unlimited users",
            "On-site training",
            "Full API access",
            "Enterprise security",
            "Custom SLA",
            "Dedicated account manager",
        ],
    },
];

/// Looks up a plan by ID.
#[must_use]
pub fn plan(id: PlanId) -> &'static PricingPlan {
    match id {
        PlanId::Starter => &PLANS[0],
        PlanId::Professional => &PLANS[1],
        PlanId::Enterprise => &PLANS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_plan_is_popular() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
        assert_eq!(plan(PlanId::Professional).name, "Professional");
    }

    #[test]
    fn enterprise_requests_a_demo() {
        let enterprise = plan(PlanId::Enterprise);
        assert_eq!(enterprise.call_to_action(), "Contact Sales");
        assert_eq!(enterprise.selection_scenario(), SuccessScenario::Demo);
    }

    #[test]
    fn paid_plans_confirm_selection() {
        for id in [PlanId::Starter, PlanId::Professional] {
            assert_eq!(plan(id).selection_scenario(), SuccessScenario::Pricing);
            assert_eq!(plan(id).call_to_action(), "Get Started");
        }
    }

    #[test]
    fn lookup_matches_plan_ids() {
        for p in &PLANS {
            assert_eq!(plan(p.id).id, p.id);
        }
    }
}
