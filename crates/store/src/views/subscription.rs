use serde::Serialize;
use shared_types::format::format_inr;
use shared_types::{FeatureRow, SubscriptionPlan, FEATURE_COMPARISON, PRICING_PLANS};

use crate::subscription::Subscription;

#[derive(Debug, Clone, Serialize)]
pub struct PlanCard {
    pub plan: &'static SubscriptionPlan,
    pub price_label: String,
    pub is_current: bool,
    pub is_upgrade: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionView {
    pub current: &'static SubscriptionPlan,
    pub plans: Vec<PlanCard>,
    pub comparison: &'static [FeatureRow],
}

impl SubscriptionView {
    pub fn build(subscription: &Subscription) -> Self {
        let current = subscription.current();
        Self {
            current: subscription.current_plan(),
            plans: PRICING_PLANS
                .iter()
                .map(|plan| PlanCard {
                    plan,
                    price_label: format_inr(plan.price_rupees * 100),
                    is_current: plan.tier == current,
                    is_upgrade: plan.tier.is_upgrade_from(current),
                })
                .collect(),
            comparison: &FEATURE_COMPARISON,
        }
    }
}
