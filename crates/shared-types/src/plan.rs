use serde::{Deserialize, Serialize};

/// Subscription tier of the lawyer's account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    #[default]
    Basic,
    Pro,
    Elite,
}

impl PlanTier {
    /// Numeric rank for tier comparison.
    fn rank(&self) -> u8 {
        match self {
            PlanTier::Basic => 0,
            PlanTier::Pro => 1,
            PlanTier::Elite => 2,
        }
    }

    pub fn is_upgrade_from(&self, current: PlanTier) -> bool {
        self.rank() > current.rank()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Basic => "basic",
            PlanTier::Pro => "pro",
            PlanTier::Elite => "elite",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" => Some(PlanTier::Basic),
            "pro" => Some(PlanTier::Pro),
            "elite" => Some(PlanTier::Elite),
            _ => None,
        }
    }
}

/// A purchasable plan shown on the subscription page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubscriptionPlan {
    pub tier: PlanTier,
    pub name: &'static str,
    pub duration_months: u32,
    pub price_rupees: u64,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub static PRICING_PLANS: [SubscriptionPlan; 3] = [
    SubscriptionPlan {
        tier: PlanTier::Basic,
        name: "Basic",
        duration_months: 3,
        price_rupees: 2999,
        features: &[
            "Up to 10 consultations",
            "Basic client matching",
            "Standard support",
            "Commission: 20%",
        ],
        popular: false,
    },
    SubscriptionPlan {
        tier: PlanTier::Pro,
        name: "Pro",
        duration_months: 6,
        price_rupees: 5999,
        features: &[
            "Up to 40 consultations",
            "Advanced client matching",
            "Priority support",
            "Commission: 15%",
            "Performance analytics",
        ],
        popular: true,
    },
    SubscriptionPlan {
        tier: PlanTier::Elite,
        name: "Elite",
        duration_months: 12,
        price_rupees: 10999,
        features: &[
            "Unlimited consultations",
            "Premium client matching",
            "24/7 dedicated support",
            "Commission: 10%",
            "Advanced analytics",
            "Personal account manager",
        ],
        popular: false,
    },
];

pub fn plan_for(tier: PlanTier) -> &'static SubscriptionPlan {
    match tier {
        PlanTier::Basic => &PRICING_PLANS[0],
        PlanTier::Pro => &PRICING_PLANS[1],
        PlanTier::Elite => &PRICING_PLANS[2],
    }
}

// ---------------------------------------------------------------------------
// Comparison table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Text(&'static str),
    Included(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    pub feature: &'static str,
    pub basic: FeatureValue,
    pub pro: FeatureValue,
    pub elite: FeatureValue,
}

impl FeatureRow {
    pub fn value_for(&self, tier: PlanTier) -> FeatureValue {
        match tier {
            PlanTier::Basic => self.basic,
            PlanTier::Pro => self.pro,
            PlanTier::Elite => self.elite,
        }
    }
}

const fn text_row(feature: &'static str, basic: &'static str, pro: &'static str, elite: &'static str) -> FeatureRow {
    FeatureRow {
        feature,
        basic: FeatureValue::Text(basic),
        pro: FeatureValue::Text(pro),
        elite: FeatureValue::Text(elite),
    }
}

const fn flag_row(feature: &'static str, basic: bool, pro: bool, elite: bool) -> FeatureRow {
    FeatureRow {
        feature,
        basic: FeatureValue::Included(basic),
        pro: FeatureValue::Included(pro),
        elite: FeatureValue::Included(elite),
    }
}

pub static FEATURE_COMPARISON: [FeatureRow; 9] = [
    text_row("Consultations", "10", "40", "Unlimited"),
    text_row("Client Matching", "Basic", "Advanced", "Premium"),
    text_row("Support", "Standard", "Priority", "24/7 Dedicated"),
    text_row("Commission", "20%", "15%", "10%"),
    flag_row("Analytics", false, true, true),
    flag_row("Performance Insights", false, true, true),
    flag_row("Personal Account Manager", false, false, true),
    flag_row("Priority Legal Resources", false, true, true),
    flag_row("Verified Badge", false, true, true),
];
