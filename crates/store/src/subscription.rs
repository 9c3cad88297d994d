use shared_types::{plan_for, AppError, PlanTier, SubscriptionPlan};

/// Current plan plus the plan picked in the confirmation dialog.
#[derive(Debug, Default)]
pub struct Subscription {
    current: PlanTier,
    pending: Option<PlanTier>,
}

impl Subscription {
    pub fn new(current: PlanTier) -> Self {
        Self {
            current,
            pending: None,
        }
    }

    pub fn current(&self) -> PlanTier {
        self.current
    }

    pub fn current_plan(&self) -> &'static SubscriptionPlan {
        plan_for(self.current)
    }

    pub fn pending(&self) -> Option<&'static SubscriptionPlan> {
        self.pending.map(plan_for)
    }

    /// Stage a plan for confirmation.
    pub fn select(&mut self, plan_id: &str) -> Result<&'static SubscriptionPlan, AppError> {
        let tier = PlanTier::from_str_opt(plan_id)
            .ok_or_else(|| AppError::not_found(format!("Plan {} not found", plan_id)))?;
        self.pending = Some(tier);
        Ok(plan_for(tier))
    }

    /// Make the staged plan current.
    pub fn confirm(&mut self) -> Result<&'static SubscriptionPlan, AppError> {
        let tier = self
            .pending
            .take()
            .ok_or_else(|| AppError::bad_request("No plan selected"))?;
        let from = self.current;
        self.current = tier;
        tracing::info!(from = from.as_str(), to = tier.as_str(), "Subscription changed");
        Ok(plan_for(tier))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
