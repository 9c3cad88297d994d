use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use shared_types::{payment_summary, AppError, Payment, PaymentStatus, PaymentSummary};

/// Read-only ledger of payment records.
pub struct PaymentLedger {
    payments: Arc<[Payment]>,
}

impl PaymentLedger {
    pub fn new(payments: Vec<Payment>) -> Self {
        Self {
            payments: payments.into(),
        }
    }

    pub fn all(&self) -> &[Payment] {
        &self.payments
    }

    pub fn get(&self, id: &str) -> Result<&Payment, AppError> {
        self.payments
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("Payment {} not found", id)))
    }

    pub fn by_status(&self, status: PaymentStatus) -> Vec<&Payment> {
        self.payments.iter().filter(|p| p.status == status).collect()
    }

    pub fn summary<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> PaymentSummary {
        payment_summary(&self.payments, now)
    }
}
