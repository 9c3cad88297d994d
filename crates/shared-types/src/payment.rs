use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settlement state of a payment record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Completed,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(PaymentStatus::Completed),
            "pending" => Some(PaymentStatus::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consultation fee record. Not linked to a booking by key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    /// Invoice-style identifier, e.g. `PAY001`.
    pub id: String,
    pub client_name: String,
    /// Amount in paise.
    pub amount_paise: u64,
    pub date: DateTime<Utc>,
    pub status: PaymentStatus,
    /// Free-form label such as "Consultation" or "Video Call".
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<String>,
}

/// Aggregates shown on the payments page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub total_earnings: u64,
    pub pending_amount: u64,
    pub monthly_earnings: u64,
    pub pending_count: usize,
}
