use chrono::{DateTime, TimeZone};
use serde::Serialize;
use shared_types::format::{format_date, format_inr};
use shared_types::{status_display, Payment, PaymentSummary, StatusDisplay};

use crate::payments::PaymentLedger;

#[derive(Debug, Clone, Serialize)]
pub struct PaymentRow {
    pub payment: Payment,
    pub amount_label: String,
    pub date_label: String,
    pub status: StatusDisplay,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentsView {
    pub summary: PaymentSummary,
    pub total_earnings_label: String,
    pub pending_amount_label: String,
    pub monthly_earnings_label: String,
    pub rows: Vec<PaymentRow>,
}

impl PaymentsView {
    pub fn build<Tz: TimeZone>(ledger: &PaymentLedger, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let summary = ledger.summary(now);
        let tz = now.timezone();
        let rows = ledger
            .all()
            .iter()
            .map(|p| PaymentRow {
                amount_label: format_inr(p.amount_paise),
                date_label: format_date(&p.date.with_timezone(&tz)),
                // Payment statuses share their names with booking statuses.
                status: status_display(p.status.as_str()),
                payment: p.clone(),
            })
            .collect();

        Self {
            total_earnings_label: format_inr(summary.total_earnings),
            pending_amount_label: format_inr(summary.pending_amount),
            monthly_earnings_label: format_inr(summary.monthly_earnings),
            summary,
            rows,
        }
    }
}
