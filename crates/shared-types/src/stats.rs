//! Derived statistics over booking and payment snapshots.
//!
//! Everything here is a pure function of its inputs.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::{Booking, BookingStatus};
use crate::payment::{Payment, PaymentStatus, PaymentSummary};

// ---------------------------------------------------------------------------
// Booking counts
// ---------------------------------------------------------------------------

/// Number of bookings holding exactly `status`.
pub fn count_by_status(bookings: &[Booking], status: BookingStatus) -> usize {
    bookings.iter().filter(|b| b.status == status).count()
}

/// Per-status tallies computed in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCounts {
    pub total: usize,
    pub pending: usize,
    pub accepted: usize,
    pub ongoing: usize,
    pub completed: usize,
    pub rejected: usize,
}

impl BookingCounts {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        bookings.iter().fold(Self::default(), |mut acc, b| {
            acc.total += 1;
            match b.status {
                BookingStatus::Pending => acc.pending += 1,
                BookingStatus::Accepted => acc.accepted += 1,
                BookingStatus::Ongoing => acc.ongoing += 1,
                BookingStatus::Completed => acc.completed += 1,
                BookingStatus::Rejected => acc.rejected += 1,
            }
            acc
        })
    }

    pub fn get(&self, status: BookingStatus) -> usize {
        match status {
            BookingStatus::Pending => self.pending,
            BookingStatus::Accepted => self.accepted,
            BookingStatus::Ongoing => self.ongoing,
            BookingStatus::Completed => self.completed,
            BookingStatus::Rejected => self.rejected,
        }
    }
}

// ---------------------------------------------------------------------------
// Payment totals
// ---------------------------------------------------------------------------

/// Sum of `amount_paise` over payments with the given status.
pub fn total_amount(payments: &[Payment], status: PaymentStatus) -> u64 {
    payments
        .iter()
        .filter(|p| p.status == status)
        .map(|p| p.amount_paise)
        .sum()
}

/// Completed payments dated in the same calendar month and year as
/// `reference`, read in `reference`'s timezone.
pub fn monthly_total<Tz: TimeZone>(payments: &[Payment], reference: &DateTime<Tz>) -> u64 {
    let tz = reference.timezone();
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .filter(|p| {
            let local = p.date.with_timezone(&tz);
            local.year() == reference.year() && local.month() == reference.month()
        })
        .map(|p| p.amount_paise)
        .sum()
}

pub fn payment_summary<Tz: TimeZone>(payments: &[Payment], now: &DateTime<Tz>) -> PaymentSummary {
    PaymentSummary {
        total_earnings: total_amount(payments, PaymentStatus::Completed),
        pending_amount: total_amount(payments, PaymentStatus::Pending),
        monthly_earnings: monthly_total(payments, now),
        pending_count: payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Pending)
            .count(),
    }
}

// ---------------------------------------------------------------------------
// Calendar-day buckets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateBucket {
    Today,
    Tomorrow,
    Upcoming,
}

/// Bucket an instant by calendar day relative to `now`.
///
/// The instant is converted into `now`'s timezone before its date is taken,
/// so both sides of the comparison use one timezone source. Anything that is
/// neither today nor tomorrow (past days included) is `Upcoming`.
pub fn classify_day<Tz: TimeZone>(at: &DateTime<Utc>, now: &DateTime<Tz>) -> DateBucket {
    let today = now.date_naive();
    let day = at.with_timezone(&now.timezone()).date_naive();
    if day == today {
        DateBucket::Today
    } else if today.succ_opt() == Some(day) {
        DateBucket::Tomorrow
    } else {
        DateBucket::Upcoming
    }
}

/// Bookings split into today / tomorrow / upcoming, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleBuckets {
    pub today: Vec<Booking>,
    pub tomorrow: Vec<Booking>,
    pub upcoming: Vec<Booking>,
}

impl ScheduleBuckets {
    pub fn len(&self) -> usize {
        self.today.len() + self.tomorrow.len() + self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn bucket_bookings<'a, Tz, I>(bookings: I, now: &DateTime<Tz>) -> ScheduleBuckets
where
    Tz: TimeZone,
    I: IntoIterator<Item = &'a Booking>,
{
    let mut buckets = ScheduleBuckets::default();
    for booking in bookings {
        let slot = match classify_day(&booking.created_at, now) {
            DateBucket::Today => &mut buckets.today,
            DateBucket::Tomorrow => &mut buckets.tomorrow,
            DateBucket::Upcoming => &mut buckets.upcoming,
        };
        slot.push(booking.clone());
    }
    buckets
}
