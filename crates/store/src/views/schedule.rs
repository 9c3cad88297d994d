use chrono::{DateTime, TimeZone};
use serde::Serialize;
use shared_types::{bucket_bookings, BookingStatus};

use super::BookingRow;
use crate::booking::BookingStore;

/// Meetings grouped by calendar day. A booking's meeting day is its
/// `created_at` date.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleView {
    pub today: Vec<BookingRow>,
    pub tomorrow: Vec<BookingRow>,
    pub upcoming: Vec<BookingRow>,
}

impl ScheduleView {
    pub fn build<Tz: TimeZone>(store: &BookingStore, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let meetings = store
            .bookings()
            .iter()
            .filter(|b| matches!(b.status, BookingStatus::Accepted | BookingStatus::Ongoing));
        let buckets = bucket_bookings(meetings, now);

        let rows = |bookings: &[shared_types::Booking]| {
            bookings
                .iter()
                .map(|b| BookingRow::new(b, now))
                .collect::<Vec<_>>()
        };

        Self {
            today: rows(&buckets.today),
            tomorrow: rows(&buckets.tomorrow),
            upcoming: rows(&buckets.upcoming),
        }
    }

    pub fn total(&self) -> usize {
        self.today.len() + self.tomorrow.len() + self.upcoming.len()
    }
}
