use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use shared_types::{Booking, BookingCounts, BookingSort, StatusFilter};

use super::BookingRow;
use crate::booking::BookingStore;

/// Controls of the booking management page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingQuery {
    #[serde(default)]
    pub filter: StatusFilter,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: BookingSort,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingManagementView {
    pub counts: BookingCounts,
    pub rows: Vec<BookingRow>,
}

impl BookingManagementView {
    pub fn build<Tz: TimeZone>(store: &BookingStore, query: &BookingQuery, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut matching: Vec<Booking> = store
            .filter_by_status(query.filter)
            .into_iter()
            .filter(|b| b.matches_query(&query.search))
            .collect();

        // Stable sort, so equal timestamps keep stored order.
        match query.sort {
            BookingSort::Recent => matching.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            BookingSort::Oldest => matching.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }

        Self {
            counts: store.counts(),
            rows: matching.iter().map(|b| BookingRow::new(b, now)).collect(),
        }
    }
}
