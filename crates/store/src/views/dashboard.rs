use chrono::{DateTime, TimeZone};
use serde::Serialize;
use shared_types::{BookingCounts, BookingStatus};

use super::BookingRow;
use crate::state::AppState;

/// Landing page: greeting, headline counts, recent requests, upcoming
/// meetings and earnings.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub greeting_name: String,
    pub rating: f32,
    pub reviews: u32,
    pub counts: BookingCounts,
    pub recent_bookings: Vec<BookingRow>,
    /// Accepted bookings, first `recent_limit` in stored order.
    pub upcoming_meetings: Vec<BookingRow>,
    pub has_more_bookings: bool,
    pub monthly_earnings: u64,
    pub total_earnings: u64,
}

impl DashboardView {
    pub fn build<Tz: TimeZone>(state: &AppState, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let limit = state.config.dashboard.recent_limit;
        let bookings = state.bookings.bookings();
        let payments = state.payments.summary(now);

        let (greeting_name, rating, reviews) = match state.session.user() {
            Some(user) => (user.first_name().to_string(), user.rating, user.reviews),
            None => (String::new(), 0.0, 0),
        };

        Self {
            greeting_name,
            rating,
            reviews,
            counts: state.bookings.counts(),
            recent_bookings: bookings
                .iter()
                .take(limit)
                .map(|b| BookingRow::new(b, now))
                .collect(),
            upcoming_meetings: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Accepted)
                .take(limit)
                .map(|b| BookingRow::new(b, now))
                .collect(),
            has_more_bookings: bookings.len() > limit,
            monthly_earnings: payments.monthly_earnings,
            total_earnings: payments.total_earnings,
        }
    }
}
