//! Data each dashboard page renders. Pure reads over `AppState`.

pub mod booking_form;
pub mod bookings;
pub mod dashboard;
pub mod payments;
pub mod schedule;
pub mod subscription;

pub use booking_form::BookingFormOptions;
pub use bookings::{BookingManagementView, BookingQuery};
pub use dashboard::DashboardView;
pub use payments::PaymentsView;
pub use schedule::ScheduleView;
pub use subscription::SubscriptionView;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use shared_types::catalog::case_type_label;
use shared_types::format::{format_date, format_time, format_time_ago, initials, truncate_text};
use shared_types::{Booking, StatusDisplay};

/// Characters of the description shown on a booking card.
const DESCRIPTION_PREVIEW_CHARS: usize = 150;

/// A booking card: the record plus its precomputed badges and actions.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRow {
    pub booking: Booking,
    pub status: StatusDisplay,
    pub urgency_class: &'static str,
    pub client_initials: String,
    pub case_type_label: String,
    pub created_ago: String,
    /// Date and time of the booking in the timezone of `now`.
    pub date_label: String,
    pub time_label: String,
    pub description_preview: String,
    pub can_accept: bool,
    pub can_reject: bool,
    pub can_start_call: bool,
}

impl BookingRow {
    pub fn new<Tz: TimeZone>(booking: &Booking, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let local = booking.created_at.with_timezone(&now.timezone());
        Self {
            status: booking.status.display(),
            urgency_class: booking.urgency.color_class(),
            client_initials: initials(&booking.client_name),
            case_type_label: case_type_label(&booking.case_type).to_string(),
            created_ago: format_time_ago(&booking.created_at, &now.with_timezone(&Utc)),
            date_label: format_date(&local),
            time_label: format_time(&local),
            description_preview: truncate_text(&booking.description, DESCRIPTION_PREVIEW_CHARS),
            can_accept: booking.status.is_actionable(),
            can_reject: booking.status.is_actionable(),
            can_start_call: booking.status.can_start_call(),
            booking: booking.clone(),
        }
    }
}
