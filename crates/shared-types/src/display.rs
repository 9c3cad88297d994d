//! Status and urgency badge lookups.
//!
//! Both tables are total: anything unrecognised maps to a default entry so a
//! render pass never fails on unexpected data.

use serde::Serialize;

use crate::booking::{BookingStatus, Urgency};

const AMBER: &str = "bg-amber-50 text-amber-700 border-amber-200";
const BLUE: &str = "bg-blue-50 text-blue-700 border-blue-200";
const EMERALD: &str = "bg-emerald-50 text-emerald-700 border-emerald-200";
const RED: &str = "bg-red-50 text-red-700 border-red-200";

/// Text and color class for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub text: &'static str,
    pub color_class: &'static str,
}

/// Entry used for status values outside the lifecycle.
pub const UNKNOWN_STATUS: StatusDisplay = StatusDisplay {
    text: "Unknown",
    color_class: AMBER,
};

impl BookingStatus {
    pub fn display(&self) -> StatusDisplay {
        let color_class = match self {
            BookingStatus::Pending => AMBER,
            BookingStatus::Accepted | BookingStatus::Ongoing => BLUE,
            BookingStatus::Completed => EMERALD,
            BookingStatus::Rejected => RED,
        };
        StatusDisplay {
            text: self.label(),
            color_class,
        }
    }
}

impl Urgency {
    pub fn color_class(&self) -> &'static str {
        match self {
            Urgency::Flexible => BLUE,
            Urgency::Moderate => AMBER,
            Urgency::Urgent => RED,
        }
    }
}

/// Badge for a raw status string. Matching is exact, as stored.
pub fn status_display(status: &str) -> StatusDisplay {
    BookingStatus::from_str_opt(status)
        .map(|s| s.display())
        .unwrap_or(UNKNOWN_STATUS)
}

/// Color class for a raw urgency string, case-insensitive.
pub fn urgency_display(urgency: &str) -> &'static str {
    Urgency::from_str_or_default(urgency).color_class()
}
