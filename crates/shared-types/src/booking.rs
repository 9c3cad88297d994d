use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle stage of a booking.
///
/// ```text
/// pending ──accept──▶ accepted ──start──▶ ongoing ──complete──▶ completed
///    └──────reject──▶ rejected
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Accepted,
    Ongoing,
    Completed,
    Rejected,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Accepted,
        BookingStatus::Ongoing,
        BookingStatus::Completed,
        BookingStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "ongoing" => Some(Self::Ongoing),
            "completed" => Some(Self::Completed),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Title-case label shown on badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }

    /// No transition leaves a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// Whether `next` is an edge of the lifecycle graph from `self`.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Rejected)
                | (Self::Accepted, Self::Ongoing)
                | (Self::Ongoing, Self::Completed)
        )
    }

    /// Accept/reject buttons are only offered on pending requests.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Call/chat can be started once a booking is accepted.
    pub fn can_start_call(&self) -> bool {
        matches!(self, Self::Accepted | Self::Ongoing)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_opt(s)
            .ok_or_else(|| AppError::bad_request(format!("Invalid booking status: {}", s)))
    }
}

/// How strictly `update_status` enforces the lifecycle graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any status may be set from any other.
    #[default]
    Lenient,
    /// Only edges of the lifecycle graph are accepted.
    Strict,
}

impl TransitionPolicy {
    pub fn permits(&self, from: BookingStatus, to: BookingStatus) -> bool {
        match self {
            TransitionPolicy::Lenient => true,
            TransitionPolicy::Strict => {
                from == to || (!from.is_terminal() && from.can_transition_to(to))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Client-declared priority, independent of status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Urgency {
    #[default]
    Flexible,
    Moderate,
    Urgent,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Flexible, Urgency::Moderate, Urgency::Urgent];

    /// Parse case-insensitively, defaulting to `Flexible` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "moderate" => Urgency::Moderate,
            "urgent" => Urgency::Urgent,
            _ => Urgency::Flexible,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Flexible => "flexible",
            Urgency::Moderate => "moderate",
            Urgency::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Flexible => "Flexible",
            Urgency::Moderate => "Moderate",
            Urgency::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Domain Struct
// ---------------------------------------------------------------------------

/// Identifier of a booking. Assigned sequentially by the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BookingId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BookingId {
    fn from(id: u64) -> Self {
        BookingId(id)
    }
}

/// A client's request for a legal consultation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub client_name: String,
    pub case_type: String,
    pub location: String,
    pub language: String,
    pub urgency: Urgency,
    pub description: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Copy of this booking with only the status replaced.
    pub fn with_status(&self, status: BookingStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Case-insensitive match against client name or case type.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.client_name.to_lowercase().contains(&needle)
            || self.case_type.to_lowercase().contains(&needle)
    }
}

// ---------------------------------------------------------------------------
// Filtering & Sorting
// ---------------------------------------------------------------------------

/// Status filter used by booking lists; `All` is the `"all"` sentinel.
///
/// Serialized as the same flat string `FromStr` accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.as_str(),
        }
    }
}

impl From<BookingStatus> for StatusFilter {
    fn from(status: BookingStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        BookingStatus::from_str(s).map(StatusFilter::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Sort order for the booking management list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingSort {
    #[default]
    Recent,
    Oldest,
}

// ---------------------------------------------------------------------------
// Request DTO
// ---------------------------------------------------------------------------

/// Input for a new booking request. Status and id are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct NewBooking {
    #[cfg_attr(feature = "validation", validate(length(min = 1, message = "Client name is required")))]
    pub client_name: String,
    #[cfg_attr(feature = "validation", validate(length(min = 1, message = "Case type is required")))]
    pub case_type: String,
    #[cfg_attr(feature = "validation", validate(length(min = 1, message = "Location is required")))]
    pub location: String,
    #[cfg_attr(feature = "validation", validate(length(min = 1, message = "Language is required")))]
    pub language: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub description: String,
}
