use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::booking::TransitionPolicy;

/// Top-level config file structure matching `config.toml`.
///
/// Every section defaults so a missing or partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub bookings: BookingSettings,
    #[serde(default)]
    pub schedule: ScheduleSettings,
    #[serde(default)]
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BookingSettings {
    #[serde(default)]
    pub transition_policy: TransitionPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScheduleSettings {
    #[serde(default)]
    pub timezone: ScheduleTimezone,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationSettings {
    #[serde(default = "default_chat_reply_delay_ms")]
    pub chat_reply_delay_ms: u64,
    #[serde(default = "default_upload_delay_ms")]
    pub upload_delay_ms: u64,
}

fn default_chat_reply_delay_ms() -> u64 {
    2000
}

fn default_upload_delay_ms() -> u64 {
    1000
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            chat_reply_delay_ms: default_chat_reply_delay_ms(),
            upload_delay_ms: default_upload_delay_ms(),
        }
    }
}

impl SimulationSettings {
    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSettings {
    /// Rows shown in the "recent" and "upcoming" dashboard lists.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_recent_limit() -> usize {
    3
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

// ---------------------------------------------------------------------------
// Timezone source
// ---------------------------------------------------------------------------

/// The one timezone used for both "now" and stored instants when dates are
/// compared by calendar day.
///
/// Written in TOML as `"local"`, `"utc"`, or a fixed offset like `"+05:30"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScheduleTimezone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl ScheduleTimezone {
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.at(Utc::now())
    }

    /// Read a UTC instant in this timezone.
    pub fn at(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            ScheduleTimezone::Local => instant.with_timezone(&Local).fixed_offset(),
            ScheduleTimezone::Utc => instant.fixed_offset(),
            ScheduleTimezone::Fixed(offset) => instant.with_timezone(offset),
        }
    }
}

impl TryFrom<String> for ScheduleTimezone {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(ScheduleTimezone::Local),
            "utc" | "z" => Ok(ScheduleTimezone::Utc),
            other => other
                .parse::<FixedOffset>()
                .map(ScheduleTimezone::Fixed)
                .map_err(|e| format!("invalid timezone {value:?}: expected local, utc or +HH:MM ({e})")),
        }
    }
}

impl From<ScheduleTimezone> for String {
    fn from(tz: ScheduleTimezone) -> Self {
        match tz {
            ScheduleTimezone::Local => "local".to_string(),
            ScheduleTimezone::Utc => "utc".to_string(),
            ScheduleTimezone::Fixed(offset) => offset.to_string(),
        }
    }
}
