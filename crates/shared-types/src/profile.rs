use serde::{Deserialize, Serialize};

/// The signed-in lawyer. Held by the mock session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LawyerProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub experience_years: u32,
    pub location: String,
    pub rating: f32,
    pub reviews: u32,
    pub languages: Vec<String>,
    pub verified: bool,
}

impl LawyerProfile {
    /// First word of the name, used in the dashboard greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Merge the provided fields, leaving the rest untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(specialization) = update.specialization {
            self.specialization = specialization;
        }
        if let Some(years) = update.experience_years {
            self.experience_years = years;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
    }
}

/// Partial update from the settings form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ProfileUpdate {
    #[cfg_attr(feature = "validation", validate(length(min = 1, message = "Name is required")))]
    pub name: Option<String>,
    #[cfg_attr(feature = "validation", validate(email(message = "Invalid email address")))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<u32>,
    pub location: Option<String>,
}

/// Notification preferences from the settings page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSettings {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
    pub booking_alerts: bool,
    pub payment_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            sms: true,
            push: true,
            booking_alerts: true,
            payment_alerts: true,
        }
    }
}
