use shared_types::{AppError, LawyerProfile, NotificationSettings, ProfileUpdate};
use validator::Validate;

/// Static sign-in state. There is no credential check; the seeded profile is
/// signed in until `logout`.
pub struct Session {
    user: Option<LawyerProfile>,
    notifications: NotificationSettings,
}

impl Session {
    pub fn signed_in(profile: LawyerProfile) -> Self {
        Self {
            user: Some(profile),
            notifications: NotificationSettings::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&LawyerProfile> {
        self.user.as_ref()
    }

    /// The signed-in profile, or `Unauthorized` after logout.
    pub fn require_user(&self) -> Result<&LawyerProfile, AppError> {
        self.user
            .as_ref()
            .ok_or_else(|| AppError::unauthorized("Not signed in"))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "Signed out");
        }
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<&LawyerProfile, AppError> {
        update.validate()?;
        let user = self
            .user
            .as_mut()
            .ok_or_else(|| AppError::unauthorized("Not signed in"))?;
        user.apply(update);
        tracing::info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    pub fn notifications(&self) -> NotificationSettings {
        self.notifications
    }

    pub fn set_notifications(&mut self, settings: NotificationSettings) {
        self.notifications = settings;
    }
}
