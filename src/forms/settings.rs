use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct SettingsForm {
    pub theme: Option<models::Theme>,
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub profile_visibility: Option<models::ProfileVisibility>,
}

impl SettingsForm {
    pub fn update(self, settings: &mut models::UserSettings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }

        if let Some(email_notifications) = self.email_notifications {
            settings.email_notifications = email_notifications;
        }

        if let Some(push_notifications) = self.push_notifications {
            settings.push_notifications = push_notifications;
        }

        if let Some(profile_visibility) = self.profile_visibility {
            settings.profile_visibility = profile_visibility;
        }
    }
}
