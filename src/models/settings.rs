use crate::models::Touch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[sqlx(rename_all = "lowercase", type_name = "varchar")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[sqlx(rename_all = "lowercase", type_name = "varchar")]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserSettings {
    pub user_id: String,
    pub theme: Theme,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub profile_visibility: ProfileVisibility,
    pub updated_at: DateTime<Utc>,
}

impl UserSettings {
    /// Settings a user has before saving anything.
    pub fn defaults_for(user_id: String) -> Self {
        Self {
            user_id,
            theme: Theme::default(),
            email_notifications: true,
            push_notifications: true,
            profile_visibility: ProfileVisibility::default(),
            updated_at: Utc::now(),
        }
    }
}

impl Touch for UserSettings {
    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
