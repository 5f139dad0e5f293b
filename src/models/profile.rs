use crate::models::Touch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub user_id: String, // external identity, unique
    pub name: Option<String>,
    pub email: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            name: None,
            email,
            avatar: None,
            bio: None,
            phone: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Touch for UserProfile {
    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
