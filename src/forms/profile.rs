use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct ProfileForm {
    #[validate(max_length = 255)]
    pub name: Option<String>,
    #[validate(max_length = 255)]
    #[validate(pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$")]
    pub email: String,
    pub avatar: Option<String>,
    #[validate(max_length = 1000)]
    pub bio: Option<String>,
    #[validate(max_length = 50)]
    pub phone: Option<String>,
}

impl ProfileForm {
    /// Applies the form over the stored profile, or starts a new one.
    pub fn into_profile(
        self,
        user_id: &str,
        existing: Option<models::UserProfile>,
    ) -> models::UserProfile {
        let mut profile = existing
            .unwrap_or_else(|| models::UserProfile::new(user_id.to_string(), self.email.clone()));

        profile.email = self.email;
        profile.name = self.name;
        profile.avatar = self.avatar;
        profile.bio = self.bio;
        profile.phone = self.phone;
        profile
    }
}
