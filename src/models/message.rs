use serde::{Deserialize, Serialize};

pub const IMAGE_ATTACHMENT: &str = "image";

/// Author of a chat message. Anything other than `user` is a reply.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[default]
    Assistant,
    #[serde(other)]
    Other,
}

impl Role {
    pub fn is_user(&self) -> bool {
        matches!(self, Role::User)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: String,
    // other attachment kinds may carry no url at all
    #[serde(default)]
    pub url: Option<String>,
}

impl Attachment {
    pub fn is_image(&self) -> bool {
        self.kind == IMAGE_ATTACHMENT
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub attachments: Option<Vec<Attachment>>,
}

impl Message {
    /// Url of the first attachment tagged exactly `image`, later ones are ignored.
    pub fn first_image(&self) -> Option<&str> {
        self.attachments.as_deref().and_then(|attachments| {
            attachments
                .iter()
                .filter(|a| a.is_image())
                .find_map(|a| a.url.as_deref())
        })
    }

    /// Content as given by the caller, `None` when missing or empty.
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|content| !content.is_empty())
    }
}
