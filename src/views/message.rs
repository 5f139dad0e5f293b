use crate::models::Message;
use serde::Serialize;

/// Visual treatment of a text bubble.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Primary,
    Muted,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    End,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    Image { url: String },
    Text { text: String, style: TextStyle },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MessageView {
    pub id: String,
    pub alignment: Alignment,
    pub blocks: Vec<Block>,
}

impl MessageView {
    /// Nothing to draw for this message.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Image block first (first `image` attachment only), then the text block.
pub fn render(message: &Message) -> MessageView {
    let is_user = message.role.is_user();
    let mut blocks = Vec::with_capacity(2);

    if let Some(url) = message.first_image() {
        blocks.push(Block::Image {
            url: url.to_string(),
        });
    }

    if let Some(text) = message.text() {
        let style = if is_user {
            TextStyle::Primary
        } else {
            TextStyle::Muted
        };
        blocks.push(Block::Text {
            text: text.to_string(),
            style,
        });
    }

    MessageView {
        id: message.id.clone(),
        alignment: if is_user { Alignment::End } else { Alignment::Start },
        blocks,
    }
}
