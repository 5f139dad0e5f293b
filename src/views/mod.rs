pub mod layout;
pub mod message;
pub mod presence;

pub use layout::{LayoutQuery, LayoutShell};
pub use message::{render, Alignment, Block, MessageView, TextStyle};
pub use presence::{indicator, PresenceIndicator};
