mod detect;
mod layout;
mod presence;
mod render;

pub use detect::*;
pub use layout::*;
pub use presence::*;
pub use render::*;
