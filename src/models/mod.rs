mod image_detection;
mod message;
mod profile;
mod settings;
mod touch;

pub use image_detection::*;
pub use message::*;
pub use profile::*;
pub use settings::*;
pub use touch::Touch;
