pub(crate) mod chat;
pub mod health_checks;
pub(crate) mod profile;
pub(crate) mod settings;

pub use health_checks::*;
