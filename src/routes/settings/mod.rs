mod get;
mod upsert;

pub use get::*;
pub use upsert::*;
