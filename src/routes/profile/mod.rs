mod delete;
mod get;
mod upsert;

pub use delete::*;
pub use get::*;
pub use upsert::*;
