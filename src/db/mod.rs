pub mod pool;
pub mod profile;
pub mod settings;
