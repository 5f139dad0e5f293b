mod profile;
mod settings;

pub use profile::ProfileForm;
pub use settings::SettingsForm;
