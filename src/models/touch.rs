use chrono::{DateTime, Utc};

/// Records refreshed right before they are written.
pub trait Touch: Sized {
    fn updated_at(&self) -> DateTime<Utc>;

    fn set_updated_at(&mut self, at: DateTime<Utc>);

    /// Sets `updated_at` to now. Never moves it backwards, even when the clock does.
    fn touch(mut self) -> Self {
        let now = Utc::now().max(self.updated_at());
        self.set_updated_at(now);
        self
    }
}
