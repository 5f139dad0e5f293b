use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct LayoutQuery {
    pub show_navigation: Option<bool>,
}

/// Full-viewport page wrapper with safe-area padding.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutShell {
    pub full_viewport: bool,
    pub safe_area_padding: bool,
    // passed through for the navigation chrome composed elsewhere
    pub show_navigation: bool,
}

impl LayoutShell {
    pub fn new(show_navigation: bool) -> Self {
        Self {
            full_viewport: true,
            safe_area_padding: true,
            show_navigation,
        }
    }
}

impl From<LayoutQuery> for LayoutShell {
    fn from(query: LayoutQuery) -> Self {
        LayoutShell::new(query.show_navigation.unwrap_or(true))
    }
}
