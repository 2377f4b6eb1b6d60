//! Where the profile card's buttons lead.

use crate::config::PortalConfig;

/// A navigation request, resolved by the platform package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Leave the app with a full browser navigation.
    External(String),
    /// Client-side route change inside the app.
    Internal(String),
}

/// Buttons on the profile card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    OpenSettings,
    Logout,
}

impl ProfileAction {
    pub fn target(&self, config: &PortalConfig) -> NavTarget {
        match self {
            ProfileAction::OpenSettings => NavTarget::External(config.links.settings_url.clone()),
            ProfileAction::Logout => NavTarget::Internal(config.links.login_route.clone()),
        }
    }

    /// Tooltip text for the button.
    pub fn title(&self) -> &'static str {
        match self {
            ProfileAction::OpenSettings => "설정",
            ProfileAction::Logout => "로그아웃",
        }
    }
}
