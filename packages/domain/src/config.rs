//! # Portal configuration — `portal.toml`
//!
//! Deployment settings for the main page, read from a TOML file next to the
//! server binary (filename: [`PortalConfig::filename`] = `"portal.toml"`).
//!
//! ```toml
//! [links]
//! settings_url = "https://student.dimigo.hs.kr/user/profile"
//! login_route = "/auth/login"
//!
//! [photos]
//! base_url = "https://api.dimigo.hs.kr"
//!
//! [[services]]
//! title = "학생 포털"
//! description = "Student portal"
//! url = "https://student.dimigo.hs.kr"
//! icon = "school"
//! ```
//!
//! Every section has a default, so a missing or empty file is the same as the
//! default configuration. The photo base URL defaults to the `DIMIGO_API_URL`
//! value captured at build time.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `portal.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub photos: PhotosConfig,
    #[serde(default = "default_services")]
    pub services: Vec<ServiceLink>,
}

/// Navigation targets used by the profile card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinksConfig {
    /// External account settings page.
    #[serde(default = "default_settings_url")]
    pub settings_url: String,
    /// In-app route of the login screen.
    #[serde(default = "default_login_route")]
    pub login_route: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotosConfig {
    /// API host serving `/user_photo/<ref>`. Empty means same origin.
    #[serde(default = "default_photo_base")]
    pub base_url: String,
}

/// One card in the service shortcut grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceLink {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    /// Icon name understood by the UI crate; unknown names get a generic link icon.
    #[serde(default)]
    pub icon: String,
}

fn default_settings_url() -> String {
    "https://student.dimigo.hs.kr/user/profile".to_string()
}

fn default_login_route() -> String {
    "/auth/login".to_string()
}

fn default_photo_base() -> String {
    option_env!("DIMIGO_API_URL").unwrap_or_default().to_string()
}

fn default_services() -> Vec<ServiceLink> {
    vec![
        ServiceLink {
            title: "학생 포털".to_string(),
            description: "출결, 인강실, 외출 신청".to_string(),
            url: "https://student.dimigo.hs.kr".to_string(),
            icon: "school".to_string(),
        },
        ServiceLink {
            title: "학교 홈페이지".to_string(),
            description: "학사 일정과 가정통신문".to_string(),
            url: "https://www.dimigo.hs.kr".to_string(),
            icon: "home".to_string(),
        },
    ]
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            settings_url: default_settings_url(),
            login_route: default_login_route(),
        }
    }
}

impl Default for PhotosConfig {
    fn default() -> Self {
        Self {
            base_url: default_photo_base(),
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            links: LinksConfig::default(),
            photos: PhotosConfig::default(),
            services: default_services(),
        }
    }
}

impl PortalConfig {
    /// Builder method to set the photo host.
    pub fn with_photo_base(mut self, base_url: impl Into<String>) -> Self {
        self.photos.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
