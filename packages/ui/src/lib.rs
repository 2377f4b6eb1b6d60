//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod session;
pub use session::{make_session_store, use_session, SessionProvider, SessionState};

mod portal_config;
pub use portal_config::{use_portal_config, ConfigProvider};

mod navigation;
pub use navigation::open_external;

mod loading;
pub use loading::Loading;

mod profile_summary;
pub use profile_summary::ProfileSummary;

mod notice_card;
pub use notice_card::{NoticeCard, NoticeState};

mod meal_card;
pub use meal_card::MealCard;

mod service_shortcuts;
pub use service_shortcuts::ServiceShortcuts;
