use dioxus::prelude::*;
use domain::{NavTarget, PortalConfig, ProfileAction};

use crate::{
    open_external, use_portal_config, use_session, MealCard, NoticeCard, ProfileSummary,
    ServiceShortcuts,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");
const BRAND_LOGO: Asset = asset!("/assets/brand.svg");

/// Resolve a profile button press into exactly one navigation.
///
/// The cached session is left alone; signing out is the login screen's job.
pub(crate) fn dispatch_action(
    action: ProfileAction,
    config: &PortalConfig,
    external: impl FnOnce(&str),
    internal: impl FnOnce(String),
) {
    match action.target(config) {
        NavTarget::External(url) => external(&url),
        NavTarget::Internal(route) => internal(route),
    }
}

/// Shared portal landing page.
///
/// The user snapshot and the notice load independently; each section shows
/// its own placeholder until its data arrives. Platform packages provide the
/// in-app navigation callback.
#[component]
pub fn MainPageView(
    /// Called with an in-app route (e.g. the login screen after logout).
    on_navigate: EventHandler<String>,
) -> Element {
    let session = use_session();
    let config = use_portal_config();

    let handle_action = move |action: ProfileAction| {
        let config = config.read().clone();
        dispatch_action(action, &config, open_external, |route| on_navigate.call(route));
    };

    let user = session().user;
    let photo_base = config.read().photos.base_url.clone();
    let services = config.read().services.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "main-container",
            h1 {
                class: "brand",
                img { class: "brand-logo", src: BRAND_LOGO, alt: "DIMIGO" }
            }
            div {
                class: "info-container",
                div {
                    class: "column",
                    section {
                        class: "profile-section",
                        ProfileSummary { user, photo_base, on_action: handle_action }
                    }
                    section {
                        class: "section",
                        NoticeCard {}
                    }
                }
                div {
                    class: "column",
                    section {
                        class: "section",
                        MealCard {}
                    }
                }
            }
            div {
                class: "column",
                section {
                    class: "section",
                    ServiceShortcuts { services }
                }
            }
        }
    }
}
