//! Profile card: photo, name line and the settings/logout buttons.

use dioxus::prelude::*;
use domain::{photo_url, profile_lines, ProfileAction, UserInfo};

use crate::icons::{FaCircleUser, FaGear, FaRightFromBracket};
use crate::Icon;

/// Summary of the signed-in user.
///
/// With no user, nothing but the placeholder photo and the buttons render.
/// Button presses are reported through `on_action`; resolving them into
/// navigation is up to the caller.
#[component]
pub fn ProfileSummary(
    user: Option<UserInfo>,
    /// Host that serves `/user_photo/<ref>`.
    photo_base: String,
    on_action: EventHandler<ProfileAction>,
) -> Element {
    let photo = user
        .as_ref()
        .and_then(|u| u.primary_photo())
        .map(|reference| photo_url(&photo_base, reference));
    let lines = user.as_ref().map(profile_lines).unwrap_or_default();

    rsx! {
        div {
            class: "card profile-card",
            div {
                class: "profile-info-left",
                match photo {
                    Some(src) => rsx! {
                        img { class: "profile-photo", src: "{src}", alt: "" }
                    },
                    None => rsx! {
                        span {
                            class: "profile-default-photo",
                            Icon { icon: FaCircleUser, width: 44, height: 44 }
                        }
                    },
                }
                div {
                    class: "profile-info",
                    for (i, line) in lines.into_iter().enumerate() {
                        span {
                            key: "{i}",
                            class: line.css_class(),
                            "{line.text()}"
                        }
                    }
                }
            }
            nav {
                class: "button-list",
                button {
                    class: "profile-button",
                    title: ProfileAction::OpenSettings.title(),
                    onclick: move |_| on_action.call(ProfileAction::OpenSettings),
                    Icon { icon: FaGear, width: 23, height: 23 }
                }
                button {
                    class: "profile-button",
                    title: ProfileAction::Logout.title(),
                    onclick: move |_| on_action.call(ProfileAction::Logout),
                    Icon { icon: FaRightFromBracket, width: 23, height: 23 }
                }
            }
        }
    }
}
