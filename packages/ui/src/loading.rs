use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

/// Spinning indicator for content that has not arrived yet.
#[component]
pub fn Loading(#[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        span {
            class: "loading {class}",
            role: "status",
            aria_label: "불러오는 중",
            Icon { icon: FaSpinner, width: 28, height: 28 }
        }
    }
}
