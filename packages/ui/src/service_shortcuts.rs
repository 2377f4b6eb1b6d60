use dioxus::prelude::*;
use domain::ServiceLink;

use crate::icons::{FaBook, FaCalendarDays, FaHouse, FaLink, FaSchool, FaUtensils};
use crate::Icon;

/// Grid of links to related school services.
#[component]
pub fn ServiceShortcuts(services: Vec<ServiceLink>) -> Element {
    rsx! {
        div {
            class: "service-grid",
            for service in services {
                a {
                    key: "{service.url}",
                    class: "card service-card",
                    href: "{service.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { class: "service-icon", {service_icon(&service.icon)} }
                    h3 { class: "service-title", "{service.title}" }
                    if !service.description.is_empty() {
                        p { class: "service-description", "{service.description}" }
                    }
                }
            }
        }
    }
}

fn service_icon(name: &str) -> Element {
    match name {
        "school" => rsx! { Icon { icon: FaSchool, width: 24, height: 24 } },
        "home" => rsx! { Icon { icon: FaHouse, width: 24, height: 24 } },
        "meal" => rsx! { Icon { icon: FaUtensils, width: 24, height: 24 } },
        "calendar" => rsx! { Icon { icon: FaCalendarDays, width: 24, height: 24 } },
        "book" => rsx! { Icon { icon: FaBook, width: 24, height: 24 } },
        _ => rsx! { Icon { icon: FaLink, width: 24, height: 24 } },
    }
}
