use dioxus::prelude::*;

/// Card reserved for the meal plan. The menu itself is rendered elsewhere.
#[component]
pub fn MealCard() -> Element {
    rsx! {
        div {
            class: "card meal-card",
            aria_label: "급식",
        }
    }
}
