use dioxus::prelude::*;
use ui::views::MainPageView;

use crate::Route;

/// Portal landing page.
#[component]
pub fn MainPage() -> Element {
    let nav = use_navigator();

    rsx! {
        MainPageView {
            on_navigate: move |path: String| match path.parse::<Route>() {
                Ok(route) => {
                    nav.push(route);
                }
                Err(_) => tracing::warn!("No route for {}", path),
            },
        }
    }
}
