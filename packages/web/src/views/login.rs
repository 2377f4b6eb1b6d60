//! Login landing page.
//!
//! Credential handling belongs to the sign-in service; this page is where the
//! portal sends signed-out users.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let signed_in = session().user.is_some();

    rsx! {
        div {
            class: "login-container",

            h1 {
                style: "margin-bottom: 0.5rem; color: #e83c77; font-weight: 800; font-size: 2rem;",
                "DIMIGO"
            }

            if signed_in {
                p {
                    style: "margin-bottom: 2rem; color: #787774; font-size: 0.9375rem;",
                    "이미 로그인되어 있습니다."
                }
                Link { to: Route::MainPage {}, "메인으로 돌아가기" }
            } else {
                p {
                    style: "margin-bottom: 2rem; color: #787774; font-size: 0.9375rem;",
                    "로그아웃되었습니다. 다시 로그인해 주세요."
                }
            }
        }
    }
}
