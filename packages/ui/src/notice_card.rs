//! Notice card: the school-wide announcement, with bare URLs made clickable.

use std::fmt::Display;

use dioxus::prelude::*;
use domain::autolink::link_urls;

use crate::Loading;

/// What the notice card shows.
#[derive(Clone, Debug, PartialEq)]
pub enum NoticeState {
    Loading,
    /// Escaped and linkified notice markup.
    Ready(String),
    Failed(String),
}

impl NoticeState {
    /// Map the query's progress to a render state.
    pub fn from_result<E: Display>(result: Option<&Result<String, E>>) -> Self {
        match result {
            None => NoticeState::Loading,
            Some(Ok(text)) => NoticeState::Ready(link_urls(text)),
            Some(Err(e)) => NoticeState::Failed(e.to_string()),
        }
    }
}

#[component]
pub fn NoticeCard() -> Element {
    let mut notice = use_resource(|| async move {
        let result = api::get_notice().await;
        if let Err(e) = &result {
            tracing::warn!("Failed to load notice: {}", e);
        }
        result
    });

    let state = NoticeState::from_result((*notice.read()).as_ref());

    rsx! {
        div {
            class: "card info-card",
            match state {
                NoticeState::Loading => rsx! {
                    Loading { class: "info-loading" }
                },
                NoticeState::Ready(html) => rsx! {
                    p { class: "info-notice", dangerous_inner_html: "{html}" }
                },
                NoticeState::Failed(_) => rsx! {
                    div {
                        class: "info-error",
                        p { "공지사항을 불러오지 못했습니다." }
                        button {
                            class: "info-retry",
                            onclick: move |_| notice.restart(),
                            "다시 시도"
                        }
                    }
                },
            }
        }
    }
}
