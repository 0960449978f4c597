use dataproc_models::ProcessResponse;
use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner",
            p { "{message}" }
        }
    }
}

#[component]
pub fn ResponseCard(response: ProcessResponse) -> Element {
    rsx! {
        div { class: "response-card",
            h3 { class: "response-title", "Response:" }
            p { class: "response-message", "{response.message}" }
            p { class: "response-data", "Data: {response.data}" }
            p { class: "response-time", "Time: {response.timestamp}" }
        }
    }
}
