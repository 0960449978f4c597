mod components;
mod config;
mod controller;
mod state;

use dataproc_sdk::ProcessClient;
use dioxus::prelude::*;
use tracing::{info, warn};

use components::outcome::{ErrorBanner, ResponseCard};
use components::process_form::ProcessForm;
use components::shared::{BackendStatus, StatusBadge};
use config::ClientConfig;
use state::FormState;

fn main() {
    let config = ClientConfig::from_env();
    let client = match ProcessClient::new(&config.api_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("[dataproc-gui] {e}");
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new().with_context(client).launch(App);
}

#[component]
fn App() -> Element {
    let client = use_context::<ProcessClient>();
    let form = use_signal(FormState::default);
    let mut backend = use_signal(|| BackendStatus::Checking);

    // One-shot liveness probe; it only drives the badge.
    use_hook(move || {
        spawn(async move {
            let status = match client.health().await {
                Ok(body) => {
                    info!(url = %client.base_url(), %body, "backend reachable");
                    BackendStatus::Online
                }
                Err(e) => {
                    warn!(url = %client.base_url(), error = %e, "backend unreachable");
                    BackendStatus::Offline
                }
            };
            backend.set(status);
        });
    });

    let state = form.read().clone();

    rsx! {
        style { {include_str!("style.css")} }
        div { class: "app-root",
            div { class: "card",
                div { class: "card-header",
                    h1 { class: "title", "Data Processor" }
                    StatusBadge { status: *backend.read() }
                }

                ProcessForm { form }

                if let Some(message) = state.error() {
                    ErrorBanner { message: message.to_string() }
                }
                if let Some(response) = state.response() {
                    ResponseCard { response: response.clone() }
                }
            }
        }
    }
}
