use dioxus::prelude::*;

/// Reachability of the backend, as seen by the start-up probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online,
    Offline,
}

/// Small indicator next to the title.
#[component]
pub fn StatusBadge(status: BackendStatus) -> Element {
    let (class, icon, label) = match status {
        BackendStatus::Checking => ("badge badge-pending", "⏳", "checking"),
        BackendStatus::Online => ("badge badge-connected", "●", "online"),
        BackendStatus::Offline => ("badge badge-offline", "○", "offline"),
    };

    rsx! {
        span { class: "{class}", title: "Backend {label}", "{icon} {label}" }
    }
}
