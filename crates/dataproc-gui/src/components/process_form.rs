use dataproc_sdk::ProcessClient;
use dioxus::prelude::*;

use crate::controller;
use crate::state::{FormAction, FormState};

/// Input field and submit button.
///
/// Submitting spawns one task per accepted submission; the task writes
/// its resolution back through [`FormState::apply`], which drops it if a
/// newer submission has started since.
#[component]
pub fn ProcessForm(form: Signal<FormState>) -> Element {
    let mut form = form;
    let client = use_context::<ProcessClient>();
    let state = form.read().clone();

    let click_client = client.clone();
    let key_client = client;

    rsx! {
        div { class: "process-form",
            div { class: "form-row",
                label { r#for: "input", "Enter your data:" }
                input {
                    id: "input",
                    r#type: "text",
                    value: "{state.input}",
                    placeholder: "Type something here...",
                    disabled: state.loading,
                    oninput: move |evt: Event<FormData>| {
                        form.write().apply(FormAction::InputChanged(evt.value()));
                    },
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter && form.read().can_submit() {
                            submit(form, key_client.clone());
                        }
                    },
                }
            }

            button {
                class: "submit-btn",
                disabled: !state.can_submit(),
                onclick: move |_| submit(form, click_client.clone()),
                if state.loading { "Processing..." } else { "Submit" }
            }
        }
    }
}

fn submit(mut form: Signal<FormState>, client: ProcessClient) {
    let Some(submission) = form.write().start_submission() else {
        return;
    };

    spawn(async move {
        let action = controller::run_submission(&client, submission).await;
        form.write().apply(action);
    });
}
