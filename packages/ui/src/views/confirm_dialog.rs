use dioxus::prelude::*;

/// A full-screen overlay asking a yes/no question.
/// Clicking outside the card counts as cancel.
#[component]
pub fn ConfirmDialog(
    message: String,
    detail: Option<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                p { class: "modal-message", "{message}" }
                if let Some(detail) = detail {
                    p { class: "modal-detail", "{detail}" }
                }
                div {
                    class: "modal-actions",
                    button {
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "취소"
                    }
                    button {
                        r#type: "button",
                        class: "danger",
                        onclick: move |_| on_confirm.call(()),
                        "확인"
                    }
                }
            }
        }
    }
}
