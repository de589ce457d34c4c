use dioxus::prelude::*;
use services::Toast;

#[component]
pub fn ToastView(toast: Toast, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "toast",
            role: "status",
            onclick: move |_| on_dismiss.call(()),
            div { class: "toast-title", "{toast.title}" }
            div { class: "toast-description", "{toast.description}" }
        }
    }
}
