use dioxus::prelude::*;

use crate::vm::{DialogSectionVm, HedgeDialogVm, SectionBody};

use super::stats_panel::ProgressBar;

#[component]
pub fn HedgeModal(
    dialog: HedgeDialogVm,
    on_close: EventHandler<()>,
    on_collect: EventHandler<()>,
) -> Element {
    let sections = dialog.sections.iter().cloned().map(|section| {
        rsx! { DialogSection { section } }
    });

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal hedge-modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    id: "hedge-modal-close",
                    class: "modal-close",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h2 { class: "modal-title", "{dialog.title}" }

                div { class: "hedge-progress",
                    div { class: "hedge-progress-row",
                        span { "对冲进度" }
                        span { "{dialog.progress_label}" }
                    }
                    ProgressBar { value: u32::from(dialog.progress) }
                }

                div { class: "hedge-sections", {sections} }

                if dialog.completed {
                    div { class: "hedge-complete",
                        div { class: "hedge-complete-icon", "✨" }
                        p { class: "hedge-complete-text", "对冲完成！心情已修复" }
                        button {
                            id: "hedge-collect",
                            class: "btn btn-primary btn-block",
                            r#type: "button",
                            onclick: move |_| on_collect.call(()),
                            "获得治愈积分"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DialogSection(section: DialogSectionVm) -> Element {
    let DialogSectionVm {
        heading,
        tone_class,
        body,
    } = section;
    rsx! {
        div { class: "hedge-section {tone_class}",
            h4 { class: "hedge-section-title", "{heading}" }
            match body {
                SectionBody::Quote(text) => rsx! {
                    p { class: "hedge-quote", "“{text}”" }
                },
                SectionBody::Text(text) => rsx! {
                    p { class: "hedge-text", "{text}" }
                },
                SectionBody::Bullets(items) => rsx! {
                    ul { class: "hedge-bullets",
                        for item in items {
                            li { span { class: "hedge-bullet-dot" } "{item}" }
                        }
                    }
                },
                SectionBody::Stories(items) => rsx! {
                    div { class: "hedge-stories",
                        for item in items {
                            p { class: "hedge-story", "{item}" }
                        }
                    }
                },
                SectionBody::Badges(items) => rsx! {
                    div { class: "hedge-badges",
                        for item in items {
                            span { class: "badge badge-outline", "{item}" }
                        }
                    }
                },
            }
        }
    }
}
