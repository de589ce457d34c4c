use dioxus::prelude::*;
use hedge_core::model::Category;

use crate::vm::HedgeCardVm;

#[component]
pub fn HedgeCard(card: HedgeCardVm, on_select: EventHandler<Category>) -> Element {
    let category = card.category;
    rsx! {
        div {
            class: "card hedge-card {card.tone_class}",
            onclick: move |_| on_select.call(category),
            div { class: "hedge-card-header",
                div { class: "hedge-card-icon", "{card.icon}" }
                div { class: "hedge-card-badges",
                    span { class: "badge badge-secondary", "{card.type_label}" }
                    if let Some(points) = card.points_badge.as_ref() {
                        span { class: "badge badge-outline mono", "{points}" }
                    }
                }
            }
            h3 { class: "hedge-card-title", "{card.title}" }
            p { class: "hedge-card-description", "{card.description}" }
            button {
                class: "btn btn-outline hedge-card-action",
                r#type: "button",
                "启动对冲机制"
            }
        }
    }
}
