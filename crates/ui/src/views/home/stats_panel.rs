use dioxus::prelude::*;

use crate::vm::StatsPanelVm;

#[component]
pub fn StatsPanel(stats: StatsPanelVm) -> Element {
    rsx! {
        section { class: "card stats-panel tone-calm",
            h3 { class: "stats-title", "📊 治愈统计面板" }

            div { class: "stats-row",
                span { class: "stats-label", "当前等级" }
                span { class: "badge badge-secondary mono", "{stats.level_label}" }
            }

            div { class: "stats-level",
                div { class: "stats-row stats-row--small",
                    span { "升级进度" }
                    span { "{stats.level_progress_label}" }
                }
                ProgressBar { value: stats.level_progress }
            }

            div { class: "stats-grid",
                StatTile { value: stats.total_points.to_string(), label: "治愈积分", accent: "accent-primary" }
                StatTile { value: stats.hedges_used.to_string(), label: "对冲次数", accent: "accent-warm" }
                StatTile { value: stats.stability_label.clone(), label: "情绪稳定度", accent: "accent-soft" }
                StatTile { value: stats.resilience_label.clone(), label: "韧性指数", accent: "accent-calm" }
            }

            div { class: "stats-advice",
                div { class: "stats-advice-title", "今日治愈建议" }
                div { class: "stats-advice-body", "{stats.advisory}" }
            }
        }
    }
}

#[component]
fn StatTile(value: String, label: &'static str, accent: &'static str) -> Element {
    rsx! {
        div { class: "stat-tile",
            div { class: "stat-value {accent}", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

/// Horizontal bar filled to `value` percent.
#[component]
pub fn ProgressBar(value: u32) -> Element {
    let width = value.min(100);
    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            "aria-valuenow": "{width}",
            div { class: "progress-fill", style: "width: {width}%" }
        }
    }
}
