use hedge_core::model::StatsCounters;

/// UI-ready stats panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsPanelVm {
    pub level_label: String,
    pub level_progress: u32,
    pub level_progress_label: String,
    pub total_points: u32,
    pub hedges_used: u32,
    pub stability_label: String,
    pub resilience_label: String,
    pub advisory: &'static str,
}

#[must_use]
pub fn map_stats_panel(counters: &StatsCounters) -> StatsPanelVm {
    let view = counters.derive_view();
    StatsPanelVm {
        level_label: format!("Lv.{}", view.level),
        level_progress: view.level_progress,
        level_progress_label: format!("{}/100", view.level_progress),
        total_points: counters.total_points(),
        hedges_used: counters.hedges_used(),
        stability_label: format!("{}%", counters.emotional_stability()),
        resilience_label: format!("{}%", counters.resilience()),
        advisory: view.advisory.message(),
    }
}
