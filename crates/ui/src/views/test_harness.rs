use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use hedge_core::TickSchedule;
use hedge_core::model::{RewardPoints, StatsCounters};
use services::{FixedReward, RewardSource};

use crate::context::{UiApp, build_app_context};
use crate::views::HomeView;
use crate::views::home::HomeTestHandles;

#[derive(Clone)]
struct TestApp {
    schedule: TickSchedule,
    counters: StatsCounters,
    reward: RewardPoints,
}

impl UiApp for TestApp {
    fn schedule(&self) -> TickSchedule {
        self.schedule
    }

    fn initial_counters(&self) -> StatsCounters {
        self.counters
    }

    fn rewards(&self) -> Arc<dyn RewardSource> {
        Arc::new(FixedReward(self.reward))
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: HomeTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { HomeView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: HomeTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drives the dom until the rendered html contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..40 {
            self.drive_async().await;
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
        }
        let html = self.render();
        panic!("never rendered {needle:?}: {html}");
    }

    /// Runs `f` inside the dom's runtime, then re-renders.
    pub fn act(&mut self, f: impl FnOnce(&HomeTestHandles)) {
        let handles = self.handles.clone();
        self.dom.in_runtime(|| f(&handles));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness whose sessions finish in two quick ticks and always grant `reward`.
pub fn setup_view_harness(counters: StatsCounters, reward: u32) -> ViewHarness {
    let schedule = TickSchedule::new(Duration::from_millis(1), 50).expect("valid schedule");
    setup_view_harness_with_schedule(counters, reward, schedule)
}

pub fn setup_view_harness_with_schedule(
    counters: StatsCounters,
    reward: u32,
    schedule: TickSchedule,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        schedule,
        counters,
        reward: RewardPoints::new(reward).expect("valid reward"),
    });
    let handles = HomeTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
