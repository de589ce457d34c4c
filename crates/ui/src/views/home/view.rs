use std::time::Duration;

use dioxus::core::Task;
use dioxus::document::eval;
use dioxus::prelude::*;

use hedge_core::model::{Category, HedgeOption};
use services::{Toast, tick_until_settled};

use crate::context::AppContext;
use crate::vm::{map_hedge_cards, map_hedge_dialog, map_stats_panel};

use super::card::HedgeCard;
use super::modal::HedgeModal;
use super::stats_panel::StatsPanel;
use super::toast::ToastView;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
#[cfg(test)]
use services::HedgeShell;

const HERO_IMAGE: Asset = asset!("/assets/hero-writing.svg");
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// What the user asked to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenRequest {
    Card(Category),
    Emergency,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut shell = use_signal(move || ctx.new_shell());
    let ticker = use_signal(|| None::<Task>);
    let mut toast = use_signal(|| None::<Toast>);
    let mut hero_failed = use_signal(|| false);

    let open_session = use_callback(move |request: OpenRequest| {
        // Only one session runs at a time; its ticker goes with it.
        stop_ticker(ticker);
        let mut shell = shell;
        let mut ticker = ticker;
        let token = match request {
            OpenRequest::Card(category) => shell.write().open(HedgeOption::for_category(category)),
            OpenRequest::Emergency => shell.write().open_emergency(),
        };
        let interval = shell.read().schedule().interval();
        let task = spawn(async move {
            tick_until_settled(interval, || std::future::ready(shell.write().tick(token))).await;
        });
        ticker.set(Some(task));
    });

    let dismiss_session = use_callback(move |()| {
        stop_ticker(ticker);
        shell.write().dismiss();
    });

    let collect_reward = use_callback(move |()| {
        let receipt = shell.write().collect();
        match receipt {
            Ok(receipt) => {
                stop_ticker(ticker);
                let shown = receipt.toast;
                tracing::debug!(title = %shown.title, "showing toast");
                toast.set(Some(shown.clone()));
                let mut toast = toast;
                spawn(async move {
                    tokio::time::sleep(TOAST_DURATION).await;
                    if toast.read().as_ref() == Some(&shown) {
                        toast.set(None);
                    }
                });
            }
            Err(err) => tracing::warn!(%err, "collect ignored"),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<HomeTestHandles>() {
                handles.register(open_session, dismiss_session, collect_reward, shell);
            }
        }
    }

    let (stats, dialog) = {
        let shell = shell.read();
        (
            map_stats_panel(&shell.counters()),
            shell.session().map(map_hedge_dialog),
        )
    };
    let cards = map_hedge_cards(HedgeOption::all()).into_iter().map(|card| {
        rsx! {
            HedgeCard {
                card,
                on_select: move |category| open_session.call(OpenRequest::Card(category)),
            }
        }
    });

    rsx! {
        div { class: "page home-page",
            section { class: "hero tone-warm",
                div { class: "hero-grid",
                    div { class: "hero-copy",
                        span { class: "badge badge-secondary", "学术治愈 · 心理对冲" }
                        h1 { class: "hero-title",
                            "文章被拒"
                            br {}
                            span { class: "hero-title-accent", "风险对冲机器" }
                        }
                        p { class: "hero-lead",
                            "当论文被拒绝时，这里有科学的心理对冲机制帮你快速恢复，将挫折转化为成长动力。"
                        }
                        button {
                            class: "btn btn-primary btn-lg",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = eval(
                                    "document.getElementById('strategies')?.scrollIntoView({ behavior: 'smooth' });",
                                );
                            },
                            "开始心理对冲 🚀"
                        }
                    }
                    div { class: "hero-art",
                        if hero_failed() {
                            div { class: "hero-art-fallback", "📝" }
                        } else {
                            img {
                                class: "hero-image",
                                src: HERO_IMAGE,
                                alt: "学术写作治愈环境",
                                onerror: move |_| hero_failed.set(true),
                            }
                        }
                    }
                }
            }

            div { class: "home-main",
                aside { class: "home-stats",
                    StatsPanel { stats }
                }
                section { id: "strategies", class: "home-strategies",
                    header { class: "view-header",
                        h2 { class: "view-title", "选择你的对冲策略" }
                        p { class: "view-subtitle",
                            "每种对冲机制都经过心理学验证，选择最适合当前心情的方式"
                        }
                    }
                    div { class: "hedge-grid", {cards} }
                }
            }

            section { class: "emergency",
                h3 { "🆘 紧急心理支持" }
                p { class: "view-subtitle", "如果当前情绪过于低落，建议先使用紧急修复模式" }
                button {
                    id: "emergency-open",
                    class: "btn btn-outline btn-lg tone-comfort",
                    r#type: "button",
                    onclick: move |_| open_session.call(OpenRequest::Emergency),
                    "启动紧急修复 🚨"
                }
            }

            if let Some(dialog) = dialog {
                HedgeModal {
                    dialog,
                    on_close: move |()| dismiss_session.call(()),
                    on_collect: move |()| collect_reward.call(()),
                }
            }

            if let Some(current) = toast() {
                ToastView {
                    toast: current,
                    on_dismiss: move |()| toast.set(None),
                }
            }
        }
    }
}

fn stop_ticker(mut ticker: Signal<Option<Task>>) {
    if let Some(task) = ticker.write().take() {
        task.cancel();
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct HomeTestHandles {
    open: Rc<RefCell<Option<Callback<OpenRequest>>>>,
    dismiss: Rc<RefCell<Option<Callback<()>>>>,
    collect: Rc<RefCell<Option<Callback<()>>>>,
    shell: Rc<RefCell<Option<Signal<HedgeShell>>>>,
}

#[cfg(test)]
impl HomeTestHandles {
    pub(crate) fn register(
        &self,
        open: Callback<OpenRequest>,
        dismiss: Callback<()>,
        collect: Callback<()>,
        shell: Signal<HedgeShell>,
    ) {
        *self.open.borrow_mut() = Some(open);
        *self.dismiss.borrow_mut() = Some(dismiss);
        *self.collect.borrow_mut() = Some(collect);
        *self.shell.borrow_mut() = Some(shell);
    }

    pub(crate) fn open(&self) -> Callback<OpenRequest> {
        (*self.open.borrow()).expect("open registered")
    }

    pub(crate) fn dismiss(&self) -> Callback<()> {
        (*self.dismiss.borrow()).expect("dismiss registered")
    }

    pub(crate) fn collect(&self) -> Callback<()> {
        (*self.collect.borrow()).expect("collect registered")
    }

    pub(crate) fn shell(&self) -> Signal<HedgeShell> {
        (*self.shell.borrow()).expect("shell registered")
    }
}
