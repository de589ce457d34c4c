use std::time::Duration;

use dioxus::prelude::ReadableExt;

use hedge_core::TickSchedule;
use hedge_core::model::{Category, SessionPhase, StatsCounters};

use super::OpenRequest;
use super::test_harness::{setup_view_harness, setup_view_harness_with_schedule};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_stats_and_cards() {
    let mut harness = setup_view_harness(StatsCounters::initial(), 15);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Lv.3",
        "45/100",
        "245",
        "75%",
        "68%",
        "适当休息，补充正能量。",
        "情感支持",
        "实用建议",
        "社区互助",
        "游戏化",
        "+15分",
        "+30分",
        "启动紧急修复",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("对冲进度"), "modal rendered while idle: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_advisory_follows_resilience() {
    let counters = StatsCounters::new(0, 0, 50, 85).unwrap();
    let mut harness = setup_view_harness(counters, 15);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("你的韧性很强！继续保持！"), "{html}");
    assert!(html.contains("Lv.1"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn opening_a_card_shows_dialog_at_zero() {
    let slow = TickSchedule::new(Duration::from_secs(60), 2).unwrap();
    let mut harness = setup_view_harness_with_schedule(StatsCounters::initial(), 15, slow);
    harness.rebuild();

    harness.act(|handles| handles.open().call(OpenRequest::Card(Category::Emotional)));
    let html = harness.render();
    assert!(html.contains("对冲进度"), "{html}");
    assert!(html.contains("0%"), "{html}");
    assert!(html.contains("每一次拒绝都是通往成功的必经之路。"), "{html}");
    assert!(html.contains("深呼吸3次，感受当下的平静"), "{html}");
    assert!(!html.contains("hedge-collect"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn emergency_session_uses_emotional_content() {
    let slow = TickSchedule::new(Duration::from_secs(60), 2).unwrap();
    let mut harness = setup_view_harness_with_schedule(StatsCounters::initial(), 15, slow);
    harness.rebuild();

    harness.act(|handles| handles.open().call(OpenRequest::Emergency));
    let html = harness.render();
    assert!(html.contains("紧急情感修复"), "{html}");
    assert!(html.contains("治愈金句"), "{html}");

    let shell = harness.handles.shell();
    let category = harness
        .dom
        .in_runtime(|| shell.read().session().map(|session| session.category()));
    assert_eq!(category, Some(Category::Emotional));
}

#[tokio::test(flavor = "current_thread")]
async fn completed_session_grants_reward_and_toast() {
    let mut harness = setup_view_harness(StatsCounters::initial(), 15);
    harness.rebuild();

    harness.act(|handles| handles.open().call(OpenRequest::Card(Category::Practical)));
    let html = harness.drive_until("对冲完成！心情已修复").await;
    assert!(html.contains("100%"), "{html}");
    assert!(html.contains("hedge-collect"), "{html}");

    harness.act(|handles| handles.collect().call(()));
    let html = harness.render();
    assert!(html.contains("对冲成功！"), "{html}");
    assert!(html.contains("获得 15 治愈积分"), "{html}");
    assert!(html.contains("260"), "{html}");
    assert!(html.contains("60/100"), "{html}");
    assert!(html.contains("80%"), "{html}");
    assert!(html.contains("71%"), "{html}");
    assert!(!html.contains("对冲进度"), "modal still open: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dismiss_closes_dialog_without_reward() {
    let slow = TickSchedule::new(Duration::from_secs(60), 2).unwrap();
    let mut harness = setup_view_harness_with_schedule(StatsCounters::initial(), 15, slow);
    harness.rebuild();

    harness.act(|handles| handles.open().call(OpenRequest::Card(Category::Community)));
    assert!(harness.render().contains("社区力量"));

    harness.act(|handles| handles.dismiss().call(()));
    let html = harness.render();
    assert!(!html.contains("对冲进度"), "{html}");
    assert!(html.contains("245"), "{html}");

    let shell = harness.handles.shell();
    let phase = harness.dom.in_runtime(|| shell.read().phase());
    assert_eq!(phase, SessionPhase::Idle);
}

#[tokio::test(flavor = "current_thread")]
async fn collect_before_completion_changes_nothing() {
    let slow = TickSchedule::new(Duration::from_secs(60), 2).unwrap();
    let mut harness = setup_view_harness_with_schedule(StatsCounters::initial(), 15, slow);
    harness.rebuild();

    harness.act(|handles| handles.open().call(OpenRequest::Card(Category::Gamified)));
    harness.act(|handles| handles.collect().call(()));
    let html = harness.render();
    assert!(html.contains("对冲进度"), "{html}");
    assert!(!html.contains("对冲成功！"), "{html}");
    assert!(html.contains("45/100"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn early_collect_keeps_the_session_ticking() {
    let fast = TickSchedule::new(Duration::from_millis(5), 10).unwrap();
    let mut harness = setup_view_harness_with_schedule(StatsCounters::initial(), 15, fast);
    harness.rebuild();

    harness.act(|handles| handles.open().call(OpenRequest::Card(Category::Gamified)));
    harness.act(|handles| handles.collect().call(()));

    harness.drive_until("对冲完成！心情已修复").await;
    let shell = harness.handles.shell();
    let phase = harness.dom.in_runtime(|| shell.read().phase());
    assert_eq!(phase, SessionPhase::Completed);

    harness.act(|handles| handles.collect().call(()));
    let html = harness.render();
    assert!(html.contains("获得 15 治愈积分"), "{html}");
    assert!(html.contains("260"), "{html}");
}
