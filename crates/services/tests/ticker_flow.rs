use std::sync::Arc;
use std::time::Duration;

use hedge_core::model::{
    Category, HedgeOption, RewardPoints, SessionPhase, StatsCounters, TickOutcome,
};
use services::{
    FixedReward, HedgeError, HedgeShell, TickHandle, TickSchedule, tick_until_settled,
};
use tokio::sync::Mutex;

fn shared_shell(reward: u32) -> Arc<Mutex<HedgeShell>> {
    Arc::new(Mutex::new(HedgeShell::new(
        StatsCounters::initial(),
        TickSchedule::default(),
        Arc::new(FixedReward(RewardPoints::new(reward).unwrap())),
    )))
}

#[tokio::test(start_paused = true)]
async fn ticker_runs_session_to_completion() {
    let shell = shared_shell(15);
    let token = shell
        .lock()
        .await
        .open(HedgeOption::for_category(Category::Emotional));

    let started = tokio::time::Instant::now();
    let handle = TickHandle::spawn(Arc::clone(&shell), token);
    let outcome = handle.finished().await.expect("ticker finished");

    assert_eq!(outcome, TickOutcome::Completed);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(5), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(5_100), "{elapsed:?}");

    let mut shell = shell.lock().await;
    assert_eq!(shell.phase(), SessionPhase::Completed);
    let receipt = shell.collect().expect("collect");
    assert_eq!(receipt.counters, StatsCounters::new(260, 13, 80, 71).unwrap());
    assert_eq!(shell.stats_view().level, 3);
    assert_eq!(shell.stats_view().level_progress, 60);
}

#[tokio::test(start_paused = true)]
async fn progress_seen_by_observer_never_decreases() {
    let shell = shared_shell(20);
    let token = shell
        .lock()
        .await
        .open(HedgeOption::for_category(Category::Practical));
    let handle = TickHandle::spawn(Arc::clone(&shell), token);

    let mut last = 0;
    for _ in 0..60 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let progress = shell
            .lock()
            .await
            .session()
            .map_or(0, |session| session.progress());
        assert!(progress >= last, "{progress} < {last}");
        last = progress;
    }
    assert_eq!(last, 100);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn dismiss_mid_session_stops_the_ticker() {
    let shell = shared_shell(15);
    let token = shell
        .lock()
        .await
        .open(HedgeOption::for_category(Category::Community));
    let handle = TickHandle::spawn(Arc::clone(&shell), token);

    tokio::time::sleep(Duration::from_millis(1_050)).await;
    {
        let mut shell = shell.lock().await;
        assert_eq!(shell.session().unwrap().progress(), 20);
        assert!(shell.dismiss());
    }

    // The next tick sees a stale token and the task ends on its own.
    let outcome = handle.finished().await.expect("ticker finished");
    assert_eq!(outcome, TickOutcome::Ignored);

    let mut shell = shell.lock().await;
    assert_eq!(shell.phase(), SessionPhase::Idle);
    assert_eq!(shell.counters(), StatsCounters::initial());

    let token = shell.open(HedgeOption::for_category(Category::Community));
    let session = shell.session().unwrap();
    assert_eq!(session.progress(), 0);
    assert!(!session.is_completed());
    assert_eq!(shell.tick(token), TickOutcome::Advanced { progress: 2 });
}

#[tokio::test(start_paused = true)]
async fn cancelled_ticker_reports_cancellation() {
    let shell = shared_shell(15);
    let token = shell
        .lock()
        .await
        .open(HedgeOption::for_category(Category::Gamified));
    let handle = TickHandle::spawn(Arc::clone(&shell), token);

    tokio::time::sleep(Duration::from_millis(250)).await;
    handle.cancel();
    handle.cancel();
    let err = handle.finished().await.unwrap_err();
    assert!(matches!(err, HedgeError::TickerCancelled));

    tokio::time::sleep(Duration::from_secs(10)).await;
    let shell = shell.lock().await;
    assert_eq!(shell.session().unwrap().progress(), 4);
    assert_eq!(shell.phase(), SessionPhase::Running);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels_ticks() {
    let shell = shared_shell(15);
    let token = shell
        .lock()
        .await
        .open(HedgeOption::for_category(Category::Emotional));
    drop(TickHandle::spawn(Arc::clone(&shell), token));

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(shell.lock().await.session().unwrap().progress(), 0);
}

#[tokio::test(start_paused = true)]
async fn tick_loop_stops_on_first_settled_outcome() {
    let mut calls = 0u8;
    let started = tokio::time::Instant::now();
    let outcome = tick_until_settled(Duration::from_millis(100), || {
        calls += 1;
        let outcome = if calls < 3 {
            TickOutcome::Advanced { progress: calls }
        } else {
            TickOutcome::Ignored
        };
        std::future::ready(outcome)
    })
    .await;

    assert_eq!(outcome, TickOutcome::Ignored);
    assert_eq!(calls, 3);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(300), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(310), "{elapsed:?}");
}
