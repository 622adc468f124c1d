use super::*;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

#[tokio::test(start_paused = true)]
async fn scheduled_event_arrives_after_delay_and_not_before() {
    let mut tasks = ViewTasks::new(Handle::current());
    let started = Instant::now();
    let token = tasks.schedule_after("test", Duration::from_millis(500), 7u32);

    let early = tokio::time::timeout(Duration::from_millis(499), tasks.next()).await;
    assert!(early.is_err(), "event must not arrive before its delay");
    assert!(tasks.is_pending(token));

    let (done, event) = tasks.next().await.expect("completion");
    assert_eq!(done, token);
    assert_eq!(event, 7);
    assert!(started.elapsed() >= Duration::from_millis(500));
    assert!(!tasks.is_pending(token));
}

#[tokio::test(start_paused = true)]
async fn next_returns_none_when_nothing_is_pending() {
    let mut tasks: ViewTasks<u32> = ViewTasks::new(Handle::current());
    assert!(tasks.next().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn cancelled_operation_never_completes() {
    let mut tasks = ViewTasks::new(Handle::current());
    let token = tasks.schedule_after("test", Duration::from_millis(100), 1u32);
    assert!(tasks.cancel(token));
    assert!(!tasks.cancel(token), "second cancel is a no-op");

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(tasks.try_next().is_none());
    assert!(tasks.next().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn completion_queued_before_cancel_is_discarded() {
    let mut tasks = ViewTasks::new(Handle::current());
    let token = tasks.spawn("test", async { 5u32 });

    // Let the task run to completion and enqueue its result.
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert!(tasks.cancel(token));
    assert!(tasks.try_next().is_none());
}

#[tokio::test(start_paused = true)]
async fn only_live_tokens_are_delivered() {
    let mut tasks = ViewTasks::new(Handle::current());
    let stale = tasks.schedule_after("test", Duration::from_millis(10), "stale");
    let live = tasks.schedule_after("test", Duration::from_millis(20), "live");
    assert_ne!(stale, live);
    tasks.cancel(stale);

    let (token, event) = tasks.next().await.expect("completion");
    assert_eq!(token, live);
    assert_eq!(event, "live");
}

#[tokio::test(start_paused = true)]
async fn dropping_tasks_aborts_pending_work() {
    let fired = Arc::new(AtomicBool::new(false));
    let mut tasks = ViewTasks::new(Handle::current());
    let flag = Arc::clone(&fired);
    tasks.spawn("test", async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        flag.store(true, Ordering::SeqCst);
    });
    assert_eq!(tasks.pending_count(), 1);

    drop(tasks);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!fired.load(Ordering::SeqCst));
}
