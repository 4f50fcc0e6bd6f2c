//! Tests for the async task handle.

use kodegen_repo_insight::runtime::AsyncTask;

#[tokio::test]
async fn spawned_work_starts_before_await() {
    let (tx, rx) = tokio::sync::oneshot::channel();
    let task = AsyncTask::spawn_async(async move {
        let _ = tx.send(());
        7
    });
    // The spawned future runs on its own; awaiting the side channel proves it.
    rx.await.unwrap();
    assert_eq!(task.await.unwrap(), 7);
}

#[tokio::test]
async fn ready_task_resolves_immediately() {
    assert_eq!(AsyncTask::ready("done").await.unwrap(), "done");
}

#[tokio::test]
async fn dropped_sender_surfaces_as_error() {
    let (tx, rx) = tokio::sync::oneshot::channel::<u8>();
    drop(tx);
    assert!(AsyncTask::new(rx).await.is_err());
}
