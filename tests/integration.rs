//! Integration-style tests covering the backend actor lifecycle without a
//! reachable network resource.

use infinity::backend::{BackendActor, WidgetCommand, WidgetEvent};
use infinity::session::{SessionView, CANCEL_NOTICE};
use infinity::store::{initialize_store, SnapshotStore, KEY_DATA_DOWNLOADED, KEY_PROGRESS};
use infinity::utils::AppSettings;
use std::time::Duration;
use tempfile::tempdir;
use tokio::sync::mpsc;

fn fast_settings() -> AppSettings {
    AppSettings {
        // Nothing listens here; the transfer error is logged and swallowed
        resource_url: "http://127.0.0.1:9/largefile".to_string(),
        tick_interval_ms: 25,
        connect_timeout_secs: 1,
        log_capacity: 10,
    }
}

async fn open_store(dir: &std::path::Path) -> SnapshotStore {
    let db_path = dir.join("infinity.db");
    let pool = initialize_store(&db_path.to_string_lossy())
        .await
        .expect("Failed to initialize store");
    SnapshotStore::new(pool)
}

async fn spawn_actor(
    settings: AppSettings,
    store: SnapshotStore,
) -> (
    mpsc::Sender<WidgetCommand>,
    mpsc::Receiver<WidgetEvent>,
    tokio::task::JoinHandle<()>,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel(8);
    let (event_tx, event_rx) = mpsc::channel(256);
    let actor = BackendActor::new(settings, store, cmd_rx, event_tx)
        .await
        .expect("Failed to build actor");
    let handle = tokio::spawn(actor.run());
    (cmd_tx, event_rx, handle)
}

async fn recv_view(events: &mut mpsc::Receiver<WidgetEvent>) -> SessionView {
    match tokio::time::timeout(Duration::from_secs(5), events.recv()).await {
        Ok(Some(WidgetEvent::SessionChanged(view))) => view,
        Ok(None) => panic!("backend closed its event channel"),
        Err(_) => panic!("timed out waiting for a session event"),
    }
}

#[tokio::test]
async fn widget_start_pause_resume_cancel_flow() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path()).await;
    let (cmd_tx, mut event_rx, handle) = spawn_actor(fast_settings(), store.clone()).await;

    // Initial rehydrated view, before any interaction
    let view = recv_view(&mut event_rx).await;
    assert!(!view.downloading);
    assert!(!view.paused);
    assert_eq!(view.progress, 0.0);

    cmd_tx.send(WidgetCommand::Start).await.unwrap();
    let view = recv_view(&mut event_rx).await;
    assert!(view.downloading);
    assert!(!view.paused);
    assert!(view.log.is_empty());

    // Wait for at least two simulator ticks
    let mut ticked = view;
    while ticked.progress < 0.15 {
        ticked = recv_view(&mut event_rx).await;
        assert!(
            !(ticked.downloading && ticked.paused),
            "flags must never both hold"
        );
    }
    assert!(ticked.progress <= 99.0);

    cmd_tx.send(WidgetCommand::Pause).await.unwrap();
    let mut paused = recv_view(&mut event_rx).await;
    while !paused.paused {
        paused = recv_view(&mut event_rx).await;
    }
    assert!(!paused.downloading);
    let progress_at_pause = paused.progress;
    assert!(progress_at_pause > 0.0, "pause keeps the simulated progress");

    // Resume keeps the counters and restarts the log
    cmd_tx.send(WidgetCommand::Start).await.unwrap();
    let resumed = recv_view(&mut event_rx).await;
    assert!(resumed.downloading);
    assert!(resumed.log.is_empty());
    assert!((resumed.progress - progress_at_pause).abs() < 1e-9);

    cmd_tx.send(WidgetCommand::Cancel).await.unwrap();
    let mut cancelled = recv_view(&mut event_rx).await;
    while cancelled.downloading || cancelled.paused {
        cancelled = recv_view(&mut event_rx).await;
    }
    assert_eq!(cancelled.progress, 0.0);
    assert_eq!(cancelled.data_downloaded, 0.0);
    assert_eq!(cancelled.log.last().map(|s| s.as_str()), Some(CANCEL_NOTICE));

    // Snapshot is cleared on cancel
    let snapshot = store.load().await.expect("load snapshot");
    assert_eq!(snapshot.progress, 0.0);
    assert_eq!(snapshot.data_downloaded, 0.0);

    cmd_tx.send(WidgetCommand::Shutdown).await.unwrap();
    handle.await.expect("actor task");
}

#[tokio::test]
async fn widget_rehydrates_persisted_values() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path()).await;

    // Values left behind by a previous session
    store.set(KEY_PROGRESS, "42.0").await.unwrap();
    store.set(KEY_DATA_DOWNLOADED, "3.14").await.unwrap();

    let (cmd_tx, mut event_rx, handle) = spawn_actor(fast_settings(), store).await;

    let view = recv_view(&mut event_rx).await;
    assert_eq!(view.progress, 42.0);
    assert_eq!(view.data_downloaded, 3.14);
    assert!(!view.downloading);

    cmd_tx.send(WidgetCommand::Shutdown).await.unwrap();
    handle.await.expect("actor task");
}

#[tokio::test]
async fn start_clears_the_previous_snapshot() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path()).await;
    store.set(KEY_PROGRESS, "87.5").await.unwrap();
    store.set(KEY_DATA_DOWNLOADED, "120.00").await.unwrap();

    // Slow ticks so no simulator write lands between start and the assertion
    let mut settings = fast_settings();
    settings.tick_interval_ms = 60_000;
    let (cmd_tx, mut event_rx, handle) = spawn_actor(settings, store.clone()).await;

    let view = recv_view(&mut event_rx).await;
    assert_eq!(view.progress, 87.5);

    cmd_tx.send(WidgetCommand::Start).await.unwrap();
    let view = recv_view(&mut event_rx).await;
    assert!(view.downloading);
    assert_eq!(view.progress, 0.0, "fresh start zeroes the counters");

    assert_eq!(store.get(KEY_PROGRESS).await.unwrap(), None);
    assert_eq!(store.get(KEY_DATA_DOWNLOADED).await.unwrap(), None);

    cmd_tx.send(WidgetCommand::Shutdown).await.unwrap();
    handle.await.expect("actor task");
}

#[tokio::test]
async fn pause_without_session_is_ignored() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path()).await;
    let (cmd_tx, mut event_rx, handle) = spawn_actor(fast_settings(), store).await;

    let _ = recv_view(&mut event_rx).await;
    cmd_tx.send(WidgetCommand::Pause).await.unwrap();

    // No event should follow an ignored pause; the next one is cancel's
    cmd_tx.send(WidgetCommand::Cancel).await.unwrap();
    let view = recv_view(&mut event_rx).await;
    assert!(!view.downloading);
    assert!(!view.paused);
    assert_eq!(view.log.last().map(|s| s.as_str()), Some(CANCEL_NOTICE));

    cmd_tx.send(WidgetCommand::Shutdown).await.unwrap();
    handle.await.expect("actor task");
}
