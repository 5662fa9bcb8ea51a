//! Backend actor owning the session state
//!
//! Multiplexes the control commands, the two simulator intervals and the
//! transfer loop reports onto one task, so every mutation of the shared
//! session goes through the reducer in program order.

use super::messages::{WidgetCommand, WidgetEvent};
use crate::session::{random_status_line, Action, Session};
use crate::store::SnapshotStore;
use crate::transfer::{TransferConfig, TransferEngine, TransferUpdate};
use crate::utils::config::AppSettings;
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Handle to the in-flight transfer task
struct TransferHandle {
    cancel: CancellationToken,
    _join: JoinHandle<()>,
}

pub struct BackendActor {
    receiver: mpsc::Receiver<WidgetCommand>,
    sender: mpsc::Sender<WidgetEvent>,

    // Components
    session: Session,
    store: SnapshotStore,
    engine: Arc<TransferEngine>,
    transfer: Option<TransferHandle>,

    // Transfer loop reports
    update_tx: mpsc::Sender<TransferUpdate>,
    update_rx: mpsc::Receiver<TransferUpdate>,

    settings: AppSettings,
}

impl BackendActor {
    pub async fn new(
        settings: AppSettings,
        store: SnapshotStore,
        receiver: mpsc::Receiver<WidgetCommand>,
        sender: mpsc::Sender<WidgetEvent>,
    ) -> Result<Self> {
        let engine = Arc::new(TransferEngine::new(TransferConfig {
            url: settings.resource_url.clone(),
            connect_timeout: settings.connect_timeout(),
        }));

        // Rehydrate the displayed values from the persisted snapshot
        let snapshot = store.load().await?;
        let session = Session::rehydrated(
            snapshot.progress,
            snapshot.data_downloaded,
            settings.log_capacity,
        );

        let (update_tx, update_rx) = mpsc::channel::<TransferUpdate>(100);

        Ok(Self {
            receiver,
            sender,
            session,
            store,
            engine,
            transfer: None,
            update_tx,
            update_rx,
            settings,
        })
    }

    pub async fn run(mut self) {
        info!("Backend actor started");

        // Show the rehydrated values before any interaction
        self.emit_session().await;

        let mut sim_tick = interval(self.settings.tick_interval());
        let mut log_tick = interval(self.settings.tick_interval());
        sim_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        log_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                cmd = self.receiver.recv() => {
                    match cmd {
                        Some(WidgetCommand::Start) => {
                            if self.handle_start().await {
                                // Timers restart on entering Downloading; the
                                // first tick lands one full period from now.
                                sim_tick.reset();
                                log_tick.reset();
                            }
                        }
                        Some(WidgetCommand::Pause) => self.handle_pause().await,
                        Some(WidgetCommand::Cancel) => self.handle_cancel().await,
                        Some(WidgetCommand::Shutdown) | None => {
                            self.abort_transfer();
                            info!("Backend actor shutting down");
                            break;
                        }
                    }
                }
                _ = sim_tick.tick(), if self.session.downloading => {
                    self.session.apply(Action::SimulatorTick);
                    if let Err(e) = self.store.save_progress(self.session.progress).await {
                        warn!("Failed to persist progress: {}", e);
                    }
                    self.emit_session().await;
                }
                _ = log_tick.tick(), if self.session.downloading => {
                    let line = random_status_line();
                    self.session.apply(Action::StatusLine(line.to_string()));
                    self.emit_session().await;
                }
                Some(update) = self.update_rx.recv() => {
                    self.handle_transfer_update(update).await;
                }
            }
        }
    }

    /// Start or resume. Returns true when the session entered Downloading.
    async fn handle_start(&mut self) -> bool {
        if self.session.downloading {
            debug!("Start ignored: session already downloading");
            return false;
        }

        self.abort_transfer();
        self.session.apply(Action::Start {
            now: Instant::now(),
        });
        if let Err(e) = self.store.clear().await {
            warn!("Failed to clear snapshot: {}", e);
        }
        self.spawn_transfer();
        self.emit_session().await;

        info!("Session started");
        true
    }

    async fn handle_pause(&mut self) {
        if !self.session.downloading {
            debug!("Pause ignored: no active session");
            return;
        }

        self.abort_transfer();
        self.session.apply(Action::Pause);
        self.emit_session().await;

        info!("Session paused");
    }

    async fn handle_cancel(&mut self) {
        self.abort_transfer();
        self.session.apply(Action::Cancel);
        if let Err(e) = self.store.clear().await {
            warn!("Failed to clear snapshot: {}", e);
        }
        self.emit_session().await;

        info!("Session cancelled");
    }

    async fn handle_transfer_update(&mut self, update: TransferUpdate) {
        // Reports buffered before a pause/cancel settle are dropped
        if !self.session.downloading {
            return;
        }

        self.session.apply(Action::BytesReceived {
            bytes: update.bytes,
            at: update.at,
        });
        if let Err(e) = self
            .store
            .save_data_downloaded(self.session.data_downloaded)
            .await
        {
            warn!("Failed to persist byte counter: {}", e);
        }
        self.emit_session().await;
    }

    /// Spawn the transfer loop for the current session
    fn spawn_transfer(&mut self) {
        let cancel = CancellationToken::new();
        let engine = Arc::clone(&self.engine);
        let updates = self.update_tx.clone();
        let token = cancel.clone();

        let join = tokio::spawn(async move {
            match engine.run(token, updates).await {
                Ok(()) => debug!("Transfer loop finished"),
                Err(e) if e.is_cancelled() => debug!("Transfer aborted"),
                // Operational log only; the displayed state is left as-is
                Err(e) => error!("Transfer failed: {}", e),
            }
        });

        self.transfer = Some(TransferHandle {
            cancel,
            _join: join,
        });
    }

    /// Fire the cancellation signal for the in-flight request, if any
    fn abort_transfer(&mut self) {
        if let Some(handle) = self.transfer.take() {
            handle.cancel.cancel();
        }
    }

    async fn emit_session(&self) {
        let event = WidgetEvent::SessionChanged(self.session.view());
        if let Err(e) = self.sender.send(event).await {
            warn!("Failed to send session event: {}", e);
        }
    }
}
