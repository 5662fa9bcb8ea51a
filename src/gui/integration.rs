//! Bridge between GUI and backend

use crate::backend::{BackendActor, WidgetCommand, WidgetEvent};
use crate::store::SnapshotStore;
use crate::utils::config::AppSettings;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::warn;

/// Backend bridge for communication between GUI and the backend actor
pub struct WidgetBridge {
    command_tx: mpsc::Sender<WidgetCommand>,
    event_rx: mpsc::Receiver<WidgetEvent>,
}

impl WidgetBridge {
    /// Spawn the backend actor and return the connected bridge
    pub async fn new(settings: AppSettings, store: SnapshotStore) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (event_tx, event_rx) = mpsc::channel(256);

        let actor = BackendActor::new(settings, store, command_rx, event_tx).await?;
        tokio::spawn(actor.run());

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    pub fn start(&self) {
        self.send(WidgetCommand::Start);
    }

    pub fn pause(&self) {
        self.send(WidgetCommand::Pause);
    }

    pub fn cancel(&self) {
        self.send(WidgetCommand::Cancel);
    }

    pub fn shutdown(&self) {
        self.send(WidgetCommand::Shutdown);
    }

    fn send(&self, command: WidgetCommand) {
        if let Err(e) = self.command_tx.try_send(command) {
            warn!("Failed to send {:?} to backend: {}", command, e);
        }
    }

    /// Try to receive a session event without blocking
    pub fn try_receive(&mut self) -> Option<WidgetEvent> {
        match self.event_rx.try_recv() {
            Ok(event) => Some(event),
            Err(tokio::sync::mpsc::error::TryRecvError::Empty) => None,
            Err(tokio::sync::mpsc::error::TryRecvError::Disconnected) => None,
        }
    }

    /// Await the next session event; None once the backend is gone
    pub async fn receive(&mut self) -> Option<WidgetEvent> {
        self.event_rx.recv().await
    }
}
