//! Session state machine for the simulated download
//!
//! All mutation goes through [`Session::apply`], so the three loops
//! (progress simulator, log simulator, transfer loop) never touch fields
//! directly. The backend actor owns the single `Session` instance.

use crate::session::log::{StatusLog, CANCEL_NOTICE, DEFAULT_LOG_CAPACITY};
use std::time::Instant;

/// Cosmetic progress added per simulator tick
pub const PROGRESS_STEP: f64 = 0.1;

/// Simulated progress never passes this on its own; only start/cancel reset it
pub const PROGRESS_CAP: f64 = 99.0;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Settled control state, derived from the two flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Downloading,
    Paused,
}

/// Inputs to the session reducer
#[derive(Debug, Clone)]
pub enum Action {
    /// Start (from Idle) or resume (from Paused); `now` is the rate baseline
    Start { now: Instant },
    Pause,
    Cancel,
    /// Progress simulator tick
    SimulatorTick,
    /// Log simulator tick, line already chosen by the caller
    StatusLine(String),
    /// Chunk arrived on the transfer loop
    BytesReceived { bytes: u64, at: Instant },
}

/// Shared state read by the view and written by the three loops
#[derive(Debug, Clone)]
pub struct Session {
    /// Cosmetic percentage in [0, 100]
    pub progress: f64,
    /// Cumulative megabytes received by the transfer loop
    pub data_downloaded: f64,
    /// Instantaneous transfer rate in MB/s
    pub transfer_rate: f64,
    pub downloading: bool,
    pub paused: bool,
    pub log: StatusLog,
    last_update_at: Option<Instant>,
}

impl Session {
    pub fn new(log_capacity: usize) -> Self {
        Self {
            progress: 0.0,
            data_downloaded: 0.0,
            transfer_rate: 0.0,
            downloading: false,
            paused: false,
            log: StatusLog::new(log_capacity),
            last_update_at: None,
        }
    }

    /// Session restored from a persisted snapshot; starts Idle
    pub fn rehydrated(progress: f64, data_downloaded: f64, log_capacity: usize) -> Self {
        let mut session = Self::new(log_capacity);
        session.progress = progress.clamp(0.0, 100.0);
        session.data_downloaded = data_downloaded.max(0.0);
        session
    }

    pub fn phase(&self) -> Phase {
        if self.downloading {
            Phase::Downloading
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Idle
        }
    }

    /// Apply one action. Actions that are invalid in the current phase
    /// (start while downloading, ticks while idle) are no-ops.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Start { now } => {
                if self.downloading {
                    return;
                }
                // A fresh start zeroes the counters; resuming from Paused
                // keeps them and only the log restarts.
                if !self.paused {
                    self.progress = 0.0;
                    self.data_downloaded = 0.0;
                }
                self.log.clear();
                self.downloading = true;
                self.paused = false;
                self.last_update_at = Some(now);
            }
            Action::Pause => {
                if !self.downloading {
                    return;
                }
                self.downloading = false;
                self.paused = true;
            }
            Action::Cancel => {
                self.downloading = false;
                self.paused = false;
                self.progress = 0.0;
                self.data_downloaded = 0.0;
                self.last_update_at = None;
                self.log.push(CANCEL_NOTICE.to_string());
            }
            Action::SimulatorTick => {
                if !self.downloading {
                    return;
                }
                self.progress = (self.progress + PROGRESS_STEP).min(PROGRESS_CAP);
            }
            Action::StatusLine(line) => {
                if !self.downloading {
                    return;
                }
                self.log.push(line);
            }
            Action::BytesReceived { bytes, at } => {
                if !self.downloading {
                    return;
                }
                let mb = bytes as f64 / BYTES_PER_MB;
                self.data_downloaded += mb;
                if let Some(last) = self.last_update_at {
                    let elapsed = at.duration_since(last).as_secs_f64();
                    if elapsed > 0.0 {
                        self.transfer_rate = mb / elapsed;
                    }
                }
                self.last_update_at = Some(at);
            }
        }
    }

    /// Immutable copy of the displayed state, for the view layer
    pub fn view(&self) -> SessionView {
        SessionView {
            progress: self.progress,
            data_downloaded: self.data_downloaded,
            transfer_rate: self.transfer_rate,
            downloading: self.downloading,
            paused: self.paused,
            log: self.log.to_vec(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

/// Snapshot of the session state handed to the GUI
#[derive(Debug, Clone, Default)]
pub struct SessionView {
    pub progress: f64,
    pub data_downloaded: f64,
    pub transfer_rate: f64,
    pub downloading: bool,
    pub paused: bool,
    pub log: Vec<String>,
}
