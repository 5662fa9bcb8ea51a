//! Streamed transfer loop feeding the byte counters

use crate::utils::error::InfinityError;
use futures::StreamExt;
use reqwest::Client;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Transfer configuration
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// Streamed resource the loop reads from
    pub url: String,
    /// Connect timeout; the stream itself has no deadline
    pub connect_timeout: Duration,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            url: "https://example.com/largefile".to_string(),
            connect_timeout: Duration::from_secs(30),
        }
    }
}

/// One chunk worth of received bytes, stamped on arrival
#[derive(Debug, Clone, Copy)]
pub struct TransferUpdate {
    pub bytes: u64,
    pub at: Instant,
}

/// Cancellable streamed GET against the configured resource
pub struct TransferEngine {
    client: Client,
    config: TransferConfig,
}

impl TransferEngine {
    /// Create new transfer engine with configuration
    pub fn new(config: TransferConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Run the read loop until the stream ends, the token fires, or the
    /// request fails. Each received chunk is reported on `updates`.
    ///
    /// Returns [`InfinityError::Cancelled`] when aborted; the caller is
    /// expected to swallow that case.
    pub async fn run(
        &self,
        cancel: CancellationToken,
        updates: mpsc::Sender<TransferUpdate>,
    ) -> Result<(), InfinityError> {
        debug!("transfer loop starting for {}", self.config.url);

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(InfinityError::Cancelled),
            result = self.client.get(&self.config.url).send() => result?,
        };

        if !response.status().is_success() {
            return Err(InfinityError::TransferFailed(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let mut stream = response.bytes_stream();

        loop {
            let next = tokio::select! {
                _ = cancel.cancelled() => return Err(InfinityError::Cancelled),
                chunk = stream.next() => chunk,
            };

            match next {
                Some(Ok(chunk)) => {
                    let update = TransferUpdate {
                        bytes: chunk.len() as u64,
                        at: Instant::now(),
                    };
                    if updates.send(update).await.is_err() {
                        debug!("update receiver dropped, stopping transfer");
                        break;
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => break,
            }
        }

        debug!("transfer stream ended");
        Ok(())
    }
}

impl Default for TransferEngine {
    fn default() -> Self {
        Self::new(TransferConfig::default())
    }
}
