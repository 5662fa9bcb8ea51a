//! Rolling log of fabricated CLI status lines

use rand::Rng;
use std::collections::VecDeque;

/// Default number of lines retained
pub const DEFAULT_LOG_CAPACITY: usize = 10;

/// Line appended when the user cancels the session
pub const CANCEL_NOTICE: &str = "Download canceled by user.";

/// Fixed catalog of canned status lines the log simulator draws from
pub const STATUS_LINES: [&str; 10] = [
    "Downloading file... [##############] 45%",
    "Verifying checksum... [##############] 65%",
    "Extracting archive... [##############] 85%",
    "Finalizing setup... [##############] 95%",
    "Cleanup temporary files... [##############] 100%",
    "Checking for updates... [##############] 40%",
    "Loading dependencies... [##############] 55%",
    "Configuring environment... [##############] 75%",
    "Initializing components... [##############] 90%",
    "Preparing installation... [##############] 25%",
];

/// Pick one catalog line uniformly at random
pub fn random_status_line() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..STATUS_LINES.len());
    STATUS_LINES[idx]
}

/// Bounded FIFO buffer of status lines
#[derive(Debug, Clone)]
pub struct StatusLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl StatusLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a line, evicting the oldest entry once full
    pub fn push(&mut self, line: String) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lines in insertion order, oldest first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}
